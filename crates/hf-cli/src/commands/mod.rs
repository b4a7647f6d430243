//! Command implementations

pub mod add;
pub mod create;
pub mod setup_mcp;
