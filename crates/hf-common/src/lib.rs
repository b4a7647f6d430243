//! Shared helpers for the Hydrogen Forge crates: path containment,
//! project discovery and subprocess execution.

pub mod fs_utils;
pub mod process;
pub mod project;

pub use project::PackageManager;
