//! Component and route scaffolding for Hydrogen storefronts.
//!
//! A name is classified into a component or route type, rendered through the
//! matching template and written into the project. The same engine backs the
//! `hydrogen-forge add` command and the `scaffoldComponent` / `scaffoldRoute`
//! MCP tools.

pub mod analyze;
pub mod classify;
pub mod error;
pub mod file_ops;
pub mod scaffold;
pub mod templates;
pub mod types;

pub use error::ScaffoldError;
pub use scaffold::{scaffold_component, scaffold_route};
pub use types::{
    ComponentType, PropDef, RouteType, ScaffoldComponentInput, ScaffoldResult, ScaffoldRouteInput,
};
