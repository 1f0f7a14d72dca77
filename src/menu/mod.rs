//! Menu tree, operation dispatch and the navigation loop

pub mod engine;
pub mod node;
pub mod registry;
pub mod response;
pub mod routes;

pub use engine::{Entry, NavigationState, Navigator, parse_selection};
pub use node::{Args, NodeId, OperationRef, ScreenNode, ScreenTree};
pub use registry::{DispatchError, OperationGroup, Registry, Request};
pub use response::{DynamicMenu, PREVIOUS_OPERATION, Response};
