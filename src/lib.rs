//! spending-graph: a spending time-series line graph engine.
//!
//! The crate keeps a strict split between the pure aggregation/projection
//! core, backend-agnostic draw commands, and a thin engine facade driven by
//! the host's data/resize/paint callbacks.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{GraphConfig, GraphEngine};
pub use error::{GraphError, GraphResult};
