//! Remixer engine: transform strategies and asynchronous remix execution.
mod engine;
mod transform;
mod types;

pub use engine::{EngineHandle, RemixBackend, SimulatedBackend};
pub use transform::{transform, RemixMode};
pub use types::{EngineEvent, EngineSettings, RemixFailure, RequestId};
