//! ShadowShield engine: scoring-service client and effect execution.
mod engine;
mod scanner;
mod types;

pub use engine::EngineHandle;
pub use scanner::{
    execute, ReqwestScanner, Scanner, ScannerSettings, DEFAULT_API_PREFIX, DEFAULT_BASE_URL,
};
pub use types::{EngineError, EngineEvent, FailureKind, ScanError};
