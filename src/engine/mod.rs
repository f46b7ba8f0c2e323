pub mod animation_loop;
pub mod cli;
pub mod clock;
pub mod config;
pub mod overlay;
pub mod room;
pub mod scene;
pub mod system;
pub mod user_input;
pub mod windowing;


pub use windowing::Windowing;

/// Engine-level error type.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to read room config '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write room config '{path}': {source}")]
    ConfigWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed room config '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode room config: {0}")]
    ConfigEncode(#[from] serde_json::Error),

    #[error("event loop error: {0}")]
    EventLoop(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
