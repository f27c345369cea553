//! Startup errors
//!
//! The simulation never fails; everything here comes from loading tuning
//! files or bringing up the GPU.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read tuning file {path}: {source}")]
    TuningIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tuning: {0}")]
    TuningParse(#[from] serde_json::Error),

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

pub type Result<T> = std::result::Result<T, Error>;
