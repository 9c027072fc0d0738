use thiserror::Error;

use netlint_model::DeviceType;

/// Unified error type for the parser crate.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no parser registered for device type '{device_type}'")]
    NoParser { device_type: DeviceType },
}
