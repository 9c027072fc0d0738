//! Orchestration of policy evaluation into reports: the single-device
//! validator with exit-code mapping, and the topology-wide validator
//! that fans out across devices.

mod device;
mod topology;

pub use device::{exit_code, exit_codes, DeviceValidator, DeviceValidatorOptions, ValidationRequest};
pub use topology::{TopologyValidationResult, TopologyValidator};
