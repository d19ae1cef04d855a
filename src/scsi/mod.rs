//! SCSI command layer for Iomega JAZ/ZIP drives
//!
//! Command blocks travel through a `CommandChannel`; `DeviceHandle` is the
//! real Linux transport. The drive commands themselves live on `JazDrive`.

pub mod command;
pub mod commands;
pub mod constants;
pub mod core;
pub mod device;
pub mod ffi;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use command::CommandBlock;
pub use constants::*;
pub use self::core::{CommandChannel, JazDrive};
pub use device::DeviceHandle;
pub use ffi::ScsiIoctlCommand;
pub use types::{DriveIdentity, ProtectionMode};
