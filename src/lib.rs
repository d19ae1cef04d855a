//! jaztool library
//!
//! Write-protection control for Iomega JAZ/ZIP cartridges through vendor
//! SCSI commands on a raw Linux block device.

pub mod cli;
pub mod commands;
pub mod credentials;
pub mod error;
pub mod logger;
pub mod safety;
pub mod scsi;
pub mod session;


// Re-export key types for easier use
pub use credentials::{CredentialProvider, ScriptedCredentials, TerminalPrompt};
pub use error::{JazError, Result};
pub use scsi::{CommandBlock, CommandChannel, DeviceHandle, DriveIdentity, JazDrive, ProtectionMode};
pub use session::Session;
