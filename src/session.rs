//! Per-invocation context threaded through the drive operations

use crate::scsi::{DriveIdentity, ProtectionMode};
use std::fmt;

pub const TOOL_NAME: &str = "jaztool";

#[derive(Debug, Clone)]
pub struct Session {
    device: String,
    identity: Option<DriveIdentity>,
    eject_after_change: bool,
}

impl Session {
    pub fn new(device: impl Into<String>, eject_after_change: bool) -> Self {
        Self {
            device: device.into(),
            identity: None,
            eject_after_change,
        }
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn identity(&self) -> Option<&DriveIdentity> {
        self.identity.as_ref()
    }

    pub fn set_identity(&mut self, identity: DriveIdentity) {
        self.identity = Some(identity);
    }

    pub fn eject_after_change(&self) -> bool {
        self.eject_after_change
    }

    /// `jaztool <drive>` once the drive is known, plain `jaztool` before.
    pub fn prefix(&self) -> String {
        match &self.identity {
            Some(id) => format!("{} {}", TOOL_NAME, id),
            None => TOOL_NAME.to_string(),
        }
    }

    pub fn status_line(&self, mode: ProtectionMode) -> String {
        match mode.description() {
            Some(text) => format!("{}: {} is {}", self.prefix(), self.device, text),
            None => format!(
                "{}: {} status {} unknown",
                self.prefix(),
                self.device,
                mode.code()
            ),
        }
    }

    /// One-line diagnostic for a terminal failure
    pub fn diagnostic(&self, error: &dyn fmt::Display) -> String {
        format!("{}: {}", self.prefix(), error)
    }
}
