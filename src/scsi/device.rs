//! SCSI Device Management
//!
//! This module opens the raw block device and delivers command blocks to it
//! through the Linux `SCSI_IOCTL_SEND_COMMAND` ioctl.

use crate::error::{JazError, Result};
use std::fs::File;
use tracing::{debug, warn};

use super::command::CommandBlock;
use super::core::CommandChannel;

/// Open raw block device; the descriptor closes when the handle is dropped
pub struct DeviceHandle {
    file: File,
    device_path: String,
}

impl DeviceHandle {
    /// Open the device read-only. Media that cannot be read (password
    /// read/write-protected on older kernels) fails here.
    pub fn open(device_path: &str) -> Result<Self> {
        debug!("Opening device: {}", device_path);

        let file = File::open(device_path).map_err(|e| {
            debug!("open({}) failed: {}", device_path, e);
            JazError::DeviceOpenFailed(e)
        })?;

        debug!("Device opened successfully: {}", device_path);
        Ok(Self {
            file,
            device_path: device_path.to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.device_path
    }
}

impl CommandChannel for DeviceHandle {
    fn send(&mut self, block: &CommandBlock, context: &'static str) -> Result<Vec<u8>> {
        #[cfg(target_os = "linux")]
        {
            use super::constants::SCSI_IOCTL_SEND_COMMAND;
            use std::os::fd::AsRawFd;

            let mut raw = block.to_ioctl();

            // SAFETY: `raw` is a repr(C) buffer large enough for the CDB, the
            // bounded payload and the bounded response, and lives for the call.
            let rc = unsafe {
                libc::ioctl(
                    self.file.as_raw_fd(),
                    SCSI_IOCTL_SEND_COMMAND as _,
                    &mut raw as *mut _ as *mut libc::c_void,
                )
            };

            if rc != 0 {
                let os_error = std::io::Error::last_os_error();
                warn!(
                    "SCSI command 0x{:02X} on {} failed: status {}, {}",
                    block.opcode(),
                    self.device_path,
                    rc,
                    os_error
                );
                return Err(JazError::ioctl(context));
            }

            Ok(raw.data[..block.response_len()].to_vec())
        }

        #[cfg(not(target_os = "linux"))]
        {
            let _ = (block, context);
            Err(JazError::unsupported(
                "SCSI_IOCTL_SEND_COMMAND requires Linux",
            ))
        }
    }
}

impl Drop for DeviceHandle {
    fn drop(&mut self) {
        debug!("Device handle closed: {}", self.device_path);
    }
}
