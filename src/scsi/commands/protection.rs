//! Protection mode query and change
//!
//! Every invocation does one read, then at most one write, against the mode
//! held in drive firmware. Nothing is cached between calls.

use crate::credentials::CredentialProvider;
use crate::error::{JazError, Result};
use crate::session::Session;
use std::io::Write;
use tracing::{debug, info};

use super::super::constants::{protection, scsi_commands};
use super::super::{CommandBlock, CommandChannel, JazDrive, ProtectionMode};

impl<C: CommandChannel> JazDrive<C> {
    /// Read the protection nibble from the vendor non-sense page.
    pub fn read_mode(&mut self) -> Result<ProtectionMode> {
        let cdb = [
            scsi_commands::IOMEGA_NON_SENSE,
            0,
            protection::NON_SENSE_PAGE,
            0,
            protection::NON_SENSE_ALLOCATION_LEN,
            0,
        ];
        let block = CommandBlock::new(cdb).with_response_len(protection::NON_SENSE_RESPONSE_LEN)?;

        let response = self.send(block, "non-sense")?;
        let raw = response
            .get(protection::MODE_OFFSET)
            .copied()
            .ok_or_else(|| JazError::ioctl("non-sense"))?;

        let mode = ProtectionMode::from_code(raw & protection::MODE_MASK);
        debug!("Protection byte 0x{:02X} -> {:?}", raw, mode);
        Ok(mode)
    }

    /// Read the current mode and write one status line for it to `out`.
    pub fn report_status(&mut self, session: &Session, out: &mut dyn Write) -> Result<ProtectionMode> {
        let mode = self.read_mode()?;
        writeln!(out, "{}", session.status_line(mode))?;
        Ok(mode)
    }

    /// Move the cartridge to `requested`.
    ///
    /// A password is asked for when either the current or the requested mode
    /// is password-gated. After a successful change the new status is
    /// reported and, unless the session disables it, the disk is ejected so
    /// the kernel re-reads the write-protect state on next use.
    pub fn set_mode(
        &mut self,
        requested: ProtectionMode,
        session: &Session,
        credentials: &mut dyn CredentialProvider,
        out: &mut dyn Write,
    ) -> Result<ProtectionMode> {
        let current = self.read_mode()?;
        info!(
            "Changing protection of {} from {:?} to {:?}",
            session.device(),
            current,
            requested
        );

        let password = if requested.requires_password() || current.requires_password() {
            credentials.password()?
        } else {
            Vec::new()
        };
        if password.len() > protection::MAX_PASSWORD_LEN {
            return Err(JazError::PayloadTooLong {
                len: password.len(),
                max: protection::MAX_PASSWORD_LEN,
            });
        }

        let cdb = [
            scsi_commands::IOMEGA_SET_PROTECTION,
            requested.code(),
            0,
            0,
            password.len() as u8,
            0,
        ];
        let block = CommandBlock::new(cdb).with_payload(&password)?;

        self.send(block, "set protection mode").map_err(|e| match e {
            JazError::IoctlFailed { .. } => JazError::SetModeFailed,
            other => other,
        })?;

        let mode = self.report_status(session, out)?;

        if session.eject_after_change() {
            self.eject()?;
        } else {
            debug!("Leaving disk in the drive after mode change");
        }

        Ok(mode)
    }
}
