//! Drive identification through INQUIRY

use crate::error::{JazError, Result};
use crate::session::Session;
use tracing::{debug, info};

use super::super::constants::{inquiry, scsi_commands};
use super::super::{CommandBlock, CommandChannel, DriveIdentity, JazDrive};

impl<C: CommandChannel> JazDrive<C> {
    /// INQUIRY the drive and accept it only if it is a supported JAZ/ZIP model.
    ///
    /// The identity is recorded in `session` before the model check so that a
    /// rejection names the drive that was found.
    pub fn identify(&mut self, session: &mut Session) -> Result<DriveIdentity> {
        let cdb = [scsi_commands::INQUIRY, 0, 0, 0, inquiry::ALLOCATION_LEN, 0];
        let block = CommandBlock::new(cdb).with_response_len(inquiry::ALLOCATION_LEN as usize)?;

        let response = self.send(block, "inquiry")?;
        let identity = DriveIdentity::from_inquiry(&response);
        debug!("INQUIRY product: {:?}", identity.as_str());

        session.set_identity(identity.clone());

        if !identity.is_supported() {
            return Err(JazError::UnsupportedDrive);
        }

        info!("Found {} at {}", identity, session.device());
        Ok(identity)
    }
}
