//! SCSI Core Implementation
//!
//! This module contains the command channel seam and the JazDrive struct that
//! the drive commands are implemented on.

use crate::error::Result;
use tracing::debug;

use super::command::CommandBlock;

/// Transport able to deliver one command block to a device.
///
/// Implementations submit the block atomically and return the response bytes
/// (`block.response_len()` of them). Any transport failure must come back as
/// `JazError::IoctlFailed` carrying `context`; callers never retry.
pub trait CommandChannel {
    fn send(&mut self, block: &CommandBlock, context: &'static str) -> Result<Vec<u8>>;
}

impl<C: CommandChannel + ?Sized> CommandChannel for &mut C {
    fn send(&mut self, block: &CommandBlock, context: &'static str) -> Result<Vec<u8>> {
        (**self).send(block, context)
    }
}

/// An Iomega JAZ/ZIP drive reached through a command channel
pub struct JazDrive<C: CommandChannel> {
    pub(crate) channel: C,
}

impl<C: CommandChannel> JazDrive<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Release the underlying channel.
    pub fn into_inner(self) -> C {
        self.channel
    }

    pub(crate) fn send(&mut self, block: CommandBlock, context: &'static str) -> Result<Vec<u8>> {
        debug!(
            "Sending {} command: CDB {:02X?}, {} payload bytes, {} response bytes",
            context,
            block.cdb(),
            block.payload().len(),
            block.response_len()
        );
        self.channel.send(&block, context)
    }
}
