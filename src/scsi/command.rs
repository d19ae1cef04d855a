//! SCSI Command Block
//!
//! Typed form of the fixed-layout ioctl argument: a 6-byte CDB, an optional
//! outgoing payload and the number of response bytes requested. Bounds are
//! checked here so the 256-byte transport buffer can never overflow.

use crate::error::{JazError, Result};

use super::constants::{CDB_LEN, COMMAND_BUFFER_LEN, MAX_PAYLOAD_LEN};
use super::ffi::ScsiIoctlCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBlock {
    cdb: [u8; CDB_LEN],
    payload: Vec<u8>,
    response_len: usize,
}

impl CommandBlock {
    pub fn new(cdb: [u8; CDB_LEN]) -> Self {
        Self {
            cdb,
            payload: Vec::new(),
            response_len: 0,
        }
    }

    /// Request `len` response bytes from the device.
    pub fn with_response_len(mut self, len: usize) -> Result<Self> {
        if len > COMMAND_BUFFER_LEN {
            return Err(JazError::PayloadTooLong {
                len,
                max: COMMAND_BUFFER_LEN,
            });
        }
        self.response_len = len;
        Ok(self)
    }

    /// Append `payload` after the CDB.
    pub fn with_payload(mut self, payload: &[u8]) -> Result<Self> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(JazError::PayloadTooLong {
                len: payload.len(),
                max: MAX_PAYLOAD_LEN,
            });
        }
        self.payload = payload.to_vec();
        Ok(self)
    }

    pub fn opcode(&self) -> u8 {
        self.cdb[0]
    }

    pub fn cdb(&self) -> &[u8; CDB_LEN] {
        &self.cdb
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn response_len(&self) -> usize {
        self.response_len
    }

    /// Lay the block out as the kernel expects it.
    pub fn to_ioctl(&self) -> ScsiIoctlCommand {
        let mut raw = ScsiIoctlCommand {
            inlen: self.payload.len() as u32,
            outlen: self.response_len as u32,
            ..Default::default()
        };
        raw.data[..CDB_LEN].copy_from_slice(&self.cdb);
        raw.data[CDB_LEN..CDB_LEN + self.payload.len()].copy_from_slice(&self.payload);
        raw
    }
}
