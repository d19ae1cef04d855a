//! In-memory drive used by the unit tests in place of a real device

use crate::error::{JazError, Result};

use super::constants::{protection, scsi_commands};
use super::{CommandBlock, CommandChannel};

/// Answers INQUIRY, non-sense and set-protection like a JAZ/ZIP drive and
/// records every block it receives.
#[derive(Debug)]
pub(crate) struct SimulatedDrive {
    product: Vec<u8>,
    /// Raw byte returned at the protection offset; high bits are kept to
    /// check that readers mask them off.
    pub mode: u8,
    password: Vec<u8>,
    fail_opcodes: Vec<u8>,
    pub sent: Vec<CommandBlock>,
}

impl SimulatedDrive {
    pub fn with_product(product: &str, mode: u8) -> Self {
        Self {
            product: product.as_bytes().to_vec(),
            mode,
            password: Vec::new(),
            fail_opcodes: Vec::new(),
            sent: Vec::new(),
        }
    }

    pub fn zip250(mode: u8) -> Self {
        Self::with_product("IOMEGA  ZIP 250       41.S", mode)
    }

    pub fn with_password(mut self, password: impl AsRef<[u8]>) -> Self {
        self.password = password.as_ref().to_vec();
        self
    }

    /// Make every command with `opcode` fail at the transport.
    pub fn failing(mut self, opcode: u8) -> Self {
        self.fail_opcodes.push(opcode);
        self
    }

    fn inquiry_data(&self, len: usize) -> Vec<u8> {
        let mut data = vec![0u8; len];
        data[0] = 0x00; // direct access
        data[1] = 0x80; // removable
        let end = (8 + self.product.len()).min(len);
        data[8..end].copy_from_slice(&self.product[..end - 8]);
        data
    }

    fn set_protection(&mut self, block: &CommandBlock, context: &'static str) -> Result<Vec<u8>> {
        let requested = block.cdb()[1];
        let current = self.mode & protection::MODE_MASK;
        let given = block.payload().to_vec();

        if current & protection::PASSWORD_BIT != 0 {
            if given != self.password {
                return Err(JazError::ioctl(context));
            }
        } else if requested & protection::PASSWORD_BIT != 0 {
            self.password = given;
        }

        self.mode = requested;
        Ok(Vec::new())
    }
}

impl CommandChannel for SimulatedDrive {
    fn send(&mut self, block: &CommandBlock, context: &'static str) -> Result<Vec<u8>> {
        self.sent.push(block.clone());

        if self.fail_opcodes.contains(&block.opcode()) {
            return Err(JazError::ioctl(context));
        }

        match block.opcode() {
            scsi_commands::INQUIRY => Ok(self.inquiry_data(block.response_len())),
            scsi_commands::IOMEGA_NON_SENSE => {
                let mut data = vec![0u8; block.response_len()];
                data[protection::MODE_OFFSET] = self.mode;
                Ok(data)
            }
            scsi_commands::IOMEGA_SET_PROTECTION => self.set_protection(block, context),
            _ => Ok(vec![0u8; block.response_len()]),
        }
    }
}
