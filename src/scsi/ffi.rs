use super::constants::COMMAND_BUFFER_LEN;

/// Argument block for the Linux `SCSI_IOCTL_SEND_COMMAND` ioctl
///
/// On entry `data` holds the CDB followed by `inlen` bytes of outgoing payload.
/// On return the kernel overwrites `data` from offset 0 with up to `outlen`
/// bytes of response.
#[repr(C)]
#[derive(Debug, Clone)]
pub struct ScsiIoctlCommand {
    pub inlen: u32,
    pub outlen: u32,
    pub data: [u8; COMMAND_BUFFER_LEN],
}

impl Default for ScsiIoctlCommand {
    fn default() -> Self {
        Self {
            inlen: 0,
            outlen: 0,
            data: [0u8; COMMAND_BUFFER_LEN],
        }
    }
}
