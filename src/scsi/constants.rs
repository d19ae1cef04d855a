// Command block geometry (Linux SCSI_IOCTL_SEND_COMMAND)
pub const CDB_LEN: usize = 6;
pub const COMMAND_BUFFER_LEN: usize = 256;
pub const MAX_PAYLOAD_LEN: usize = COMMAND_BUFFER_LEN - CDB_LEN;

/// Linux `SCSI_IOCTL_SEND_COMMAND` request number (scsi/scsi_ioctl.h)
pub const SCSI_IOCTL_SEND_COMMAND: u32 = 1;

// SCSI operation code constants
pub mod scsi_commands {
    pub const INQUIRY: u8 = 0x12;
    pub const START_STOP_UNIT: u8 = 0x1B;
    pub const PREVENT_ALLOW_MEDIUM_REMOVAL: u8 = 0x1E;

    /// Iomega vendor "non-sense" command, returns the protection page
    pub const IOMEGA_NON_SENSE: u8 = 0x06;
    /// Iomega vendor "set protection mode" command
    pub const IOMEGA_SET_PROTECTION: u8 = 0x0C;
}

pub mod inquiry {
    pub const ALLOCATION_LEN: u8 = 40;
    pub const PRODUCT_OFFSET: usize = 8;
    pub const PRODUCT_FIELD_LEN: usize = 24;
    /// Both supported product strings are exactly this long.
    pub const SIGNIFICANT_LEN: usize = 15;

    pub const SUPPORTED_DRIVES: &[&str] = &["IOMEGA  JAZ 1GB", "IOMEGA  ZIP 250"];
}

pub mod protection {
    pub const NON_SENSE_PAGE: u8 = 0x02;
    pub const NON_SENSE_ALLOCATION_LEN: u8 = 128;
    pub const NON_SENSE_RESPONSE_LEN: usize = 256;
    pub const MODE_OFFSET: usize = 21;
    pub const MODE_MASK: u8 = 0x0F;

    /// Low bit of a protection code marks a password-gated mode.
    pub const PASSWORD_BIT: u8 = 0x01;
    pub const MAX_PASSWORD_LEN: usize = 32;
}

pub mod start_stop {
    pub const STOP_MOTOR: u8 = 0x01;
    /// LoEj set with Start clear; the drive spins down and ejects.
    pub const START_MOTOR: u8 = 0x02;
}
