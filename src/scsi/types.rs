use std::fmt;

use super::constants::{inquiry, protection};

/// Cartridge protection state, as held in the drive firmware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectionMode {
    Unprotected,                // 0
    WriteProtected,             // 2
    PasswordWriteProtected,     // 3
    PasswordReadWriteProtected, // 5
    Unknown(u8),
}

impl ProtectionMode {
    /// Convert from the 4-bit firmware code
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => ProtectionMode::Unprotected,
            2 => ProtectionMode::WriteProtected,
            3 => ProtectionMode::PasswordWriteProtected,
            5 => ProtectionMode::PasswordReadWriteProtected,
            other => ProtectionMode::Unknown(other),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            ProtectionMode::Unprotected => 0,
            ProtectionMode::WriteProtected => 2,
            ProtectionMode::PasswordWriteProtected => 3,
            ProtectionMode::PasswordReadWriteProtected => 5,
            ProtectionMode::Unknown(code) => *code,
        }
    }

    /// True for codes with the password bit set, including reserved odd values.
    pub fn requires_password(&self) -> bool {
        self.code() & protection::PASSWORD_BIT != 0
    }

    /// Human readable state, `None` for codes outside the documented set
    pub fn description(&self) -> Option<&'static str> {
        match self {
            ProtectionMode::Unprotected => Some("not write-protected"),
            ProtectionMode::WriteProtected => Some("write-protected"),
            ProtectionMode::PasswordWriteProtected => Some("password write-protected"),
            ProtectionMode::PasswordReadWriteProtected => Some("password read/write-protected"),
            ProtectionMode::Unknown(_) => None,
        }
    }
}

/// Product string reported by a supported drive's INQUIRY data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveIdentity {
    product: String,
}

impl DriveIdentity {
    /// Extract the product string from raw INQUIRY response bytes.
    ///
    /// Bytes 8..32 are read, then cut at the first NUL or at 15 characters.
    pub fn from_inquiry(response: &[u8]) -> Self {
        let start = inquiry::PRODUCT_OFFSET.min(response.len());
        let end = (inquiry::PRODUCT_OFFSET + inquiry::PRODUCT_FIELD_LEN).min(response.len());
        let field = &response[start..end];

        let significant: Vec<u8> = field
            .iter()
            .take(inquiry::SIGNIFICANT_LEN)
            .take_while(|&&b| b != 0)
            .copied()
            .collect();

        Self {
            product: String::from_utf8_lossy(&significant).into_owned(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.product
    }

    /// Case-insensitive match against the supported drive list
    pub fn is_supported(&self) -> bool {
        inquiry::SUPPORTED_DRIVES
            .iter()
            .any(|known| self.product.eq_ignore_ascii_case(known))
    }
}

impl fmt::Display for DriveIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry_with(product: &[u8]) -> Vec<u8> {
        let mut data = vec![0u8; 40];
        data[8..8 + product.len()].copy_from_slice(product);
        data
    }

    #[test]
    fn test_protection_codes() {
        for code in 0..16u8 {
            assert_eq!(ProtectionMode::from_code(code).code(), code);
        }
        assert_eq!(ProtectionMode::from_code(2), ProtectionMode::WriteProtected);
        assert_eq!(ProtectionMode::from_code(13), ProtectionMode::Unknown(13));
    }

    #[test]
    fn test_password_bit() {
        assert!(!ProtectionMode::Unprotected.requires_password());
        assert!(!ProtectionMode::WriteProtected.requires_password());
        assert!(ProtectionMode::PasswordWriteProtected.requires_password());
        assert!(ProtectionMode::PasswordReadWriteProtected.requires_password());
        assert!(ProtectionMode::Unknown(7).requires_password());
        assert!(!ProtectionMode::Unknown(8).requires_password());
    }

    #[test]
    fn test_identity_truncated_at_fifteen() {
        let id = DriveIdentity::from_inquiry(&inquiry_with(b"IOMEGA  ZIP 250       Y.0"));
        assert_eq!(id.as_str(), "IOMEGA  ZIP 250");
        assert!(id.is_supported());
    }

    #[test]
    fn test_identity_case_insensitive() {
        let id = DriveIdentity::from_inquiry(&inquiry_with(b"iomega  jaz 1gb"));
        assert!(id.is_supported());
        let id = DriveIdentity::from_inquiry(&inquiry_with(b"Iomega  Zip 250"));
        assert!(id.is_supported());
    }

    #[test]
    fn test_identity_rejects_other_drives() {
        let products: [&[u8]; 4] = [b"IOMEGA  ZIP 100 ", b"SEAGATE ST32550N", b"IOMEGA  JAZ 2GB", b"IOMEGA  ZIP"];
        for product in products {
            let id = DriveIdentity::from_inquiry(&inquiry_with(product));
            assert!(!id.is_supported(), "{:?} accepted", id);
        }
    }

    #[test]
    fn test_identity_short_response() {
        let id = DriveIdentity::from_inquiry(&[0u8; 4]);
        assert_eq!(id.as_str(), "");
        assert!(!id.is_supported());
    }
}
