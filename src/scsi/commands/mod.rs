//! SCSI Commands Module
//!
//! This module contains the drive commands, implemented on `JazDrive`.

pub mod eject;
pub mod inquiry;
pub mod protection;
