//! Media ejection: unlock the door, then stop and eject through START STOP UNIT

use crate::error::Result;
use tracing::{debug, info};

use super::super::constants::{scsi_commands, start_stop};
use super::super::{CommandBlock, CommandChannel, JazDrive};

impl<C: CommandChannel> JazDrive<C> {
    /// PREVENT ALLOW MEDIUM REMOVAL with prevent cleared
    pub fn unlock_door(&mut self) -> Result<()> {
        debug!("Unlocking drive door");
        let cdb = [scsi_commands::PREVENT_ALLOW_MEDIUM_REMOVAL, 0, 0, 0, 0, 0];
        self.send(CommandBlock::new(cdb), "door unlock")?;
        Ok(())
    }

    /// START STOP UNIT with the given power/eject byte
    pub fn motor(&mut self, mode: u8) -> Result<()> {
        debug!("Motor control: 0x{:02X}", mode);
        let cdb = [scsi_commands::START_STOP_UNIT, 0, 0, 0, mode, 0];
        self.send(CommandBlock::new(cdb), "motor control")?;
        Ok(())
    }

    /// Eject the cartridge. Stops at the first failing step; a door left
    /// unlocked by a later failure is not re-locked.
    pub fn eject(&mut self) -> Result<()> {
        info!("Ejecting disk");
        self.unlock_door()?;
        self.motor(start_stop::STOP_MOTOR)?;
        self.motor(start_stop::START_MOTOR)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scsi::mock::SimulatedDrive;

    #[test]
    fn test_eject_sequence() {
        let mut sim = SimulatedDrive::zip250(0);
        JazDrive::new(&mut sim).eject().unwrap();

        let cdbs: Vec<[u8; 6]> = sim.sent.iter().map(|b| *b.cdb()).collect();
        assert_eq!(
            cdbs,
            vec![
                [0x1E, 0, 0, 0, 0, 0],
                [0x1B, 0, 0, 0, 1, 0],
                [0x1B, 0, 0, 0, 2, 0],
            ]
        );
        assert!(sim.sent.iter().all(|b| b.response_len() == 0 && b.payload().is_empty()));
    }

    #[test]
    fn test_unlock_failure_stops_sequence() {
        let mut sim = SimulatedDrive::zip250(0).failing(0x1E);
        let err = JazDrive::new(&mut sim).eject().unwrap_err();

        assert_eq!(err.to_string(), "door unlock ioctl error");
        assert_eq!(sim.sent.len(), 1);
    }

    #[test]
    fn test_motor_failure_does_not_retry_unlock() {
        let mut sim = SimulatedDrive::zip250(0).failing(0x1B);
        let err = JazDrive::new(&mut sim).eject().unwrap_err();

        assert_eq!(err.to_string(), "motor control ioctl error");
        let opcodes: Vec<u8> = sim.sent.iter().map(|b| b.opcode()).collect();
        assert_eq!(opcodes, vec![0x1E, 0x1B]);
    }
}
