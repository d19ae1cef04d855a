//! Command Dispatcher
//!
//! Runs the safety gate, opens and identifies the drive, then performs the
//! single operation named on the command line.

use crate::cli::Cli;
use crate::credentials::{CredentialProvider, TerminalPrompt};
use crate::error::{JazError, Result};
use crate::safety;
use crate::scsi::{CommandChannel, DeviceHandle, JazDrive, ProtectionMode};
use crate::session::Session;
use std::io::{self, Write};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Operation requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Eject,
    ReadOnly,
    ReadWrite,
    Status,
    /// Password write-protect; unofficial
    PasswordReadOnly,
    /// Password read/write-protect; unofficial
    PasswordNoRead,
}

impl Verb {
    /// Protection mode the verb moves the cartridge to, if it changes one
    pub fn requested_mode(&self) -> Option<ProtectionMode> {
        match self {
            Verb::ReadOnly => Some(ProtectionMode::WriteProtected),
            Verb::ReadWrite => Some(ProtectionMode::Unprotected),
            Verb::PasswordReadOnly => Some(ProtectionMode::PasswordWriteProtected),
            Verb::PasswordNoRead => Some(ProtectionMode::PasswordReadWriteProtected),
            Verb::Eject | Verb::Status => None,
        }
    }
}

impl FromStr for Verb {
    type Err = JazError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "eject" => Ok(Verb::Eject),
            "ro" => Ok(Verb::ReadOnly),
            "rw" => Ok(Verb::ReadWrite),
            "status" => Ok(Verb::Status),
            "PWRO" => Ok(Verb::PasswordReadOnly),
            "PWNR" => Ok(Verb::PasswordNoRead),
            other => Err(JazError::UnknownCommand(other.to_string())),
        }
    }
}

/// Full invocation against the real device.
pub fn execute(args: &Cli, session: &mut Session) -> Result<()> {
    safety::check_device(&args.device, &args.mount_table)?;

    let handle = DeviceHandle::open(&args.device)?;
    let mut drive = JazDrive::new(handle);
    drive.identify(session)?;

    dispatch(
        &mut drive,
        &args.command,
        session,
        &mut TerminalPrompt::default(),
        &mut io::stdout(),
    )?;

    let handle = drive.into_inner();
    debug!("Closing {}", handle.path());
    drop(handle);
    Ok(())
}

/// Perform `verb` on an already identified drive.
pub fn dispatch<C: CommandChannel>(
    drive: &mut JazDrive<C>,
    verb: &str,
    session: &Session,
    credentials: &mut dyn CredentialProvider,
    out: &mut dyn Write,
) -> Result<()> {
    let verb: Verb = verb.parse()?;
    info!("Running {:?} on {}", verb, session.device());

    if let Some(requested) = verb.requested_mode() {
        warn_risky(verb, session);
        return drive
            .set_mode(requested, session, credentials, out)
            .map(|_| ());
    }

    match verb {
        Verb::Eject => drive.eject(),
        _ => drive.report_status(session, out).map(|_| ()),
    }
}

fn warn_risky(verb: Verb, session: &Session) {
    match verb {
        Verb::PasswordReadOnly => warn!(
            "{} will stay write-protected until unlocked with the same password; a forgotten password cannot be recovered",
            session.device()
        ),
        Verb::PasswordNoRead => warn!(
            "{} will become unreadable; kernels that cannot open unreadable media will be unable to reopen it to unlock",
            session.device()
        ),
        _ => {}
    }
}
