use crate::error::{JazError, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_MOUNT_TABLE: &str = "/etc/mtab";

pub const USAGE: &str = "usage: jaztool /dev/sd? eject|ro|rw|status [-n]\n\t-n: no eject after operations";

#[derive(Parser, Debug)]
#[command(name = "jaztool")]
#[command(about = "Control write protection of Iomega JAZ/ZIP cartridges")]
#[command(version)]
pub struct Cli {
    /// Raw SCSI disk device, without a partition number (e.g. /dev/sdc)
    #[arg(value_name = "DEVICE")]
    pub device: String,

    /// One of: eject, ro, rw, status, PWRO, PWNR
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Do not eject the disk after changing its protection mode
    #[arg(short = 'n', long = "no-eject")]
    pub no_eject: bool,

    /// Optional trailing word; only `-n` has a meaning there
    #[arg(value_name = "OPTION", hide = true)]
    pub extra: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Mount table consulted before touching the device
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MOUNT_TABLE)]
    pub mount_table: PathBuf,
}

impl Cli {
    pub fn parse_args() -> Result<Self> {
        Self::parse_from_args(std::env::args_os())
    }

    /// Parse an argument vector. Help and version requests print and exit 0;
    /// any other parse failure becomes `BadArgumentCount`.
    ///
    /// One word may follow the command. It is ignored unless it is `-n`, and
    /// it cannot be combined with `-n`.
    pub fn parse_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) if cli.no_eject && cli.extra.is_some() => {
                debug!("too many arguments: -n and {:?}", cli.extra);
                Err(JazError::BadArgumentCount)
            }
            Ok(cli) => {
                if let Some(extra) = &cli.extra {
                    debug!("ignoring trailing argument {:?}", extra);
                }
                Ok(cli)
            }
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => {
                debug!("argument parsing failed: {}", e);
                Err(JazError::BadArgumentCount)
            }
        }
    }
}
