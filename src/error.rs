use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, JazError>;

#[derive(Error, Debug)]
pub enum JazError {
    #[error("wrong number of arguments")]
    BadArgumentCount,

    #[error("not a raw scsi device")]
    NotRawDevice,

    #[error("unable to access {}", .path.display())]
    MountTableUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("device is mounted")]
    DeviceMounted,

    #[error("unable to open device")]
    DeviceOpenFailed(#[source] std::io::Error),

    #[error("not a known IOMEGA JAZ/ZIP drive")]
    UnsupportedDrive,

    #[error("{context} ioctl error")]
    IoctlFailed { context: &'static str },

    #[error("set protection mode ioctl error - wrong password?")]
    SetModeFailed,

    #[error("unknown command")]
    UnknownCommand(String),

    #[error("command payload of {len} bytes exceeds {max} bytes")]
    PayloadTooLong { len: usize, max: usize },

    #[error("unsupported: {0}")]
    Unsupported(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0:#}")]
    Generic(#[from] anyhow::Error),
}

impl JazError {
    pub fn ioctl(context: &'static str) -> Self {
        Self::IoctlFailed { context }
    }

    pub fn unsupported<T: Into<String>>(msg: T) -> Self {
        Self::Unsupported(msg.into())
    }

    pub fn mount_table<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::MountTableUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this failure. Every error is terminal.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
