//! Safety checks run before any command reaches the device
//!
//! Both checks are heuristics on the device name. They stop the obvious
//! mistakes (a partition, a mounted disk) and nothing more.

use crate::error::{JazError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

const RAW_DEVICE_PREFIX: &str = "/dev/sd";
const RAW_DEVICE_LEN: usize = 8;
const MOUNT_MATCH_LEN: usize = 8;

/// True for whole-disk SCSI nodes such as `/dev/sdc`.
pub fn is_raw_device(path: &str) -> bool {
    path.len() == RAW_DEVICE_LEN && path.starts_with(RAW_DEVICE_PREFIX)
}

/// True if any mount table entry's source shares the first 8 bytes with
/// `path`. Partitions of the device (`/dev/sdc1`) therefore count as mounted.
pub fn is_mounted(path: &str, mount_table: &Path) -> Result<bool> {
    let table = fs::read_to_string(mount_table)
        .map_err(|e| JazError::mount_table(mount_table, e))?;

    for source in mount_sources(&table) {
        if prefix_eq(source.as_bytes(), path.as_bytes(), MOUNT_MATCH_LEN) {
            debug!("{} matches mount table entry {}", path, source);
            return Ok(true);
        }
    }

    Ok(false)
}

/// Refuse partitions, unreadable mount tables and mounted devices.
pub fn check_device(path: &str, mount_table: &Path) -> Result<()> {
    if !is_raw_device(path) {
        return Err(JazError::NotRawDevice);
    }
    if is_mounted(path, mount_table)? {
        return Err(JazError::DeviceMounted);
    }
    Ok(())
}

/// Source field of every entry, escapes decoded.
fn mount_sources(table: &str) -> impl Iterator<Item = String> + '_ {
    table
        .lines()
        .map(str::trim_start)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_whitespace().next())
        .map(unescape_mount_field)
}

/// strncmp(a, b, n) == 0 for strings without interior NULs.
fn prefix_eq(a: &[u8], b: &[u8], n: usize) -> bool {
    a.iter().take(n).eq(b.iter().take(n))
}

/// Escapes written by the kernel and setmntent for whitespace and `\\`.
/// Anything else is taken literally, as getmntent does.
const MOUNT_ESCAPES: [(&[u8], u8); 5] = [
    (b"\\040", b' '),
    (b"\\011", b'\t'),
    (b"\\012", b'\n'),
    (b"\\134", b'\\'),
    (b"\\\\", b'\\'),
];

/// Decode the escapes used in mtab fields.
fn unescape_mount_field(field: &str) -> String {
    let mut rest = field.as_bytes();
    let mut out = Vec::with_capacity(rest.len());

    'outer: while let Some((&first, tail)) = rest.split_first() {
        if first == b'\\' {
            for (escape, value) in MOUNT_ESCAPES {
                if let Some(after) = rest.strip_prefix(escape) {
                    out.push(value);
                    rest = after;
                    continue 'outer;
                }
            }
        }
        out.push(first);
        rest = tail;
    }

    String::from_utf8_lossy(&out).into_owned()
}
