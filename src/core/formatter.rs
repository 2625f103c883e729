//! Display formatting for directory entries in lsr.
//!
//! Renders the two listing forms: the bare short form and the long form with
//! type tag, permission string, ownership, size, and modification time.
//! Everything here builds strings; the enumeration loop in [crate::core::fm]
//! writes them out.

use crate::core::fm::{EntryMeta, FileKind};
use crate::utils::users;

use chrono::{DateTime, Local};

use std::ffi::OsStr;
use std::time::SystemTime;

// ANSI styling wrapped around each long-format header label.
const UNDERLINE: &str = "\x1b[4m";
const DEFAULT_TEXT: &str = "\x1b[0m";

// Minimum printed width of the size column.
const SIZE_WIDTH: usize = 5;

/// Builds the long-format header: one underlined label per column,
/// space-separated, newline-terminated.
pub fn header_line() -> String {
    let labels = [
        "Permissions",
        "User",
        "Group",
        "Size",
        "Date Modified",
        "Name",
    ];
    let mut line = String::with_capacity(112);
    for label in labels {
        line.push_str(UNDERLINE);
        line.push_str(label);
        line.push_str(DEFAULT_TEXT);
        line.push(' ');
    }
    line.push('\n');
    line
}

/// Short form: the entry name followed by two spaces, no newline. All
/// short-form entries share a single output line.
pub fn format_short(name: &OsStr) -> String {
    format!("{}  ", name.to_string_lossy())
}

/// Single-character type tag for an entry kind.
pub fn type_tag(kind: FileKind) -> char {
    match kind {
        FileKind::Directory => 'd',
        FileKind::CharDevice => 'c',
        FileKind::Symlink => 'l',
        FileKind::BlockDevice => 'b',
        FileKind::Fifo => 'p',
        FileKind::Other => '-',
    }
}

/// Renders the nine permission characters: owner/group/other triples with
/// `-` for each unset bit. Type bits in the mode are ignored.
pub fn format_permissions(mode: u32) -> String {
    let mut chars = ['-'; 9];
    let shifts = [6, 3, 0];
    for (i, &shift) in shifts.iter().enumerate() {
        let base = i * 3;
        if (mode >> (shift + 2)) & 1u32 != 0 {
            chars[base] = 'r';
        }
        if (mode >> (shift + 1)) & 1u32 != 0 {
            chars[base + 1] = 'w';
        }
        if (mode >> shift) & 1u32 != 0 {
            chars[base + 2] = 'x';
        }
    }
    chars.iter().collect()
}

/// Owner or group column text: the resolved name, or the numeric ID in
/// decimal when the system database has no entry for it.
pub fn owner_display(name: Option<String>, id: u32) -> String {
    name.unwrap_or_else(|| id.to_string())
}

/// Size column, right-aligned to at least [SIZE_WIDTH] characters.
pub fn format_size(size: u64) -> String {
    format!("{:>width$}", size, width = SIZE_WIDTH)
}

/// Modification-time column, abbreviated month, zero-padded day and 24-hour
/// time in the local time zone (`Jan 05 13:42`).
///
/// # Returns
/// The formatted local time, or "-" when the timestamp is unavailable.
pub fn format_mtime(modified: Option<SystemTime>) -> String {
    modified
        .map(|mtime| {
            let dt: DateTime<Local> = DateTime::from(mtime);
            dt.format("%b %d %H:%M").to_string()
        })
        .unwrap_or_else(|| "-".to_string())
}

/// Long form: type tag, permissions, owner, group, size, modification time,
/// and name on one line. The trailing newline is the caller's.
pub fn format_long(name: &OsStr, meta: &EntryMeta) -> String {
    let mut line = String::with_capacity(80);
    line.push(type_tag(meta.kind()));
    line.push_str(&format_permissions(meta.mode()));
    line.push_str("  ");
    line.push_str(&owner_display(users::user_name(meta.uid()), meta.uid()));
    line.push(' ');
    line.push_str(&owner_display(users::group_name(meta.gid()), meta.gid()));
    line.push(' ');
    line.push_str(&format_size(meta.size()));
    line.push(' ');
    line.push_str(&format_mtime(meta.modified()));
    line.push_str("  ");
    line.push_str(&name.to_string_lossy());
    line
}
