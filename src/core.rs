//! Core runtime logic for lsr.
//!
//! This module contains the non-CLI pieces of the program:
//! - [fm]: directory enumeration and per-entry metadata (see [list_dir], [EntryMeta]).
//! - [formatter]: rendering helpers for the short and long listing forms.
//!
//! Most callers will import [list_dir] from this module.

pub mod fm;
pub mod formatter;

pub use fm::{EntryMeta, FileKind, list_dir};
pub use formatter::{
    format_long, format_mtime, format_permissions, format_short, format_size, header_line,
    owner_display, type_tag,
};
