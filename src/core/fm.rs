//! Directory enumeration and file metadata for lsr.
//!
//! Provides [EntryMeta], the per-entry metadata record used by the long
//! format, and [list_dir], the loop that walks a directory and drives the
//! formatter once per entry.

use crate::config::Config;
use crate::core::formatter;

use std::ffi::OsStr;
use std::fs::{self, FileType};
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::Path;
use std::time::SystemTime;

/// Classification of a directory entry, derived from the entry's own status
/// without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Directory,
    CharDevice,
    Symlink,
    BlockDevice,
    Fifo,
    /// Regular files and anything without a more specific tag (sockets).
    Other,
}

impl FileKind {
    /// Maps a file type to its kind. The checks are mutually exclusive and
    /// ordered: directory, char device, symlink, block device, FIFO; the
    /// first match wins.
    pub fn from_file_type(ft: FileType) -> Self {
        if ft.is_dir() {
            FileKind::Directory
        } else if ft.is_char_device() {
            FileKind::CharDevice
        } else if ft.is_symlink() {
            FileKind::Symlink
        } else if ft.is_block_device() {
            FileKind::BlockDevice
        } else if ft.is_fifo() {
            FileKind::Fifo
        } else {
            FileKind::Other
        }
    }
}

/// Metadata snapshot for one directory entry.
///
/// A plain stack value, built fresh at format time for every entry and
/// dropped as soon as its line has been written. Nothing is cached across
/// entries.
#[derive(Debug, Clone, Copy)]
pub struct EntryMeta {
    kind: FileKind,
    mode: u32,
    uid: u32,
    gid: u32,
    size: u64,
    modified: Option<SystemTime>,
}

impl EntryMeta {
    pub(crate) fn new(
        kind: FileKind,
        mode: u32,
        uid: u32,
        gid: u32,
        size: u64,
        modified: Option<SystemTime>,
    ) -> Self {
        EntryMeta {
            kind,
            mode,
            uid,
            gid,
            size,
            modified,
        }
    }

    // Accessors

    #[inline]
    pub fn kind(&self) -> FileKind {
        self.kind
    }

    #[inline]
    pub fn mode(&self) -> u32 {
        self.mode
    }

    #[inline]
    pub fn uid(&self) -> u32 {
        self.uid
    }

    #[inline]
    pub fn gid(&self) -> u32 {
        self.gid
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Queries the entry's own status. Symlinks are not followed, so a link
    /// reports as [FileKind::Symlink] rather than its target's kind.
    ///
    /// # Returns
    /// An EntryMeta populated from `symlink_metadata`, or the stat error.
    pub fn from_path(path: &Path) -> io::Result<EntryMeta> {
        let md = fs::symlink_metadata(path)?;
        Ok(EntryMeta::new(
            FileKind::from_file_type(md.file_type()),
            md.mode(),
            md.uid(),
            md.gid(),
            md.len(),
            md.modified().ok(),
        ))
    }
}

/// Returns true when the entry name starts with a `.` byte.
#[inline]
fn is_hidden(name: &OsStr) -> bool {
    name.as_bytes().first() == Some(&b'.')
}

/// Lists the contents of `path` into `out` according to `config`.
///
/// The directory is opened up front; a failure there is the caller's fatal
/// error. Entries are then formatted one at a time, in whatever order the
/// filesystem yields them. `read_dir` never reports the `.`/`..`
/// pseudo-entries, so they are emitted here ahead of the iterator's output
/// when hidden entries were requested.
///
/// An entry whose metadata cannot be read is skipped and the listing
/// continues.
///
/// # Returns
/// `Ok(())` once the directory has been exhausted, or the first error from
/// opening the directory or writing to `out`.
pub fn list_dir<W: Write>(path: &Path, config: &Config, out: &mut W) -> io::Result<()> {
    let dir = fs::read_dir(path)?;

    if config.long_format {
        out.write_all(formatter::header_line().as_bytes())?;
    }

    let mut printed = false;

    if config.show_hidden {
        for name in [OsStr::new("."), OsStr::new("..")] {
            print_entry(path, name, config, out, &mut printed)?;
        }
    }

    for entry in dir {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let name = entry.file_name();
        if !config.show_hidden && is_hidden(&name) {
            continue;
        }
        print_entry(path, &name, config, out, &mut printed)?;
    }

    // Short-form entries all share one line; close it off so the shell
    // prompt starts fresh.
    if !config.long_format && printed {
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Formats one surviving entry and writes it to `out`. The short form
/// appends to the single running line; the long form emits a whole line.
fn print_entry<W: Write>(
    dir: &Path,
    name: &OsStr,
    config: &Config,
    out: &mut W,
    printed: &mut bool,
) -> io::Result<()> {
    if !config.long_format {
        out.write_all(formatter::format_short(name).as_bytes())?;
        *printed = true;
        return Ok(());
    }

    let meta = match EntryMeta::from_path(&dir.join(name)) {
        Ok(meta) => meta,
        Err(_) => return Ok(()),
    };

    let mut line = formatter::format_long(name, &meta);
    line.push('\n');
    out.write_all(line.as_bytes())?;
    *printed = true;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write as _;
    use std::os::unix::fs::{PermissionsExt, symlink};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn list_to_string(path: &Path, config: &Config) -> io::Result<String> {
        let mut out = Vec::new();
        list_dir(path, config, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn short_form_skips_hidden() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join("alpha.txt"))?;
        File::create(tmp.path().join(".secret"))?;

        let output = list_to_string(tmp.path(), &Config::default())?;
        assert!(output.contains("alpha.txt  "));
        assert!(!output.contains(".secret"));
        assert!(output.ends_with('\n'));
        Ok(())
    }

    #[test]
    fn short_form_show_hidden_lists_pseudo_entries() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join(".secret"))?;

        let config = Config {
            show_hidden: true,
            long_format: false,
        };
        let output = list_to_string(tmp.path(), &config)?;
        assert!(output.starts_with(".  ..  "));
        assert!(output.contains(".secret  "));
        Ok(())
    }

    #[test]
    fn short_form_empty_dir_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let output = list_to_string(tmp.path(), &Config::default())?;
        assert!(output.is_empty());
        Ok(())
    }

    #[test]
    fn long_form_header_and_line() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let file_path = tmp.path().join("answer.bin");
        let mut file = File::create(&file_path)?;
        file.write_all(&[0u8; 42])?;
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o644))?;

        let config = Config {
            show_hidden: false,
            long_format: true,
        };
        let output = list_to_string(tmp.path(), &config)?;

        let mut lines = output.lines();
        assert_eq!(
            lines.next().map(|l| format!("{}\n", l)),
            Some(formatter::header_line())
        );

        let entry = lines
            .find(|l| l.ends_with("answer.bin"))
            .ok_or("entry line missing")?;
        assert!(entry.starts_with("-rw-r--r--  "));
        assert!(entry.contains("    42 "));
        Ok(())
    }

    #[test]
    fn symlink_reports_its_own_kind() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let target = tmp.path().join("target.txt");
        File::create(&target)?;
        let link = tmp.path().join("link");
        symlink(&target, &link)?;

        let meta = EntryMeta::from_path(&link)?;
        assert_eq!(meta.kind(), FileKind::Symlink);

        let config = Config {
            show_hidden: false,
            long_format: true,
        };
        let output = list_to_string(tmp.path(), &config)?;
        let entry = output
            .lines()
            .find(|l| l.ends_with("link"))
            .ok_or("symlink line missing")?;
        assert!(entry.starts_with('l'));
        Ok(())
    }

    #[test]
    fn entry_meta_kinds_and_size() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let dir_path = tmp.path().join("subdir");
        fs::create_dir(&dir_path)?;
        let file_path = tmp.path().join("plain.txt");
        let mut file = File::create(&file_path)?;
        write!(file, "hello")?;

        assert_eq!(EntryMeta::from_path(&dir_path)?.kind(), FileKind::Directory);

        let meta = EntryMeta::from_path(&file_path)?;
        assert_eq!(meta.kind(), FileKind::Other);
        assert_eq!(meta.size(), 5);
        assert!(meta.modified().is_some());
        Ok(())
    }

    #[test]
    fn list_nonexistent_dir_fails() -> Result<(), Box<dyn std::error::Error>> {
        let path = PathBuf::from("/path/does/not/exist");
        let result = list_to_string(&path, &Config::default());
        assert!(result.is_err());
        Ok(())
    }
}
