//! Owner and group name resolution for lsr.
//!
//! Thin safe wrappers over libc's reentrant database lookups. Both return
//! `None` for IDs the system databases cannot resolve; callers fall back to
//! printing the numeric ID.

use std::ffi::CStr;
use std::mem;
use std::os::raw::c_char;
use std::ptr;

// Scratch buffer for the reentrant lookups; grown on ERANGE.
const INITIAL_BUF_LEN: usize = 512;
const MAX_BUF_LEN: usize = 16 * 1024;

/// Resolves a numeric user ID to its login name.
///
/// # Returns
/// The name from the user database, or `None` when the ID has no entry or
/// the lookup fails.
pub fn user_name(uid: u32) -> Option<String> {
    let mut pwd: libc::passwd = unsafe { mem::zeroed() };
    let mut result: *mut libc::passwd = ptr::null_mut();
    let mut buf: Vec<c_char> = vec![0; INITIAL_BUF_LEN];

    loop {
        let ret = unsafe {
            libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result)
        };

        if ret == libc::ERANGE && buf.len() < MAX_BUF_LEN {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if ret != 0 || result.is_null() {
            return None;
        }

        // pw_name points into buf, which stays alive until after the copy.
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return Some(name.to_string_lossy().into_owned());
    }
}

/// Resolves a numeric group ID to its group name.
///
/// # Returns
/// The name from the group database, or `None` when the ID has no entry or
/// the lookup fails.
pub fn group_name(gid: u32) -> Option<String> {
    let mut grp: libc::group = unsafe { mem::zeroed() };
    let mut result: *mut libc::group = ptr::null_mut();
    let mut buf: Vec<c_char> = vec![0; INITIAL_BUF_LEN];

    loop {
        let ret = unsafe {
            libc::getgrgid_r(gid, &mut grp, buf.as_mut_ptr(), buf.len(), &mut result)
        };

        if ret == libc::ERANGE && buf.len() < MAX_BUF_LEN {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if ret != 0 || result.is_null() {
            return None;
        }

        // gr_name points into buf, which stays alive until after the copy.
        let name = unsafe { CStr::from_ptr(grp.gr_name) };
        return Some(name.to_string_lossy().into_owned());
    }
}
