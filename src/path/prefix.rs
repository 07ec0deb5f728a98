//! Adding, removing and normalizing the escape prefix.
//!
//! The escape prefix (`\\?\`) tells the OS to skip normalization and the
//! legacy length check on the remainder of the string. Device (`\\.\`) and
//! NT (`\??\`) spellings address the same machinery; for the calls this
//! crate wraps they differ only in whether the result is normalized. All
//! predicates here are fixed-offset character comparisons and never
//! allocate.

use std::borrow::Cow;

use super::format::{is_separator, SEPARATOR};

/// The canonical escape prefix, `\\?\`.
pub const EXTENDED_PREFIX: &str = "\\\\?\\";
/// The escaped spelling of a UNC share root, `\\?\UNC\`.
pub const EXTENDED_UNC_PREFIX: &str = "\\\\?\\UNC\\";
/// The legacy length ceiling below which no escape prefix is needed.
pub const MAX_PATH: usize = 260;

/// True if the path carries the escape prefix (`\\?\` or the NT spelling
/// `\??\`). Exact backslashes are required; forward slashes do not escape.
pub fn is_extended(path: &str) -> bool {
    let b = path.as_bytes();
    b.len() >= 4
        && b[0] == b'\\'
        && (b[1] == b'\\' || b[1] == b'?')
        && b[2] == b'?'
        && b[3] == b'\\'
}

/// True if the path is an escaped UNC share (`\\?\UNC\...`).
pub fn is_extended_unc(path: &str) -> bool {
    let b = path.as_bytes();
    is_extended(path) && b.len() >= 8 && &b[4..7] == b"UNC" && b[7] == b'\\'
}

/// True if the path carries any device prefix spelling (`\\.\`, `\\?\`,
/// `\??\`), accepting either separator direction.
pub fn is_device(path: &str) -> bool {
    let b = path.as_bytes();
    b.len() >= 4
        && is_sep(b[0])
        && ((is_sep(b[1]) && (b[2] == b'.' || b[2] == b'?')) || (b[1] == b'?' && b[2] == b'?'))
        && is_sep(b[3])
}

/// True if the path is a device-spelled UNC share (`\\.\UNC\...`).
pub fn is_device_unc(path: &str) -> bool {
    let b = path.as_bytes();
    is_device(path) && b.len() >= 8 && &b[4..7] == b"UNC" && is_sep(b[7])
}

#[inline]
fn is_sep(b: u8) -> bool {
    b == b'\\' || b == b'/'
}

/// Number of UTF-16 units the string occupies, the unit the legacy length
/// check is defined in.
#[inline]
fn utf16_len(path: &str) -> usize {
    path.encode_utf16().count()
}

/// Returns the path with the escape prefix applied.
///
/// No-op when the path is already escaped, or when it is under the legacy
/// ceiling and `force` is false. A device-prefixed path only has its first
/// four characters rewritten to the canonical spelling; a plain UNC path
/// becomes `\\?\UNC\` plus the remainder after its two leading separators;
/// anything else gets `\\?\` prepended.
pub fn add_extended_prefix(path: &str, force: bool) -> Cow<'_, str> {
    if is_extended(path) {
        return Cow::Borrowed(path);
    }
    if !force && utf16_len(path) < MAX_PATH {
        return Cow::Borrowed(path);
    }
    if is_device(path) {
        let mut out = String::with_capacity(path.len());
        out.push_str(EXTENDED_PREFIX);
        out.push_str(&path[4..]);
        return Cow::Owned(out);
    }
    let b = path.as_bytes();
    if b.len() >= 2 && is_sep(b[0]) && is_sep(b[1]) {
        let mut out = String::with_capacity(path.len() + EXTENDED_UNC_PREFIX.len());
        out.push_str(EXTENDED_UNC_PREFIX);
        out.push_str(&path[2..]);
        return Cow::Owned(out);
    }
    let mut out = String::with_capacity(path.len() + EXTENDED_PREFIX.len());
    out.push_str(EXTENDED_PREFIX);
    out.push_str(path);
    Cow::Owned(out)
}

/// Strips the escape prefix again.
///
/// No-op for unescaped paths. `\\?\UNC\server\...` reconstitutes to
/// `\\server\...`; the plain escape prefix is simply cut off.
pub fn remove_extended_prefix(path: &str) -> Cow<'_, str> {
    if !is_extended(path) {
        return Cow::Borrowed(path);
    }
    if is_extended_unc(path) {
        // Replace `\\?\UNC\` with a single separator; together with the
        // separator already at index 7 this restores the plain `\\` marker.
        let mut out = String::with_capacity(path.len() - 6);
        out.push(SEPARATOR);
        out.push_str(&path[7..]);
        return Cow::Owned(out);
    }
    Cow::Borrowed(&path[EXTENDED_PREFIX.len()..])
}

/// Strips an escape prefix in place, without reallocating the string.
///
/// Used by the invocation adapter on results whose prefix it added itself.
pub fn remove_extended_prefix_in_place(path: &mut String) {
    if !is_extended(path) {
        return;
    }
    if is_extended_unc(path) {
        // `\\?\UNC\server` -> `\\server`: cut `?\UNC\` out of the middle.
        path.drain(2..8);
    } else {
        path.drain(..EXTENDED_PREFIX.len());
    }
}

/// Collapses redundant separators and canonicalizes their direction.
///
/// Runs of two or more separators collapse to one, except a leading run of
/// exactly two, which is preserved because it signals UNC or escape intent.
/// The alternate separator is rewritten to the canonical one. Already
/// normalized input is returned borrowed.
pub fn normalize_separators(path: &str) -> Cow<'_, str> {
    let b = path.as_bytes();
    let leading_pair = b.len() >= 2 && is_sep(b[0]) && is_sep(b[1]) && (b.len() == 2 || !is_sep(b[2]));

    // Fast path: nothing to rewrite.
    let mut needs_work = path.contains(ALT_CHECK);
    if !needs_work {
        let mut prev_sep = false;
        for (i, &c) in b.iter().enumerate() {
            let sep = is_sep(c);
            if sep && prev_sep && !(leading_pair && i == 1) {
                needs_work = true;
                break;
            }
            prev_sep = sep;
        }
    }
    if !needs_work {
        return Cow::Borrowed(path);
    }

    let mut out = String::with_capacity(path.len());
    let mut chars = path.char_indices().peekable();
    if leading_pair {
        out.push(SEPARATOR);
        out.push(SEPARATOR);
        chars.next();
        chars.next();
    }
    let mut prev_sep = leading_pair;
    for (_, c) in chars {
        if is_separator(c) {
            if !prev_sep {
                out.push(SEPARATOR);
            }
            prev_sep = true;
        } else {
            out.push(c);
            prev_sep = false;
        }
    }
    Cow::Owned(out)
}

const ALT_CHECK: char = '/';
