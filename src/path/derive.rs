//! Directory and root derivation on top of the classifier.
//!
//! These helpers never touch storage either; they only combine
//! [`classify`](super::format::classify) with backward separator scans.

use std::borrow::Cow;

use crate::error::{PathError, PathResult};

use super::format::{classify, is_separator, SEPARATOR};

fn root_length_of(path: &str) -> PathResult<usize> {
    let c = classify(path);
    match c.root_length {
        Some(len) => Ok(len),
        None => Err(PathError::InvalidPath(path.to_string())),
    }
}

/// The root substring of a path (`C:\`, `\\server\share\`, ...).
pub fn root_of(path: &str) -> PathResult<&str> {
    let root = root_length_of(path)?;
    Ok(&path[..root])
}

/// The directory containing `path`, with a guaranteed trailing separator
/// when the path is its own root.
///
/// A root path is its own directory. Otherwise the result is the substring
/// through the last separator at or after the root.
pub fn directory_of(path: &str) -> PathResult<Cow<'_, str>> {
    let root = root_length_of(path)?;
    let b = path.as_bytes();

    if root == path.len() {
        // The path is its own directory.
        if path.ends_with(is_separator) {
            return Ok(Cow::Borrowed(path));
        }
        let mut owned = String::with_capacity(path.len() + 1);
        owned.push_str(path);
        owned.push(SEPARATOR);
        return Ok(Cow::Owned(owned));
    }

    for i in (root..b.len()).rev() {
        if is_sep(b[i]) {
            return Ok(Cow::Borrowed(&path[..=i]));
        }
    }
    // No separator beyond the root: the directory is the root itself.
    Ok(Cow::Borrowed(&path[..root]))
}

/// The last path segment (file or directory name), ignoring trailing
/// separators. `None` when the remainder is the root itself or the path
/// does not classify.
pub fn file_or_directory_name(path: &str) -> Option<&str> {
    let root = classify(path).root_length?;
    let b = path.as_bytes();
    let mut end = b.len();
    while end > root && is_sep(b[end - 1]) {
        end -= 1;
    }
    if end == root {
        return None;
    }
    let mut start = root;
    for i in (root..end).rev() {
        if is_sep(b[i]) {
            start = i + 1;
            break;
        }
    }
    Some(&path[start..end])
}

/// Reduces a set of paths to the minimal set of directories that covers
/// them: no returned directory is a prefix of another returned one.
/// Prefix comparison is case-insensitive, as the namespace is.
pub fn find_common_roots<'a, I>(paths: I) -> PathResult<Vec<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut roots: Vec<String> = Vec::new();
    for path in paths {
        let dir = directory_of(path)?.into_owned();
        if roots.iter().any(|kept| starts_with_ignore_case(&dir, kept)) {
            // Already covered by a shorter kept root.
            continue;
        }
        roots.retain(|kept| !starts_with_ignore_case(kept, &dir));
        roots.push(dir);
    }
    Ok(roots)
}

/// Rebuilds `target` using `source`'s casing on their longest common
/// case-insensitive suffix.
///
/// Trailing separators are ignored for the comparison; `target`'s trailing
/// separator, if any, is preserved on the result. When not a single
/// character matches from the end, `source` is returned unchanged.
pub fn replace_casing(source: &str, target: &str) -> String {
    let s = trim_one_trailing_separator(source);
    let t = trim_one_trailing_separator(target);
    let target_had_sep = t.len() != target.len();

    let mut s_suffix = 0usize; // byte length of the common suffix in source
    let mut t_suffix = 0usize; // byte length of the common suffix in target
    for (sc, tc) in s.chars().rev().zip(t.chars().rev()) {
        if !chars_equal_ignore_case(sc, tc) {
            break;
        }
        s_suffix += sc.len_utf8();
        t_suffix += tc.len_utf8();
    }
    if s_suffix == 0 {
        return source.to_string();
    }

    let mut out = String::with_capacity(t.len() - t_suffix + s_suffix + 1);
    out.push_str(&t[..t.len() - t_suffix]);
    out.push_str(&s[s.len() - s_suffix..]);
    if target_had_sep {
        out.push(SEPARATOR);
    }
    out
}

#[inline]
fn is_sep(b: u8) -> bool {
    b == b'\\' || b == b'/'
}

fn trim_one_trailing_separator(s: &str) -> &str {
    match s.as_bytes().last() {
        Some(&b) if is_sep(b) => &s[..s.len() - 1],
        _ => s,
    }
}

fn chars_equal_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn starts_with_ignore_case(haystack: &str, prefix: &str) -> bool {
    if prefix.len() > haystack.len() || !haystack.is_char_boundary(prefix.len()) {
        return false;
    }
    haystack[..prefix.len()]
        .chars()
        .zip(prefix.chars())
        .all(|(a, b)| chars_equal_ignore_case(a, b))
}
