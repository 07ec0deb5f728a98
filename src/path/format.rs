//! Lexical classification of Windows namespace paths.
//!
//! Everything in this module is a pure function of the leading characters of
//! a string: no allocation on the success path, no file system access, no
//! regular expressions. The classifier decides which addressing scheme a
//! path uses (drive, UNC share, device/extended escape) and how many leading
//! characters form its root.

/// The canonical separator of the namespace.
pub const SEPARATOR: char = '\\';
/// The alternate separator, accepted on input and normalized away.
pub const ALT_SEPARATOR: char = '/';

/// True for both separator spellings.
#[inline]
pub fn is_separator(c: char) -> bool {
    c == SEPARATOR || c == ALT_SEPARATOR
}

#[inline]
fn is_sep(b: u8) -> bool {
    b == b'\\' || b == b'/'
}

/// The addressing scheme a path string uses, decided purely from its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathFormatKind {
    /// Indeterminate or invalid shape.
    Unknown,
    /// `D:\...` — drive plus rooted remainder.
    LocalFullyQualified,
    /// `D:...` — relative to the drive's own current directory.
    LocalDriveRooted,
    /// `\...` — rooted to the current drive.
    LocalCurrentDriveRooted,
    /// `...` — fully relative.
    LocalCurrentDirectoryRelative,
    /// `\\server\share\...`, including escaped and device spellings that
    /// resolve to a share.
    UniformNamingConvention,
}

/// Result of classifying a path: its format plus the length of the leading
/// root segment.
///
/// `root_length` is `None` exactly when `kind` is
/// [`PathFormatKind::Unknown`]; otherwise it is the count of leading
/// characters that form the root (3 for `C:\`, through the separator after
/// the share for UNC paths) and never exceeds the path length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub kind: PathFormatKind,
    pub root_length: Option<usize>,
}

impl Classification {
    #[inline]
    fn unknown() -> Self {
        Classification { kind: PathFormatKind::Unknown, root_length: None }
    }

    #[inline]
    fn new(kind: PathFormatKind, root_length: usize) -> Self {
        Classification { kind, root_length: Some(root_length) }
    }

    /// Whether the path pins down a volume by itself (drive-rooted or share).
    pub fn is_fully_qualified(&self) -> bool {
        matches!(
            self.kind,
            PathFormatKind::LocalFullyQualified | PathFormatKind::UniformNamingConvention
        )
    }

    /// Whether resolving the path needs some notion of a current directory.
    pub fn is_relative(&self) -> bool {
        matches!(
            self.kind,
            PathFormatKind::LocalDriveRooted
                | PathFormatKind::LocalCurrentDriveRooted
                | PathFormatKind::LocalCurrentDirectoryRelative
        )
    }
}

/// True when the first four characters spell a device or escape prefix
/// (`\\.\`, `\\?\` or `\??\`). Separator direction is accepted either way
/// for this test only; the exact spelling matters to the prefix transformer,
/// not to root finding.
#[inline]
fn has_device_prefix(b: &[u8]) -> bool {
    b.len() >= 4
        && is_sep(b[0])
        && ((is_sep(b[1]) && (b[2] == b'.' || b[2] == b'?')) || (b[1] == b'?' && b[2] == b'?'))
        && is_sep(b[3])
}

/// The object-manager redirection segment recognized after a device prefix.
const GLOBALROOT: &[u8] = b"GLOBALROOT";

/// Classifies a path string and computes its root length.
///
/// Two phases: device/escape-prefixed paths first, then the classic drive
/// and UNC shapes. See [`Classification`] for the result contract.
pub fn classify(path: &str) -> Classification {
    let b = path.as_bytes();
    if b.is_empty() {
        return Classification::unknown();
    }

    if has_device_prefix(b) {
        return classify_device(b);
    }

    // Classic phase: no recognized device or escape prefix.
    if !is_sep(b[0]) {
        // A leading unescaped colon never parses.
        if b[0] == b':' {
            return Classification::unknown();
        }
        if b.len() >= 2 && b[1] == b':' && b[0].is_ascii_alphabetic() {
            return if b.len() >= 3 && is_sep(b[2]) {
                Classification::new(PathFormatKind::LocalFullyQualified, 3)
            } else {
                Classification::new(PathFormatKind::LocalDriveRooted, 2)
            };
        }
        return Classification::new(PathFormatKind::LocalCurrentDirectoryRelative, 0);
    }

    if b.len() == 1 || !is_sep(b[1]) {
        return Classification::new(PathFormatKind::LocalCurrentDriveRooted, 1);
    }

    // Two leading separators: a parseable UNC needs at least `\\s\s` and the
    // server name must start right away. A third separator here is invalid
    // (the documented triple-separator quirk) and collapses the root.
    if b.len() < 5 || is_sep(b[2]) {
        return Classification::unknown();
    }
    validate_unc_root(b, 2)
}

fn classify_device(b: &[u8]) -> Classification {
    // `\\?\UNC\...` and `\\.\UNC\...` both resolve to a share.
    if b.len() >= 8 && &b[4..7] == b"UNC" && is_sep(b[7]) {
        return validate_unc_root(b, 8);
    }

    let mut start = 4;
    if b.len() > 4 + GLOBALROOT.len()
        && &b[4..4 + GLOBALROOT.len()] == GLOBALROOT
        && is_sep(b[4 + GLOBALROOT.len()])
    {
        // Skip the redirection segment itself; the following segment then
        // becomes part of the root.
        start = 4 + GLOBALROOT.len() + 1;
    }
    if start >= b.len() {
        // Nothing beyond the prefix (or beyond GLOBALROOT) to anchor a root.
        return Classification::unknown();
    }
    let root = match next_separator(b, start) {
        Some(idx) => idx + 1,
        None => b.len(),
    };
    Classification::new(PathFormatKind::LocalFullyQualified, root)
}

/// Shared UNC root validation. `offset` is where the server segment starts
/// (2 for classic `\\server\...`, 8 for the escaped spellings).
fn validate_unc_root(b: &[u8], offset: usize) -> Classification {
    // The server name must begin with a non-separator character; this is
    // what rejects `\\\Server\Share` and its escaped cousins.
    if offset >= b.len() || is_sep(b[offset]) {
        return Classification::unknown();
    }
    let server_end = match next_separator(b, offset) {
        Some(idx) => idx,
        None => return Classification::unknown(),
    };
    // The share segment must exist and must not be empty.
    if server_end + 1 >= b.len() || is_sep(b[server_end + 1]) {
        return Classification::unknown();
    }
    let root = match next_separator(b, server_end + 1) {
        Some(idx) => idx + 1,
        None => b.len(),
    };
    Classification::new(PathFormatKind::UniformNamingConvention, root)
}

#[inline]
fn next_separator(b: &[u8], from: usize) -> Option<usize> {
    b.iter().skip(from).position(|&c| is_sep(c)).map(|p| from + p)
}
