//! The path-format engine: classification, root derivation and escape
//! prefix handling for the drive/share namespace.

pub mod derive;
pub mod format;
pub mod prefix;

pub use derive::{directory_of, file_or_directory_name, find_common_roots, replace_casing, root_of};
pub use format::{classify, is_separator, Classification, PathFormatKind, ALT_SEPARATOR, SEPARATOR};
pub use prefix::{
    add_extended_prefix, is_device, is_device_unc, is_extended, is_extended_unc,
    normalize_separators, remove_extended_prefix, EXTENDED_PREFIX, EXTENDED_UNC_PREFIX, MAX_PATH,
};
