#[cfg(test)]
mod tests {
    use crate::error::PathError;
    use crate::path::derive::{
        directory_of, file_or_directory_name, find_common_roots, replace_casing, root_of,
    };

    #[test]
    fn test_root_of() {
        assert_eq!(root_of("C:\\Users\\x").unwrap(), "C:\\");
        assert_eq!(root_of("\\\\Server\\Share\\Sub").unwrap(), "\\\\Server\\Share\\");
        assert_eq!(root_of("relative\\x").unwrap(), "");
        assert!(matches!(root_of(":"), Err(PathError::InvalidPath(_))));
    }

    #[test]
    fn test_directory_of() {
        assert_eq!(directory_of("C:\\A\\B").unwrap(), "C:\\A\\");
        assert_eq!(directory_of("C:\\A").unwrap(), "C:\\");
        assert_eq!(directory_of("C:\\").unwrap(), "C:\\");
        assert_eq!(directory_of("\\\\Server\\Share\\Sub").unwrap(), "\\\\Server\\Share\\");
    }

    #[test]
    fn test_directory_of_root_gets_trailing_separator() {
        // A rootless-tail UNC path is its own directory; the trailing
        // separator is guaranteed on the way out.
        assert_eq!(directory_of("\\\\Server\\Share").unwrap(), "\\\\Server\\Share\\");
    }

    #[test]
    fn test_directory_of_invalid_path() {
        assert!(matches!(directory_of(":"), Err(PathError::InvalidPath(_))));
    }

    #[test]
    fn test_file_or_directory_name() {
        assert_eq!(file_or_directory_name("C:\\A\\B"), Some("B"));
        assert_eq!(file_or_directory_name("C:\\A\\B\\"), Some("B"));
        assert_eq!(file_or_directory_name("C:\\A\\file.txt"), Some("file.txt"));
        assert_eq!(file_or_directory_name("name.txt"), Some("name.txt"));
        assert_eq!(file_or_directory_name("C:\\"), None);
        assert_eq!(file_or_directory_name("\\\\Server\\Share\\"), None);
        assert_eq!(file_or_directory_name(":"), None);
    }

    #[test]
    fn test_find_common_roots_subsumes_longer() {
        let roots = find_common_roots(["C:\\Foo\\Bar", "C:\\Foo\\Bar\\Baz"]).unwrap();
        assert_eq!(roots, vec!["C:\\Foo\\".to_string()]);

        // Order must not matter.
        let roots = find_common_roots(["C:\\Foo\\Bar\\Baz", "C:\\Foo\\Bar"]).unwrap();
        assert_eq!(roots, vec!["C:\\Foo\\".to_string()]);
    }

    #[test]
    fn test_find_common_roots_case_insensitive() {
        let roots = find_common_roots(["C:\\FOO\\bar", "c:\\foo\\sub\\x"]).unwrap();
        assert_eq!(roots, vec!["C:\\FOO\\".to_string()]);
    }

    #[test]
    fn test_find_common_roots_keeps_disjoint() {
        let mut roots = find_common_roots(["C:\\A\\x", "D:\\B\\y", "\\\\s\\t\\u"]).unwrap();
        roots.sort();
        assert_eq!(
            roots,
            vec!["C:\\A\\".to_string(), "D:\\B\\".to_string(), "\\\\s\\t\\".to_string()]
        );
    }

    #[test]
    fn test_find_common_roots_propagates_invalid() {
        assert!(find_common_roots(["C:\\A\\x", ":"]).is_err());
    }

    #[test]
    fn test_replace_casing_full_match() {
        assert_eq!(replace_casing("C:\\Foo\\Bar", "c:\\foo\\bar"), "C:\\Foo\\Bar");
    }

    #[test]
    fn test_replace_casing_partial_suffix() {
        // Only the common tail takes the source casing; the target keeps its
        // own prefix and trailing separator.
        assert_eq!(
            replace_casing("C:\\Data\\PROJECT", "d:\\other\\project\\"),
            "d:\\other\\PROJECT\\"
        );
    }

    #[test]
    fn test_replace_casing_no_match_returns_source() {
        assert_eq!(replace_casing("abc", "xyz"), "abc");
    }

    #[test]
    fn test_replace_casing_ignores_trailing_separator() {
        assert_eq!(replace_casing("C:\\Foo\\", "c:\\foo"), "C:\\Foo");
        assert_eq!(replace_casing("C:\\Foo", "c:\\foo\\"), "C:\\Foo\\");
    }
}
