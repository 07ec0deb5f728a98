#[cfg(test)]
mod tests {
    use crate::error::{codes, validation, NativeErrorKind, PathError};

    #[test]
    fn test_code_translation() {
        assert_eq!(NativeErrorKind::from_code(codes::ERROR_FILE_NOT_FOUND), NativeErrorKind::NotFound);
        assert_eq!(NativeErrorKind::from_code(codes::ERROR_PATH_NOT_FOUND), NativeErrorKind::NotFound);
        assert_eq!(NativeErrorKind::from_code(codes::ERROR_ACCESS_DENIED), NativeErrorKind::AccessDenied);
        assert_eq!(
            NativeErrorKind::from_code(codes::ERROR_FILENAME_EXCED_RANGE),
            NativeErrorKind::PathTooLong
        );
        assert_eq!(
            NativeErrorKind::from_code(codes::ERROR_SHARING_VIOLATION),
            NativeErrorKind::SharingViolation
        );
        assert_eq!(NativeErrorKind::from_code(codes::ERROR_INVALID_NAME), NativeErrorKind::InvalidName);
        // Unmapped codes travel through untouched.
        assert_eq!(NativeErrorKind::from_code(31), NativeErrorKind::Other);
        assert_eq!(NativeErrorKind::from_code(codes::ERROR_ENVVAR_NOT_FOUND), NativeErrorKind::Other);
    }

    #[test]
    fn test_native_constructor_keeps_code() {
        match PathError::native(codes::ERROR_ACCESS_DENIED) {
            PathError::NativeCallFailure { code, kind } => {
                assert_eq!(code, codes::ERROR_ACCESS_DENIED);
                assert_eq!(kind, NativeErrorKind::AccessDenied);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_error_display() {
        let e = PathError::InvalidPath(":".to_string());
        assert!(e.to_string().contains("invalid path"));
        let e = PathError::BufferAllocationFailure { requested: 4096 };
        assert!(e.to_string().contains("4096"));
        let e = PathError::native(codes::ERROR_FILE_NOT_FOUND);
        assert!(e.to_string().contains("not found"));
        assert!(e.to_string().contains("2"));
    }

    #[test]
    fn test_validate_path_arg() {
        assert!(validation::validate_path_arg("C:\\ok").is_ok());
        assert!(matches!(
            validation::validate_path_arg(""),
            Err(PathError::ContractViolation(_))
        ));
        assert!(matches!(
            validation::validate_path_arg("C:\\a\0b"),
            Err(PathError::ContractViolation(_))
        ));
    }
}
