//! Unit tests for the pfadkern library.
//!
//! This module organizes all test modules for the crate, providing
//! coverage for the path engine, the buffer layer and the invocation
//! adapters.
//!
//! ## Test Modules
//!
//! - **format_tests**: Path format classification and root lengths
//! - **derive_tests**: Directory/root derivation and casing replacement
//! - **prefix_tests**: Escape prefix add/remove and separator normalization
//! - **buffer_tests**: Native and char buffer invariants
//! - **pool_tests**: Buffer pool reuse, bounds and metrics
//! - **native_tests**: Call-and-resize adapters
//! - **error_tests**: Error taxonomy and native-code translation
//! - **config_tests**: Configuration loading and validation

pub mod config_tests;
pub mod derive_tests;
pub mod error_tests;
pub mod pool_tests;
