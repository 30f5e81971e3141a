//! Secret masking for rendered configuration.
//!
//! - [`OutputMasker`] - replaces secret values in human-facing output
//!
//! # Example
//!
//! ```
//! use chainrig::secrets::OutputMasker;
//!
//! let mut masker = OutputMasker::new();
//! masker.add_secret("0xdeadbeef");
//! assert_eq!(masker.mask("key: 0xdeadbeef"), "key: [REDACTED]");
//! ```

pub mod mask;

pub use mask::OutputMasker;
