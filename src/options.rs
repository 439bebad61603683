//! Configuration types for the normalization pipeline.
//!
//! This module defines [`NormalizationOptions`], the set of independently
//! toggleable rules that control how raw text is canonicalized before its
//! characters are counted.
//!
//! # Rule Independence
//!
//! Each flag enables exactly one rule; a disabled rule is a no-op and the
//! text passes through that step unchanged. There is no interaction logic
//! between flags beyond the fixed application order documented in
//! [`normalize`](crate::normalize).
//!
//! # Serialization
//!
//! The struct derives serde support and tolerates partial blobs: any field
//! missing from a stored configuration falls back to its default, so a
//! settings file written by an older version still deserializes cleanly.
//!
//! # Examples
//!
//! ```rust
//! use sheetcount::NormalizationOptions;
//!
//! // Default: every rule enabled.
//! let options = NormalizationOptions::default();
//! assert!(options.collapse_spaces);
//! assert!(options.trim);
//!
//! // Enable a single rule.
//! let options = NormalizationOptions {
//!     collapse_spaces: true,
//!     ..NormalizationOptions::disabled()
//! };
//! assert!(!options.trim);
//! ```

use serde::{Deserialize, Serialize};

/// Toggleable rules for the text normalization pipeline.
///
/// The rules are applied in a fixed order that is significant because they
/// are not commutative; see [`normalize`](crate::normalize) for the exact
/// sequence. Cheap to clone, serializable, owned by the caller and passed by
/// reference into every calculation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizationOptions {
    /// Collapse runs of whitespace into a single ASCII space.
    ///
    /// Two sub-steps: first a whitespace run sitting between two decorative
    /// characters (`- = _ * . ~`) is closed with no space left between them,
    /// so a divider line broken across lines rejoins; then every remaining
    /// whitespace run (spaces, tabs, newlines) becomes one space.
    pub collapse_spaces: bool,

    /// Collapse any run of carriage returns and line feeds into a single
    /// newline.
    ///
    /// When `collapse_spaces` is also enabled, that rule runs first and has
    /// usually already turned newlines into spaces, so this rule mainly
    /// matters on its own.
    pub collapse_newlines: bool,

    /// Replace every horizontal tab with one space.
    pub tabs_to_spaces: bool,

    /// Collapse a run of 4 or more identical decorative characters
    /// (`- = _ * . ~`) down to exactly 3 repetitions.
    ///
    /// Divider lines like `----------` commonly pad documents without
    /// representing billable work.
    pub trim_repeated_chars: bool,

    /// Strip zero-width and invisible Unicode code points.
    ///
    /// The removed set: zero-width space (U+200B), zero-width non-joiner
    /// (U+200C), zero-width joiner (U+200D), left-to-right mark (U+200E),
    /// right-to-left mark (U+200F), zero-width no-break space / BOM
    /// (U+FEFF), soft hyphen (U+00AD), word joiner (U+2060) and the
    /// Mongolian vowel separator (U+180E). These carry no visible glyph but
    /// would inflate character counts.
    pub remove_zero_width: bool,

    /// Remove leading and trailing whitespace from the whole string.
    pub trim: bool,
}

impl NormalizationOptions {
    /// All rules disabled: the text passes through untouched (except for the
    /// whitespace stripping controlled by the separate count-spaces flag).
    ///
    /// # Example
    ///
    /// ```rust
    /// use sheetcount::{normalize, NormalizationOptions};
    ///
    /// let raw = "  a \t b  ";
    /// assert_eq!(normalize(raw, &NormalizationOptions::disabled(), true), raw);
    /// ```
    pub fn disabled() -> Self {
        Self {
            collapse_spaces: false,
            collapse_newlines: false,
            tabs_to_spaces: false,
            trim_repeated_chars: false,
            remove_zero_width: false,
            trim: false,
        }
    }
}

impl Default for NormalizationOptions {
    /// Every rule enabled, the recommended configuration for billing.
    fn default() -> Self {
        Self {
            collapse_spaces: true,
            collapse_newlines: true,
            tabs_to_spaces: true,
            trim_repeated_chars: true,
            remove_zero_width: true,
            trim: true,
        }
    }
}
