//! sheetcount: character accounting for pricing text work.
//!
//! Computes a fair price for translation or retyping jobs by separating
//! "new" text from "reused/original" text after normalizing whitespace and
//! invisible characters.
//!
//! ## What we do
//!
//! - Normalize raw text with six independently toggleable rules (collapse
//!   spaces/newlines, tabs to spaces, trim repeated divider characters,
//!   strip zero-width characters, trim edges)
//! - Count characters of the normalized text, optionally ignoring whitespace
//! - Subtract the independently normalized reused blocks from the total
//! - Convert counts to money through a "characters per sheet" tariff
//!
//! ## Pure function guarantee
//!
//! No I/O, no shared state, no locale dependence. Same text + same options =
//! same result on any machine, so recomputing on every keystroke is safe.
//! The crate never persists anything; settings are owned by the caller and
//! passed in by reference.
//!
//! ## Invariants worth knowing
//!
//! - `new_text_chars = max(0, total_chars - reused_chars)`, never negative
//! - Reused blocks are accounted by length, not matched against the text
//! - Counts are Unicode scalar values of the normalized string
//! - `price` is present iff a tariff was supplied
//!
//! ## Example
//!
//! ```rust
//! use sheetcount::{calculate, NormalizationOptions, Tariff};
//!
//! let options = NormalizationOptions::default();
//! let tariff = Tariff::new("standard", 1800, 12.0, 4.0).expect("valid tariff");
//!
//! let result = calculate(
//!     "The translated  text.",
//!     &["The original."],
//!     &options,
//!     true,
//!     Some(&tariff),
//! );
//!
//! assert_eq!(result.total_chars, 20);
//! assert_eq!(result.reused_chars, 13);
//! assert_eq!(result.new_text_chars, 7);
//! assert!(result.price.is_some());
//! ```

mod calculate;
mod normalize;
mod options;
mod settings;
mod tariff;

pub use crate::calculate::{calculate, CalculationResult, PriceBreakdown};
pub use crate::normalize::normalize;
pub use crate::options::NormalizationOptions;
pub use crate::settings::Settings;
pub use crate::tariff::{Tariff, TariffError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_spaces_scenario() {
        let options = NormalizationOptions {
            collapse_spaces: true,
            ..NormalizationOptions::disabled()
        };
        assert_eq!(normalize("a   b", &options, true), "a b");
    }

    #[test]
    fn trim_repeated_chars_scenario() {
        let options = NormalizationOptions {
            trim_repeated_chars: true,
            ..NormalizationOptions::disabled()
        };
        assert_eq!(normalize("----------", &options, true), "---");
    }

    #[test]
    fn trim_scenario() {
        let options = NormalizationOptions {
            trim: true,
            ..NormalizationOptions::disabled()
        };
        assert_eq!(normalize("  hi  ", &options, true), "hi");
    }

    #[test]
    fn strip_whitespace_scenario() {
        assert_eq!(
            normalize("a b c", &NormalizationOptions::disabled(), false),
            "abc"
        );
    }

    #[test]
    fn counts_and_pricing_scenario() {
        let options = NormalizationOptions::disabled();

        let counts = calculate("hello world", &["hello"], &options, true, None);
        assert_eq!(counts.total_chars, 11);
        assert_eq!(counts.reused_chars, 5);
        assert_eq!(counts.new_text_chars, 6);
        assert_eq!(counts.price, None);

        let tariff = Tariff::new("test", 10, 100.0, 50.0).expect("valid tariff");
        let priced = calculate("hello world", &["hello"], &options, true, Some(&tariff));
        let price = priced.price.expect("tariff supplied");
        assert!((price.new_text - 60.0).abs() < 1e-9);
        assert!((price.reused - 25.0).abs() < 1e-9);
        assert!((price.total - 85.0).abs() < 1e-9);
    }

    #[test]
    fn new_text_chars_never_negative() {
        let options = NormalizationOptions::default();
        let result = calculate("tiny", &["a much longer reused block"], &options, true, None);
        assert_eq!(result.new_text_chars, 0);
        assert!(result.reused_exceeds_total());
    }

    #[test]
    fn reused_counts_are_additive_per_block() {
        let options = NormalizationOptions::default();
        // Each block trims independently to 1 char. The concatenation
        // normalized as one string would keep an interior space and count 3.
        let result = calculate("irrelevant", &["a ", " b"], &options, true, None);
        assert_eq!(result.reused_chars, 2);
        assert_eq!(
            normalize("a  b", &options, true).chars().count(),
            3,
            "concatenation would have counted differently"
        );
    }
}
