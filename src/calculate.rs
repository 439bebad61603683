//! The cost calculator: character accounting over normalized text, with an
//! optional conversion to money via a [`Tariff`].
//!
//! The model is an accounting approximation, not a diff: each reused block is
//! normalized independently and its length is subtracted from the total
//! count. Reused text that never literally appears in the main text is still
//! subtracted. The derived new-text count saturates at zero.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::normalize::normalize;
use crate::options::NormalizationOptions;
use crate::tariff::Tariff;

/// Monetary breakdown of a calculation, present only when a tariff was
/// supplied. Amounts are in whatever currency the tariff rates are in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceBreakdown {
    /// Cost of the newly produced characters.
    pub new_text: f64,
    /// Cost of the reused/original characters.
    pub reused: f64,
    /// Sum of the two.
    pub total: f64,
}

/// Character counts and optional price for one calculation.
///
/// Counts are Unicode scalar values of the normalized text, so a precomposed
/// `é` counts as one character regardless of its byte length.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationResult {
    /// Characters in the normalized main text.
    pub total_chars: usize,
    /// Characters across all reused blocks, each normalized independently.
    pub reused_chars: usize,
    /// `total_chars - reused_chars`, floored at zero.
    pub new_text_chars: usize,
    /// Price breakdown; `None` when no tariff was supplied.
    pub price: Option<PriceBreakdown>,
}

impl CalculationResult {
    /// True when the reused blocks contain more characters than the main
    /// text. The subtraction model cannot represent that; applications
    /// typically surface it as a warning to the user.
    pub fn reused_exceeds_total(&self) -> bool {
        self.reused_chars > self.total_chars
    }
}

/// Normalize the main text and every reused block, count characters, and
/// price the result against `tariff` when one is given.
///
/// Pure and total: no validation, no failure modes. Safe to re-run on every
/// keystroke; callers wanting to avoid redundant work should memoize on the
/// full input tuple themselves.
///
/// # Examples
///
/// ```rust
/// use sheetcount::{calculate, NormalizationOptions, Tariff};
///
/// let options = NormalizationOptions::disabled();
/// let result = calculate("hello world", &["hello"], &options, true, None);
/// assert_eq!(result.total_chars, 11);
/// assert_eq!(result.reused_chars, 5);
/// assert_eq!(result.new_text_chars, 6);
/// assert!(result.price.is_none());
/// ```
pub fn calculate(
    text: &str,
    reused_texts: &[impl AsRef<str>],
    options: &NormalizationOptions,
    count_spaces: bool,
    tariff: Option<&Tariff>,
) -> CalculationResult {
    let start = Instant::now();

    let total_chars = normalize(text, options, count_spaces).chars().count();
    let reused_chars: usize = reused_texts
        .iter()
        .map(|block| normalize(block.as_ref(), options, count_spaces).chars().count())
        .sum();
    let new_text_chars = total_chars.saturating_sub(reused_chars);

    let price = tariff.map(|tariff| {
        let per_sheet = f64::from(tariff.chars_per_sheet);
        let new_text = new_text_chars as f64 / per_sheet * tariff.new_text_price;
        let reused = reused_chars as f64 / per_sheet * tariff.reused_text_price;
        PriceBreakdown {
            new_text,
            reused,
            total: new_text + reused,
        }
    });

    let elapsed_micros = start.elapsed().as_micros() as u64;
    trace!(
        total_chars,
        reused_chars,
        new_text_chars,
        priced = price.is_some(),
        elapsed_micros,
        "calculate"
    );

    CalculationResult {
        total_chars,
        reused_chars,
        new_text_chars,
        price,
    }
}
