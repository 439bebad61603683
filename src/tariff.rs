//! Tariff types: the pricing unit for converting character counts to money.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced by [`Tariff::new`] validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TariffError {
    #[error("chars_per_sheet must be at least 1")]
    ZeroSheetSize,
    #[error("{field} must be a non-negative finite number, got {value}")]
    InvalidRate { field: &'static str, value: f64 },
}

/// A pricing unit: how many characters make up one billable sheet, and the
/// per-sheet rate for each of the two text categories.
///
/// A tariff is optional at the calculation call site; supplying none means
/// "counts only, no price". Partial sheets are billed proportionally, so the
/// rates apply to fractional sheet counts.
///
/// The fields are public and [`calculate`](crate::calculate) does not
/// re-validate them: a directly constructed tariff with `chars_per_sheet: 0`
/// propagates as non-finite pricing. Use [`Tariff::new`] where the values
/// come from user input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tariff {
    /// Stable identifier, used by settings storage to select a tariff.
    pub id: String,
    /// Human-readable name chosen by the user (e.g. "EN→DE technical").
    pub label: String,
    /// Characters per billable sheet. Must be at least 1.
    pub chars_per_sheet: u32,
    /// Price of one sheet of newly produced text.
    pub new_text_price: f64,
    /// Price of one sheet of reused/original text.
    pub reused_text_price: f64,
}

impl Tariff {
    /// Build a tariff with a freshly generated id, rejecting values the
    /// pricing math cannot handle.
    ///
    /// # Errors
    ///
    /// [`TariffError::ZeroSheetSize`] when `chars_per_sheet` is 0;
    /// [`TariffError::InvalidRate`] when either rate is negative, NaN or
    /// infinite.
    pub fn new(
        label: impl Into<String>,
        chars_per_sheet: u32,
        new_text_price: f64,
        reused_text_price: f64,
    ) -> Result<Self, TariffError> {
        if chars_per_sheet == 0 {
            return Err(TariffError::ZeroSheetSize);
        }
        for (field, value) in [
            ("new_text_price", new_text_price),
            ("reused_text_price", reused_text_price),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TariffError::InvalidRate { field, value });
            }
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            label: label.into(),
            chars_per_sheet,
            new_text_price,
            reused_text_price,
        })
    }
}
