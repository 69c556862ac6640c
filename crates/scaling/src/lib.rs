//! Serving-size scaling for Cookbook recipes.
//!
//! This crate provides:
//! - Classification of free-text ingredient amounts
//! - Fraction reduction and cook-friendly formatting
//! - Scaling of single amounts and whole recipes
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use cookbook_scaling::{convert, IngredientAmount, Servings};
//!
//! let base = Servings::new(4).unwrap();
//! let people = Servings::new(6).unwrap();
//!
//! let scaled = convert(&IngredientAmount::from("500 g pasta"), base, people);
//! assert_eq!(scaled.to_string(), "750 g pasta");
//! ```

#![warn(missing_docs)]

mod amount;
mod convert;
mod error;
mod fraction;
pub mod glyph;
pub mod recipe;

#[cfg(feature = "wasm")]
mod wasm;

pub use amount::{classify, AmountShape, IngredientAmount, NumericSpan, SpanValue};
pub use convert::{convert, scale_ratio, DisplayValue};
pub use error::{Result, ScalingError, ScalingErrorCode};
pub use fraction::{format_decimal, format_frac, gcd, reduce, round2};
pub use recipe::{Recipe, ScaledRecipe};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// A number of people a recipe feeds. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Servings(NonZeroU32);

impl Servings {
    /// Creates a serving count.
    ///
    /// # Errors
    /// [`ScalingError::InvalidServings`] if `count` is zero.
    pub fn new(count: u32) -> Result<Self> {
        NonZeroU32::new(count)
            .map(Servings)
            .ok_or(ScalingError::InvalidServings(count))
    }

    /// The count as a plain integer.
    #[inline]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    #[inline]
    pub(crate) fn as_u64(self) -> u64 {
        u64::from(self.get())
    }
}

impl TryFrom<u32> for Servings {
    type Error = ScalingError;

    fn try_from(count: u32) -> Result<Self> {
        Servings::new(count)
    }
}

impl From<Servings> for u32 {
    fn from(servings: Servings) -> Self {
        servings.get()
    }
}

impl From<NonZeroU32> for Servings {
    fn from(count: NonZeroU32) -> Self {
        Servings(count)
    }
}

impl fmt::Display for Servings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
