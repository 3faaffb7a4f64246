// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value label text.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// How a value is turned into digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueFormat {
    /// Whole number, truncated toward zero (`12.9` reads `12`).
    #[default]
    Integer,
    /// Fixed number of decimals, rounded.
    Fixed {
        /// Digits after the decimal point.
        decimals: usize,
    },
}

/// Unit text attached to a formatted value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueUnit {
    /// No unit.
    #[default]
    None,
    /// Text placed before the number (e.g. `"$"`).
    Prefix(String),
    /// Text placed after the number (e.g. `"ºC"`).
    Suffix(String),
}

/// Truncates toward zero.
///
/// The trait call is spelled out so it does not depend on whether `core` has an inherent
/// `f64::trunc`.
#[cfg(not(feature = "std"))]
fn trunc(value: f64) -> f64 {
    FloatExt::trunc(value)
}

#[cfg(feature = "std")]
fn trunc(value: f64) -> f64 {
    value.trunc()
}

impl ValueFormat {
    /// Formats `value` without a unit.
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Integer => {
                let whole = trunc(value);
                // `-0.4` truncates to `-0.0`; print it as `0`.
                let whole = if whole == 0.0 { 0.0 } else { whole };
                format!("{whole:.0}")
            }
            Self::Fixed { decimals } => format!("{value:.decimals$}"),
        }
    }

    /// Formats `value` and attaches `unit`.
    pub fn format_with_unit(self, value: f64, unit: &ValueUnit) -> String {
        let digits = self.format(value);
        match unit {
            ValueUnit::None => digits,
            ValueUnit::Prefix(p) => format!("{p}{digits}"),
            ValueUnit::Suffix(s) => format!("{digits}{s}"),
        }
    }
}
