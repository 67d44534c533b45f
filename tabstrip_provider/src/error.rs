// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned by a validated configuration setter.
///
/// A rejected value leaves the prior configuration unchanged; the error is
/// fatal to that single call, not to the provider.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The corner radius must be at least 1.
    RadiusTooSmall(f64),
    /// Tabs cannot overlap by a negative amount.
    NegativeOverlap(f64),
    /// Opacity must lie in `[0, 1]`.
    OpacityOutOfRange(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RadiusTooSmall(value) => {
                write!(f, "the radius cannot be less than 1 (got {value})")
            }
            Self::NegativeOverlap(value) => {
                write!(f, "the tabs cannot have a negative overlap (got {value})")
            }
            Self::OpacityOutOfRange(value) => {
                write!(f, "the opacity must be between 0 and 1 (got {value})")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
