// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The gradient easing profile used for tab backgrounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum BlendStyle {
    /// A smooth three-stop ease.
    #[default]
    Normal,
    /// A hard break at the midpoint, producing a glossy two-band look.
    Glass,
}

impl BlendStyle {
    /// Returns the blend profile for this style.
    #[must_use]
    pub const fn curve(self) -> BlendCurve {
        match self {
            Self::Normal => BlendCurve {
                positions: &[0.0, 0.6, 1.0],
                factors: &[0.0, 0.7, 1.0],
            },
            Self::Glass => BlendCurve {
                positions: &[0.0, 0.5, 0.51, 1.0],
                factors: &[0.0, 0.5, 1.0, 1.0],
            },
        }
    }
}

/// Control points of a two-color gradient's easing profile.
///
/// `positions` are offsets along the gradient axis in `[0, 1]`; `factors`
/// give the interpolation amount between the two edge colors at each
/// position. The arrays always have equal length, positions are
/// non-decreasing (strictly ascending except the deliberate near-duplicate
/// in the Glass profile), and factors stay in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlendCurve {
    /// Offsets along the gradient axis.
    pub positions: &'static [f32],
    /// Interpolation factors between the two edge colors.
    pub factors: &'static [f32],
}

impl BlendCurve {
    /// Number of control points.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the curve has no control points.
    ///
    /// Never true for the built-in profiles; present for API completeness.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
