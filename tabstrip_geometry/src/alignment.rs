// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The container edge a tab strip is attached to.
///
/// The alignment determines which axis runs *along* the strip (X for
/// `Top`/`Bottom`, Y for `Left`/`Right`) and which edge of a tab faces
/// *away from* the page. `Top`/`Bottom` share one code path through the
/// layout and paint transforms and `Left`/`Right` share the transposed one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// Tabs above the page; the strip runs along the X axis.
    #[default]
    Top,
    /// Tabs below the page; the strip runs along the X axis.
    Bottom,
    /// Tabs to the left of the page; the strip runs along the Y axis.
    Left,
    /// Tabs to the right of the page; the strip runs along the Y axis.
    Right,
}

impl Alignment {
    /// Returns `true` for `Top`/`Bottom`, where the strip runs horizontally.
    #[must_use]
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Returns `true` when the page lies on the *max* side of the away axis
    /// (`Top` and `Left`): the tab's outer edge is then its min coordinate.
    #[must_use]
    #[inline]
    pub const fn page_on_max_side(self) -> bool {
        matches!(self, Self::Top | Self::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_alignments() {
        assert!(Alignment::Top.is_horizontal());
        assert!(Alignment::Bottom.is_horizontal());
        assert!(!Alignment::Left.is_horizontal());
        assert!(!Alignment::Right.is_horizontal());
    }

    #[test]
    fn page_side() {
        assert!(Alignment::Top.page_on_max_side());
        assert!(Alignment::Left.page_on_max_side());
        assert!(!Alignment::Bottom.page_on_max_side());
        assert!(!Alignment::Right.page_on_max_side());
    }
}
