// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

use crate::Alignment;

/// Snap tolerance for the in-view clamp: a tab whose near edge lies within
/// this many units of the page's near edge is snapped exactly onto it.
pub const IN_VIEW_SNAP: f64 = 4.0;

/// Alignment-aware tab rectangle transforms.
///
/// `TabLayout` turns a tab's nominal rectangle (as produced by the host's
/// item layout) into the rectangle actually drawn on screen. The transform
/// is applied in a fixed order:
///
/// 1. [meet the page](Self::meet_page) — extend the tab's far edge to touch
///    the page bounds,
/// 2. [enlarge](Self::enlarge) — grow a selected tab and shrink unselected
///    ones by one unit (only when `selected_is_larger` is set),
/// 3. [overlap](Self::apply_overlap) — pull the along-strip origin back so
///    neighbors share a border,
/// 4. [clamp to view](Self::clamp_to_view) — snap and clip visible tabs into
///    the page band, leaving scrolled-out tabs untouched.
///
/// Every method is a pure function of its inputs; the struct only carries
/// the three layout parameters.
///
/// # Example
///
/// ```rust
/// use kurbo::Rect;
/// use tabstrip_geometry::{Alignment, TabLayout};
///
/// let layout = TabLayout::new(Alignment::Top);
/// let tab = Rect::new(0.0, 20.0, 80.0, 40.0);
/// let page = Rect::new(0.0, 40.0, 400.0, 240.0);
/// let placed = layout.tab_rect(tab, page, false, true);
/// assert_eq!(placed, Rect::new(0.0, 20.0, 80.0, 40.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TabLayout {
    /// Which container edge the strip is attached to.
    pub alignment: Alignment,
    /// How far adjacent tabs overlap along the strip, in units. Must be ≥ 0.
    pub overlap: f64,
    /// Whether the selected tab is drawn one unit larger than its neighbors.
    pub selected_is_larger: bool,
}

impl TabLayout {
    /// Creates a layout for the given alignment with no overlap and no
    /// selected-tab enlargement.
    #[must_use]
    pub const fn new(alignment: Alignment) -> Self {
        Self {
            alignment,
            overlap: 0.0,
            selected_is_larger: false,
        }
    }

    /// Computes the final on-screen rectangle for a tab.
    ///
    /// `visible` is the host's verdict on whether the tab is currently
    /// scrolled into view; tabs out of view skip the clamp step so the
    /// host's scroll bookkeeping is not disturbed.
    #[must_use]
    pub fn tab_rect(&self, base: Rect, page: Rect, selected: bool, visible: bool) -> Rect {
        let mut rect = self.meet_page(base, page);
        if self.selected_is_larger {
            rect = self.enlarge(rect, selected);
        }
        rect = self.apply_overlap(rect);
        self.clamp_to_view(rect, page, visible)
    }

    /// Extends the tab's far edge to touch the page's near edge along the
    /// axis perpendicular to the alignment.
    ///
    /// A tab already flush with the page is returned unchanged.
    #[must_use]
    pub fn meet_page(&self, rect: Rect, page: Rect) -> Rect {
        match self.alignment {
            Alignment::Top => Rect::new(rect.x0, rect.y0, rect.x1, page.y0),
            Alignment::Bottom => Rect::new(rect.x0, page.y1, rect.x1, rect.y1),
            Alignment::Left => Rect::new(rect.x0, rect.y0, page.x0, rect.y1),
            Alignment::Right => Rect::new(page.x1, rect.y0, rect.x1, rect.y1),
        }
    }

    /// Grows a selected tab by one unit on the away-from-page axis and one
    /// unit on each along-strip side; shrinks an unselected tab by one unit
    /// on the away axis only.
    ///
    /// The shrink keeps a consistent seam between neighboring tabs of
    /// different state. The adjusted away edge is always the outer edge for
    /// the current alignment, so the tab stays flush with the page.
    #[must_use]
    pub fn enlarge(&self, rect: Rect, selected: bool) -> Rect {
        let along = if selected { 1.0 } else { 0.0 };
        let away = if selected { 1.0 } else { -1.0 };
        match self.alignment {
            Alignment::Top => Rect::new(rect.x0 - along, rect.y0 - away, rect.x1 + along, rect.y1),
            Alignment::Bottom => {
                Rect::new(rect.x0 - along, rect.y0, rect.x1 + along, rect.y1 + away)
            }
            Alignment::Left => Rect::new(rect.x0 - away, rect.y0 - along, rect.x1, rect.y1 + along),
            Alignment::Right => {
                Rect::new(rect.x0, rect.y0 - along, rect.x1 + away, rect.y1 + along)
            }
        }
    }

    /// Pulls the along-strip origin back by the configured overlap and
    /// widens the tab by the same amount, so adjacent tabs share a border
    /// instead of drawing a double seam.
    #[must_use]
    pub fn apply_overlap(&self, rect: Rect) -> Rect {
        if self.alignment.is_horizontal() {
            Rect::new(rect.x0 - self.overlap, rect.y0, rect.x1, rect.y1)
        } else {
            Rect::new(rect.x0, rect.y0 - self.overlap, rect.x1, rect.y1)
        }
    }

    /// Snaps and clips a visible tab into the page band.
    ///
    /// When `visible` is `false` the rectangle is returned untouched. A tab
    /// whose near along-strip edge lies within [`IN_VIEW_SNAP`] units of the
    /// page's near edge is first snapped exactly onto it (preserving its
    /// extent), then the rectangle is intersected with the band spanning the
    /// full page extent along the strip and the tab's own extent on the away
    /// axis.
    #[must_use]
    pub fn clamp_to_view(&self, rect: Rect, page: Rect, visible: bool) -> Rect {
        if !visible {
            return rect;
        }
        let mut rect = rect;
        if self.alignment.is_horizontal() {
            if rect.x0 <= page.x0 + IN_VIEW_SNAP {
                rect = Rect::new(page.x0, rect.y0, page.x0 + rect.width(), rect.y1);
            }
            rect.intersect(Rect::new(page.x0, rect.y0, page.x1, rect.y1))
        } else {
            if rect.y0 <= page.y0 + IN_VIEW_SNAP {
                rect = Rect::new(rect.x0, page.y0, rect.x1, page.y0 + rect.height());
            }
            rect.intersect(Rect::new(rect.x0, page.y0, rect.x1, page.y1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: Rect = Rect::new(0.0, 40.0, 400.0, 240.0);

    fn flush_tab(alignment: Alignment, page: Rect) -> Rect {
        match alignment {
            Alignment::Top => Rect::new(0.0, page.y0 - 20.0, 80.0, page.y0),
            Alignment::Bottom => Rect::new(0.0, page.y1, 80.0, page.y1 + 20.0),
            Alignment::Left => Rect::new(page.x0 - 20.0, 0.0, page.x0, 80.0),
            Alignment::Right => Rect::new(page.x1, 0.0, page.x1 + 20.0, 80.0),
        }
    }

    #[test]
    fn meet_page_is_idempotent_for_flush_tabs() {
        let page = Rect::new(50.0, 50.0, 350.0, 250.0);
        for alignment in [
            Alignment::Top,
            Alignment::Bottom,
            Alignment::Left,
            Alignment::Right,
        ] {
            let layout = TabLayout::new(alignment);
            let tab = flush_tab(alignment, page);
            assert_eq!(layout.meet_page(tab, page), tab, "{alignment:?}");
            assert_eq!(
                layout.meet_page(layout.meet_page(tab, page), page),
                tab,
                "{alignment:?}"
            );
        }
    }

    #[test]
    fn meet_page_extends_to_page_edge() {
        let layout = TabLayout::new(Alignment::Top);
        let tab = Rect::new(0.0, 20.0, 80.0, 35.0);
        let met = layout.meet_page(tab, PAGE);
        assert_eq!(met, Rect::new(0.0, 20.0, 80.0, 40.0));
    }

    #[test]
    fn enlarge_grows_selected_by_one_on_away_axis() {
        let layout = TabLayout {
            alignment: Alignment::Top,
            overlap: 0.0,
            selected_is_larger: true,
        };
        let base = Rect::new(0.0, 20.0, 80.0, 40.0);
        let selected = layout.enlarge(base, true);
        let unselected = layout.enlarge(base, false);
        assert_eq!(selected.height() - base.height(), 1.0);
        assert_eq!(unselected.height() - base.height(), -1.0);
        // The along-strip growth is symmetric.
        assert_eq!(selected.x0, base.x0 - 1.0);
        assert_eq!(selected.x1, base.x1 + 1.0);
        // Unselected tabs keep their along-strip extent.
        assert_eq!(unselected.x0, base.x0);
        assert_eq!(unselected.x1, base.x1);
    }

    #[test]
    fn enlarge_keeps_page_edge_flush() {
        let base = Rect::new(0.0, 20.0, 80.0, 40.0);
        let top = TabLayout {
            alignment: Alignment::Top,
            overlap: 0.0,
            selected_is_larger: true,
        };
        // Page side (y1) untouched; only the outer edge moves.
        assert_eq!(top.enlarge(base, true).y1, base.y1);
        assert_eq!(top.enlarge(base, false).y1, base.y1);

        let bottom = TabLayout {
            alignment: Alignment::Bottom,
            overlap: 0.0,
            selected_is_larger: true,
        };
        assert_eq!(bottom.enlarge(base, true).y0, base.y0);
        assert_eq!(bottom.enlarge(base, false).y0, base.y0);
    }

    #[test]
    fn overlap_widens_and_shifts_back() {
        let layout = TabLayout {
            alignment: Alignment::Top,
            overlap: 3.0,
            selected_is_larger: false,
        };
        let base = Rect::new(10.0, 20.0, 90.0, 40.0);
        let shifted = layout.apply_overlap(base);
        assert_eq!(shifted.x0, 7.0);
        assert_eq!(shifted.width() - base.width(), 3.0);

        let vertical = TabLayout {
            alignment: Alignment::Left,
            overlap: 3.0,
            selected_is_larger: false,
        };
        let shifted = vertical.apply_overlap(base);
        assert_eq!(shifted.y0, 17.0);
        assert_eq!(shifted.height() - base.height(), 3.0);
    }

    #[test]
    fn clamp_is_noop_when_not_visible() {
        for alignment in [
            Alignment::Top,
            Alignment::Bottom,
            Alignment::Left,
            Alignment::Right,
        ] {
            let layout = TabLayout::new(alignment);
            let wild = Rect::new(-500.0, -500.0, 1000.0, 1000.0);
            assert_eq!(layout.clamp_to_view(wild, PAGE, false), wild, "{alignment:?}");
        }
    }

    #[test]
    fn clamp_snaps_near_edge_onto_page() {
        let layout = TabLayout::new(Alignment::Top);
        let tab = Rect::new(3.0, 20.0, 83.0, 40.0);
        let clamped = layout.clamp_to_view(tab, PAGE, true);
        assert_eq!(clamped.x0, 0.0);
        assert_eq!(clamped.width(), 80.0);
    }

    #[test]
    fn clamp_clips_to_page_band() {
        let layout = TabLayout::new(Alignment::Top);
        let tab = Rect::new(360.0, 20.0, 440.0, 40.0);
        let clamped = layout.clamp_to_view(tab, PAGE, true);
        assert_eq!(clamped, Rect::new(360.0, 20.0, 400.0, 40.0));
    }

    #[test]
    fn end_to_end_top_unselected() {
        let layout = TabLayout::new(Alignment::Top);
        let base = Rect::new(0.0, 20.0, 80.0, 40.0);
        let rect = layout.tab_rect(base, PAGE, false, true);
        assert_eq!(rect, Rect::new(0.0, 20.0, 80.0, 40.0));
        assert_eq!(rect.height(), 20.0);
    }

    #[test]
    fn end_to_end_top_selected_larger() {
        let layout = TabLayout {
            alignment: Alignment::Top,
            overlap: 0.0,
            selected_is_larger: true,
        };
        let base = Rect::new(0.0, 20.0, 80.0, 40.0);
        let rect = layout.tab_rect(base, PAGE, true, false);
        assert_eq!(rect, Rect::new(-1.0, 19.0, 81.0, 40.0));
        assert_eq!(rect.width(), 82.0);
        assert_eq!(rect.height(), 21.0);
    }
}
