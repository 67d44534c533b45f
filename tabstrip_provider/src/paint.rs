// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::{Brush, Color, ColorStop, Extend, Gradient, GradientKind, LinearGradientPosition};

use tabstrip_geometry::Alignment;
use tabstrip_theme::{ColorSlot, TabState};

use crate::host::TabHost;
use crate::provider::TabStyleProvider;

/// Thickness of the focus strip, in units.
const FOCUS_STRIP_THICKNESS: f64 = 4.0;

/// Inset of the closer cross inside its button rectangle, in units.
const CLOSER_CROSS_INSET: f64 = 4.0;

/// Draw instructions for the closer button of one tab.
///
/// The host paints the pieces in order: button fill, button outline, then
/// the cross strokes. A fully transparent color means "skip that step",
/// matching the unset defaults of the closer slots.
#[derive(Clone, Debug, PartialEq)]
pub struct CloserGlyph {
    /// The "×", two diagonal strokes as separate subpaths.
    pub cross: BezPath,
    /// The closed button outline.
    pub button: BezPath,
    /// Stroke color of the cross.
    pub cross_color: Color,
    /// Fill color of the button face.
    pub fill_color: Color,
    /// Stroke color of the button outline.
    pub outline_color: Color,
}

/// Draw instructions for the focus strip of the focused tab.
///
/// The host fills `band` with `brush`, clipped to the intersection with
/// `clip` (the tab's own border) so the strip never bleeds past rounded or
/// angled corners.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusIndicator {
    /// The thin band along the tab's outer edge.
    pub band: Rect,
    /// Two-stop gradient across the band.
    pub brush: Brush,
    /// The tab border to clip the band against.
    pub clip: BezPath,
}

fn lerp(from: Color, to: Color, t: f32) -> Color {
    let a = from.components;
    let b = to.components;
    Color::new([
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ])
}

fn linear(start: impl Into<Point>, end: impl Into<Point>, stops: &[ColorStop]) -> Brush {
    Brush::Gradient(Gradient {
        kind: GradientKind::Linear(LinearGradientPosition::new(start, end)),
        extend: Extend::Pad,
        stops: stops.into(),
        ..Gradient::default()
    })
}

impl<H: TabHost> TabStyleProvider<H> {
    /// Builds the background fill for a tab.
    ///
    /// The gradient runs along the away-from-page axis of the border's
    /// bounds, endpoints swapped for `Bottom`/`Right` so the lighter stop
    /// always faces the open edge, with the configured blend profile as its
    /// easing and the provider opacity scaled into every stop. For `Top`
    /// alignment the gradient box is extended one unit toward the page so
    /// the last stop lands just past the closing border segment.
    #[must_use]
    pub fn tab_background_brush(&self, state: TabState, border: &BezPath) -> Brush {
        let (slot1, slot2) = ColorSlot::tab_gradient(state);
        let color1 = self.color(slot1);
        let color2 = self.color(slot2);

        let mut bounds = border.bounding_box();
        let alignment = self.current_alignment();
        if alignment == Alignment::Top {
            bounds.y1 += 1.0;
        }
        // The "2" stop sits on the outer edge; for Top/Left that is the
        // gradient start.
        let (start, end, outer, inner) = match alignment {
            Alignment::Top | Alignment::Bottom => {
                let start = (bounds.x0, bounds.y0);
                let end = (bounds.x0, bounds.y1);
                match alignment {
                    Alignment::Top => (start, end, color2, color1),
                    _ => (start, end, color1, color2),
                }
            }
            Alignment::Left | Alignment::Right => {
                let start = (bounds.x0, bounds.y0);
                let end = (bounds.x1, bounds.y0);
                match alignment {
                    Alignment::Left => (start, end, color2, color1),
                    _ => (start, end, color1, color2),
                }
            }
        };

        let curve = self.blend_style.curve();
        let stops: Vec<ColorStop> = curve
            .positions
            .iter()
            .zip(curve.factors)
            .map(|(&position, &factor)| {
                let color = lerp(outer, inner, factor).multiply_alpha(self.opacity);
                ColorStop::from((position, color))
            })
            .collect();
        linear(start, end, &stops)
    }

    /// Builds the solid fill behind the active page for a state.
    #[must_use]
    pub fn page_background_brush(&self, state: TabState) -> Brush {
        Brush::Solid(self.color(ColorSlot::page_background(state)))
    }

    /// Builds the closer-button draw instructions for a tab.
    ///
    /// Returns `None` while the closer is hidden. The hovered ("active")
    /// color set is used when `pointer` falls inside the button rectangle;
    /// disabled and unselected tabs ignore hover.
    #[must_use]
    pub fn closer_glyph(
        &self,
        closer_rect: Rect,
        state: TabState,
        pointer: Point,
    ) -> Option<CloserGlyph> {
        if !self.show_tab_closer {
            return None;
        }
        let button = closer_button_path(closer_rect);
        let active = button.bounding_box().contains(pointer);
        let slots = ColorSlot::closer(state, active);
        Some(CloserGlyph {
            cross: closer_cross_path(closer_rect),
            button,
            cross_color: self.color(slots.glyph),
            fill_color: self.color(slots.fill),
            outline_color: self.color(slots.outline),
        })
    }

    /// Builds the focus-strip draw instructions for a tab.
    ///
    /// Returns `None` unless focus tracking is enabled and the tab is in
    /// [`TabState::Focused`]. The band hugs the outer edge of the border's
    /// bounds; the gradient runs from the focus color at the outer edge to
    /// the window color (`Top`) or light chrome color (other alignments).
    #[must_use]
    pub fn focus_indicator(&self, border: &BezPath, state: TabState) -> Option<FocusIndicator> {
        if !self.focus_track() || state != TabState::Focused {
            return None;
        }
        let bounds = border.bounding_box();
        let focus = self.color(ColorSlot::Focus);
        let window = self.palette().window;
        let light = self.palette().control_light;

        let (band, from, to) = match self.current_alignment() {
            Alignment::Top => (
                Rect::new(bounds.x0, bounds.y0, bounds.x1, bounds.y0 + FOCUS_STRIP_THICKNESS),
                focus,
                window,
            ),
            Alignment::Bottom => (
                Rect::new(bounds.x0, bounds.y1 - FOCUS_STRIP_THICKNESS, bounds.x1, bounds.y1),
                light,
                focus,
            ),
            Alignment::Left => (
                Rect::new(bounds.x0, bounds.y0, bounds.x0 + FOCUS_STRIP_THICKNESS, bounds.y1),
                focus,
                light,
            ),
            Alignment::Right => (
                Rect::new(bounds.x1 - FOCUS_STRIP_THICKNESS, bounds.y0, bounds.x1, bounds.y1),
                light,
                focus,
            ),
        };
        let stops = [ColorStop::from((0.0, from)), ColorStop::from((1.0, to))];
        let brush = if self.current_alignment().is_horizontal() {
            linear((band.x0, band.y0), (band.x0, band.y1), &stops)
        } else {
            linear((band.x0, band.y0), (band.x1, band.y0), &stops)
        };
        Some(FocusIndicator {
            band,
            brush,
            clip: border.clone(),
        })
    }
}

fn closer_button_path(rect: Rect) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((rect.x0, rect.y0));
    path.line_to((rect.x1, rect.y0));
    path.line_to((rect.x1, rect.y1));
    path.line_to((rect.x0, rect.y1));
    path.close_path();
    path
}

fn closer_cross_path(rect: Rect) -> BezPath {
    let inset = CLOSER_CROSS_INSET;
    let mut path = BezPath::new();
    path.move_to((rect.x0 + inset, rect.y0 + inset));
    path.line_to((rect.x1 - inset, rect.y1 - inset));
    path.move_to((rect.x1 - inset, rect.y0 + inset));
    path.line_to((rect.x0 + inset, rect.y1 - inset));
    path
}
