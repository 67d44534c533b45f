// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{BezPath, Rect};

use crate::Alignment;

/// The outline family a style variant draws its tabs with.
///
/// Every shape keeps the same contract: an open polyline tracing the three
/// sides of the tab away from the page, wound so that closing the figure
/// yields a consistently oriented border. Only the corner geometry differs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum BorderShape {
    /// Three straight sides with square corners.
    #[default]
    Square,
    /// Outer corners replaced by quadratic corner curves of the tab radius.
    Rounded,
    /// Sides slanted inward by the tab radius toward the outer edge.
    Angled,
}

/// Appends the tab outline to `path` as an open polyline.
///
/// The polyline traces the three sides of `rect` not adjacent to the page;
/// the caller closes the figure, which draws the page-adjacent side as a
/// straight closing segment. The starting corner depends on `alignment` so
/// the closed figure is always wound the same way:
///
/// - `Top` starts at the bottom-left corner and winds clockwise,
/// - `Bottom` starts at the top-right corner,
/// - `Left` starts at the bottom-right corner,
/// - `Right` starts at the top-left corner.
///
/// `radius` is ignored by [`BorderShape::Square`] and is clamped so corner
/// geometry never crosses the tab's midline.
pub fn add_tab_border(
    path: &mut BezPath,
    rect: Rect,
    alignment: Alignment,
    shape: BorderShape,
    radius: f64,
) {
    let r = clamp_radius(rect, alignment, radius);
    match shape {
        BorderShape::Square => add_square(path, rect, alignment),
        BorderShape::Rounded => add_rounded(path, rect, alignment, r),
        BorderShape::Angled => add_angled(path, rect, alignment, r),
    }
}

/// Builds the closed tab border for `rect`.
///
/// Convenience wrapper over [`add_tab_border`] that closes the figure,
/// producing the path used for background fills and interior tests.
#[must_use]
pub fn tab_border(rect: Rect, alignment: Alignment, shape: BorderShape, radius: f64) -> BezPath {
    let mut path = BezPath::new();
    add_tab_border(&mut path, rect, alignment, shape, radius);
    path.close_path();
    path
}

fn clamp_radius(rect: Rect, alignment: Alignment, radius: f64) -> f64 {
    let (along, away) = if alignment.is_horizontal() {
        (rect.width(), rect.height())
    } else {
        (rect.height(), rect.width())
    };
    radius.min(along / 2.0).min(away).max(0.0)
}

fn add_square(path: &mut BezPath, rect: Rect, alignment: Alignment) {
    let Rect { x0, y0, x1, y1 } = rect;
    match alignment {
        Alignment::Top => {
            path.move_to((x0, y1));
            path.line_to((x0, y0));
            path.line_to((x1, y0));
            path.line_to((x1, y1));
        }
        Alignment::Bottom => {
            path.move_to((x1, y0));
            path.line_to((x1, y1));
            path.line_to((x0, y1));
            path.line_to((x0, y0));
        }
        Alignment::Left => {
            path.move_to((x1, y1));
            path.line_to((x0, y1));
            path.line_to((x0, y0));
            path.line_to((x1, y0));
        }
        Alignment::Right => {
            path.move_to((x0, y0));
            path.line_to((x1, y0));
            path.line_to((x1, y1));
            path.line_to((x0, y1));
        }
    }
}

fn add_rounded(path: &mut BezPath, rect: Rect, alignment: Alignment, r: f64) {
    let Rect { x0, y0, x1, y1 } = rect;
    match alignment {
        Alignment::Top => {
            path.move_to((x0, y1));
            path.line_to((x0, y0 + r));
            path.quad_to((x0, y0), (x0 + r, y0));
            path.line_to((x1 - r, y0));
            path.quad_to((x1, y0), (x1, y0 + r));
            path.line_to((x1, y1));
        }
        Alignment::Bottom => {
            path.move_to((x1, y0));
            path.line_to((x1, y1 - r));
            path.quad_to((x1, y1), (x1 - r, y1));
            path.line_to((x0 + r, y1));
            path.quad_to((x0, y1), (x0, y1 - r));
            path.line_to((x0, y0));
        }
        Alignment::Left => {
            path.move_to((x1, y1));
            path.line_to((x0 + r, y1));
            path.quad_to((x0, y1), (x0, y1 - r));
            path.line_to((x0, y0 + r));
            path.quad_to((x0, y0), (x0 + r, y0));
            path.line_to((x1, y0));
        }
        Alignment::Right => {
            path.move_to((x0, y0));
            path.line_to((x1 - r, y0));
            path.quad_to((x1, y0), (x1, y0 + r));
            path.line_to((x1, y1 - r));
            path.quad_to((x1, y1), (x1 - r, y1));
            path.line_to((x0, y1));
        }
    }
}

fn add_angled(path: &mut BezPath, rect: Rect, alignment: Alignment, r: f64) {
    let Rect { x0, y0, x1, y1 } = rect;
    match alignment {
        Alignment::Top => {
            path.move_to((x0, y1));
            path.line_to((x0 + r, y0));
            path.line_to((x1 - r, y0));
            path.line_to((x1, y1));
        }
        Alignment::Bottom => {
            path.move_to((x1, y0));
            path.line_to((x1 - r, y1));
            path.line_to((x0 + r, y1));
            path.line_to((x0, y0));
        }
        Alignment::Left => {
            path.move_to((x1, y1));
            path.line_to((x0, y1 - r));
            path.line_to((x0, y0 + r));
            path.line_to((x1, y0));
        }
        Alignment::Right => {
            path.move_to((x0, y0));
            path.line_to((x1, y0 + r));
            path.line_to((x1, y1 - r));
            path.line_to((x0, y1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Point, Shape};

    const RECT: Rect = Rect::new(10.0, 20.0, 90.0, 40.0);

    fn first_point(path: &BezPath) -> Point {
        match path.elements()[0] {
            PathEl::MoveTo(p) => p,
            ref el => panic!("expected MoveTo, got {el:?}"),
        }
    }

    fn last_point(path: &BezPath) -> Point {
        match *path.elements().last().unwrap() {
            PathEl::LineTo(p) => p,
            PathEl::QuadTo(_, p) => p,
            ref el => panic!("expected a drawing segment, got {el:?}"),
        }
    }

    #[test]
    fn square_border_omits_page_side() {
        // Top alignment: the bottom side (y1) is left open; the polyline
        // starts and ends on it.
        let mut path = BezPath::new();
        add_tab_border(&mut path, RECT, Alignment::Top, BorderShape::Square, 0.0);
        assert_eq!(path.elements().len(), 4);
        assert_eq!(first_point(&path), Point::new(10.0, 40.0));
        assert_eq!(last_point(&path), Point::new(90.0, 40.0));
    }

    #[test]
    fn square_border_starting_corner_per_alignment() {
        let cases = [
            (Alignment::Top, Point::new(10.0, 40.0)),
            (Alignment::Bottom, Point::new(90.0, 20.0)),
            (Alignment::Left, Point::new(90.0, 40.0)),
            (Alignment::Right, Point::new(10.0, 20.0)),
        ];
        for (alignment, start) in cases {
            let mut path = BezPath::new();
            add_tab_border(&mut path, RECT, alignment, BorderShape::Square, 0.0);
            assert_eq!(first_point(&path), start, "{alignment:?}");
        }
    }

    #[test]
    fn closed_border_has_consistent_winding() {
        // A clockwise (in y-down coordinates) closed figure has negative
        // signed area under kurbo's convention; all four alignments must
        // agree on orientation.
        let reference = tab_border(RECT, Alignment::Top, BorderShape::Square, 0.0).area();
        assert!(reference != 0.0);
        for alignment in [Alignment::Bottom, Alignment::Left, Alignment::Right] {
            let area = tab_border(RECT, alignment, BorderShape::Square, 0.0).area();
            assert_eq!(
                area.signum(),
                reference.signum(),
                "{alignment:?} winding differs"
            );
        }
    }

    #[test]
    fn rounded_border_stays_open_polyline() {
        let mut path = BezPath::new();
        add_tab_border(&mut path, RECT, Alignment::Top, BorderShape::Rounded, 6.0);
        assert_eq!(first_point(&path), Point::new(10.0, 40.0));
        assert_eq!(last_point(&path), Point::new(90.0, 40.0));
        // Two corner curves.
        let quads = path
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::QuadTo(..)))
            .count();
        assert_eq!(quads, 2);
    }

    #[test]
    fn angled_border_is_three_segments() {
        let mut path = BezPath::new();
        add_tab_border(&mut path, RECT, Alignment::Top, BorderShape::Angled, 5.0);
        assert_eq!(path.elements().len(), 4);
        assert_eq!(first_point(&path), Point::new(10.0, 40.0));
        // Outer edge is inset by the radius on both sides.
        match path.elements()[1] {
            PathEl::LineTo(p) => assert_eq!(p, Point::new(15.0, 20.0)),
            ref el => panic!("expected LineTo, got {el:?}"),
        }
    }

    #[test]
    fn radius_is_clamped_to_rect() {
        // A radius wider than half the tab must not cross the midline.
        let mut path = BezPath::new();
        add_tab_border(&mut path, RECT, Alignment::Top, BorderShape::Angled, 100.0);
        match path.elements()[1] {
            PathEl::LineTo(p) => assert!(p.x <= 50.0),
            ref el => panic!("expected LineTo, got {el:?}"),
        }
    }

    #[test]
    fn closed_border_bounds_match_rect() {
        for shape in [BorderShape::Square, BorderShape::Rounded, BorderShape::Angled] {
            let path = tab_border(RECT, Alignment::Top, shape, 4.0);
            assert_eq!(path.bounding_box(), RECT, "{shape:?}");
        }
    }
}
