// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{BezPath, Point, Rect};
use peniko::Color;

use tabstrip_geometry::{Alignment, BorderShape, TabLayout, add_tab_border};
use tabstrip_theme::{
    BlendStyle, ColorSlot, ColorTable, Fallback, FallbackCycleError, SystemPalette,
};

use crate::error::ConfigError;
use crate::host::{CLOSER_BUTTON_SIZE, TabHost};
use crate::registry::StyleVariant;

/// Horizontal placement of a tab's image relative to its caption.
///
/// The initial value follows the host's right-to-left flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImageAlign {
    /// Image on the left of the caption.
    Left,
    /// Image on the right of the caption.
    Right,
}

/// Margin between the tab page and its content, clamped per side to `[0, 4]`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct PageMargin {
    /// Left margin.
    pub left: f64,
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
}

impl PageMargin {
    /// Creates a margin with the same value on every side.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    fn clamped(self) -> Self {
        Self {
            left: self.left.clamp(0.0, 4.0),
            top: self.top.clamp(0.0, 4.0),
            right: self.right.clamp(0.0, 4.0),
            bottom: self.bottom.clamp(0.0, 4.0),
        }
    }
}

/// A configured tab style provider, bound 1:1 to its host.
///
/// The provider owns every visual tunable of the strip and exposes the
/// layout, border, and paint operations built on them. Create one through
/// [`create_provider`](crate::create_provider), which layers a
/// [`StyleVariant`] preset over the base configuration.
///
/// Layout and paint calls are pure functions of the current configuration
/// plus their inputs; the provider caches nothing. Setters validate their
/// argument, and those that change visual output synchronously call
/// [`TabHost::request_repaint`]. The host is expected to serialize all
/// calls to one provider, as a single-threaded UI event loop does.
#[derive(Debug)]
pub struct TabStyleProvider<H: TabHost> {
    host: H,
    variant: StyleVariant,
    pub(crate) shape: BorderShape,

    padding: Point,
    hot_track: bool,
    image_align: ImageAlign,
    pub(crate) radius: f64,
    pub(crate) overlap: f64,
    focus_track: bool,
    pub(crate) opacity: f32,
    pub(crate) show_tab_closer: bool,
    pub(crate) selected_tab_is_larger: bool,
    pub(crate) blend_style: BlendStyle,
    page_margin: PageMargin,
    pub(crate) page_radius: f64,

    pub(crate) colors: ColorTable,
    pub(crate) palette: SystemPalette,
}

impl<H: TabHost> TabStyleProvider<H> {
    /// Orange, the stock focus-strip color.
    const FOCUS_DEFAULT: Color = Color::from_rgb8(255, 165, 0);

    pub(crate) fn new(host: H, variant: StyleVariant) -> Self {
        let image_align = if host.right_to_left() {
            ImageAlign::Right
        } else {
            ImageAlign::Left
        };
        let mut provider = Self {
            host,
            variant,
            shape: BorderShape::Square,
            padding: Point::new(6.0, 3.0),
            hot_track: true,
            image_align,
            radius: 1.0,
            overlap: 0.0,
            focus_track: false,
            opacity: 1.0,
            show_tab_closer: false,
            selected_tab_is_larger: false,
            blend_style: BlendStyle::Normal,
            page_margin: PageMargin::uniform(1.0),
            page_radius: 0.0,
            colors: ColorTable::new(),
            palette: SystemPalette::default(),
        };
        provider.colors.set(ColorSlot::Focus, Self::FOCUS_DEFAULT);
        provider.host.set_hot_track(true);
        provider.push_padding();
        provider
    }

    /// The variant this provider was created for.
    #[must_use]
    #[inline]
    pub fn variant(&self) -> StyleVariant {
        self.variant
    }

    /// Borrows the host.
    #[must_use]
    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutably borrows the host.
    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // Layout and border -----------------------------------------------------

    pub(crate) fn layout(&self) -> TabLayout {
        TabLayout {
            alignment: self.host.alignment(),
            overlap: self.overlap,
            selected_is_larger: self.selected_tab_is_larger,
        }
    }

    /// Computes the on-screen rectangle for a tab.
    ///
    /// Applies the meet-the-page, enlargement, and overlap transforms, then
    /// asks the host whether the transformed tab is in view before clamping
    /// it into the page band.
    #[must_use]
    pub fn tab_rect(&self, base: Rect, page: Rect, selected: bool) -> Rect {
        let layout = self.layout();
        let mut rect = layout.meet_page(base, page);
        if self.selected_tab_is_larger {
            rect = layout.enlarge(rect, selected);
        }
        rect = layout.apply_overlap(rect);
        let visible = self.host.is_tab_visible(rect, page);
        layout.clamp_to_view(rect, page, visible)
    }

    /// Appends the tab outline to `path` as an open three-side polyline.
    ///
    /// The page-adjacent side is omitted; closing the figure draws it as a
    /// straight segment. See [`tabstrip_geometry::add_tab_border`].
    pub fn add_tab_border(&self, path: &mut BezPath, rect: Rect) {
        add_tab_border(path, rect, self.host.alignment(), self.shape, self.radius);
    }

    /// Builds the closed tab border used for fills and interior tests.
    #[must_use]
    pub fn tab_border(&self, rect: Rect) -> BezPath {
        let mut path = BezPath::new();
        self.add_tab_border(&mut path, rect);
        path.close_path();
        path
    }

    /// The border outline family in use.
    #[must_use]
    #[inline]
    pub fn border_shape(&self) -> BorderShape {
        self.shape
    }

    // Validated setters -----------------------------------------------------

    /// Caption padding around the tab text.
    #[must_use]
    #[inline]
    pub fn padding(&self) -> Point {
        self.padding
    }

    /// Sets the caption padding and pushes the derived value to the host.
    pub fn set_padding(&mut self, padding: Point) {
        self.padding = padding;
        self.push_padding();
    }

    /// Corner radius, always at least 1.
    #[must_use]
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Sets the corner radius.
    ///
    /// Values below 1 are rejected and leave the prior radius in place. A
    /// radius change alters the room the caption needs, so the derived
    /// padding is pushed to the host.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ConfigError> {
        if radius < 1.0 {
            return Err(ConfigError::RadiusTooSmall(radius));
        }
        self.radius = radius;
        self.push_padding();
        self.host.request_repaint();
        Ok(())
    }

    /// How far adjacent tabs overlap along the strip.
    #[must_use]
    #[inline]
    pub fn overlap(&self) -> f64 {
        self.overlap
    }

    /// Sets the overlap. Negative values are rejected.
    pub fn set_overlap(&mut self, overlap: f64) -> Result<(), ConfigError> {
        if overlap < 0.0 {
            return Err(ConfigError::NegativeOverlap(overlap));
        }
        self.overlap = overlap;
        self.host.request_repaint();
        Ok(())
    }

    /// Opacity applied to tab background fills, in `[0, 1]`.
    #[must_use]
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Sets the opacity. Values outside `[0, 1]` are rejected.
    pub fn set_opacity(&mut self, opacity: f32) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(ConfigError::OpacityOutOfRange(opacity));
        }
        self.opacity = opacity;
        self.host.request_repaint();
        Ok(())
    }

    /// Whether hovering highlights a tab.
    #[must_use]
    #[inline]
    pub fn hot_track(&self) -> bool {
        self.hot_track
    }

    /// Sets hot tracking, mirroring the flag onto the host.
    pub fn set_hot_track(&mut self, enabled: bool) {
        self.hot_track = enabled;
        self.host.set_hot_track(enabled);
    }

    /// Whether the focused tab shows the focus strip.
    #[must_use]
    #[inline]
    pub fn focus_track(&self) -> bool {
        self.focus_track
    }

    /// Sets focus tracking.
    pub fn set_focus_track(&mut self, enabled: bool) {
        self.focus_track = enabled;
        self.host.request_repaint();
    }

    /// Whether tabs show a closer button.
    #[must_use]
    #[inline]
    pub fn show_tab_closer(&self) -> bool {
        self.show_tab_closer
    }

    /// Shows or hides the closer button, re-deriving the caption padding.
    pub fn set_show_tab_closer(&mut self, show: bool) {
        self.show_tab_closer = show;
        self.push_padding();
        self.host.request_repaint();
    }

    /// Whether the selected tab is drawn one unit larger.
    #[must_use]
    #[inline]
    pub fn selected_tab_is_larger(&self) -> bool {
        self.selected_tab_is_larger
    }

    /// Sets selected-tab enlargement.
    pub fn set_selected_tab_is_larger(&mut self, larger: bool) {
        self.selected_tab_is_larger = larger;
        self.host.request_repaint();
    }

    /// The gradient easing profile for tab backgrounds.
    #[must_use]
    #[inline]
    pub fn blend_style(&self) -> BlendStyle {
        self.blend_style
    }

    /// Sets the gradient easing profile.
    pub fn set_blend_style(&mut self, style: BlendStyle) {
        self.blend_style = style;
        self.host.request_repaint();
    }

    /// Image placement relative to the caption.
    #[must_use]
    #[inline]
    pub fn image_align(&self) -> ImageAlign {
        self.image_align
    }

    /// Sets the image placement.
    pub fn set_image_align(&mut self, align: ImageAlign) {
        self.image_align = align;
    }

    /// Margin between page and content, each side in `[0, 4]`.
    #[must_use]
    #[inline]
    pub fn page_margin(&self) -> PageMargin {
        self.page_margin
    }

    /// Sets the page margin, silently clamping each side into `[0, 4]`.
    pub fn set_page_margin(&mut self, margin: PageMargin) {
        self.page_margin = margin.clamped();
    }

    /// Corner radius of the page, in `[0, 4]`.
    #[must_use]
    #[inline]
    pub fn page_radius(&self) -> f64 {
        self.page_radius
    }

    /// Sets the page corner radius, silently clamping into `[0, 4]`.
    pub fn set_page_radius(&mut self, radius: f64) {
        self.page_radius = radius.clamp(0.0, 4.0);
    }

    // Colors ----------------------------------------------------------------

    /// Resolves a color slot through its fallback chain.
    #[must_use]
    pub fn color(&self, slot: ColorSlot) -> Color {
        self.colors.resolve(slot, &self.palette)
    }

    /// Returns a slot's override, if any, without following fallbacks.
    #[must_use]
    pub fn raw_color(&self, slot: ColorSlot) -> Option<Color> {
        self.colors.value(slot)
    }

    /// Overrides a color slot.
    pub fn set_color(&mut self, slot: ColorSlot, color: Color) {
        self.colors.set(slot, color);
        self.host.request_repaint();
    }

    /// Clears a slot's override, restoring fallback resolution.
    pub fn clear_color(&mut self, slot: ColorSlot) {
        self.colors.clear(slot);
        self.host.request_repaint();
    }

    /// Re-points a slot's fallback; cyclic wirings are rejected.
    pub fn set_color_fallback(
        &mut self,
        slot: ColorSlot,
        fallback: Fallback,
    ) -> Result<(), FallbackCycleError> {
        self.colors.set_fallback(slot, fallback)?;
        self.host.request_repaint();
        Ok(())
    }

    /// The system palette the fallback graph is rooted at.
    #[must_use]
    #[inline]
    pub fn palette(&self) -> &SystemPalette {
        &self.palette
    }

    /// Replaces the system palette.
    pub fn set_palette(&mut self, palette: SystemPalette) {
        self.palette = palette;
        self.host.request_repaint();
    }

    // Derived padding -------------------------------------------------------

    /// Pushes the derived caption padding onto the host.
    ///
    /// The pushed X reserves room for the corner radius and, when the
    /// closer is shown, for the closer button; a padding that would collapse
    /// below zero is floored at zero.
    pub(crate) fn push_padding(&mut self) {
        let x = self.padding.x;
        let pushed = if self.show_tab_closer {
            if x + self.radius / 2.0 < -CLOSER_BUTTON_SIZE {
                0.0
            } else {
                x + self.radius + (CLOSER_BUTTON_SIZE + 10.0) / 2.0
            }
        } else if x + self.radius / 2.0 < 1.0 {
            0.0
        } else {
            x + self.radius
        };
        self.host.set_padding(pushed, self.padding.y);
    }

    pub(crate) fn current_alignment(&self) -> Alignment {
        self.host.alignment()
    }
}
