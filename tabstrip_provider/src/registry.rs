// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use tabstrip_geometry::BorderShape;
use tabstrip_theme::ColorSlot;

use crate::host::TabHost;
use crate::provider::{PageMargin, TabStyleProvider};

/// A named visual preset for the tab strip.
///
/// Every variant shares the same layout and paint algorithms; a variant
/// only selects a configuration preset (radius, border shape, enlargement,
/// palette defaults) applied once at construction. Tags outside the mapped
/// set resolve to the [`Default`](Self::Default) preset rather than
/// failing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum StyleVariant {
    /// No decoration beyond the base configuration.
    None,
    /// The stock look: square corners, enlarged selected tab, subtle
    /// hover highlight.
    #[default]
    Default,
    /// Slanted tab sides.
    Angled,
    /// Rounded outer corners.
    Rounded,
    /// Flat documents-well look with closer buttons.
    VisualStudio,
    /// Slanted, overlapping tabs with closer buttons.
    Chrome,
    /// Classic browser look: shallow rounding, slight overlap, enlarged
    /// selected tab.
    Ie8,
    /// Warm selected-tab gradient with closer buttons.
    Vs2010,
    /// Flat look: square corners, no page rounding, content flush to the
    /// page edge.
    Rectangular,
    /// Flat accent-colored selection with closer buttons.
    Vs2012,
}

/// Creates a provider for `variant`, bound to `host`.
///
/// Builds the base provider (hot tracking on, padding (6, 3), orange focus
/// strip, image alignment from the host's right-to-left flag), then layers
/// the variant preset on top as a final configuration step.
#[must_use]
pub fn create_provider<H: TabHost>(variant: StyleVariant, host: H) -> TabStyleProvider<H> {
    let mut provider = TabStyleProvider::new(host, variant);
    apply_preset(&mut provider, variant);
    provider.push_padding();
    provider
}

fn apply_preset<H: TabHost>(provider: &mut TabStyleProvider<H>, variant: StyleVariant) {
    match variant {
        StyleVariant::None => {}
        StyleVariant::Angled => {
            provider.shape = BorderShape::Angled;
            provider.radius = 10.0;
        }
        StyleVariant::Rounded => {
            provider.shape = BorderShape::Rounded;
            provider.radius = 10.0;
        }
        StyleVariant::VisualStudio => {
            provider.show_tab_closer = true;
        }
        StyleVariant::Chrome => {
            provider.shape = BorderShape::Angled;
            provider.radius = 10.0;
            provider.overlap = 7.0;
            provider.show_tab_closer = true;
        }
        StyleVariant::Ie8 => {
            provider.radius = 3.0;
            provider.overlap = 1.0;
            provider.selected_tab_is_larger = true;
            highlight_preset(provider);
        }
        StyleVariant::Vs2010 => {
            provider.radius = 3.0;
            provider.show_tab_closer = true;
            provider.colors.set(
                ColorSlot::TabSelected1,
                Color::from_rgb8(255, 252, 242),
            );
            provider.colors.set(
                ColorSlot::TabSelected2,
                Color::from_rgb8(255, 232, 166),
            );
        }
        StyleVariant::Rectangular => {
            provider.shape = BorderShape::Square;
            provider.page_radius = 0.0;
            provider.set_page_margin(PageMargin::default());
        }
        StyleVariant::Vs2012 => {
            provider.show_tab_closer = true;
            let accent = Color::from_rgb8(0, 122, 204);
            provider.colors.set(ColorSlot::TabSelected1, accent);
            provider.colors.set(ColorSlot::TabSelected2, accent);
            provider.colors.set(ColorSlot::BorderSelected, accent);
            provider
                .colors
                .set(ColorSlot::TextSelected, Color::from_rgb8(255, 255, 255));
            let hover = Color::from_rgb8(28, 151, 234);
            provider.colors.set(ColorSlot::TabHighlighted1, hover);
            provider.colors.set(ColorSlot::TabHighlighted2, hover);
        }
        // `Default` and any future unmapped tag.
        _ => {
            provider.radius = 2.0;
            provider.selected_tab_is_larger = true;
            highlight_preset(provider);
        }
    }
}

/// The stock pale-blue hover highlight shared by the Default and IE8
/// presets, with the page background following the first highlight stop.
fn highlight_preset<H: TabHost>(provider: &mut TabStyleProvider<H>) {
    let highlight1 = Color::from_rgb8(236, 244, 252);
    let highlight2 = Color::from_rgb8(221, 237, 252);
    provider.colors.set(ColorSlot::TabHighlighted1, highlight1);
    provider.colors.set(ColorSlot::TabHighlighted2, highlight2);
    provider
        .colors
        .set(ColorSlot::PageBackgroundHighlighted, highlight1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_host::TestHost;
    use tabstrip_geometry::Alignment;

    fn provider(variant: StyleVariant) -> TabStyleProvider<TestHost> {
        create_provider(variant, TestHost::new(Alignment::Top))
    }

    #[test]
    fn default_preset_configuration() {
        let provider = provider(StyleVariant::Default);
        assert_eq!(provider.radius(), 2.0);
        assert!(provider.selected_tab_is_larger());
        assert!(!provider.show_tab_closer());
        assert_eq!(provider.border_shape(), BorderShape::Square);
        assert_eq!(
            provider.raw_color(ColorSlot::TabHighlighted1),
            Some(Color::from_rgb8(236, 244, 252))
        );
        assert_eq!(
            provider.raw_color(ColorSlot::TabHighlighted2),
            Some(Color::from_rgb8(221, 237, 252))
        );
        assert_eq!(
            provider.color(ColorSlot::PageBackgroundHighlighted),
            Color::from_rgb8(236, 244, 252)
        );
    }

    #[test]
    fn none_preset_keeps_base_configuration() {
        let provider = provider(StyleVariant::None);
        assert_eq!(provider.radius(), 1.0);
        assert!(!provider.selected_tab_is_larger());
        assert_eq!(provider.raw_color(ColorSlot::TabHighlighted1), None);
    }

    #[test]
    fn shape_presets_select_their_outline_family() {
        assert_eq!(
            provider(StyleVariant::Rounded).border_shape(),
            BorderShape::Rounded
        );
        assert_eq!(
            provider(StyleVariant::Angled).border_shape(),
            BorderShape::Angled
        );
        assert_eq!(provider(StyleVariant::Rounded).radius(), 10.0);
    }

    #[test]
    fn chrome_preset_overlaps_and_shows_closers() {
        let provider = provider(StyleVariant::Chrome);
        assert_eq!(provider.border_shape(), BorderShape::Angled);
        assert_eq!(provider.overlap(), 7.0);
        assert!(provider.show_tab_closer());
    }

    #[test]
    fn vs2012_preset_uses_accent_selection() {
        let provider = provider(StyleVariant::Vs2012);
        let accent = Color::from_rgb8(0, 122, 204);
        assert_eq!(provider.color(ColorSlot::TabSelected1), accent);
        assert_eq!(provider.color(ColorSlot::TabSelected2), accent);
        assert_eq!(provider.color(ColorSlot::BorderSelected), accent);
        assert_eq!(
            provider.color(ColorSlot::TextSelected),
            Color::from_rgb8(255, 255, 255)
        );
    }

    #[test]
    fn rectangular_preset_flattens_the_page() {
        let flat = provider(StyleVariant::Rectangular);
        assert_eq!(flat.border_shape(), BorderShape::Square);
        assert_eq!(flat.page_radius(), 0.0);
        assert_eq!(flat.page_margin(), PageMargin::default());

        // The base configuration keeps its one-unit page margin.
        let base = provider(StyleVariant::None);
        assert_eq!(base.page_margin(), PageMargin::uniform(1.0));
    }

    #[test]
    fn construction_pushes_host_state() {
        let provider = provider(StyleVariant::Default);
        assert!(provider.host().hot_track);
        // Padding 6 plus the preset radius 2.
        assert_eq!(provider.host().padding, (8.0, 3.0));
        assert_eq!(provider.variant(), StyleVariant::Default);
    }

    #[test]
    fn closer_presets_reserve_caption_room() {
        for variant in [
            StyleVariant::VisualStudio,
            StyleVariant::Chrome,
            StyleVariant::Vs2010,
            StyleVariant::Vs2012,
        ] {
            let provider = provider(variant);
            assert!(provider.show_tab_closer(), "{variant:?}");
            let (x, _) = provider.host().padding;
            assert!(x > 15.0, "{variant:?} pushed {x}");
        }
    }
}
