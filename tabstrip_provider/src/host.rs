// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

use tabstrip_geometry::Alignment;

/// Side length of the closer button, in units.
///
/// The host reserves this much room next to the tab caption when the closer
/// is shown; the padding push in
/// [`TabStyleProvider`](crate::TabStyleProvider) depends on it.
pub const CLOSER_BUTTON_SIZE: f64 = 15.0;

/// The host container a provider is bound to.
///
/// A provider is created 1:1 for one host value and owns it for its
/// lifetime. The host supplies the ambient strip state the provider cannot
/// know on its own and receives the provider's side effects. All calls are
/// synchronous; `request_repaint` is fire-and-forget with no ordering
/// guarantee, and coalescing repeated requests is the host's business.
pub trait TabHost {
    /// The container edge the strip is currently attached to.
    ///
    /// Read on every layout and paint call, so alignment changes take
    /// effect without reconfiguring the provider.
    fn alignment(&self) -> Alignment;

    /// Whether the host lays content out right-to-left.
    ///
    /// Read once at construction to pick the initial image alignment.
    fn right_to_left(&self) -> bool;

    /// Whether a tab rectangle is currently scrolled into view.
    ///
    /// Tabs out of view skip the in-view clamp so the host's scroll
    /// bookkeeping stays intact.
    fn is_tab_visible(&self, tab: Rect, page: Rect) -> bool;

    /// Asks the host to repaint the strip.
    fn request_repaint(&mut self);

    /// Receives the derived caption padding.
    ///
    /// Pushed whenever the provider's padding, radius, or closer visibility
    /// changes; the pushed X already accounts for corner radius and closer
    /// button room.
    fn set_padding(&mut self, x: f64, y: f64);

    /// Receives the hot-track (hover highlight) flag.
    fn set_hot_track(&mut self, enabled: bool);
}
