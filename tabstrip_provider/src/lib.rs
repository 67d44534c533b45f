// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tabstrip Provider: configured style providers for a tab strip.
//!
//! This crate is the composition root of the tab style engine. It binds the
//! geometry transforms of [`tabstrip_geometry`] and the color cascade of
//! [`tabstrip_theme`] into a [`TabStyleProvider`], created per host widget
//! through [`create_provider`] with a [`StyleVariant`] preset.
//!
//! The provider is a pure computation layer: it turns (configuration,
//! state, geometry) into rectangles, border paths, and paint instructions
//! (peniko brushes, [`CloserGlyph`], [`FocusIndicator`]) and never touches
//! a window system. Side effects flow the other way, through the
//! [`TabHost`] trait the host implements: repaint requests and the derived
//! caption padding.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Rect;
//! use tabstrip_provider::{Alignment, StyleVariant, TabHost, TabState, create_provider};
//!
//! struct Strip;
//!
//! impl TabHost for Strip {
//!     fn alignment(&self) -> Alignment {
//!         Alignment::Top
//!     }
//!     fn right_to_left(&self) -> bool {
//!         false
//!     }
//!     fn is_tab_visible(&self, _tab: Rect, _page: Rect) -> bool {
//!         true
//!     }
//!     fn request_repaint(&mut self) {}
//!     fn set_padding(&mut self, _x: f64, _y: f64) {}
//!     fn set_hot_track(&mut self, _enabled: bool) {}
//! }
//!
//! let provider = create_provider(StyleVariant::Default, Strip);
//! let page = Rect::new(0.0, 40.0, 400.0, 240.0);
//!
//! // The Default preset enlarges the selected tab by one unit.
//! let rect = provider.tab_rect(Rect::new(0.0, 20.0, 80.0, 40.0), page, true);
//! assert_eq!(rect, Rect::new(0.0, 19.0, 82.0, 40.0));
//!
//! let border = provider.tab_border(rect);
//! let _fill = provider.tab_background_brush(TabState::Selected, &border);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`; enable the `std` or `libm`
//! feature to select how Kurbo and Peniko obtain math intrinsics.

#![no_std]

extern crate alloc;

mod error;
mod host;
mod paint;
mod provider;
mod registry;

pub use error::ConfigError;
pub use host::{CLOSER_BUTTON_SIZE, TabHost};
pub use paint::{CloserGlyph, FocusIndicator};
pub use provider::{ImageAlign, PageMargin, TabStyleProvider};
pub use registry::{StyleVariant, create_provider};

// Re-exported so hosts can name the full configuration surface from one
// crate.
pub use tabstrip_geometry::{Alignment, BorderShape};
pub use tabstrip_theme::{BlendStyle, ColorSlot, Fallback, TabState};
