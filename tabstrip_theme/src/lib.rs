// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tabstrip Theme: cascading per-state color resolution and blend curves.
//!
//! This crate holds the themed half of the tab style engine:
//!
//! - [`TabState`] names the mutually exclusive visual states a tab is
//!   painted in.
//! - [`ColorSlot`] enumerates every themable color property. Each slot
//!   declares exactly one fallback — another slot, a [`SystemColor`] root,
//!   or transparent — forming a directed acyclic graph rooted at the
//!   system palette.
//! - [`ColorTable`] stores the per-provider overrides and resolves a slot
//!   by walking its fallback chain. Resolution is lazy and never cached, so
//!   palette changes take effect on the next paint. Custom re-wiring of the
//!   fallback graph is cycle-checked at wiring time, never at resolution
//!   time.
//! - [`BlendStyle`] / [`BlendCurve`] describe the two-stop gradient easing
//!   profiles used for tab backgrounds.
//!
//! # Example
//!
//! ```rust
//! use peniko::Color;
//! use tabstrip_theme::{ColorSlot, ColorTable, SystemPalette};
//!
//! let palette = SystemPalette::default();
//! let mut colors = ColorTable::new();
//!
//! // An unset gradient stop inherits from its sibling stop.
//! let teal = Color::from_rgb8(0, 128, 128);
//! colors.set(ColorSlot::TabSelected1, teal);
//! assert_eq!(colors.resolve(ColorSlot::TabSelected2, &palette), teal);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std`; enable the `std` or `libm` feature to select how
//! Peniko obtains math intrinsics.

#![no_std]

mod blend;
mod palette;
mod slot;
mod table;

pub use blend::{BlendCurve, BlendStyle};
pub use palette::{SystemColor, SystemPalette};
pub use slot::{CloserSlots, ColorSlot, Fallback, TabState};
pub use table::{ColorTable, FallbackCycleError};
