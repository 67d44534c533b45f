// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tabstrip Geometry: alignment-aware tab rectangle transforms and border paths.
//!
//! This crate holds the geometric half of the tab style engine:
//!
//! - [`Alignment`] names the container edge a tab strip is attached to and
//!   decides which axis runs *along* the strip and which points *away from*
//!   the page.
//! - [`TabLayout`] turns a tab's nominal rectangle into its on-screen
//!   rectangle: meet-the-page adjustment, selected-tab enlargement, neighbor
//!   overlap, and clamping into the visible page band.
//! - [`add_tab_border`] traces the tab outline as an open polyline of three
//!   sides (the page-adjacent side is the caller's closing segment), with
//!   per-[`BorderShape`] corner geometry.
//!
//! All computation is pure: every call is a function of its inputs, with no
//! caching and no retained state beyond the [`TabLayout`] parameters.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std`; enable the `std` or `libm` feature to select how
//! Kurbo obtains math intrinsics.

#![no_std]

mod alignment;
mod border;
mod layout;

pub use alignment::Alignment;
pub use border::{BorderShape, add_tab_border, tab_border};
pub use layout::{IN_VIEW_SNAP, TabLayout};
