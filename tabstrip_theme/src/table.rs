// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use peniko::Color;

use crate::palette::SystemPalette;
use crate::slot::{ColorSlot, Fallback};

/// Error returned when re-wiring a slot's fallback would create a cycle.
///
/// Cycles are rejected at wiring time so that resolution can walk fallback
/// chains without a recursion guard.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct FallbackCycleError {
    /// The slot whose fallback was being re-wired.
    pub slot: ColorSlot,
    /// The fallback target that would close the cycle.
    pub target: ColorSlot,
}

impl fmt::Debug for FallbackCycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FallbackCycleError {{ slot: {:?}, target: {:?} }}",
            self.slot, self.target
        )
    }
}

impl fmt::Display for FallbackCycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pointing the fallback of {:?} at {:?} would create a cycle",
            self.slot, self.target
        )
    }
}

impl core::error::Error for FallbackCycleError {}

/// Per-provider color storage with cascading resolution.
///
/// Each [`ColorSlot`] holds an optional override; [`resolve`](Self::resolve)
/// returns the override when present and otherwise follows the slot's
/// fallback chain down to a [`SystemPalette`] root or transparent. Nothing
/// is cached: setting a value, clearing it, or mutating the palette is
/// visible on the next resolution.
///
/// The fallback wiring starts out as the default DAG declared on
/// [`ColorSlot`] and can be re-pointed per slot with
/// [`set_fallback`](Self::set_fallback), which refuses wirings that would
/// introduce a cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTable {
    values: [Option<Color>; ColorSlot::COUNT],
    fallbacks: [Fallback; ColorSlot::COUNT],
}

impl ColorTable {
    /// Creates a table with no overrides and the default fallback wiring.
    #[must_use]
    pub fn new() -> Self {
        let table = Self {
            values: [None; ColorSlot::COUNT],
            fallbacks: core::array::from_fn(|i| ColorSlot::ALL[i].default_fallback()),
        };
        debug_assert!(
            table.find_cycle().is_none(),
            "default fallback wiring must be acyclic"
        );
        table
    }

    /// Sets an override for a slot.
    #[inline]
    pub fn set(&mut self, slot: ColorSlot, color: Color) {
        self.values[slot.index()] = Some(color);
    }

    /// Clears a slot's override, restoring fallback resolution.
    #[inline]
    pub fn clear(&mut self, slot: ColorSlot) {
        self.values[slot.index()] = None;
    }

    /// Returns a slot's override without following fallbacks.
    #[must_use]
    #[inline]
    pub fn value(&self, slot: ColorSlot) -> Option<Color> {
        self.values[slot.index()]
    }

    /// Returns the current fallback of a slot.
    #[must_use]
    #[inline]
    pub fn fallback(&self, slot: ColorSlot) -> Fallback {
        self.fallbacks[slot.index()]
    }

    /// Re-points a slot's fallback.
    ///
    /// Returns an error (leaving the wiring unchanged) if following the new
    /// target's chain would lead back to `slot`.
    pub fn set_fallback(
        &mut self,
        slot: ColorSlot,
        fallback: Fallback,
    ) -> Result<(), FallbackCycleError> {
        if let Fallback::Slot(target) = fallback {
            let mut current = target;
            loop {
                if current == slot {
                    return Err(FallbackCycleError { slot, target });
                }
                match self.fallbacks[current.index()] {
                    Fallback::Slot(next) => current = next,
                    Fallback::System(_) | Fallback::Transparent => break,
                }
            }
        }
        self.fallbacks[slot.index()] = fallback;
        Ok(())
    }

    /// Resolves a slot to a concrete color.
    ///
    /// Walks the fallback chain until a set override, a palette root, or
    /// transparent is reached. The wiring is guaranteed acyclic, so the walk
    /// always terminates.
    #[must_use]
    pub fn resolve(&self, slot: ColorSlot, palette: &SystemPalette) -> Color {
        let mut current = slot;
        loop {
            if let Some(color) = self.values[current.index()] {
                return color;
            }
            match self.fallbacks[current.index()] {
                Fallback::Slot(next) => current = next,
                Fallback::System(role) => return palette.color(role),
                Fallback::Transparent => return Color::TRANSPARENT,
            }
        }
    }

    /// Returns a slot on a cyclic chain, if the wiring has one.
    fn find_cycle(&self) -> Option<ColorSlot> {
        for slot in ColorSlot::ALL {
            let mut hops = 0;
            let mut current = slot;
            while let Fallback::Slot(next) = self.fallbacks[current.index()] {
                hops += 1;
                if hops > ColorSlot::COUNT {
                    return Some(slot);
                }
                current = next;
            }
        }
        None
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::SystemColor;

    #[test]
    fn unset_slot_resolves_to_system_root() {
        let palette = SystemPalette::default();
        let table = ColorTable::new();
        assert_eq!(
            table.resolve(ColorSlot::BorderUnselected, &palette),
            palette.control_dark
        );
        assert_eq!(
            table.resolve(ColorSlot::BorderFocused, &palette),
            palette.tool_border
        );
    }

    #[test]
    fn set_value_short_circuits_chain() {
        let palette = SystemPalette::default();
        let mut table = ColorTable::new();
        let red = Color::from_rgb8(200, 30, 30);
        table.set(ColorSlot::BorderUnselected, red);
        assert_eq!(table.resolve(ColorSlot::BorderUnselected, &palette), red);
        table.clear(ColorSlot::BorderUnselected);
        assert_eq!(
            table.resolve(ColorSlot::BorderUnselected, &palette),
            palette.control_dark
        );
    }

    #[test]
    fn gradient_stop_two_inherits_stop_one() {
        let palette = SystemPalette::default();
        let mut table = ColorTable::new();
        let teal = Color::from_rgb8(0, 128, 128);
        table.set(ColorSlot::TabSelected1, teal);
        assert_eq!(table.resolve(ColorSlot::TabSelected2, &palette), teal);
        assert_eq!(
            table.resolve(ColorSlot::TabSelected2, &palette),
            table.resolve(ColorSlot::TabSelected1, &palette)
        );
    }

    #[test]
    fn three_hop_chain_reaches_palette() {
        let palette = SystemPalette::default();
        let table = ColorTable::new();
        // TabSelected2 -> TabSelected1 -> PageBackgroundSelected -> ControlLightLight
        assert_eq!(
            table.resolve(ColorSlot::TabSelected2, &palette),
            palette.control_light_light
        );
    }

    #[test]
    fn page_background_change_cascades_into_tab_colors() {
        let palette = SystemPalette::default();
        let mut table = ColorTable::new();
        let cream = Color::from_rgb8(255, 250, 240);
        table.set(ColorSlot::PageBackgroundSelected, cream);
        // No caching: the change is visible through two levels of fallback.
        assert_eq!(table.resolve(ColorSlot::TabSelected2, &palette), cream);
    }

    #[test]
    fn unselected_closer_resolves_transparent() {
        let palette = SystemPalette::default();
        let table = ColorTable::new();
        let color = table.resolve(ColorSlot::CloserUnselected, &palette);
        assert_eq!(color, Color::TRANSPARENT);
    }

    #[test]
    fn palette_changes_take_effect_immediately() {
        let mut palette = SystemPalette::default();
        let table = ColorTable::new();
        let before = table.resolve(ColorSlot::TextSelected, &palette);
        palette.control_text = Color::from_rgb8(50, 50, 50);
        let after = table.resolve(ColorSlot::TextSelected, &palette);
        assert_ne!(before, after);
    }

    #[test]
    fn rewiring_is_allowed_when_acyclic() {
        let palette = SystemPalette::default();
        let mut table = ColorTable::new();
        table
            .set_fallback(
                ColorSlot::BorderUnselected,
                Fallback::Slot(ColorSlot::BorderSelected),
            )
            .unwrap();
        let blue = Color::from_rgb8(0, 90, 200);
        table.set(ColorSlot::BorderSelected, blue);
        assert_eq!(table.resolve(ColorSlot::BorderUnselected, &palette), blue);
    }

    #[test]
    fn self_cycle_is_rejected() {
        let mut table = ColorTable::new();
        let err = table
            .set_fallback(ColorSlot::Focus, Fallback::Slot(ColorSlot::Focus))
            .unwrap_err();
        assert_eq!(err.slot, ColorSlot::Focus);
        assert_eq!(table.fallback(ColorSlot::Focus), Fallback::System(SystemColor::Window));
    }

    #[test]
    fn indirect_cycle_is_rejected_and_wiring_unchanged() {
        let mut table = ColorTable::new();
        // TabSelected2 already falls back to TabSelected1; closing the loop
        // must fail.
        let err = table
            .set_fallback(ColorSlot::TabSelected1, Fallback::Slot(ColorSlot::TabSelected2))
            .unwrap_err();
        assert_eq!(err.slot, ColorSlot::TabSelected1);
        assert_eq!(err.target, ColorSlot::TabSelected2);
        assert_eq!(
            table.fallback(ColorSlot::TabSelected1),
            Fallback::Slot(ColorSlot::PageBackgroundSelected)
        );
    }

    #[test]
    fn every_default_chain_terminates() {
        let palette = SystemPalette::default();
        let table = ColorTable::new();
        for slot in ColorSlot::ALL {
            // Termination itself is the property under test.
            let _ = table.resolve(slot, &palette);
        }
    }
}
