// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::palette::SystemColor;

/// The mutually exclusive visual state a tab is painted in.
///
/// Exactly one state applies per paint call; it selects which color slot
/// set feeds every paint operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TabState {
    /// The tab (or the whole strip) is disabled.
    Disabled,
    /// The tab is selected and the strip has keyboard focus.
    Focused,
    /// The pointer is hovering over the tab.
    Highlighted,
    /// The tab is selected but the strip is not focused.
    Selected,
    /// None of the above.
    Unselected,
}

/// Where an unset [`ColorSlot`] takes its value from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Fallback {
    /// Inherit from another slot's resolved value.
    Slot(ColorSlot),
    /// Resolve to a fixed system-theme root.
    System(SystemColor),
    /// Resolve to fully transparent, which paint operations treat as
    /// "skip this step".
    Transparent,
}

/// The color slots used to paint the closer button for one state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CloserSlots {
    /// Stroke color of the "×" glyph.
    pub glyph: ColorSlot,
    /// Fill color of the button face.
    pub fill: ColorSlot,
    /// Stroke color of the button outline.
    pub outline: ColorSlot,
}

/// A named, themable color property.
///
/// Every slot declares exactly one default [`Fallback`]; together these
/// form a directed acyclic graph rooted at [`SystemColor`] constants (or
/// transparent). Chains are at most three hops deep in the default wiring,
/// e.g. `TabSelected2 → TabSelected1 → PageBackgroundSelected →
/// ControlLightLight`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs, reason = "variant names are the documentation")]
pub enum ColorSlot {
    BorderDisabled,
    BorderFocused,
    BorderHighlighted,
    BorderSelected,
    BorderUnselected,

    CloserFocused,
    CloserFocusedActive,
    CloserSelected,
    CloserSelectedActive,
    CloserHighlighted,
    CloserHighlightedActive,
    CloserUnselected,

    CloserFillFocused,
    CloserFillFocusedActive,
    CloserFillSelected,
    CloserFillSelectedActive,
    CloserFillHighlighted,
    CloserFillHighlightedActive,
    CloserFillUnselected,

    CloserOutlineFocused,
    CloserOutlineFocusedActive,
    CloserOutlineSelected,
    CloserOutlineSelectedActive,
    CloserOutlineHighlighted,
    CloserOutlineHighlightedActive,
    CloserOutlineUnselected,

    Focus,

    PageBackgroundDisabled,
    PageBackgroundFocused,
    PageBackgroundHighlighted,
    PageBackgroundSelected,
    PageBackgroundUnselected,

    TabDisabled1,
    TabDisabled2,
    TabFocused1,
    TabFocused2,
    TabHighlighted1,
    TabHighlighted2,
    TabSelected1,
    TabSelected2,
    TabUnselected1,
    TabUnselected2,

    TextDisabled,
    TextFocused,
    TextHighlighted,
    TextSelected,
    TextUnselected,
}

impl ColorSlot {
    /// Number of slots.
    pub const COUNT: usize = 47;

    /// All slots, in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::BorderDisabled,
        Self::BorderFocused,
        Self::BorderHighlighted,
        Self::BorderSelected,
        Self::BorderUnselected,
        Self::CloserFocused,
        Self::CloserFocusedActive,
        Self::CloserSelected,
        Self::CloserSelectedActive,
        Self::CloserHighlighted,
        Self::CloserHighlightedActive,
        Self::CloserUnselected,
        Self::CloserFillFocused,
        Self::CloserFillFocusedActive,
        Self::CloserFillSelected,
        Self::CloserFillSelectedActive,
        Self::CloserFillHighlighted,
        Self::CloserFillHighlightedActive,
        Self::CloserFillUnselected,
        Self::CloserOutlineFocused,
        Self::CloserOutlineFocusedActive,
        Self::CloserOutlineSelected,
        Self::CloserOutlineSelectedActive,
        Self::CloserOutlineHighlighted,
        Self::CloserOutlineHighlightedActive,
        Self::CloserOutlineUnselected,
        Self::Focus,
        Self::PageBackgroundDisabled,
        Self::PageBackgroundFocused,
        Self::PageBackgroundHighlighted,
        Self::PageBackgroundSelected,
        Self::PageBackgroundUnselected,
        Self::TabDisabled1,
        Self::TabDisabled2,
        Self::TabFocused1,
        Self::TabFocused2,
        Self::TabHighlighted1,
        Self::TabHighlighted2,
        Self::TabSelected1,
        Self::TabSelected2,
        Self::TabUnselected1,
        Self::TabUnselected2,
        Self::TextDisabled,
        Self::TextFocused,
        Self::TextHighlighted,
        Self::TextSelected,
        Self::TextUnselected,
    ];

    /// Returns the dense index of this slot.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The default fallback for this slot.
    ///
    /// The default wiring is acyclic; [`ColorTable`](crate::ColorTable)
    /// verifies this in debug builds and cycle-checks any custom re-wiring.
    #[must_use]
    pub const fn default_fallback(self) -> Fallback {
        match self {
            Self::BorderDisabled => Fallback::System(SystemColor::ControlLight),
            Self::BorderFocused => Fallback::System(SystemColor::ToolBorder),
            Self::BorderHighlighted | Self::BorderSelected | Self::BorderUnselected => {
                Fallback::System(SystemColor::ControlDark)
            }

            Self::CloserFocused
            | Self::CloserFocusedActive
            | Self::CloserSelected
            | Self::CloserSelectedActive
            | Self::CloserHighlighted
            | Self::CloserHighlightedActive => Fallback::System(SystemColor::ControlDark),
            // Unset means "do not draw" for the remaining closer slots.
            Self::CloserUnselected
            | Self::CloserFillFocused
            | Self::CloserFillFocusedActive
            | Self::CloserFillSelected
            | Self::CloserFillSelectedActive
            | Self::CloserFillHighlighted
            | Self::CloserFillHighlightedActive
            | Self::CloserFillUnselected
            | Self::CloserOutlineFocused
            | Self::CloserOutlineFocusedActive
            | Self::CloserOutlineSelected
            | Self::CloserOutlineSelectedActive
            | Self::CloserOutlineHighlighted
            | Self::CloserOutlineHighlightedActive
            | Self::CloserOutlineUnselected => Fallback::Transparent,

            Self::Focus => Fallback::System(SystemColor::Window),

            Self::PageBackgroundDisabled | Self::PageBackgroundUnselected => {
                Fallback::System(SystemColor::Control)
            }
            Self::PageBackgroundFocused => Fallback::System(SystemColor::ControlLight),
            Self::PageBackgroundHighlighted => Fallback::Slot(Self::PageBackgroundUnselected),
            Self::PageBackgroundSelected => Fallback::System(SystemColor::ControlLightLight),

            Self::TabDisabled1 => Fallback::Slot(Self::PageBackgroundDisabled),
            Self::TabDisabled2 => Fallback::Slot(Self::TabDisabled1),
            Self::TabFocused1 => Fallback::Slot(Self::PageBackgroundFocused),
            Self::TabFocused2 => Fallback::Slot(Self::TabFocused1),
            Self::TabHighlighted1 => Fallback::Slot(Self::PageBackgroundHighlighted),
            Self::TabHighlighted2 => Fallback::Slot(Self::TabHighlighted1),
            Self::TabSelected1 => Fallback::Slot(Self::PageBackgroundSelected),
            Self::TabSelected2 => Fallback::Slot(Self::TabSelected1),
            Self::TabUnselected1 => Fallback::Slot(Self::PageBackgroundUnselected),
            Self::TabUnselected2 => Fallback::Slot(Self::TabUnselected1),

            Self::TextDisabled => Fallback::System(SystemColor::ControlDark),
            Self::TextFocused => Fallback::Slot(Self::TextSelected),
            Self::TextHighlighted => Fallback::Slot(Self::TextUnselected),
            Self::TextSelected | Self::TextUnselected => {
                Fallback::System(SystemColor::ControlText)
            }
        }
    }

    /// The border slot for a state.
    #[must_use]
    pub const fn border(state: TabState) -> Self {
        match state {
            TabState::Disabled => Self::BorderDisabled,
            TabState::Focused => Self::BorderFocused,
            TabState::Highlighted => Self::BorderHighlighted,
            TabState::Selected => Self::BorderSelected,
            TabState::Unselected => Self::BorderUnselected,
        }
    }

    /// The page-background slot for a state.
    #[must_use]
    pub const fn page_background(state: TabState) -> Self {
        match state {
            TabState::Disabled => Self::PageBackgroundDisabled,
            TabState::Focused => Self::PageBackgroundFocused,
            TabState::Highlighted => Self::PageBackgroundHighlighted,
            TabState::Selected => Self::PageBackgroundSelected,
            TabState::Unselected => Self::PageBackgroundUnselected,
        }
    }

    /// The text slot for a state.
    #[must_use]
    pub const fn text(state: TabState) -> Self {
        match state {
            TabState::Disabled => Self::TextDisabled,
            TabState::Focused => Self::TextFocused,
            TabState::Highlighted => Self::TextHighlighted,
            TabState::Selected => Self::TextSelected,
            TabState::Unselected => Self::TextUnselected,
        }
    }

    /// The two gradient-stop slots for a state, in (near-page, outer) order.
    #[must_use]
    pub const fn tab_gradient(state: TabState) -> (Self, Self) {
        match state {
            TabState::Disabled => (Self::TabDisabled1, Self::TabDisabled2),
            TabState::Focused => (Self::TabFocused1, Self::TabFocused2),
            TabState::Highlighted => (Self::TabHighlighted1, Self::TabHighlighted2),
            TabState::Selected => (Self::TabSelected1, Self::TabSelected2),
            TabState::Unselected => (Self::TabUnselected1, Self::TabUnselected2),
        }
    }

    /// The closer-button slots for a state.
    ///
    /// `active` selects the hovered variant; disabled and unselected tabs
    /// always use the unselected set regardless of hover.
    #[must_use]
    pub const fn closer(state: TabState, active: bool) -> CloserSlots {
        match (state, active) {
            (TabState::Disabled | TabState::Unselected, _) => CloserSlots {
                glyph: Self::CloserUnselected,
                fill: Self::CloserFillUnselected,
                outline: Self::CloserOutlineUnselected,
            },
            (TabState::Focused, false) => CloserSlots {
                glyph: Self::CloserFocused,
                fill: Self::CloserFillFocused,
                outline: Self::CloserOutlineFocused,
            },
            (TabState::Focused, true) => CloserSlots {
                glyph: Self::CloserFocusedActive,
                fill: Self::CloserFillFocusedActive,
                outline: Self::CloserOutlineFocusedActive,
            },
            (TabState::Highlighted, false) => CloserSlots {
                glyph: Self::CloserHighlighted,
                fill: Self::CloserFillHighlighted,
                outline: Self::CloserOutlineHighlighted,
            },
            (TabState::Highlighted, true) => CloserSlots {
                glyph: Self::CloserHighlightedActive,
                fill: Self::CloserFillHighlightedActive,
                outline: Self::CloserOutlineHighlightedActive,
            },
            (TabState::Selected, false) => CloserSlots {
                glyph: Self::CloserSelected,
                fill: Self::CloserFillSelected,
                outline: Self::CloserOutlineSelected,
            },
            (TabState::Selected, true) => CloserSlots {
                glyph: Self::CloserSelectedActive,
                fill: Self::CloserFillSelectedActive,
                outline: Self::CloserOutlineSelectedActive,
            },
        }
    }
}
