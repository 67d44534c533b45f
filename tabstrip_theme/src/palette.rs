// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// A fixed system-theme color the fallback graph is rooted at.
///
/// These mirror the classic widget-toolkit role colors: every fallback
/// chain in the default wiring terminates at one of them (or at
/// transparent), so an entirely unconfigured [`ColorTable`](crate::ColorTable)
/// still resolves every slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SystemColor {
    /// Widget chrome background.
    Control,
    /// Lighter chrome background.
    ControlLight,
    /// Lightest chrome background.
    ControlLightLight,
    /// Darker chrome accents and disabled text.
    ControlDark,
    /// Default text.
    ControlText,
    /// Document / content background.
    Window,
    /// Themed toolbar border.
    ToolBorder,
}

/// The current system-theme palette.
///
/// Fields are public so a host can mirror a platform theme into them; slot
/// resolution reads the palette on every call, so changes take effect on
/// the next paint without any cache invalidation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SystemPalette {
    /// Color for [`SystemColor::Control`].
    pub control: Color,
    /// Color for [`SystemColor::ControlLight`].
    pub control_light: Color,
    /// Color for [`SystemColor::ControlLightLight`].
    pub control_light_light: Color,
    /// Color for [`SystemColor::ControlDark`].
    pub control_dark: Color,
    /// Color for [`SystemColor::ControlText`].
    pub control_text: Color,
    /// Color for [`SystemColor::Window`].
    pub window: Color,
    /// Color for [`SystemColor::ToolBorder`].
    pub tool_border: Color,
}

impl SystemPalette {
    /// Looks up a system color role.
    #[must_use]
    #[inline]
    pub const fn color(&self, role: SystemColor) -> Color {
        match role {
            SystemColor::Control => self.control,
            SystemColor::ControlLight => self.control_light,
            SystemColor::ControlLightLight => self.control_light_light,
            SystemColor::ControlDark => self.control_dark,
            SystemColor::ControlText => self.control_text,
            SystemColor::Window => self.window,
            SystemColor::ToolBorder => self.tool_border,
        }
    }
}

impl Default for SystemPalette {
    /// The classic light desktop palette.
    fn default() -> Self {
        Self {
            control: Color::from_rgb8(240, 240, 240),
            control_light: Color::from_rgb8(227, 227, 227),
            control_light_light: Color::from_rgb8(255, 255, 255),
            control_dark: Color::from_rgb8(160, 160, 160),
            control_text: Color::from_rgb8(0, 0, 0),
            window: Color::from_rgb8(255, 255, 255),
            tool_border: Color::from_rgb8(127, 157, 185),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_fields() {
        let palette = SystemPalette::default();
        assert_eq!(palette.color(SystemColor::Control), palette.control);
        assert_eq!(palette.color(SystemColor::Window), palette.window);
        assert_eq!(palette.color(SystemColor::ToolBorder), palette.tool_border);
    }

    #[test]
    fn palette_is_mutable() {
        let mut palette = SystemPalette::default();
        let accent = Color::from_rgb8(0, 120, 212);
        palette.tool_border = accent;
        assert_eq!(palette.color(SystemColor::ToolBorder), accent);
    }
}
