//! Colour themes for the showcase.
//!
//! Light is the club's white/cyan/emerald look; Dark swaps the page onto the
//! slate used by the footer. Views ask for a style per [`Element`] and never
//! touch raw colours.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeVariant {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub background: Color,
    pub surface: Color,
    pub foreground: Color,
    pub muted: Color,
    pub brand: Color,
    pub brand_alt: Color,
    pub badge: Color,
    pub border: Color,
    pub footer_bg: Color,
    pub footer_fg: Color,
}

/// UI element types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Body copy
    Text,
    /// Headings and the logo
    Title,
    Border,
    /// Selected items (tabs, menu rows)
    Highlight,
    /// Links and primary buttons
    Accent,
    /// Secondary brand colour (emerald)
    Secondary,
    /// Muted copy such as roles and captions
    Info,
    Background,
    /// Cards and the raised navigation bar
    Surface,
    /// Focused inputs
    Active,
    Inactive,
    /// The rotating word badge
    Badge,
    /// The dark footer panel
    Footer,
}

#[derive(Debug, Clone)]
pub struct Theme {
    variant: ThemeVariant,
    colors: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::Light => ColorPalette {
                background: Color::Rgb(255, 255, 255), // white
                surface: Color::Rgb(241, 245, 249),    // #f1f5f9
                foreground: Color::Rgb(15, 23, 42),    // #0f172a
                muted: Color::Rgb(71, 85, 105),        // #475569
                brand: Color::Rgb(8, 145, 178),        // #0891b2 (cyan)
                brand_alt: Color::Rgb(5, 150, 105),    // #059669 (emerald)
                badge: Color::Rgb(103, 232, 249),      // #67e8f9
                border: Color::Rgb(226, 232, 240),     // #e2e8f0
                footer_bg: Color::Rgb(15, 23, 42),     // #0f172a
                footer_fg: Color::Rgb(203, 213, 225),  // #cbd5e1
            },
            ThemeVariant::Dark => ColorPalette {
                background: Color::Rgb(15, 23, 42),    // #0f172a
                surface: Color::Rgb(30, 41, 59),       // #1e293b
                foreground: Color::Rgb(241, 245, 249), // #f1f5f9
                muted: Color::Rgb(148, 163, 184),      // #94a3b8
                brand: Color::Rgb(6, 182, 212),        // #06b6d4
                brand_alt: Color::Rgb(16, 185, 129),   // #10b981
                badge: Color::Rgb(103, 232, 249),      // #67e8f9
                border: Color::Rgb(71, 85, 105),       // #475569
                footer_bg: Color::Rgb(2, 6, 23),       // #020617
                footer_fg: Color::Rgb(203, 213, 225),  // #cbd5e1
            },
        };

        Self { variant, colors }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn colors(&self) -> &ColorPalette {
        &self.colors
    }

    pub fn toggle(&mut self) {
        let next = match self.variant {
            ThemeVariant::Light => ThemeVariant::Dark,
            ThemeVariant::Dark => ThemeVariant::Light,
        };
        *self = Self::new(next);
    }

    pub fn ratatui_style(&self, element: Element) -> Style {
        let c = &self.colors;
        match element {
            Element::Text | Element::Background => Style::default().fg(c.foreground).bg(c.background),
            Element::Title => Style::default()
                .fg(c.brand)
                .bg(c.background)
                .add_modifier(Modifier::BOLD),
            Element::Border => Style::default().fg(c.border).bg(c.background),
            Element::Highlight => Style::default()
                .fg(c.background)
                .bg(c.brand)
                .add_modifier(Modifier::BOLD),
            Element::Accent => Style::default()
                .fg(c.brand)
                .bg(c.background)
                .add_modifier(Modifier::BOLD),
            Element::Secondary => Style::default().fg(c.brand_alt).bg(c.background),
            Element::Info => Style::default().fg(c.muted).bg(c.background),
            Element::Surface => Style::default().fg(c.foreground).bg(c.surface),
            Element::Active => Style::default()
                .fg(c.brand)
                .bg(c.surface)
                .add_modifier(Modifier::BOLD),
            Element::Inactive => Style::default().fg(c.muted).bg(c.background),
            Element::Badge => Style::default()
                .fg(Color::Black)
                .bg(c.badge)
                .add_modifier(Modifier::BOLD),
            Element::Footer => Style::default().fg(c.footer_fg).bg(c.footer_bg),
        }
    }

    pub fn text_style(&self) -> Style {
        self.ratatui_style(Element::Text)
    }

    pub fn title_style(&self) -> Style {
        self.ratatui_style(Element::Title)
    }

    pub fn highlight_style(&self) -> Style {
        self.ratatui_style(Element::Highlight)
    }

    pub fn accent_style(&self) -> Style {
        self.ratatui_style(Element::Accent)
    }

    pub fn info_style(&self) -> Style {
        self.ratatui_style(Element::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default().variant(), ThemeVariant::Light);
    }

    #[test]
    fn test_toggle_swaps_palette() {
        let mut theme = Theme::default();
        let light_bg = theme.colors().background;
        theme.toggle();
        assert_eq!(theme.variant(), ThemeVariant::Dark);
        assert_ne!(theme.colors().background, light_bg);
        theme.toggle();
        assert_eq!(theme.variant(), ThemeVariant::Light);
    }

    #[test]
    fn test_highlight_inverts_brand() {
        let theme = Theme::default();
        let style = theme.highlight_style();
        assert_eq!(style.bg, Some(theme.colors().brand));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
