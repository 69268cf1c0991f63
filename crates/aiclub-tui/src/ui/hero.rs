use aiclub_core::{
    content::{
        CALLS_TO_ACTION, COLLEGE_NAME, HERO_BADGE, HERO_DESCRIPTION, HERO_TAGLINES, STATS,
    },
    counter::AnimatedCounter,
    effects::blink_visible,
    theme::{Element, Theme},
};
use ratatui::{
    buffer::Buffer,
    prelude::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

const LOGO_GLYPHS: [[&str; 6]; 7] = [
    [" █████╗ ", "██╔══██╗", "███████║", "██╔══██║", "██║  ██║", "╚═╝  ╚═╝"],
    ["██╗", "██║", "██║", "██║", "██║", "╚═╝"],
    ["  ", "  ", "  ", "  ", "  ", "  "],
    [" ██████╗", "██╔════╝", "██║     ", "██║     ", "╚██████╗", " ╚═════╝"],
    ["██╗     ", "██║     ", "██║     ", "██║     ", "███████╗", "╚══════╝"],
    ["██╗   ██╗", "██║   ██║", "██║   ██║", "██║   ██║", "╚██████╔╝", " ╚═════╝ "],
    ["██████╗ ", "██╔══██╗", "██████╔╝", "██╔══██╗", "██████╔╝", "╚═════╝ "],
];
const LOGO_HEIGHT: u16 = 6;
const LOGO_WIDTH: u16 = 46;
const BUTTON_HEIGHT: u16 = 3;
const STAT_CARD_HEIGHT: u16 = 5;
const MAX_COPY_WIDTH: u16 = 80;

fn logo_lines() -> Vec<String> {
    (0..LOGO_HEIGHT as usize)
        .map(|row| LOGO_GLYPHS.iter().map(|glyph| glyph[row]).collect())
        .collect()
}

/// Row offsets inside the hero, relative to its top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroLayout {
    pub title: u16,
    pub title_height: u16,
    pub badge: u16,
    pub college: u16,
    pub tagline: u16,
    pub description: u16,
    pub description_height: u16,
    pub buttons: u16,
    pub stats: u16,
    pub scroll_hint: u16,
    pub height: u16,
}

impl HeroLayout {
    pub fn new(width: u16) -> Self {
        let title_height = if width >= LOGO_WIDTH + 4 { LOGO_HEIGHT } else { 1 };
        let description_height = description_lines(width).len() as u16;

        let title = 1;
        let badge = title + title_height + 1;
        let college = badge + 2;
        let tagline = college + 2;
        let description = tagline + 2;
        let buttons = description + description_height + 1;
        let stats = buttons + BUTTON_HEIGHT + 1;
        let scroll_hint = stats + STAT_CARD_HEIGHT + 1;

        Self {
            title,
            title_height,
            badge,
            college,
            tagline,
            description,
            description_height,
            buttons,
            stats,
            scroll_hint,
            height: scroll_hint + 2,
        }
    }

    pub fn stats_rows(&self) -> std::ops::Range<u16> {
        self.stats..self.stats + STAT_CARD_HEIGHT
    }
}

fn description_lines(width: u16) -> Vec<String> {
    let wrap_width = width.saturating_sub(4).clamp(10, MAX_COPY_WIDTH) as usize;
    textwrap::wrap(HERO_DESCRIPTION, wrap_width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

pub struct HeroView<'a> {
    pub theme: &'a Theme,
    pub elapsed: Duration,
    pub counters: &'a [AnimatedCounter],
}

fn row(area: Rect, offset: u16, height: u16) -> Rect {
    let y = area.y.saturating_add(offset);
    let bottom = area.y.saturating_add(area.height);
    Rect::new(area.x, y, area.width, height.min(bottom.saturating_sub(y)))
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

pub fn render_hero(buf: &mut Buffer, area: Rect, view: &HeroView) {
    let theme = view.theme;
    let layout = HeroLayout::new(area.width);
    buf.set_style(area, theme.ratatui_style(Element::Background));

    // Title
    let title_area = row(area, layout.title, layout.title_height);
    let title = if layout.title_height == LOGO_HEIGHT {
        Paragraph::new(
            logo_lines()
                .into_iter()
                .map(Line::from)
                .collect::<Vec<_>>(),
        )
    } else {
        Paragraph::new(Line::from(aiclub_core::content::CLUB_NAME))
    };
    title
        .alignment(Alignment::Center)
        .style(theme.title_style())
        .render(title_area, buf);

    // Rotating badge
    let word = HERO_BADGE.word_at(view.elapsed);
    let badge = format!(" {} ", word);
    let badge_area = centered(row(area, layout.badge, 1), badge.width() as u16);
    Paragraph::new(badge)
        .style(theme.ratatui_style(Element::Badge))
        .render(badge_area, buf);

    Paragraph::new(COLLEGE_NAME)
        .alignment(Alignment::Center)
        .style(theme.info_style())
        .render(row(area, layout.college, 1), buf);

    // Typewriter tagline with a blinking caret
    let caret = if blink_visible(view.elapsed, Duration::from_millis(1000)) {
        "▌"
    } else {
        " "
    };
    Paragraph::new(Line::from(vec![
        Span::styled(
            HERO_TAGLINES.text_at(view.elapsed),
            theme.text_style().add_modifier(Modifier::BOLD),
        ),
        Span::styled(caret, theme.accent_style()),
    ]))
    .alignment(Alignment::Center)
    .render(row(area, layout.tagline, 1), buf);

    Paragraph::new(
        description_lines(area.width)
            .into_iter()
            .map(Line::from)
            .collect::<Vec<_>>(),
    )
    .alignment(Alignment::Center)
    .style(theme.info_style())
    .render(row(area, layout.description, layout.description_height), buf);

    render_buttons(buf, row(area, layout.buttons, BUTTON_HEIGHT), theme);
    render_stats(buf, row(area, layout.stats, STAT_CARD_HEIGHT), view);

    Paragraph::new("Scroll Down ⌄  [SPACE]")
        .alignment(Alignment::Center)
        .style(theme.accent_style())
        .render(row(area, layout.scroll_hint, 1), buf);
}

fn render_buttons(buf: &mut Buffer, area: Rect, theme: &Theme) {
    let widths: Vec<u16> = CALLS_TO_ACTION
        .iter()
        .map(|label| label.width() as u16 + 4)
        .collect();
    let total = widths.iter().sum::<u16>() + 2;
    let area = centered(area, total);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(widths[0]),
            Constraint::Length(2),
            Constraint::Length(widths[1]),
        ])
        .split(area);

    Paragraph::new(CALLS_TO_ACTION[0])
        .alignment(Alignment::Center)
        .style(theme.highlight_style())
        .block(
            Block::new()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(theme.highlight_style()),
        )
        .render(chunks[0], buf);

    Paragraph::new(CALLS_TO_ACTION[1])
        .alignment(Alignment::Center)
        .style(theme.accent_style())
        .block(
            Block::new()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(theme.accent_style()),
        )
        .render(chunks[2], buf);
}

fn render_stats(buf: &mut Buffer, area: Rect, view: &HeroView) {
    let theme = view.theme;
    let area = centered(area, MAX_COPY_WIDTH);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for ((stat, counter), chunk) in STATS.iter().zip(view.counters).zip(chunks.iter()) {
        let card = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(theme.ratatui_style(Element::Surface));
        let inner = card.inner(*chunk);
        card.render(*chunk, buf);

        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    counter.value().to_string(),
                    theme
                        .ratatui_style(Element::Surface)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(stat.suffix, theme.ratatui_style(Element::Surface)),
            ]),
            Line::from(""),
            Line::from(stat.label),
        ])
        .alignment(Alignment::Center)
        .style(theme.ratatui_style(Element::Surface))
        .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_rows_have_equal_width() {
        let lines = logo_lines();
        assert_eq!(lines.len(), LOGO_HEIGHT as usize);
        assert!(lines.iter().all(|line| line.width() as u16 == LOGO_WIDTH));
    }

    #[test]
    fn test_layout_orders_rows() {
        let layout = HeroLayout::new(120);
        assert_eq!(layout.title_height, LOGO_HEIGHT);
        assert!(layout.badge > layout.title);
        assert!(layout.buttons > layout.description + layout.description_height - 1);
        assert!(layout.stats_rows().end < layout.scroll_hint);
        assert!(layout.height > layout.scroll_hint);
    }

    #[test]
    fn test_narrow_layout_uses_plain_title() {
        let layout = HeroLayout::new(30);
        assert_eq!(layout.title_height, 1);
        assert!(layout.description_height > HeroLayout::new(120).description_height);
    }
}
