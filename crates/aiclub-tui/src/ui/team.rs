use aiclub_core::{
    content::TEAM_HEADING,
    effects::blink_visible,
    roster::{RosterFilter, TeamMember},
    theme::{Element, Theme},
};
use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    prelude::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs, Widget},
};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

const CARD_HEIGHT: u16 = 8;
const CARD_MIN_WIDTH: u16 = 34;
const MAX_COLUMNS: usize = 4;
const DESCRIPTION_LINES: usize = 3;
const PROMPT_HEIGHT: u16 = 3;
const TABS_WIDTH: u16 = 70;

/// Cards per row for the given section width.
pub fn columns_for(width: u16) -> usize {
    ((width / CARD_MIN_WIDTH) as usize).clamp(1, MAX_COLUMNS)
}

/// Row offsets inside the team section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamLayout {
    pub heading: u16,
    pub prompt: u16,
    pub tabs: u16,
    pub cards: u16,
    pub card_rows: u16,
    pub height: u16,
}

impl TeamLayout {
    pub fn new(width: u16, revealed: bool, member_count: usize) -> Self {
        let heading = 1;
        let prompt = heading + 3;
        let tabs = prompt + PROMPT_HEIGHT + 1;
        let cards = tabs + 2;
        let card_rows = if revealed {
            member_count.div_ceil(columns_for(width)) as u16
        } else {
            0
        };
        let height = if revealed {
            cards + card_rows * CARD_HEIGHT + 1
        } else {
            tabs + 1
        };

        Self {
            heading,
            prompt,
            tabs,
            cards,
            card_rows,
            height,
        }
    }
}

pub struct TeamView<'a> {
    pub theme: &'a Theme,
    /// Members that pass the current filter, in roster order.
    pub members: &'a [TeamMember],
    pub filter: RosterFilter,
    pub prompt: &'a str,
    pub revealed: bool,
    pub editing: bool,
    pub elapsed: Duration,
}

fn row(area: Rect, offset: u16, height: u16) -> Rect {
    let y = area.y.saturating_add(offset);
    let bottom = area.y.saturating_add(area.height);
    Rect::new(area.x, y, area.width, height.min(bottom.saturating_sub(y)))
}

pub fn render_team(buf: &mut Buffer, area: Rect, view: &TeamView) {
    let theme = view.theme;
    let layout = TeamLayout::new(area.width, view.revealed, view.members.len());
    buf.set_style(area, theme.ratatui_style(Element::Background));

    Paragraph::new(vec![
        Line::from(Span::styled(TEAM_HEADING, theme.title_style())),
        Line::from(Span::styled("The people behind the club", theme.info_style())),
    ])
    .alignment(Alignment::Center)
    .render(row(area, layout.heading, 2), buf);

    render_prompt(buf, row(area, layout.prompt, PROMPT_HEIGHT), view);

    if !view.revealed {
        Paragraph::new("Ask the assistant to reveal the team  [P] then [ENTER]")
            .alignment(Alignment::Center)
            .style(theme.info_style())
            .render(row(area, layout.tabs, 1), buf);
        return;
    }

    let titles: Vec<&str> = RosterFilter::ALL.iter().map(|f| f.label()).collect();
    Tabs::new(titles)
        .select(view.filter.index())
        .style(theme.ratatui_style(Element::Inactive))
        .highlight_style(theme.highlight_style())
        .divider(" ")
        .render(centered(row(area, layout.tabs, 1), TABS_WIDTH), buf);

    if view.members.is_empty() {
        Paragraph::new("No members in this category.")
            .alignment(Alignment::Center)
            .style(theme.info_style())
            .render(row(area, layout.cards, 1), buf);
        return;
    }

    let columns = columns_for(area.width);
    let grid = row(area, layout.cards, layout.card_rows * CARD_HEIGHT);
    for (index, chunk) in view.members.iter().chunks(columns).into_iter().enumerate() {
        let line = row(grid, index as u16 * CARD_HEIGHT, CARD_HEIGHT);
        if line.height == 0 {
            break;
        }
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(line);
        for (member, cell) in chunk.zip(cells.iter()) {
            render_card(buf, *cell, theme, member);
        }
    }
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

fn render_prompt(buf: &mut Buffer, area: Rect, view: &TeamView) {
    let theme = view.theme;
    let area = centered(area, 90u16.min(area.width.saturating_sub(4)));
    let border_style = if view.editing {
        theme.ratatui_style(Element::Active)
    } else {
        theme.ratatui_style(Element::Border)
    };
    let block = Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Ask AI Club ")
        .style(border_style);

    let mut spans = vec![
        Span::styled("> ", theme.accent_style()),
        Span::styled(view.prompt, theme.text_style()),
    ];
    let caret = view.editing
        || (!view.revealed && blink_visible(view.elapsed, Duration::from_millis(1000)));
    if caret {
        spans.push(Span::styled("_", theme.highlight_style()));
    }
    let content = Line::from(spans);
    // keep the end of a long prompt in view
    let overflow = (content.width() as u16).saturating_sub(block.inner(area).width);

    Paragraph::new(content)
        .style(theme.text_style())
        .block(block)
        .scroll((0, overflow))
        .render(area, buf);
}

fn render_card(buf: &mut Buffer, area: Rect, theme: &Theme, member: &TeamMember) {
    let area = Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), area.height);
    let surface = theme.ratatui_style(Element::Surface);
    let block = Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(surface);
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", member.initials()), theme.ratatui_style(Element::Badge)),
            Span::styled(" ", surface),
            Span::styled(member.name, surface.add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(member.role, surface.fg(theme.colors().brand))),
    ];
    lines.extend(
        description_lines(member.description, inner.width as usize)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, surface.fg(theme.colors().muted)))),
    );
    if member.linkedin.is_some() {
        lines.push(Line::from(Span::styled("in LinkedIn", surface.fg(theme.colors().brand))));
    }

    Paragraph::new(lines).style(surface).render(inner, buf);
}

/// Description wrapped to the card width, cut to a fixed number of lines.
fn description_lines(description: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let wrapped = textwrap::wrap(description, width);
    let truncated = wrapped.len() > DESCRIPTION_LINES;
    let mut lines: Vec<String> = wrapped
        .into_iter()
        .take(DESCRIPTION_LINES)
        .map(|line| line.into_owned())
        .collect();
    if truncated {
        if let Some(last) = lines.last_mut() {
            while last.width() + 1 > width && last.pop().is_some() {}
            last.push('…');
        }
    }
    lines
}
