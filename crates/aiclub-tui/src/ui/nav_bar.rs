use aiclub_core::{
    content::CLUB_NAME,
    navigation::{ScrollSpy, NAV_LINKS, SOCIAL_LINKS},
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct NavBarParams<'a> {
    pub theme: &'a Theme,
    pub spy: &'a ScrollSpy,
    /// Past the scroll threshold: draw on the raised surface.
    pub scrolled: bool,
    /// Too narrow for inline links: offer the drawer instead.
    pub compact: bool,
    pub menu_open: bool,
}

pub fn render_nav_bar(frame: &mut Frame, area: Rect, params: NavBarParams) {
    let theme = params.theme;
    let base = if params.scrolled {
        theme.ratatui_style(Element::Surface)
    } else {
        theme.ratatui_style(Element::Background)
    };

    let block = Block::new()
        .borders(Borders::BOTTOM)
        .style(base)
        .border_style(if params.scrolled {
            base.fg(theme.colors().brand)
        } else {
            base.fg(theme.colors().border)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let right_width = if params.compact { 10 } else { 12 };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CLUB_NAME.len() as u16 + 6),
            Constraint::Min(0),
            Constraint::Length(right_width),
        ])
        .split(inner);

    let logo = Line::from(vec![
        Span::styled(" ◆ ", theme.ratatui_style(Element::Badge)),
        Span::styled(format!(" {}", CLUB_NAME), base.fg(theme.colors().brand).add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(logo).style(base), chunks[0]);

    if !params.compact {
        let mut spans = Vec::with_capacity(NAV_LINKS.len() * 2);
        for (index, link) in NAV_LINKS.iter().enumerate() {
            let style = if params.spy.is_active(link) {
                base.fg(theme.colors().brand)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                base.fg(theme.colors().muted)
            };
            spans.push(Span::styled((index + 1).to_string(), base.fg(theme.colors().border)));
            spans.push(Span::styled(format!(" {} ", link.name), style));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans))
                .alignment(Alignment::Center)
                .style(base),
            chunks[1],
        );
    }

    let right = if params.compact {
        let label = if params.menu_open { "[M] ✕" } else { "[M] ☰" };
        Line::from(Span::styled(label, base.fg(theme.colors().brand)))
    } else {
        let names: Vec<Span> = SOCIAL_LINKS
            .iter()
            .map(|link| {
                Span::styled(
                    format!("{} ", short_name(link.name)),
                    base.fg(theme.colors().muted),
                )
            })
            .collect();
        Line::from(names)
    };
    frame.render_widget(
        Paragraph::new(right).alignment(Alignment::Right).style(base),
        chunks[2],
    );
}

fn short_name(name: &str) -> &str {
    match name {
        "LinkedIn" => "in",
        "Instagram" => "ig",
        "GitHub" => "gh",
        "Email" => "@",
        other => other,
    }
}
