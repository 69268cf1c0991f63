use aiclub_core::{
    navigation::{MenuState, ScrollSpy, NAV_LINKS, SOCIAL_LINKS},
    theme::{Element, Theme},
};
use itertools::Itertools;
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

const DRAWER_WIDTH: u16 = 32;

/// Right-hand slice of `area` the drawer slides into.
pub fn drawer_area(area: Rect) -> Rect {
    let width = DRAWER_WIDTH.min(area.width);
    Rect::new(area.x + area.width - width, area.y, width, area.height)
}

pub fn render_menu_drawer(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    menu: &MenuState,
    spy: &ScrollSpy,
) {
    let area = drawer_area(area);
    frame.render_widget(Clear, area);

    let block = Block::new()
        .title(" Menu ")
        .borders(Borders::LEFT | Borders::BOTTOM)
        .style(theme.ratatui_style(Element::Surface));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Links
            Constraint::Length(3), // Socials
        ])
        .split(inner);

    let items: Vec<ListItem> = NAV_LINKS
        .iter()
        .enumerate()
        .map(|(index, link)| {
            let marker = if spy.is_active(link) { "●" } else { " " };
            let style = if index == menu.selected() {
                theme.highlight_style()
            } else if spy.is_active(link) {
                theme.ratatui_style(Element::Active)
            } else {
                theme.ratatui_style(Element::Surface)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(format!("{:<20}", link.name), style.add_modifier(Modifier::BOLD)),
            ]))
        })
        .collect();

    frame.render_widget(
        List::new(items).style(theme.ratatui_style(Element::Surface)),
        chunks[0],
    );

    let socials = Paragraph::new(vec![
        Line::from(Span::styled(
            "Connect with us",
            theme.ratatui_style(Element::Surface).add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled(
            SOCIAL_LINKS.iter().map(|link| link.name).join(" · "),
            theme.ratatui_style(Element::Active),
        )),
    ])
    .alignment(Alignment::Center)
    .style(theme.ratatui_style(Element::Surface));
    frame.render_widget(socials, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawer_hugs_right_edge() {
        let area = Rect::new(0, 2, 80, 20);
        let drawer = drawer_area(area);
        assert_eq!(drawer.x + drawer.width, 80);
        assert_eq!(drawer.width, DRAWER_WIDTH);
        assert_eq!(drawer.height, 20);
    }

    #[test]
    fn test_drawer_never_exceeds_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(drawer_area(area), area);
    }
}
