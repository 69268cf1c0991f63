use aiclub_core::{
    content::{
        CLUB_NAME, COLLEGE_NAME, CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, COPYRIGHT,
        FOOTER_ABOUT, FOOTER_MOTTO, QUICK_LINKS, RESOURCES,
    },
    navigation::{NavLink, SOCIAL_LINKS},
    theme::{Element, Theme},
};
use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    prelude::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Footers narrower than this stack their columns.
const WIDE_FOOTER: u16 = 100;
const BOTTOM_BAR_HEIGHT: u16 = 3;

pub struct FooterView<'a> {
    pub theme: &'a Theme,
    pub newsletter: &'a str,
    pub editing: bool,
    /// Address confirmed by the last subscription, if any.
    pub subscribed: Option<&'a str>,
}

fn heading(text: &'static str, style: Style) -> Line<'static> {
    Line::from(Span::styled(text.to_uppercase(), style.add_modifier(Modifier::BOLD)))
}

fn link_lines(links: &[NavLink], style: Style) -> Vec<Line<'static>> {
    links
        .iter()
        .map(|link| Line::from(Span::styled(format!("› {}", link.name), style)))
        .collect()
}

fn wrapped(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    textwrap::wrap(text, (width as usize).max(8))
        .into_iter()
        .map(|line| Line::from(Span::styled(line.into_owned(), style)))
        .collect()
}

fn columns(view: &FooterView, width: u16) -> Vec<Vec<Line<'static>>> {
    let theme = view.theme;
    let base = theme.ratatui_style(Element::Footer);
    let brand = base.fg(theme.colors().brand);

    let mut about = vec![Line::from(Span::styled(
        CLUB_NAME,
        brand.add_modifier(Modifier::BOLD),
    ))];
    about.extend(wrapped(FOOTER_ABOUT, width, base));
    about.extend(wrapped(FOOTER_MOTTO, width, base.add_modifier(Modifier::ITALIC)));
    about.push(Line::from(Span::styled(
        SOCIAL_LINKS.iter().map(|link| link.name).join(" · "),
        brand,
    )));

    let mut quick = vec![heading("Quick Links", brand)];
    quick.extend(link_lines(&QUICK_LINKS, base));

    let mut resources = vec![heading("Resources", brand)];
    resources.extend(link_lines(&RESOURCES, base));

    let mut contact = vec![
        heading("Contact", brand),
        Line::from(Span::styled(format!("✉ {}", CONTACT_EMAIL), base)),
        Line::from(Span::styled(format!("☎ {}", CONTACT_PHONE), base)),
    ];
    contact.extend(wrapped(&format!("⌂ {}", CONTACT_ADDRESS), width, base));
    contact.push(Line::from(""));
    contact.push(heading("Stay Updated", brand));
    contact.push(newsletter_line(view, base));
    if let Some(address) = view.subscribed {
        contact.push(Line::from(Span::styled(
            format!("Subscribed {}", address),
            base.fg(theme.colors().brand_alt),
        )));
    }

    vec![about, quick, resources, contact]
}

fn newsletter_line(view: &FooterView, base: Style) -> Line<'static> {
    let input = if view.newsletter.is_empty() && !view.editing {
        Span::styled("[N] your@email.com", base.add_modifier(Modifier::DIM))
    } else {
        Span::styled(format!("{}_", view.newsletter), base.add_modifier(Modifier::UNDERLINED))
    };
    Line::from(vec![
        input,
        Span::raw(" "),
        Span::styled(" Subscribe ", view.theme.highlight_style()),
    ])
}

fn is_wide(width: u16) -> bool {
    width >= WIDE_FOOTER
}

fn column_width(width: u16) -> u16 {
    if is_wide(width) {
        width.saturating_sub(4) / 4
    } else {
        width.saturating_sub(4)
    }
}

/// Rows needed to draw the footer at `width`.
pub fn footer_height(view: &FooterView, width: u16) -> u16 {
    let cols = columns(view, column_width(width).saturating_sub(2));
    let body = if is_wide(width) {
        cols.iter().map(Vec::len).max().unwrap_or(0)
    } else {
        cols.iter().map(|col| col.len() + 1).sum()
    };
    body as u16 + 2 + BOTTOM_BAR_HEIGHT
}

pub fn render_footer(buf: &mut Buffer, area: Rect, view: &FooterView) {
    let theme = view.theme;
    let base = theme.ratatui_style(Element::Footer);
    buf.set_style(area, base);

    let body_height = area.height.saturating_sub(BOTTOM_BAR_HEIGHT);
    let body = Rect::new(area.x + 2, area.y + 1, area.width.saturating_sub(4), body_height.saturating_sub(1));
    let cols = columns(view, column_width(area.width).saturating_sub(2));

    if is_wide(area.width) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(body);
        for (lines, chunk) in cols.into_iter().zip(chunks.iter()) {
            Paragraph::new(lines).style(base).render(*chunk, buf);
        }
    } else {
        let stacked: Vec<Line> = cols
            .into_iter()
            .flat_map(|lines| lines.into_iter().chain(std::iter::once(Line::from(""))))
            .collect();
        Paragraph::new(stacked).style(base).render(body, buf);
    }

    let bar = Rect::new(
        area.x,
        area.y + body_height,
        area.width,
        BOTTOM_BAR_HEIGHT.min(area.height),
    );
    let block = Block::new()
        .borders(Borders::TOP)
        .style(base.fg(theme.colors().muted));
    let inner = block.inner(bar);
    block.render(bar, buf);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
        ])
        .split(inner);
    Paragraph::new(COPYRIGHT)
        .style(base)
        .render(chunks[0], buf);
    Paragraph::new(COLLEGE_NAME)
        .alignment(Alignment::Center)
        .style(base)
        .render(chunks[1], buf);
    Paragraph::new("[HOME] Back to Top ↑")
        .alignment(Alignment::Right)
        .style(base.fg(theme.colors().brand))
        .render(chunks[2], buf);
}
