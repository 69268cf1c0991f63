use crate::ui::app::AppMode;
use aiclub_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key_hint<'a>(key: &'a str, label: &'a str, theme: &Theme) -> [Span<'a>; 2] {
    [
        Span::styled(key, theme.ratatui_style(Element::Active)),
        Span::styled(label, theme.ratatui_style(Element::Inactive)),
    ]
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, theme: &Theme, mode: AppMode, compact: bool) {
    let hints: Vec<(&str, &str)> = match mode {
        AppMode::Browse => {
            let mut hints = vec![
                ("[↑↓]", " Scroll"),
                ("[1-7]", " Jump"),
                ("[←→]", " Filter"),
                ("[P]", "rompt"),
                ("[N]", "ewsletter"),
                ("[R]", "eplay"),
                ("[T]", "heme"),
            ];
            if compact {
                hints.push(("[M]", "enu"));
            }
            hints.push(("[Q]", "uit"));
            hints
        }
        AppMode::Menu => vec![("[↑↓]", " Navigate"), ("[ENTER]", " Go"), ("[ESC]", " Close")],
        AppMode::EditingPrompt => {
            vec![("[ENTER]", " Ask"), ("[TAB]", " Sample"), ("[ESC]", " Cancel")]
        }
        AppMode::EditingNewsletter => vec![("[ENTER]", " Subscribe"), ("[ESC]", " Cancel")],
    };

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (index, (key, label)) in hints.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" | ", theme.ratatui_style(Element::Inactive)));
        }
        spans.extend(key_hint(key, label, theme));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .style(theme.ratatui_style(Element::Surface));
    frame.render_widget(paragraph, area);
}
