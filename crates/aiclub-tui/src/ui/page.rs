use super::{
    footer::{render_footer, FooterView},
    hero::{render_hero, HeroView},
    team::{render_team, TeamView},
};
use aiclub_core::page::{PageLayout, SectionId, SectionSpan};
use ratatui::{
    buffer::Buffer,
    prelude::{Frame, Rect},
};

pub struct PageView<'a> {
    pub hero: HeroView<'a>,
    pub team: TeamView<'a>,
    pub footer: FooterView<'a>,
}

/// Draw one section onto its own canvas, origin at the section's top row.
fn render_section(span: SectionSpan, width: u16, view: &PageView) -> Buffer {
    let area = Rect::new(0, 0, width, span.height);
    let mut canvas = Buffer::empty(area);
    match span.id {
        SectionId::Home => render_hero(&mut canvas, area, &view.hero),
        SectionId::Team => render_team(&mut canvas, area, &view.team),
        SectionId::Footer => render_footer(&mut canvas, area, &view.footer),
        other => tracing::trace!(section = %other, "no view for section"),
    }
    canvas
}

/// Render the page scrolled to `offset` into `area`. Only sections that
/// overlap the window are drawn.
pub fn render_page(frame: &mut Frame, area: Rect, page: &PageLayout, offset: u16, view: &PageView) {
    let window_end = offset.saturating_add(area.height);
    let buf = frame.buffer_mut();

    for span in page.spans() {
        let visible_from = span.top.max(offset);
        let visible_to = span.bottom().min(window_end);
        if visible_from >= visible_to {
            continue;
        }

        let canvas = render_section(*span, area.width, view);
        for y in visible_from..visible_to {
            let source_row = y - span.top;
            if source_row >= canvas.area.height {
                break;
            }
            let target_row = area.y + (y - offset);
            for col in 0..area.width.min(canvas.area.width) {
                *buf.get_mut(area.x + col, target_row) = canvas.get(col, source_row).clone();
            }
        }
    }
}
