use super::{
    footer::{footer_height, FooterView},
    hero::{HeroLayout, HeroView},
    menu_drawer::render_menu_drawer,
    nav_bar::{render_nav_bar, NavBarParams},
    page::{render_page, PageView},
    status_bar::render_status_bar,
    team::{TeamLayout, TeamView},
};
use aiclub_core::{
    content::{SAMPLE_PROMPTS, STATS},
    counter::{AnimatedCounter, CounterSpec},
    frames::FrameScheduler,
    navigation::{is_scrolled, MenuState, NavLink, ScrollSpy, NAV_LINKS},
    page::{PageLayout, SectionBlock, SectionId},
    roster::{filter_members, RosterFilter, TeamMember},
    scroll::Viewport,
    settings::Settings,
    theme::{Element, Theme},
};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    prelude::{Constraint, CrosstermBackend, Direction, Frame, Layout, Rect, Terminal},
    widgets::Block,
};
use std::io::Stdout;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;

const NAV_HEIGHT: u16 = 2;
const STATUS_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Browse,
    Menu,
    EditingPrompt,
    EditingNewsletter,
}

fn split(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area)
}

pub struct App {
    should_quit: bool,
    theme: Theme,
    mode: AppMode,
    settings: Settings,
    roster: &'static [TeamMember],
    frames: FrameScheduler,
    elapsed: Duration,
    viewport: Viewport,
    spy: ScrollSpy,
    menu: MenuState,
    stats: Vec<AnimatedCounter>,
    stats_seen: bool,
    filter: RosterFilter,
    visible: Vec<TeamMember>,
    revealed: bool,
    prompt: String,
    newsletter: String,
    subscribed: Option<String>,
    size: Rect,
    page: PageLayout,
}

impl App {
    pub fn new(settings: Settings, roster: &'static [TeamMember]) -> Self {
        let theme = Theme::new(settings.theme);
        let stats = STATS
            .iter()
            .map(|stat| {
                AnimatedCounter::new(
                    CounterSpec::to(stat.value).over(settings.counter_duration_secs),
                )
            })
            .collect();
        let filter = RosterFilter::default();
        Self {
            should_quit: false,
            theme,
            mode: AppMode::Browse,
            settings,
            roster,
            frames: FrameScheduler::new(),
            elapsed: Duration::ZERO,
            viewport: Viewport::default(),
            spy: ScrollSpy::default(),
            menu: MenuState::default(),
            stats,
            stats_seen: false,
            filter,
            visible: filter_members(roster, filter),
            revealed: false,
            prompt: SAMPLE_PROMPTS[0].to_string(),
            newsletter: String::new(),
            subscribed: None,
            size: Rect::default(),
            page: PageLayout::default(),
        }
    }

    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let mut ticker = tokio::time::interval(self.settings.frame_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let epoch = Instant::now();
        self.resize(terminal.size()?)?;

        while !self.should_quit {
            ticker.tick().await;
            self.handle_events()?;

            let size = terminal.size()?;
            if size != self.size {
                self.resize(size)?;
            }
            self.advance_frame(epoch.elapsed());
            terminal.draw(|frame| self.render(frame))?;
        }

        self.teardown();
        Ok(())
    }

    fn body_area(&self) -> Rect {
        split(self.size)[1]
    }

    fn is_compact(&self) -> bool {
        self.size.width < self.settings.compact_width
    }

    fn footer_view(&self) -> FooterView<'_> {
        FooterView {
            theme: &self.theme,
            newsletter: &self.newsletter,
            editing: self.mode == AppMode::EditingNewsletter,
            subscribed: self.subscribed.as_deref(),
        }
    }

    fn page_view(&self) -> PageView<'_> {
        PageView {
            hero: HeroView {
                theme: &self.theme,
                elapsed: self.elapsed,
                counters: &self.stats,
            },
            team: TeamView {
                theme: &self.theme,
                members: &self.visible,
                filter: self.filter,
                prompt: &self.prompt,
                revealed: self.revealed,
                editing: self.mode == AppMode::EditingPrompt,
                elapsed: self.elapsed,
            },
            footer: self.footer_view(),
        }
    }

    /// Track a new terminal size and lay the page out again.
    pub fn resize(&mut self, size: Rect) -> Result<()> {
        tracing::debug!(width = size.width, height = size.height, "resize");
        self.size = size;
        if self.menu.is_open() && !self.is_compact() {
            self.menu.close();
            self.mode = AppMode::Browse;
        }
        self.relayout()
    }

    fn relayout(&mut self) -> Result<()> {
        let body = self.body_area();
        let hero = HeroLayout::new(body.width);
        let team = TeamLayout::new(body.width, self.revealed, self.visible.len());
        let footer = footer_height(&self.footer_view(), body.width);

        self.page = PageLayout::compute(
            body.width,
            body.height,
            &[
                SectionBlock::new(SectionId::Home, hero.height).fill_viewport(),
                SectionBlock::new(SectionId::Team, team.height),
                SectionBlock::new(SectionId::Footer, footer),
            ],
        )?;
        self.viewport
            .set_max_offset(self.page.max_scroll(body.height), &mut self.frames);
        self.after_scroll();
        Ok(())
    }

    /// Run every frame callback due at `now` (time since start).
    pub fn advance_frame(&mut self, now: Duration) {
        self.elapsed = now;
        for id in self.frames.begin_frame() {
            for counter in self.stats.iter_mut() {
                counter.on_frame(&mut self.frames, id, now);
            }
            self.viewport.on_frame(&mut self.frames, id, now);
        }
        self.after_scroll();
    }

    fn after_scroll(&mut self) {
        self.spy.observe(
            self.viewport.offset(),
            &self.page,
            self.settings.scroll_spy_probe,
        );
        if !self.stats_seen && self.stats_in_view() {
            tracing::info!("hero statistics in view");
            self.stats_seen = true;
            self.start_stats();
        }
    }

    fn stats_in_view(&self) -> bool {
        let Some(home) = self.page.span(SectionId::Home) else {
            return false;
        };
        let body = self.body_area();
        let rows = HeroLayout::new(body.width).stats_rows();
        let top = home.top + rows.start;
        let bottom = home.top + rows.end;
        let window_top = self.viewport.offset();
        let window_bottom = window_top.saturating_add(body.height);
        body.height > 0 && top < window_bottom && bottom > window_top
    }

    fn start_stats(&mut self) {
        for counter in self.stats.iter_mut() {
            counter.activate(&mut self.frames);
        }
    }

    fn navigate(&mut self, link: NavLink) {
        match link.target().and_then(|id| self.page.offset_of(id)) {
            Some(top) => {
                tracing::debug!(link = link.name, top, "navigating");
                self.viewport
                    .scroll_to(top, self.settings.scroll_duration_secs, &mut self.frames);
            }
            None => tracing::debug!(link = link.name, "section not on page"),
        }
    }

    fn scroll_down(&mut self) {
        let next = self
            .page
            .next_after(self.spy.active())
            .and_then(|id| self.page.offset_of(id));
        if let Some(top) = next {
            self.viewport
                .scroll_to(top, self.settings.scroll_duration_secs, &mut self.frames);
        }
    }

    fn set_filter(&mut self, filter: RosterFilter) -> Result<()> {
        self.filter = filter;
        self.visible = filter_members(self.roster, filter);
        tracing::debug!(filter = filter.label(), shown = self.visible.len(), "roster filter");
        self.relayout()
    }

    fn next_sample_prompt(&mut self) {
        let next = SAMPLE_PROMPTS
            .iter()
            .position(|sample| *sample == self.prompt)
            .map_or(0, |index| (index + 1) % SAMPLE_PROMPTS.len());
        self.prompt = SAMPLE_PROMPTS[next].to_string();
    }

    fn reveal_team(&mut self) -> Result<()> {
        tracing::info!(prompt = %self.prompt, "team revealed");
        self.revealed = true;
        self.relayout()
    }

    fn subscribe(&mut self) -> Result<()> {
        let email = self.newsletter.trim();
        if email.contains('@') {
            tracing::info!(email, "newsletter subscription");
            self.subscribed = Some(email.to_string());
            self.newsletter.clear();
        } else {
            tracing::debug!(input = email, "ignoring newsletter input");
        }
        self.relayout()
    }

    fn toggle_theme(&mut self) {
        self.theme.toggle();
        self.settings.theme = self.theme.variant();
        if let Err(err) = self.settings.save() {
            tracing::warn!(%err, "could not save theme");
        }
    }

    /// Cancel every outstanding frame request.
    fn teardown(&mut self) {
        for counter in self.stats.iter_mut() {
            counter.cancel(&mut self.frames);
        }
        self.viewport.stop(&mut self.frames);
        tracing::debug!(pending = self.frames.pending_count(), "animations stopped");
    }

    fn handle_events(&mut self) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key)?;
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        let page_step = self.body_area().height.saturating_sub(1).max(1) as i32;
        match self.mode {
            AppMode::Browse => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Up | KeyCode::Char('k') => self.viewport.scroll_by(-1, &mut self.frames),
                KeyCode::Down | KeyCode::Char('j') => self.viewport.scroll_by(1, &mut self.frames),
                KeyCode::PageUp => self.viewport.scroll_by(-page_step, &mut self.frames),
                KeyCode::PageDown => self.viewport.scroll_by(page_step, &mut self.frames),
                KeyCode::Home => {
                    self.viewport
                        .scroll_to(0, self.settings.scroll_duration_secs, &mut self.frames)
                }
                KeyCode::End => {
                    let bottom = self.viewport.max_offset();
                    self.viewport
                        .scroll_to(bottom, self.settings.scroll_duration_secs, &mut self.frames)
                }
                KeyCode::Char(' ') => self.scroll_down(),
                KeyCode::Char(c @ '1'..='7') => {
                    self.navigate(NAV_LINKS[(c as u8 - b'1') as usize]);
                }
                KeyCode::Left => self.set_filter(self.filter.previous())?,
                KeyCode::Right => self.set_filter(self.filter.next())?,
                KeyCode::Char('p') => self.mode = AppMode::EditingPrompt,
                KeyCode::Enter if !self.revealed => self.mode = AppMode::EditingPrompt,
                KeyCode::Char('n') => self.mode = AppMode::EditingNewsletter,
                KeyCode::Char('r') => {
                    self.stats_seen = true;
                    self.start_stats();
                }
                KeyCode::Char('t') => self.toggle_theme(),
                KeyCode::Char('m') if self.is_compact() => {
                    self.menu.toggle();
                    if self.menu.is_open() {
                        self.mode = AppMode::Menu;
                    }
                }
                _ => {}
            },
            AppMode::Menu => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Up | KeyCode::Char('k') => self.menu.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => self.menu.select_next(),
                KeyCode::Enter => {
                    let link = self.menu.choose();
                    self.mode = AppMode::Browse;
                    self.navigate(link);
                }
                KeyCode::Esc | KeyCode::Char('m') => {
                    self.menu.close();
                    self.mode = AppMode::Browse;
                }
                _ => {}
            },
            AppMode::EditingPrompt => match key.code {
                KeyCode::Enter => {
                    self.mode = AppMode::Browse;
                    self.reveal_team()?;
                }
                KeyCode::Esc => self.mode = AppMode::Browse,
                KeyCode::Tab => self.next_sample_prompt(),
                KeyCode::Backspace => {
                    self.prompt.pop();
                }
                KeyCode::Char(c) => self.prompt.push(c),
                _ => {}
            },
            AppMode::EditingNewsletter => match key.code {
                KeyCode::Enter => {
                    self.mode = AppMode::Browse;
                    self.subscribe()?;
                }
                KeyCode::Esc => self.mode = AppMode::Browse,
                KeyCode::Backspace => {
                    self.newsletter.pop();
                }
                KeyCode::Char(c) => self.newsletter.push(c),
                _ => {}
            },
        }

        self.after_scroll();
        Ok(())
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.size();
        frame.render_widget(
            Block::new().style(self.theme.ratatui_style(Element::Background)),
            area,
        );

        let chunks = split(area);
        let compact = self.is_compact();

        render_nav_bar(
            frame,
            chunks[0],
            NavBarParams {
                theme: &self.theme,
                spy: &self.spy,
                scrolled: is_scrolled(self.viewport.offset(), self.settings.scrolled_threshold),
                compact,
                menu_open: self.menu.is_open(),
            },
        );
        render_page(
            frame,
            chunks[1],
            &self.page,
            self.viewport.offset(),
            &self.page_view(),
        );
        render_status_bar(frame, chunks[2], &self.theme, self.mode, compact);

        if self.menu.is_open() {
            render_menu_drawer(frame, chunks[1], &self.theme, &self.menu, &self.spy);
        }
    }
}
