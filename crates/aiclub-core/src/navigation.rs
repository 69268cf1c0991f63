//! Navigation links and the two independent pieces of navigation state:
//! which section is active (scroll-spy) and whether the compact menu is open.

use crate::page::{PageLayout, SectionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavLink {
    /// Section the link points at, if it is an in-page anchor.
    pub fn target(&self) -> Option<SectionId> {
        match SectionId::from_anchor(self.href) {
            Ok(id) => Some(id),
            Err(err) => {
                tracing::debug!(link = self.name, %err, "link has no section target");
                None
            }
        }
    }
}

pub const NAV_LINKS: [NavLink; 7] = [
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Objectives", href: "#objectives" },
    NavLink { name: "Outcomes", href: "#outcomes" },
    NavLink { name: "Team", href: "#team" },
    NavLink { name: "Activities", href: "#activities" },
    NavLink { name: "Editorials", href: "#editorials" },
];

pub const SOCIAL_LINKS: [NavLink; 4] = [
    NavLink { name: "LinkedIn", href: "#" },
    NavLink { name: "Instagram", href: "#" },
    NavLink { name: "GitHub", href: "#" },
    NavLink { name: "Email", href: "#" },
];

/// Whether the page has scrolled far enough for the raised navigation style.
pub fn is_scrolled(offset: u16, threshold: u16) -> bool {
    offset > threshold
}

/// Whether some entry of [`NAV_LINKS`] points at `id`.
fn is_link_target(id: SectionId) -> bool {
    NAV_LINKS
        .iter()
        .any(|link| SectionId::from_anchor(link.href).ok() == Some(id))
}

/// Tracks the linked section under the probe row. `observe` is the only writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSpy {
    active: SectionId,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self {
            active: SectionId::Home,
        }
    }
}

impl ScrollSpy {
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Re-evaluate against the current scroll offset. Keeps the previous
    /// section when nothing is under the probe. Returns true on change.
    pub fn observe(&mut self, offset: u16, page: &PageLayout, probe: u16) -> bool {
        let row = offset.saturating_add(probe);
        let hit = page
            .spans()
            .iter()
            .filter(|span| is_link_target(span.id))
            .find(|span| span.top <= row && span.bottom() >= row)
            .map(|span| span.id);
        match hit {
            Some(section) if section != self.active => {
                tracing::debug!(from = %self.active, to = %section, "active section changed");
                self.active = section;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self, link: &NavLink) -> bool {
        link.target() == Some(self.active)
    }
}

/// Open/closed state of the compact navigation drawer plus its cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
    selected: usize,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % NAV_LINKS.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + NAV_LINKS.len() - 1) % NAV_LINKS.len();
    }

    /// Take the highlighted link and close the drawer.
    pub fn choose(&mut self) -> NavLink {
        self.open = false;
        NAV_LINKS[self.selected]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::SectionBlock;

    fn page() -> PageLayout {
        PageLayout::compute(
            80,
            20,
            &[
                SectionBlock::new(SectionId::Home, 10).fill_viewport(),
                SectionBlock::new(SectionId::Team, 25),
                SectionBlock::new(SectionId::Footer, 10),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_scroll_spy_follows_probe_row() {
        let page = page();
        let mut spy = ScrollSpy::default();
        assert!(!spy.observe(0, &page, 2));
        assert_eq!(spy.active(), SectionId::Home);

        assert!(spy.observe(19, &page, 2));
        assert_eq!(spy.active(), SectionId::Team);

        // the footer has no navigation link
        assert!(!spy.observe(44, &page, 2));
        assert_eq!(spy.active(), SectionId::Team);
    }

    #[test]
    fn test_scroll_spy_skips_footer() {
        let page = page();
        let mut spy = ScrollSpy::default();
        assert!(spy.observe(30, &page, 0));
        let footer = page.offset_of(SectionId::Footer).unwrap();
        assert!(!spy.observe(footer, &page, 2));
        assert_eq!(spy.active(), SectionId::Team);
        assert!(!spy.observe(page.total_height(), &page, 0));
        assert_eq!(spy.active(), SectionId::Team);
        assert!(NAV_LINKS.iter().any(|link| spy.is_active(link)));
    }

    #[test]
    fn test_scroll_spy_keeps_section_when_nothing_matches() {
        let page = page();
        let mut spy = ScrollSpy::default();
        spy.observe(30, &page, 0);
        assert_eq!(spy.active(), SectionId::Team);
        assert!(!spy.observe(500, &page, 0));
        assert_eq!(spy.active(), SectionId::Team);
    }

    #[test]
    fn test_active_link() {
        let mut spy = ScrollSpy::default();
        assert!(spy.is_active(&NAV_LINKS[0]));
        spy.observe(30, &page(), 0);
        assert!(spy.is_active(&NAV_LINKS[4]));
        assert!(!spy.is_active(&NAV_LINKS[0]));
    }

    #[test]
    fn test_is_scrolled_threshold() {
        assert!(!is_scrolled(0, 1));
        assert!(!is_scrolled(1, 1));
        assert!(is_scrolled(2, 1));
    }

    #[test]
    fn test_menu_toggle_and_choose() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.select_previous();
        assert_eq!(menu.selected(), NAV_LINKS.len() - 1);
        menu.select_next();
        menu.select_next();
        assert_eq!(menu.selected(), 1);
        let link = menu.choose();
        assert_eq!(link.name, "About");
        assert!(!menu.is_open());
    }

    #[test]
    fn test_link_targets() {
        assert_eq!(NAV_LINKS[4].target(), Some(SectionId::Team));
        assert!(SOCIAL_LINKS.iter().all(|link| link.target().is_none()));
    }
}
