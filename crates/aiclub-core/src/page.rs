//! Page model: section anchors and the vertical stack they are laid out in.
//!
//! The page is one long column of sections. Positions are measured in rows
//! from the top of the document; the viewport scrolls over it.

use crate::error::{Result, SiteError};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};
use taffy::{
    geometry::Size,
    style::{Dimension, FlexDirection, Style},
    AvailableSpace, NodeId, TaffyTree,
};

/// Anchored sections. The anchor is `#` followed by the lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Objectives,
    Outcomes,
    Team,
    Activities,
    Editorials,
    Footer,
}

impl SectionId {
    /// Resolve an in-page link target such as `#team`.
    pub fn from_anchor(href: &str) -> Result<Self> {
        href.strip_prefix('#')
            .and_then(|name| SectionId::from_str(name).ok())
            .ok_or_else(|| SiteError::UnknownAnchor(href.to_string()))
    }

    pub fn anchor(&self) -> String {
        format!("#{}", self)
    }
}

/// A section to be placed on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBlock {
    pub id: SectionId,
    /// Rows the section's content needs.
    pub height: u16,
    /// Stretch to at least one full viewport (the hero's `min-h-screen`).
    pub fill_viewport: bool,
}

impl SectionBlock {
    pub fn new(id: SectionId, height: u16) -> Self {
        Self {
            id,
            height,
            fill_viewport: false,
        }
    }

    pub fn fill_viewport(mut self) -> Self {
        self.fill_viewport = true;
        self
    }
}

/// Placement of one section on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: u16,
    pub height: u16,
}

impl SectionSpan {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    spans: Vec<SectionSpan>,
    total_height: u16,
}

impl PageLayout {
    /// Stack `blocks` top to bottom with a flex column.
    pub fn compute(width: u16, viewport_height: u16, blocks: &[SectionBlock]) -> Result<Self> {
        let mut taffy: TaffyTree<()> = TaffyTree::new();

        let nodes = blocks
            .iter()
            .map(|block| {
                let min_height = if block.fill_viewport {
                    Dimension::Length(viewport_height as f32)
                } else {
                    Dimension::Auto
                };
                taffy.new_leaf(Style {
                    size: Size {
                        width: Dimension::Percent(1.0),
                        height: Dimension::Length(block.height as f32),
                    },
                    min_size: Size {
                        width: Dimension::Auto,
                        height: min_height,
                    },
                    flex_shrink: 0.0,
                    ..Default::default()
                })
            })
            .collect::<std::result::Result<Vec<NodeId>, _>>()?;

        let root = taffy.new_with_children(
            Style {
                flex_direction: FlexDirection::Column,
                size: Size {
                    width: Dimension::Length(width as f32),
                    height: Dimension::Auto,
                },
                ..Default::default()
            },
            &nodes,
        )?;

        taffy.compute_layout(
            root,
            Size {
                width: AvailableSpace::Definite(width as f32),
                height: AvailableSpace::MaxContent,
            },
        )?;

        let mut spans = Vec::with_capacity(blocks.len());
        for (block, node) in blocks.iter().zip(nodes) {
            let layout = taffy.layout(node)?;
            spans.push(SectionSpan {
                id: block.id,
                top: layout.location.y.round() as u16,
                height: layout.size.height.round() as u16,
            });
        }
        let total_height = taffy.layout(root)?.size.height.round() as u16;

        Ok(Self {
            spans,
            total_height,
        })
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn span(&self, id: SectionId) -> Option<SectionSpan> {
        self.spans.iter().copied().find(|span| span.id == id)
    }

    /// Top row of a mounted section.
    pub fn offset_of(&self, id: SectionId) -> Option<u16> {
        self.span(id).map(|span| span.top)
    }

    /// First section whose `[top, bottom]` range contains `row`.
    pub fn section_at(&self, row: u16) -> Option<SectionId> {
        self.spans
            .iter()
            .find(|span| span.top <= row && span.bottom() >= row)
            .map(|span| span.id)
    }

    /// The mounted section after `id`, if any.
    pub fn next_after(&self, id: SectionId) -> Option<SectionId> {
        let index = self.spans.iter().position(|span| span.id == id)?;
        self.spans.get(index + 1).map(|span| span.id)
    }

    pub fn total_height(&self) -> u16 {
        self.total_height
    }

    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.total_height.saturating_sub(viewport_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(viewport: u16) -> PageLayout {
        PageLayout::compute(
            100,
            viewport,
            &[
                SectionBlock::new(SectionId::Home, 20).fill_viewport(),
                SectionBlock::new(SectionId::Team, 30),
                SectionBlock::new(SectionId::Footer, 12),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_sections_stack_without_gaps() {
        let page = sample(10);
        let spans = page.spans();
        assert_eq!(spans[0].top, 0);
        for pair in spans.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].top);
        }
        assert_eq!(page.total_height(), 62);
    }

    #[test]
    fn test_hero_fills_viewport() {
        let page = sample(35);
        assert_eq!(page.span(SectionId::Home).unwrap().height, 35);
        assert_eq!(page.offset_of(SectionId::Team), Some(35));
        assert_eq!(page.total_height(), 77);
    }

    #[test]
    fn test_section_at_prefers_first_match() {
        let page = sample(10);
        assert_eq!(page.section_at(0), Some(SectionId::Home));
        assert_eq!(page.section_at(20), Some(SectionId::Home));
        assert_eq!(page.section_at(21), Some(SectionId::Team));
        assert_eq!(page.section_at(61), Some(SectionId::Footer));
        assert_eq!(page.section_at(63), None);
    }

    #[test]
    fn test_unmounted_sections_have_no_offset() {
        let page = sample(10);
        assert_eq!(page.offset_of(SectionId::About), None);
        assert_eq!(page.next_after(SectionId::Home), Some(SectionId::Team));
        assert_eq!(page.next_after(SectionId::Footer), None);
    }

    #[test]
    fn test_max_scroll() {
        let page = sample(10);
        assert_eq!(page.max_scroll(10), 52);
        assert_eq!(page.max_scroll(500), 0);
    }

    #[test]
    fn test_anchor_round_trip() {
        assert_eq!(SectionId::from_anchor("#team").unwrap(), SectionId::Team);
        assert_eq!(SectionId::Editorials.anchor(), "#editorials");
        assert!(matches!(
            SectionId::from_anchor("#"),
            Err(SiteError::UnknownAnchor(_))
        ));
        assert!(SectionId::from_anchor("team").is_err());
    }
}
