//! # AI Club Core Library
//!
//! Everything the showcase needs that does not depend on a terminal: the
//! team roster and its category filter, the frame scheduler and the
//! animations driven by it, the page model the views are laid out on, and
//! configuration.
//!
//! ## Modules
//!
//! - `roster`: team-member records and the category filter
//! - `data`: keyed data queries backing the roster view
//! - `frames`: frame-callback scheduling
//! - `counter`: the animated count-up display
//! - `scroll`: viewport offset with smooth scrolling
//! - `page`: section anchors and page layout
//! - `navigation`: nav links, scroll-spy and the compact menu
//! - `effects`: decorative hero text effects
//! - `content`: hardcoded copy
//! - `settings`: application configuration
//! - `theme`: UI theming

pub mod content;
pub mod counter;
pub mod data;
pub mod effects;
pub mod error;
pub mod frames;
pub mod navigation;
pub mod page;
pub mod roster;
pub mod scroll;
pub mod settings;
pub mod theme;

pub use error::{Result, SiteError};
