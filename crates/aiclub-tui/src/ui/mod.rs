pub mod app;
pub mod footer;
pub mod hero;
pub mod menu_drawer;
pub mod nav_bar;
pub mod page;
pub mod status_bar;
pub mod team;
