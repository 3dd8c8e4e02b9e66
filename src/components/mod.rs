//! Reusable view components.

pub mod inventory_table;
pub mod loading_screen;
pub mod navbar;
pub mod notice_tray;
pub mod protected_route;
