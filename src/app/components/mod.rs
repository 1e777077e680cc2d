//! Shared UI components for the Dioxus web UI.

pub mod icon;
pub mod layout;
pub mod nav;
pub mod theme;

pub use icon::Icon;
pub use layout::Shell;
pub use nav::Navbar;
pub use theme::ThemeToggle;
