//! Route descriptors and active-route evaluation for the navigation bar.

use serde::{Deserialize, Serialize};

/// Icon tags used by the navigation shell.
///
/// Stroke paths follow the 24x24 outline icon grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    TrendingUp,
    BarChart,
    Info,
    Sun,
    Moon,
    Menu,
    Close,
}

impl NavIcon {
    /// SVG path data, one entry per `<path>` element
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            NavIcon::TrendingUp => &["M22 7 13.5 15.5 8.5 10.5 2 17", "M16 7h6v6"],
            NavIcon::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            NavIcon::Info => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0 -20 0",
                "M12 16v-4",
                "M12 8h.01",
            ],
            NavIcon::Sun => &[
                "M8 12a4 4 0 1 0 8 0a4 4 0 1 0 -8 0",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            NavIcon::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            NavIcon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            NavIcon::Close => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}

/// A navigable destination in the nav bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub name: String,
    pub href: String,
    pub icon: NavIcon,
}

impl RouteDescriptor {
    pub fn new(name: impl Into<String>, href: impl Into<String>, icon: NavIcon) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            icon,
        }
    }

    /// Exact string match against the router's current path.
    ///
    /// No trailing-slash normalization, case folding or query stripping:
    /// `/analysis/` and `/Analysis` do not activate `/analysis`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.href == current_path
    }
}

/// Default route table, in display order
pub fn default_routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::new("Home", "/", NavIcon::TrendingUp),
        RouteDescriptor::new("Stock Analysis", "/analysis", NavIcon::BarChart),
        RouteDescriptor::new("About", "/about", NavIcon::Info),
    ]
}

/// Routes highlighted for `current_path`, in display order.
pub fn active_routes<'a>(
    routes: &'a [RouteDescriptor],
    current_path: &'a str,
) -> impl Iterator<Item = &'a RouteDescriptor> + 'a {
    routes.iter().filter(move |r| r.is_active(current_path))
}
