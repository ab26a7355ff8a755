use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};

/// Every sidebar target. Only some have a page behind them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Dashboard,
    Customers,
    Devices,
    Repairs,
    Inventory,
    Reports,
    Settings,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Customers => "/customers",
            Route::Devices => "/devices",
            Route::Repairs => "/repairs",
            Route::Inventory => "/inventory",
            Route::Reports => "/reports",
            Route::Settings => "/settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Customers => "Customers",
            Route::Devices => "Devices",
            Route::Repairs => "Repairs",
            Route::Inventory => "Inventory",
            Route::Reports => "Reports",
            Route::Settings => "Settings",
        }
    }

    /// Icon name in the sidebar's icon set.
    pub fn icon(&self) -> &'static str {
        match self {
            Route::Dashboard => "layout-dashboard",
            Route::Customers => "users",
            Route::Devices => "laptop",
            Route::Repairs => "wrench",
            Route::Inventory => "boxes",
            Route::Reports => "file-text",
            Route::Settings => "settings",
        }
    }

    /// Whether a page is wired up for this target.
    pub fn is_routed(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Customers | Route::Devices)
    }

    /// Exact path match; a single trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(rest) => rest,
        };
        Route::iter().find(|route| route.path() == trimmed)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// Sidebar entries in display order, with the current path highlighted.
pub fn navigation(current_path: &str) -> Vec<NavItem> {
    let current = Route::from_path(current_path);
    Route::iter()
        .map(|route| NavItem {
            route,
            label: route.label(),
            href: route.path(),
            icon: route.icon(),
            active: current == Some(route),
        })
        .collect()
}
