//! Built-in menu table for the client dashboard.
//!
//! The store-management frontend declares these eleven sections. Hosts with
//! a different navigation surface build their own table and load it through
//! the [`MenuRegistry`](crate::menu::MenuRegistry) constructors instead.

use crate::menu::{AccessMode, MenuConfig, NavItem};

/// Well-known permission codes.
pub mod codes {
    /// View shift history and details.
    pub const SHIFT_READ: &str = "SHIFT_READ";
    /// Open a register shift.
    pub const SHIFT_OPEN: &str = "SHIFT_OPEN";
    /// Close and reconcile a register shift.
    pub const SHIFT_CLOSE: &str = "SHIFT_CLOSE";
    /// View end-of-day summaries.
    pub const DAY_SUMMARY_READ: &str = "DAY_SUMMARY_READ";
    /// View inventory levels.
    pub const INVENTORY_READ: &str = "INVENTORY_READ";
    /// Adjust inventory.
    pub const INVENTORY_MANAGE: &str = "INVENTORY_MANAGE";
    /// View lottery game and ticket state.
    pub const LOTTERY_READ: &str = "LOTTERY_READ";
    /// Manage lottery games and reconciliation.
    pub const LOTTERY_MANAGE: &str = "LOTTERY_MANAGE";
    /// View employee records.
    pub const EMPLOYEE_READ: &str = "EMPLOYEE_READ";
    /// Manage employee records.
    pub const EMPLOYEE_MANAGE: &str = "EMPLOYEE_MANAGE";
    /// View cashier assignments.
    pub const CASHIER_READ: &str = "CASHIER_READ";
    /// Manage cashier assignments.
    pub const CASHIER_MANAGE: &str = "CASHIER_MANAGE";
    /// Manage client roles and their permission grants.
    pub const CLIENT_ROLE_MANAGE: &str = "CLIENT_ROLE_MANAGE";
    /// View reports.
    pub const REPORT_READ: &str = "REPORT_READ";
}

fn always(key: &str, path: &str) -> MenuConfig {
    MenuConfig {
        key: key.to_string(),
        path: Some(path.to_string()),
        permissions: vec![],
        mode: AccessMode::All,
        always_visible: true,
    }
}

fn any_of(key: &str, path: &str, permissions: &[&str]) -> MenuConfig {
    MenuConfig {
        key: key.to_string(),
        path: Some(path.to_string()),
        permissions: permissions.iter().map(ToString::to_string).collect(),
        mode: AccessMode::Any,
        always_visible: false,
    }
}

fn all_of(key: &str, path: &str, permissions: &[&str]) -> MenuConfig {
    MenuConfig {
        key: key.to_string(),
        path: Some(path.to_string()),
        permissions: permissions.iter().map(ToString::to_string).collect(),
        mode: AccessMode::All,
        always_visible: false,
    }
}

/// The standard client-dashboard menu table.
///
/// Dashboard, AI Assistant, and Settings are visible to every user;
/// role administration demands the full role-management grant; the other
/// sections open to any of their read/manage codes. Shift readers also see
/// the daily summary, which is derived from shift data.
pub fn client_dashboard_menu() -> Vec<MenuConfig> {
    use codes::*;

    vec![
        always("dashboard", "/client-dashboard"),
        any_of(
            "shifts",
            "/client-dashboard/shifts",
            &[SHIFT_READ, SHIFT_OPEN, SHIFT_CLOSE],
        ),
        any_of(
            "day-summary",
            "/client-dashboard/day-summary",
            &[DAY_SUMMARY_READ, SHIFT_READ],
        ),
        any_of(
            "inventory",
            "/client-dashboard/inventory",
            &[INVENTORY_READ, INVENTORY_MANAGE],
        ),
        any_of(
            "lottery",
            "/client-dashboard/lottery",
            &[LOTTERY_READ, LOTTERY_MANAGE],
        ),
        any_of(
            "employees",
            "/client-dashboard/employees",
            &[EMPLOYEE_READ, EMPLOYEE_MANAGE],
        ),
        any_of(
            "cashiers",
            "/client-dashboard/cashiers",
            &[CASHIER_READ, CASHIER_MANAGE],
        ),
        all_of("roles", "/client-dashboard/roles", &[CLIENT_ROLE_MANAGE]),
        any_of("reports", "/client-dashboard/reports", &[REPORT_READ]),
        always("ai", "/client-dashboard/ai"),
        always("settings", "/client-dashboard/settings"),
    ]
}

/// The standard client-dashboard navigation list, in display order.
pub fn client_dashboard_nav() -> Vec<NavItem> {
    vec![
        NavItem::new("Dashboard", "/client-dashboard")
            .with_icon("gauge")
            .exact_match(),
        NavItem::new("Shift Management", "/client-dashboard/shifts").with_icon("clock"),
        NavItem::new("Daily Summary", "/client-dashboard/day-summary").with_icon("calendar-check"),
        NavItem::new("Inventory", "/client-dashboard/inventory").with_icon("boxes"),
        NavItem::new("Lottery", "/client-dashboard/lottery").with_icon("ticket"),
        NavItem::new("Employees", "/client-dashboard/employees").with_icon("users"),
        NavItem::new("Cashiers", "/client-dashboard/cashiers").with_icon("id-card"),
        NavItem::new("Roles", "/client-dashboard/roles").with_icon("shield"),
        NavItem::new("Reports", "/client-dashboard/reports").with_icon("bar-chart"),
        NavItem::new("AI Assistant", "/client-dashboard/ai").with_icon("sparkles"),
        NavItem::new("Settings", "/client-dashboard/settings").with_icon("settings"),
    ]
}
