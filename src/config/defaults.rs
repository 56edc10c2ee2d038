//! Built-in route table for the user-agent wallet dashboard.

use crate::config::schema::{RouteConfig, RouterConfig};

/// Routes of the user-agent dashboard.
///
/// The root layout forwards to its `dashboard` child. `/StoreVC` and `/GetVC`
/// are standalone pages outside the layout shell.
pub fn user_agent_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("/", "DashboardLayout")
            .named("dashboard")
            .redirect_to("dashboard")
            .with_children(vec![
                RouteConfig::new("dashboard", "Dashboard").named("Welcome to User Agent"),
                RouteConfig::new("ViewVC", "TableList").named("View Wallet"),
                RouteConfig::new("RegisterWallet", "RegisterWallet").named("Register Wallet"),
                RouteConfig::new("MyVC", "TablePresentation").named("Generate Presentation"),
                RouteConfig::new("Interop", "Interop").named("Interop"),
                RouteConfig::new("DIDManagement", "DIDManagement").named("DID Management"),
            ]),
        RouteConfig::new("/StoreVC", "StoreCredentials"),
        RouteConfig::new("/GetVC", "GetCredentials"),
    ]
}

impl RouterConfig {
    /// Default settings with the user-agent dashboard routes.
    pub fn user_agent() -> Self {
        Self {
            routes: user_agent_routes(),
            ..Self::default()
        }
    }
}
