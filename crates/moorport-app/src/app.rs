use moorport_client::{ClientConfig, ConfigError, PortalClient};
use moorport_routes::{ResolvedRoute, RouteError, RouteTable};

use crate::routes::portal_routes;
use crate::views::View;

/// The application root: the route table and the fetch façade, explicitly
/// constructed and passed down — no ambient router singleton.
pub struct App {
    routes: RouteTable<View>,
    client: PortalClient,
}

impl App {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let routes = RouteTable::build(portal_routes());
        debug_assert!(routes.verify().is_ok());
        let client = PortalClient::from_config(config)?;
        Ok(Self { routes, client })
    }

    /// Swap in a preconstructed client (tests, custom transport).
    pub fn with_client(client: PortalClient) -> Self {
        let routes = RouteTable::build(portal_routes());
        debug_assert!(routes.verify().is_ok());
        Self { routes, client }
    }

    pub fn routes(&self) -> &RouteTable<View> {
        &self.routes
    }

    pub fn client(&self) -> &PortalClient {
        &self.client
    }

    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute<'_, View>> {
        self.routes.resolve(path)
    }

    pub fn path_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        self.routes.path_for(name, params)
    }

    /// Mark application start. Navigation and fetching are usable as soon as
    /// the value exists; this only emits the lifecycle event.
    pub fn start(&self) {
        tracing::info!(
            routes = self.routes.len(),
            base_url = %self.client.endpoints().base_url(),
            "portal application started"
        );
    }

    pub fn stop(&self) {
        tracing::info!("portal application stopped");
    }
}
