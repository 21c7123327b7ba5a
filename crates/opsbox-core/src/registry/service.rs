//! External-service registry.

use dashmap::DashMap;

use opsbox_protocols::extension::ServiceRegistryAccess;
use opsbox_protocols::service::ApiService;

/// Registry of external HTTP service descriptors.
///
/// Owned by the host and created once at startup; extensions receive a
/// handle through [`opsbox_protocols::extension::ExtensionContext`].
/// The first registration of a name wins and later registrations are
/// no-ops, so an extension can register its services unconditionally on
/// every construction.
pub struct ServiceRegistry {
    services: DashMap<String, ApiService>,
}

impl ServiceRegistry {
    /// Create a new service registry.
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
        }
    }

    /// Register a service descriptor. Returns `true` when the
    /// descriptor was newly registered. The entry API makes concurrent
    /// first registrations insert exactly once.
    pub fn register(&self, service: ApiService) -> bool {
        match self.services.entry(service.name.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => false,
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                tracing::debug!(name = %service.name, base_url = %service.base_url, "registered service");
                entry.insert(service);
                true
            }
        }
    }

    /// Look up a service descriptor by name.
    pub fn get(&self, name: &str) -> Option<ApiService> {
        self.services.get(name).map(|entry| entry.value().clone())
    }

    /// Names of all registered services.
    pub fn names(&self) -> Vec<String> {
        self.services.iter().map(|entry| entry.key().clone()).collect()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceRegistryAccess for ServiceRegistry {
    fn register_service(&self, service: ApiService) -> bool {
        self.register(service)
    }

    fn get_service(&self, name: &str) -> Option<ApiService> {
        self.get(name)
    }
}
