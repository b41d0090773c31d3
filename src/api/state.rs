//! Application state for the TimeTrack engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::access::{ClientIpSource, FixedClientIp, NetworkConfig, NoClientIp};
use crate::config::{ConfigLoader, PayrollSettings};
use crate::directory::{EmployeeDirectory, InMemoryDirectory};
use crate::models::Currency;

/// Shared application state.
///
/// The payroll settings are immutable once loaded. The network policy is
/// the only thing handlers may change at runtime.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    directory: Arc<dyn EmployeeDirectory>,
    network: Arc<RwLock<NetworkConfig>>,
    ip_source: Arc<dyn ClientIpSource>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    ///
    /// The employee directory is seeded from the configuration, and the
    /// configured fallback address (if any) becomes the client IP source.
    pub fn new(config: ConfigLoader) -> Self {
        let directory = InMemoryDirectory::new(config.employees().iter().cloned());
        let network = config.network().policy.clone();
        let ip_source: Arc<dyn ClientIpSource> = match &config.network().fallback_client_ip {
            Some(ip) => Arc::new(FixedClientIp(ip.clone())),
            None => Arc::new(NoClientIp),
        };

        Self {
            config: Arc::new(config),
            directory: Arc::new(directory),
            network: Arc::new(RwLock::new(network)),
            ip_source,
        }
    }

    /// Replaces the employee directory.
    pub fn with_directory(mut self, directory: impl EmployeeDirectory + 'static) -> Self {
        self.directory = Arc::new(directory);
        self
    }

    /// Replaces the client IP source.
    pub fn with_ip_source(mut self, ip_source: impl ClientIpSource + 'static) -> Self {
        self.ip_source = Arc::new(ip_source);
        self
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the payroll settings.
    pub fn payroll(&self) -> &PayrollSettings {
        self.config.payroll()
    }

    /// Returns the display currency.
    pub fn currency(&self) -> Currency {
        self.config.currency()
    }

    /// Returns the employee directory.
    pub fn directory(&self) -> &dyn EmployeeDirectory {
        self.directory.as_ref()
    }

    /// Returns the live network policy.
    pub fn network(&self) -> &RwLock<NetworkConfig> {
        &self.network
    }

    /// Returns the client IP source.
    pub fn ip_source(&self) -> &dyn ClientIpSource {
        self.ip_source.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::load("./config/default").expect("Failed to load config"))
    }

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_directory_seeded_from_config() {
        let state = create_test_state();
        assert_eq!(state.directory().list(None).len(), 6);
        assert!(state.directory().find("emp_004").is_some());
    }

    #[test]
    fn test_fallback_ip_becomes_source() {
        let state = create_test_state();
        assert_eq!(state.ip_source().current_ip().as_deref(), Some("192.168.1.100"));

        let state = state.with_ip_source(NoClientIp);
        assert!(state.ip_source().current_ip().is_none());
    }

    #[test]
    fn test_with_directory_replaces_seed() {
        let state = create_test_state().with_directory(InMemoryDirectory::default());
        assert!(state.directory().list(None).is_empty());
    }

    #[tokio::test]
    async fn test_network_policy_shared_between_clones() {
        let state = create_test_state();
        let clone = state.clone();

        clone.network().write().await.enforce = true;
        assert!(state.network().read().await.enforce);
    }
}
