use std::sync::Arc;

use arc_swap::ArcSwap;
use signoff_core::{AuthType, ProviderConfig, ProviderDirectory};

use super::settings::SecuritySettings;

/// Live, swappable view of the identity provider settings.
///
/// Readers take a snapshot per request and never block a reload.
#[derive(Clone)]
pub struct SettingsStore {
    security: Arc<ArcSwap<SecuritySettings>>,
}

impl SettingsStore {
    pub fn new(security: SecuritySettings) -> Self {
        Self {
            security: Arc::new(ArcSwap::from_pointee(security)),
        }
    }

    pub fn snapshot(&self) -> Arc<SecuritySettings> {
        self.security.load_full()
    }

    pub fn replace(&self, security: SecuritySettings) {
        self.security.store(Arc::new(security));
        tracing::info!("Identity provider settings reloaded");
    }
}

impl ProviderDirectory for SettingsStore {
    fn provider_config(&self, auth_type: AuthType) -> Option<ProviderConfig> {
        self.security.load().provider_config(auth_type)
    }
}
