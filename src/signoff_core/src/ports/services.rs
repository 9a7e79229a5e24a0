use std::{io, path::Path, sync::Arc};

use crate::domain::{auth_type::AuthType, provider_config::ProviderConfig};

/// Source of per-provider logout settings.
///
/// Implementations hand out owned snapshots so a request never observes a
/// configuration reload halfway through.
pub trait ProviderDirectory: Send + Sync {
    /// Settings for `auth_type`, or `None` when that provider is not configured.
    fn provider_config(&self, auth_type: AuthType) -> Option<ProviderConfig>;
}

impl<T: ProviderDirectory + ?Sized> ProviderDirectory for &T {
    fn provider_config(&self, auth_type: AuthType) -> Option<ProviderConfig> {
        (**self).provider_config(auth_type)
    }
}

impl<T: ProviderDirectory + ?Sized> ProviderDirectory for Arc<T> {
    fn provider_config(&self, auth_type: AuthType) -> Option<ProviderConfig> {
        (**self).provider_config(auth_type)
    }
}

/// A loadable certificate or key.
pub trait Resource {
    /// Whether the backing file is present. Resolution never checks this.
    fn exists(&self) -> bool;

    fn path(&self) -> &Path;

    fn read(&self) -> io::Result<Vec<u8>>;

    fn read_to_string(&self) -> io::Result<String> {
        let bytes = self.read()?;
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Turns certificate/key references from configuration into resources.
///
/// Resolution is pure: the same reference always yields an equal resource.
pub trait ResourceResolver: Send + Sync {
    type Resource: Resource;

    fn resolve(&self, reference: Option<&str>) -> Option<Self::Resource>;
}
