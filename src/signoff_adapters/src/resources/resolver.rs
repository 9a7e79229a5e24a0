use std::{
    io,
    path::{Path, PathBuf},
};

use signoff_core::{Resource, ResourceResolver};

/// Prefix marking a reference to a resource shipped with the service.
pub const CLASSPATH_PREFIX: &str = "classpath:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Bundled,
    FileSystem,
}

/// A certificate or key location resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredResource {
    kind: ResourceKind,
    path: PathBuf,
}

impl ConfiguredResource {
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }
}

impl Resource for ConfiguredResource {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }
}

/// Resolves `classpath:` references against the bundled resource directory
/// and everything else against the filesystem.
#[derive(Debug, Clone)]
pub struct BundledResourceResolver {
    bundled_root: PathBuf,
}

impl BundledResourceResolver {
    pub fn new(bundled_root: impl Into<PathBuf>) -> Self {
        Self {
            bundled_root: bundled_root.into(),
        }
    }
}

impl ResourceResolver for BundledResourceResolver {
    type Resource = ConfiguredResource;

    fn resolve(&self, reference: Option<&str>) -> Option<ConfiguredResource> {
        let reference = reference.map(str::trim).filter(|r| !r.is_empty())?;

        let resource = match reference.strip_prefix(CLASSPATH_PREFIX) {
            Some(relative) => ConfiguredResource {
                kind: ResourceKind::Bundled,
                path: self.bundled_root.join(relative.trim_start_matches('/')),
            },
            None => ConfiguredResource {
                kind: ResourceKind::FileSystem,
                path: PathBuf::from(reference),
            },
        };

        Some(resource)
    }
}
