pub mod resolver;

pub use resolver::{BundledResourceResolver, CLASSPATH_PREFIX, ConfiguredResource, ResourceKind};
