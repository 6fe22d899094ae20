//! Hosting UI context.

use std::collections::HashMap;

/// Name of the string resource holding the map SDK API key.
pub const MAPBOX_API_KEY_RESOURCE: &str = "mapbox_api_key";

/// UI context hosting the map view.
pub trait PlatformContext {
    /// Number of physical pixels per logical pixel.
    fn display_density(&self) -> f32;

    /// Looks up a string resource by name.
    fn resource_string(&self, name: &str) -> Option<String>;
}

/// Platform context with a fixed density and resource table.
#[derive(Debug, Clone, Default)]
pub struct StaticPlatformContext {
    density: f32,
    resources: HashMap<String, String>,
}

impl StaticPlatformContext {
    /// Creates a context with the given display density and no resources.
    pub fn new(density: f32) -> Self {
        Self {
            density,
            resources: HashMap::new(),
        }
    }

    /// Adds a string resource.
    pub fn with_resource(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.resources.insert(name.into(), value.into());
        self
    }

    /// Adds all resources from the iterator.
    pub fn with_resources(
        mut self,
        resources: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        self.resources.extend(resources);
        self
    }
}

impl PlatformContext for StaticPlatformContext {
    fn display_density(&self) -> f32 {
        self.density
    }

    fn resource_string(&self, name: &str) -> Option<String> {
        self.resources.get(name).cloned()
    }
}
