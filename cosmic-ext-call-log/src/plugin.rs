//! In-call plugin icons
//!
//! Calls placed through a third-party in-call provider show that provider's
//! icon instead of the generic phone. Loading the artwork is the resolver's
//! job; the call log only asks for it once, when the row is classified.

use crate::component::ComponentName;
use crate::icon::{Icon, ResourceId};
use std::collections::HashSet;
use tracing::debug;

/// Loads drawable resources out of plugin packages
pub trait PluginIconResolver: Send + Sync {
    /// `None` if the plugin or resource is not available
    fn resolve_icon(&self, component: &ComponentName, id: ResourceId) -> Option<Icon>;
}

/// Resolver for environments without plugins
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPluginIcons;

impl PluginIconResolver for NoPluginIcons {
    fn resolve_icon(&self, component: &ComponentName, _id: ResourceId) -> Option<Icon> {
        debug!("No plugin icons available for {}", component);
        None
    }
}

/// Resolver backed by a set of installed plugin packages
#[derive(Debug, Clone, Default)]
pub struct InstalledPluginIcons {
    packages: HashSet<String>,
}

impl InstalledPluginIcons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&mut self, package: impl Into<String>) -> &mut Self {
        self.packages.insert(package.into());
        self
    }

    pub fn is_installed(&self, package: &str) -> bool {
        self.packages.contains(package)
    }
}

impl<S: Into<String>> FromIterator<S> for InstalledPluginIcons {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            packages: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl PluginIconResolver for InstalledPluginIcons {
    fn resolve_icon(&self, component: &ComponentName, id: ResourceId) -> Option<Icon> {
        if self.is_installed(component.package()) {
            Some(Icon::from_plugin(component.clone(), id))
        } else {
            debug!("Plugin package {} not installed", component.package());
            None
        }
    }
}
