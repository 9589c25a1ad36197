//! Host-side registries that plugins hook into on enable/disable.

use crate::models::SearchResult;
use crate::provider::{Provider, ProviderResult, SearchType};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LibraryError {
    #[error("provider '{0}' is already registered")]
    AlreadyRegistered(String),
    #[error("provider '{0}' is not registered")]
    UnknownProvider(String),
}

/// All providers currently known to the host, keyed by provider id.
#[derive(Default)]
pub struct Library {
    providers: BTreeMap<String, Arc<dyn Provider>>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, provider: Arc<dyn Provider>) -> Result<(), LibraryError> {
        let id = provider.id().to_string();
        if self.providers.contains_key(&id) {
            return Err(LibraryError::AlreadyRegistered(id));
        }
        tracing::info!(provider = %id, "registered provider");
        self.providers.insert(id, provider);
        Ok(())
    }

    pub fn deregister(&mut self, id: &str) -> Result<(), LibraryError> {
        self.providers
            .remove(id)
            .map(|_| tracing::info!(provider = %id, "deregistered provider"))
            .ok_or_else(|| LibraryError::UnknownProvider(id.to_string()))
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Provider>> {
        self.providers.get(id).cloned()
    }

    pub fn list(&self) -> impl Iterator<Item = &Arc<dyn Provider>> {
        self.providers.values()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Run a search on one registered provider.
    pub fn search(
        &self,
        provider_id: &str,
        keyword: &str,
        kind: SearchType,
    ) -> Result<ProviderResult<SearchResult>, LibraryError> {
        let provider = self
            .providers
            .get(provider_id)
            .ok_or_else(|| LibraryError::UnknownProvider(provider_id.to_string()))?;
        Ok(provider.search(keyword, kind))
    }
}

/// A provider entry in the GUI side panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderUiItem {
    pub name: String,
    pub text: String,
    pub symbol: String,
    pub desc: String,
}

/// Tracks the provider menu items shown by the GUI.
#[derive(Debug, Default)]
pub struct ProviderUiManager {
    items: BTreeMap<String, ProviderUiItem>,
}

impl ProviderUiManager {
    pub fn create_item(
        &self,
        name: impl Into<String>,
        text: impl Into<String>,
        symbol: impl Into<String>,
        desc: impl Into<String>,
    ) -> ProviderUiItem {
        ProviderUiItem {
            name: name.into(),
            text: text.into(),
            symbol: symbol.into(),
            desc: desc.into(),
        }
    }

    pub fn add_item(&mut self, item: ProviderUiItem) {
        self.items.insert(item.name.clone(), item);
    }

    pub fn remove(&mut self, name: &str) -> Option<ProviderUiItem> {
        self.items.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&ProviderUiItem> {
        self.items.get(name)
    }
}

/// How the host was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Cli,
    Gui,
}

/// The slice of the host application a plugin is allowed to touch.
pub struct App {
    pub mode: AppMode,
    pub library: Library,
    pub pvd_uimgr: ProviderUiManager,
}

impl App {
    pub fn new(mode: AppMode) -> Self {
        Self {
            mode,
            library: Library::new(),
            pvd_uimgr: ProviderUiManager::default(),
        }
    }

    pub fn is_gui(&self) -> bool {
        self.mode == AppMode::Gui
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_manager_add_and_remove() {
        let mut uimgr = ProviderUiManager::default();
        let item = uimgr.create_item("local", "Local", "L ", "local files");
        uimgr.add_item(item.clone());
        assert_eq!(uimgr.get("local"), Some(&item));
        assert_eq!(uimgr.remove("local"), Some(item));
        assert!(uimgr.get("local").is_none());
    }

    #[test]
    fn deregister_unknown_provider_fails() {
        let mut library = Library::new();
        assert_eq!(
            library.deregister("missing"),
            Err(LibraryError::UnknownProvider("missing".into()))
        );
        assert!(library.is_empty());
    }

    #[test]
    fn cli_mode_is_not_gui() {
        assert!(!App::new(AppMode::Cli).is_gui());
        assert!(App::new(AppMode::Gui).is_gui());
    }
}
