//! Host-side building blocks for the fuo music player: domain models, the
//! provider contract, lazy readers, and the registries plugins hook into.

pub mod config;
pub mod library;
pub mod logging;
pub mod models;
pub mod paths;
pub mod provider;
pub mod provider_contract;
pub mod reader;

pub use config::{Config, ConfigError, LogLevel, LoggingConfig, ValidationError};
pub use library::{App, AppMode, Library, LibraryError, ProviderUiItem, ProviderUiManager};
pub use logging::{init_logging, LoggingError, LoggingGuard};
pub use paths::{AppDirs, DirsError};
pub use provider::{Provider, ProviderCapabilities, ProviderError, ProviderResult, SearchType};
pub use reader::SequentialReader;

pub const APP_NAME: &str = "fuo";
pub const APP_AUTHOR: &str = "FeelUOwn";
pub const APP_QUALIFIER: &str = "io";
