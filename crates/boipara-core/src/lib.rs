pub mod app_config;
pub mod catalog;
pub mod config;
pub mod level;
pub mod location;
pub mod picker;
pub mod resolver;
pub mod selection;
pub mod shops;
pub mod snapshot;

use thiserror::Error;

pub use app_config::AppConfig;
pub use catalog::LocationCatalog;
pub use config::{load_app_config, load_app_config_from_env};
pub use level::Level;
pub use location::{LocationRecord, NOT_APPLICABLE};
pub use picker::{LocationPicker, PickerError};
pub use resolver::{on_level_change, options_for, resolve, Resolution};
pub use selection::Selections;
pub use shops::{NewShop, Shop, ShopError, ShopStatus};
pub use snapshot::load_locations;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read locations file {path}: {source}")]
    LocationsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse locations file {path}: {reason}")]
    LocationsFileParse { path: String, reason: String },

    #[error("locations validation error: {0}")]
    Validation(String),
}
