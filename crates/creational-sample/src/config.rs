//! Application configuration and its singleton slots.
//!
//! Sourcing the configuration (files, environment, CLI) is an external
//! collaborator's job; this module only defines the shape of the config and
//! the slots that make one instance of it available process-wide.

use creational_framework::{BoxError, SingletonSlot};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Draw tool settings shared by every component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Kind key passed to the shape factory when the user has not picked one.
    pub default_shape: String,
    /// Family key passed to the theme factory at startup.
    pub theme: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1280,
            canvas_height: 720,
            default_shape: "circle".to_string(),
            theme: "light".to_string(),
        }
    }
}

/// A lazy config slot: the config is built on first access.
pub fn lazy_config_slot() -> SingletonSlot<AppConfig> {
    SingletonSlot::new("app-config", || {
        debug!("Building default configuration");
        Ok::<_, BoxError>(AppConfig::default())
    })
}

/// An eager config slot for callers that already have a config in hand
/// (e.g. parsed by an external collaborator before startup).
pub fn eager_config_slot(config: AppConfig) -> SingletonSlot<AppConfig> {
    SingletonSlot::eager("app-config", config)
}
