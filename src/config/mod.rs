//! Configuration management for Spellsweep.
//!
//! Layered figment configuration: embedded defaults, then an optional
//! project or user-supplied config file (TOML, JSON, or YAML), then
//! `SPELLSWEEP_`-prefixed environment variables on top.

use anyhow::Result;
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use serde::de::DeserializeOwned;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

pub struct SpellsweepConfig {
    figment: Figment,
}

impl SpellsweepConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG)); // Embedded defaults

        // If a custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            figment = figment
                .merge(Toml::file(custom_path))
                .merge(Json::file(custom_path))
                .merge(Yaml::file(custom_path));
        } else {
            // Repository config - support multiple formats
            figment = figment
                .merge(Toml::file("spellsweep.toml"))
                .merge(Json::file("spellsweep.json"))
                .merge(Yaml::file("spellsweep.yaml"))
                .merge(Yaml::file("spellsweep.yml"));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("SPELLSWEEP_"));

        Ok(SpellsweepConfig { figment })
    }

    /// Extract a typed value from the merged configuration
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        Ok(self.figment.extract_inner(path)?)
    }

    /// Get a string value from config
    pub fn get_string(&self, path: &str) -> Result<String> {
        Ok(self.figment.extract_inner(path)?)
    }

    /// Get a usize value from config
    pub fn get_usize(&self, path: &str) -> Result<usize> {
        Ok(self.figment.extract_inner(path)?)
    }
}
