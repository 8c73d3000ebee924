// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Application-level configuration for uml-project
/// Values are compiled in from config.yaml at build time
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Notation defaults seeded into the runtime configuration
    pub notation: NotationSettings,

    /// Persistence defaults
    pub persistence: PersistenceSettings,

    /// Global exclude patterns used when scanning for members
    pub global_excludes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NotationSettings {
    /// Render stereotypes with guillemots instead of angle brackets
    pub use_guillemots: bool,

    /// Show stereotypes in the explorer tree
    pub show_stereotypes: bool,
}

#[derive(Debug, Clone)]
pub struct PersistenceSettings {
    /// Indent applied to member fragments in a saved project
    pub indent: usize,

    /// File name of the project manifest
    pub manifest_name: String,
}

impl Default for NotationSettings {
    fn default() -> Self {
        Self {
            use_guillemots: compiled::USE_GUILLEMOTS,
            show_stereotypes: compiled::SHOW_STEREOTYPES,
        }
    }
}

impl Default for PersistenceSettings {
    fn default() -> Self {
        Self {
            indent: compiled::DEFAULT_INDENT,
            manifest_name: compiled::MANIFEST_NAME.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            notation: NotationSettings::default(),
            persistence: PersistenceSettings::default(),
            global_excludes: compiled::GLOBAL_EXCLUDES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
