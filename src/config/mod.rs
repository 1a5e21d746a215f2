// Configuration module for termpong
// Handles loading and validating game configuration from a TOML file

pub mod loader;
pub mod types;

pub use loader::{default_config_toml, get_config_path, load_config, parse_config};
pub use types::{
    AIConfig, AudioConfig, Config, DisplayConfig, FieldConfig, KeyBindings, PhysicsConfig,
};
