use seatmap_core::Aircraft;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub flights: Vec<FlightManifest>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Cards,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FlightManifest {
    pub number: String,
    pub aircraft: Aircraft,
    #[serde(default)]
    pub allocations: Vec<Allocation>,
    #[serde(default)]
    pub relocations: Vec<Relocation>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Allocation {
    pub seat: String,
    pub passenger: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Relocation {
    pub from: String,
    pub to: String,
}

impl Config {
    /// Loads the manifest. `base` replaces `config/default` as the required
    /// first layer when a path is given on the command line.
    pub fn load(base: Option<&str>) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name(base.unwrap_or("config/default")))
            // Optional per-environment overrides
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Untracked local overrides
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `SEATMAP_OUTPUT__FORMAT=json`
            .add_source(
                config::Environment::with_prefix("SEATMAP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        s.try_deserialize()
    }

    pub fn from_toml_str(manifest: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(manifest, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
