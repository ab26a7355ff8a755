use repair_core::ShopSettings;
use serde::Deserialize;

use crate::DeskError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub shop: ShopSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl DeskConfig {
    /// Load configuration from, in order of precedence:
    /// 1. `config/default.toml`
    /// 2. `config/local.toml`
    /// 3. Environment variables with `REPAIR__` prefix
    pub fn load() -> Result<Self, DeskError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("REPAIR").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.shop.validate()?;
        Ok(cfg)
    }

    /// Build from an inline TOML document plus `key = value` overrides.
    pub fn load_from_str(toml: &str, overrides: &[(&str, &str)]) -> Result<Self, DeskError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.shop.validate()?;
        Ok(cfg)
    }
}
