use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub securitytrails: SecurityTrailsSettings,
    pub crunchbase: CrunchbaseSettings,
    pub webdriver: WebDriverSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityTrailsSettings {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrunchbaseSettings {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebDriverSettings {
    pub server_url: String,
}

/// Baked-in defaults target the production portals; `configuration.yaml`
/// and `MAGPIE__*` environment variables override them.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    Config::builder()
        .set_default("securitytrails.base_url", "https://securitytrails.com")?
        .set_default("crunchbase.base_url", "https://www.crunchbase.com")?
        .set_default("webdriver.server_url", "http://localhost:4444")?
        .add_source(File::new("configuration", FileFormat::Yaml).required(false))
        .add_source(Environment::with_prefix("MAGPIE").separator("__"))
        .build()?
        .try_deserialize()
}
