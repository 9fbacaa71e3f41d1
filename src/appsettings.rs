use config::{Config, ConfigError, Environment, File};
use voxcmd_models::settings::Settings;

/// Layers `appsettings`, `appsettings.local` and `APP__*` variables over the defaults.
pub fn load() -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name("appsettings").required(false))
        .add_source(File::with_name("appsettings.local").required(false))
        .add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
