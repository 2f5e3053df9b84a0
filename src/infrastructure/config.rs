use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub source: SourceSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    pub base_url: String,
    pub water_dataset: String,
    pub air_dataset: String,
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/datasource"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
