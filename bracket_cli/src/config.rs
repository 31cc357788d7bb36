use bracket_backend::swiss::SwissSuggestionOptions;

#[derive(Debug, serde::Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub db_url: String,
    pub logging_config: String,
    pub swiss: SwissSuggestionOptions,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_url: "sqlite://./brackets.sqlite3?mode=rwc".into(),
            logging_config: "info,sqlx::query=error".into(),
            swiss: SwissSuggestionOptions::default(),
        }
    }
}

pub(crate) fn read_config_inner() -> Result<Config, anyhow::Error> {
    let config_path = std::env::var("BRACKET_CONFIG")?;
    let config = std::fs::read_to_string(config_path)?;
    parse_config(&config)
}

pub(crate) fn parse_config(config: &str) -> Result<Config, anyhow::Error> {
    Ok(serde_yaml::from_str::<Config>(config)?)
}

pub fn read_config() -> Config {
    match read_config_inner() {
        Ok(config) => config,
        Err(e) => {
            //Print to stderr, since logging is set up from the config
            eprintln!("Warning: Failed to read config: {}", e);
            Config::default()
        }
    }
}
