use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub environment: String,
    pub strict_coupons: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, so tests don't touch the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());

        let strict_coupons = match lookup("STRICT_COUPONS") {
            Some(value) => parse_bool(&value)
                .ok_or_else(|| anyhow::anyhow!("STRICT_COUPONS must be 'true' or 'false', got '{}'", value))?,
            None => false,
        };

        let config = Config {
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            // production never accepts out-of-range coupons
            strict_coupons: strict_coupons || environment == "production",
            environment,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.environment.trim().is_empty() {
            return Err(anyhow::anyhow!("APP_ENV must not be empty"));
        }

        if self.log_level.trim().is_empty() {
            return Err(anyhow::anyhow!("LOG_LEVEL must not be empty"));
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            environment: "development".to_string(),
            strict_coupons: false,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
