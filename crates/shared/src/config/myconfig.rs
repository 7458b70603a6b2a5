use anyhow::{Context, Result, anyhow};

const DEFAULT_OTEL_ENDPOINT: &str = "http://otel-collector:4317";
const DEFAULT_BODY_LIMIT_BYTES: usize = 250 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub otel_endpoint: String,
    pub dev_mode: bool,
    pub enable_file_log: bool,
    pub body_limit_bytes: usize,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, so callers other than
    /// the process environment (tests, embedders) can supply values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .context("Missing environment variable: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let otel_endpoint =
            lookup("OTEL_ENDPOINT").unwrap_or_else(|| DEFAULT_OTEL_ENDPOINT.to_string());

        let dev_mode = parse_flag("DEV_MODE", lookup("DEV_MODE"))?;
        let enable_file_log = parse_flag("ENABLE_FILE_LOG", lookup("ENABLE_FILE_LOG"))?;

        let body_limit_bytes = match lookup("BODY_LIMIT_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .context("BODY_LIMIT_BYTES must be a valid byte count")?,
            None => DEFAULT_BODY_LIMIT_BYTES,
        };

        Ok(Self {
            port,
            otel_endpoint,
            dev_mode,
            enable_file_log,
            body_limit_bytes,
        })
    }
}

fn parse_flag(name: &str, value: Option<String>) -> Result<bool> {
    match value.as_deref() {
        None => Ok(false),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}
