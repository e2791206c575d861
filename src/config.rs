use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

const DEFAULT_MAX_BODY_BYTES: usize = 256 * 1024;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub server_port: u16,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    /// Builds the config from explicit `(NAME, value)` pairs, names in
    /// upper snake case as in the environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Self>(vars)
            .map_err(|e| anyhow!("Invalid or missing environmental variable: {}", e))
    }
}
