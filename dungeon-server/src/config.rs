use anyhow::Result;

const SERVER_PORT_KEY: &str = "SERVER_PORT";
const DATA_DIR_KEY: &str = "DATA_DIR";

const DEFAULT_SERVER_PORT: &str = "3000";
const DEFAULT_DATA_DIR: &str = "data";

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: String,
    pub data_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Ok(Config {
            server_port: env_or_default(SERVER_PORT_KEY, DEFAULT_SERVER_PORT),
            data_dir: env_or_default(DATA_DIR_KEY, DEFAULT_DATA_DIR),
        })
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
