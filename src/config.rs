use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Optional newline-separated word list file; the builtin list is
    /// used when unset or unreadable.
    pub word_list_path: Option<String>,
    pub grid_size: usize,
    /// Round length in seconds.
    pub round_duration: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
        };

        let game = GameConfig {
            word_list_path: env::var("WORD_LIST_PATH").ok(),
            grid_size: env::var("GRID_SIZE")
                .unwrap_or_else(|_| "16".to_string())
                .parse()
                .context("GRID_SIZE must be a number")?,
            round_duration: env::var("ROUND_DURATION")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .context("ROUND_DURATION must be a number")?,
        };

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
