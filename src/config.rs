use std::{env, net::SocketAddr};

use crate::error::AppError;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_APP_NAME: &str = "Travel Maker API";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub app_name: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let listen_addr = parse_listen_addr(
            &env::var("APP_LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
        )?;

        let app_name = env::var("APP_NAME")
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        Ok(Self {
            listen_addr,
            app_name,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

fn parse_listen_addr(raw: &str) -> Result<SocketAddr, AppError> {
    raw.parse()
        .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))
}
