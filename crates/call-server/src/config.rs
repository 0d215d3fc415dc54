//! Listener configuration read from the environment

use anyhow::Context;
use strip_ansi_escapes::strip;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `HOST` and `BACKEND_PORT` (or `PORT`), with local defaults
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match std::env::var("BACKEND_PORT").or_else(|_| std::env::var("PORT")) {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => {
                tracing::info!("No PORT environment variable set, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        Ok(Self { host, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a port, ignoring ANSI codes some launchers leave in the value
fn parse_port(raw: &str) -> anyhow::Result<u16> {
    let cleaned = String::from_utf8(strip(raw.as_bytes())).context("PORT is not valid UTF-8")?;
    cleaned
        .trim()
        .parse::<u16>()
        .with_context(|| format!("Invalid PORT value '{}'", cleaned.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("8080").unwrap(), 8080);
        assert_eq!(parse_port(" 3001\n").unwrap(), 3001);
        assert_eq!(parse_port("\u{1b}[32m4000\u{1b}[0m").unwrap(), 4000);
        assert!(parse_port("not-a-port").is_err());
        assert!(parse_port("70000").is_err());
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
        };
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }
}
