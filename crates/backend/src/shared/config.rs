use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Пустой список или "*" — разрешаем любой origin
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Config {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("Invalid server address '{}': {}", addr, e))
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 8080

[cors]
allowed_origins = ["*"]
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
///
/// `SERVER_PORT` overrides `server.port` in both cases.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    apply_env_overrides(&mut config, std::env::var("SERVER_PORT").ok())?;
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return Ok(toml::from_str(&contents)?);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

fn apply_env_overrides(config: &mut Config, port: Option<String>) -> anyhow::Result<()> {
    if let Some(port) = port {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("SERVER_PORT is not a valid port: '{}'", port))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(config.cors.allows_any());
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_cors_section_is_optional() {
        let config: Config = toml::from_str("[server]\nhost = \"127.0.0.1\"\nport = 3000\n").unwrap();
        assert!(config.cors.allowed_origins.is_empty());
        assert!(config.cors.allows_any());
    }

    #[test]
    fn test_explicit_origins() {
        let cors = CorsConfig {
            allowed_origins: vec!["http://localhost:5173".into()],
        };
        assert!(!cors.allows_any());
    }

    #[test]
    fn test_port_override() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        apply_env_overrides(&mut config, Some("9090".into())).unwrap();
        assert_eq!(config.server.port, 9090);

        assert!(apply_env_overrides(&mut config, Some("abc".into())).is_err());
        assert_eq!(config.server.port, 9090);

        apply_env_overrides(&mut config, None).unwrap();
        assert_eq!(config.server.port, 9090);
    }
}
