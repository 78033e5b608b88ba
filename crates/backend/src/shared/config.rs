use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built site (trunk `dist/`), served for non-API paths
    pub static_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: None,
        }
    }
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    #[serde(default = "default_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_origins(),
        }
    }
}

fn default_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl CorsConfig {
    /// `*` anywhere in the list allows every origin
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.iter().any(|o| o.trim() == "*")
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/resort.db"

[server]
port = 3000

[cors]
allowed_origins = ["*"]
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `CORS_ORIGINS` (comma-separated) overrides `cors.allowed_origins`.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_file_or_default()?;
    if let Ok(origins) = std::env::var("CORS_ORIGINS") {
        apply_cors_override(&mut config, &origins);
    }
    Ok(config)
}

fn load_file_or_default() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn apply_cors_override(config: &mut Config, origins: &str) {
    let parsed: Vec<String> = origins
        .split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect();
    if !parsed.is_empty() {
        config.cors.allowed_origins = parsed;
    }
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    // Fallback: use relative to current directory
    Ok(PathBuf::from(db_path_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/resort.db");
        assert_eq!(config.server.port, 3000);
        assert!(config.server.static_dir.is_none());
        assert!(config.cors.allows_any());
    }

    #[test]
    fn test_sections_are_optional_except_database() {
        let config: Config = toml::from_str("[database]\npath = \"/var/lib/resort.db\"\n").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.cors.allowed_origins, vec!["*".to_string()]);
        assert_eq!(
            get_database_path(&config).unwrap(),
            PathBuf::from("/var/lib/resort.db")
        );

        assert!(toml::from_str::<Config>("[server]\nport = 8080\n").is_err());
    }

    #[test]
    fn test_cors_override() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        apply_cors_override(
            &mut config,
            "https://silverstonepark.com, https://www.silverstonepark.com,",
        );
        assert_eq!(
            config.cors.allowed_origins,
            vec![
                "https://silverstonepark.com".to_string(),
                "https://www.silverstonepark.com".to_string()
            ]
        );
        assert!(!config.cors.allows_any());

        apply_cors_override(&mut config, " , ");
        assert_eq!(config.cors.allowed_origins.len(), 2);
    }
}
