use once_cell::sync::OnceCell;
use serde::Deserialize;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub seed: SeedConfig,
    pub paging: PagingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Каталог собранного фронтенда (trunk build)
    pub static_dir: String,
}

/// Размер демо-коллекций, генерируемых при старте
#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    pub users: usize,
    pub posts: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PagingConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[seed]
users = 25
posts = 100

[paging]
default_page_size = 10
max_page_size = 100
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Сохранить конфигурацию для обработчиков. Повторный вызов игнорируется.
pub fn set_global(config: Config) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Global config already set");
    }
}

/// Настройки пагинации; до `set_global` используются значения по умолчанию
pub fn paging() -> PagingConfig {
    CONFIG
        .get()
        .map(|c| c.paging.clone())
        .unwrap_or(PagingConfig {
            default_page_size: 10,
            max_page_size: 100,
        })
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.paging.default_page_size == 0 || config.paging.max_page_size == 0 {
        anyhow::bail!("paging sizes must be positive");
    }
    if config.paging.default_page_size > config.paging.max_page_size {
        anyhow::bail!("default_page_size exceeds max_page_size");
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.seed.users, 25);
        assert_eq!(config.paging.default_page_size, 10);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let broken = DEFAULT_CONFIG.replace("default_page_size = 10", "default_page_size = 0");
        assert!(parse_config(&broken).is_err());
    }

    #[test]
    fn test_default_above_max_rejected() {
        let broken = DEFAULT_CONFIG.replace("max_page_size = 100", "max_page_size = 5");
        assert!(parse_config(&broken).is_err());
    }
}
