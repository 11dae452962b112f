pub mod cli;
pub mod file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_bind_addr, validate_non_empty_string, Validate};
use cli::CliConfig;
use file::FileConfig;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Effective configuration: CLI flags override the optional TOML file,
/// which overrides built-in defaults.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    bind: String,
    books_file: Option<String>,
    pub verbose: bool,
}

impl ServerConfig {
    pub fn resolve(cli: CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        let server = file.server.unwrap_or_default();

        let config = Self {
            bind: cli
                .bind
                .or(server.bind)
                .unwrap_or_else(|| DEFAULT_BIND.to_string()),
            books_file: cli.books.or(server.books_file),
            verbose: cli.verbose,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_bind_addr("bind", &self.bind)?;
        if let Some(path) = &self.books_file {
            validate_non_empty_string("books_file", path)?;
        }
        Ok(())
    }
}

impl ConfigProvider for ServerConfig {
    fn bind_addr(&self) -> &str {
        &self.bind
    }

    fn books_file(&self) -> Option<&str> {
        self.books_file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli() -> CliConfig {
        CliConfig {
            bind: None,
            books: None,
            config: None,
            verbose: false,
        }
    }

    #[test]
    fn test_defaults_apply() {
        let config = ServerConfig::resolve(cli()).unwrap();
        assert_eq!(config.bind_addr(), DEFAULT_BIND);
        assert!(config.books_file().is_none());
    }

    #[test]
    fn test_cli_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nbind = \"127.0.0.1:7000\"\n").unwrap();

        let mut args = cli();
        args.config = Some(path.to_str().unwrap().to_string());
        args.bind = Some("127.0.0.1:9000".to_string());

        let config = ServerConfig::resolve(args).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_file_value_applies_when_cli_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nbind = \"127.0.0.1:7000\"\nbooks_file = \"custom.json\"\n",
        )
        .unwrap();

        let mut args = cli();
        args.config = Some(path.to_str().unwrap().to_string());

        let config = ServerConfig::resolve(args).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:7000");
        assert_eq!(config.books_file(), Some("custom.json"));
    }

    #[test]
    fn test_invalid_bind_is_rejected() {
        let mut args = cli();
        args.bind = Some("not-an-address".to_string());
        assert!(ServerConfig::resolve(args).is_err());
    }
}
