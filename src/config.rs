use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Signing secret shipped in the defaults; never acceptable in production.
pub const DEFAULT_JWT_SECRET: &str = "change-me";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub environment: String,
    pub loglevel: String,

    pub data_dir: PathBuf,
    pub public_dir: PathBuf,
    pub uploads_dir: PathBuf,

    /// Per-file upload cap in bytes.
    pub max_file_size: usize,
    pub max_files: usize,
    pub json_body_limit: usize,

    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
    pub login_per_minute: u32,

    pub admin_email: Option<String>,
    pub admin_password: Option<String>,

    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            environment: "development".to_string(),
            loglevel: "info".to_string(),
            data_dir: PathBuf::from("data"),
            public_dir: PathBuf::from("public"),
            uploads_dir: PathBuf::from("uploads"),
            max_file_size: 5 * 1024 * 1024,
            max_files: 10,
            json_body_limit: 10 * 1024 * 1024,
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            token_ttl_hours: 24,
            bcrypt_cost: 12,
            login_per_minute: 20,
            admin_email: None,
            admin_password: None,
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:5500".to_string(),
            ],
        }
    }
}

impl Config {
    /// Sources in increasing priority: built-in defaults, `config.toml` in
    /// the working directory, `CMS_*` environment variables. Any value that
    /// fails to parse is an error.
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("CMS_").split("__"))
            .extract()
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    /// Settings that are unsafe to serve with.
    pub fn check(&self) -> Result<(), String> {
        if self.is_production() && self.jwt_secret == DEFAULT_JWT_SECRET {
            return Err("jwt_secret must be set in production".to_string());
        }
        if self.jwt_secret.is_empty() {
            return Err("jwt_secret must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("CMS_MAX_FILE_SIZE", "1024");
            jail.set_env("CMS_ADMIN_EMAIL", "root@example.com");
            let cfg = Config::load()?;
            assert_eq!(cfg.max_file_size, 1024);
            assert_eq!(cfg.admin_email.as_deref(), Some("root@example.com"));
            assert_eq!(cfg.bcrypt_cost, 12);
            Ok(())
        });
    }

    #[test]
    fn unparsable_env_value_is_an_error() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("CMS_MAX_FILE_SIZE", "abc");
            assert!(Config::load().is_err());
            Ok(())
        });
    }

    #[test]
    fn production_refuses_default_secret() {
        let mut cfg = Config {
            environment: "production".to_string(),
            ..Config::default()
        };
        assert!(cfg.check().is_err());
        cfg.jwt_secret = "a-real-secret".to_string();
        assert!(cfg.check().is_ok());
        assert!(Config::default().check().is_ok());
    }

    #[test]
    fn toml_file_is_merged() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", r#"data_dir = "/srv/cms/data""#)?;
            let cfg = Config::load()?;
            assert_eq!(cfg.data_dir, PathBuf::from("/srv/cms/data"));
            Ok(())
        });
    }
}
