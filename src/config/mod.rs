use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Settings loaded from the TOML config file. Secrets (the admin password
/// and vault credential) live here rather than on the command line.
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    /// Shared static admin secret checked on every upload.
    pub admin_password: String,

    pub media_vault: MediaVaultConfig,

    // Optional overrides for CLI defaults
    pub port: Option<u16>,
    pub frontend_dir_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MediaVaultConfig {
    /// Full URL of the vault provider's upload endpoint.
    pub upload_url: String,
    /// Provider credential, sent as basic-auth username.
    pub private_key: String,
    pub timeout_sec: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_config() {
        let config: FileConfig = toml::from_str(
            r#"
            admin_password = "hunter2"

            [media_vault]
            upload_url = "https://vault.example/api/v1/files/upload"
            private_key = "private-key"
            "#,
        )
        .unwrap();

        assert_eq!(config.admin_password, "hunter2");
        assert_eq!(config.media_vault.timeout_sec, None);
        assert_eq!(config.port, None);
    }

    #[test]
    fn rejects_a_config_without_vault_settings() {
        let result: Result<FileConfig, _> = toml::from_str(r#"admin_password = "hunter2""#);
        assert!(result.is_err());
    }
}
