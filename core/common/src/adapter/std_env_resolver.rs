//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::{ApiKey, ConfigDir};
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn api_key_from_env(&self) -> Option<ApiKey> {
        env::var("OPENAI_API_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .map(ApiKey::new)
    }

    fn resolve_config_dir(&self) -> Result<ConfigDir, Error> {
        if let Ok(home) = env::var("DOCGPT_HOME") {
            if !home.is_empty() {
                return Ok(ConfigDir::new(PathBuf::from(home)));
            }
        }

        let home = env::var("HOME")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| Error::env("HOME is not set"))?;

        Ok(ConfigDir::new(home.join(".docgpt")))
    }
}
