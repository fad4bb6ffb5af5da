//! API キーの解決とキャッシュ
//!
//! 優先順位: --api-key フラグ → OPENAI_API_KEY 環境変数 →
//! キャッシュファイル → 対話入力。環境変数とファイルにはポート経由でのみ触れる。

use std::sync::Arc;

use common::domain::ApiKey;
use common::error::Error;
use common::ports::outbound::{Console, EnvResolver, FileSystem};

/// 設定ディレクトリ直下のキャッシュファイル名
pub const API_KEY_FILE_NAME: &str = "oai_key";

/// API キーユースケース
pub struct ApiKeyUseCase {
    env: Arc<dyn EnvResolver>,
    fs: Arc<dyn FileSystem>,
    console: Arc<dyn Console>,
}

impl ApiKeyUseCase {
    pub fn new(
        env: Arc<dyn EnvResolver>,
        fs: Arc<dyn FileSystem>,
        console: Arc<dyn Console>,
    ) -> Self {
        Self { env, fs, console }
    }

    /// API キーを解決する
    pub fn resolve(&self, flag: Option<&str>) -> Result<ApiKey, Error> {
        // 1) フラグ
        if let Some(key) = flag.filter(|s| !s.is_empty()) {
            return Ok(ApiKey::new(key));
        }

        // 2) 環境変数
        if let Some(key) = self.env.api_key_from_env() {
            return Ok(key);
        }

        // 3) キャッシュファイル
        if let Ok(dir) = self.env.resolve_config_dir() {
            let key_path = dir.join(API_KEY_FILE_NAME);
            if self.fs.exists(&key_path) {
                let cached = self.fs.read_to_string(&key_path)?;
                if !cached.is_empty() {
                    return Ok(ApiKey::new(cached));
                }
            }
        }

        // 4) 対話入力
        let input = self.console.prompt_line("OpenAI API Key: ")?;
        if !input.is_empty() {
            return Ok(ApiKey::new(input));
        }

        Err(Error::env(
            "OpenAI API Key was not found.\n\
             Get an API key from OpenAI at https://openai.com/api/\n\
             and set the 'OPENAI_API_KEY' environment variable or use the '--api-key' flag.",
        ))
    }

    /// API キーをキャッシュファイルに保存する
    ///
    /// 既に別のキーがキャッシュされている場合は置き換えを確認する（既定は置き換え）。
    pub fn cache(&self, key: &ApiKey) -> Result<(), Error> {
        let dir = self.env.resolve_config_dir()?;
        let key_path = dir.join(API_KEY_FILE_NAME);

        if self.fs.exists(&key_path) {
            let old_key = self.fs.read_to_string(&key_path)?;
            if old_key == key.as_str() {
                return Ok(());
            }

            let answer = self
                .console
                .prompt_line("Do you want to replace the cached OpenAI API Key? ([Y]es/[N]o) [Yes] ")?;
            if !answer_means_yes(&answer) {
                return Ok(());
            }
        }

        self.fs.create_dir_all(&dir)?;
        self.fs.write(&key_path, key.as_str())
    }
}

/// 空入力は「はい」扱い（既定値）
fn answer_means_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}
