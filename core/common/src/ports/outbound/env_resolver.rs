//! 環境変数解決 Outbound ポート
//!
//! API キーと設定ディレクトリを環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::{ApiKey, ConfigDir};
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のスタブなど。
pub trait EnvResolver: Send + Sync {
    /// OPENAI_API_KEY が設定されていれば返す（空文字は未設定扱い）
    fn api_key_from_env(&self) -> Option<ApiKey>;

    /// 設定ディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. DOCGPT_HOME（設定されていれば）
    /// 2. $HOME/.docgpt
    fn resolve_config_dir(&self) -> Result<ConfigDir, Error>;
}
