//! 補完 API の Outbound ポート
//!
//! usecase はこの trait 経由でのみ補完モデルを呼び出す。

use common::domain::ApiKey;
use common::error::Error;
use common::llm::Completion;

/// 単発テキスト補完の抽象
///
/// 実装は `adapter::DriverCompletion`（実 API）やテスト用のスタブなど。
pub trait TextCompletion: Send + Sync {
    /// プロンプトを送信して補完結果を受け取る
    fn complete(
        &self,
        prompt: &str,
        max_tokens: usize,
        stop: Option<&str>,
    ) -> Result<Completion, Error>;
}

/// API キーから補完クライアントを組み立てるファクトリ
///
/// キーは実行時（フラグ・環境変数・キャッシュ・対話入力）に決まるため、
/// 配線時ではなく usecase 内で生成する。
pub trait CompletionFactory: Send + Sync {
    fn create_completion(&self, api_key: &ApiKey) -> Result<Box<dyn TextCompletion>, Error>;
}
