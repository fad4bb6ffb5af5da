//! 補完プロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// 補完 API の結果
///
/// `total_tokens` はプロバイダがトークン使用量を返す場合のみ Some。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub total_tokens: Option<u64>,
}

/// 補完プロバイダのトレイト
///
/// 各プロバイダ（OpenAI、Echo など）はこのトレイトを実装する。
pub trait CompletionProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `prompt` - 補完モデルに送る全文
    /// * `max_tokens` - 補完側に割り当てるトークン数
    /// * `stop` - 生成停止シーケンス（オプション）
    fn make_request_payload(
        &self,
        prompt: &str,
        max_tokens: usize,
        stop: Option<&str>,
    ) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンス JSON 文字列を取得
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンス JSON から補完結果を抽出
    fn parse_response(&self, response_json: &str) -> Result<Completion, Error>;
}
