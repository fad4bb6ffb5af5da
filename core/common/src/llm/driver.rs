//! 補完ドライバーの実装
//!
//! プロバイダに依存しない共通処理（ペイロード生成 → HTTP → 解析）を提供します。

use crate::error::Error;
use crate::llm::provider::{Completion, CompletionProvider};

/// 補完ドライバー
pub struct CompletionDriver<P: CompletionProvider> {
    provider: P,
}

impl<P: CompletionProvider> CompletionDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// プロンプトを送信して補完結果を取得
    pub fn complete(
        &self,
        prompt: &str,
        max_tokens: usize,
        stop: Option<&str>,
    ) -> Result<Completion, Error> {
        // リクエストペイロードを生成
        let payload = self.provider.make_request_payload(prompt, max_tokens, stop)?;

        // JSON文字列に変換
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        // HTTPリクエストを実行
        let response_json = self.provider.make_http_request(&request_json)?;

        // レスポンスから補完結果を抽出
        self.provider.parse_response(&response_json)
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    // モックプロバイダ
    struct MockProvider;

    impl CompletionProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        fn make_request_payload(
            &self,
            prompt: &str,
            max_tokens: usize,
            _stop: Option<&str>,
        ) -> Result<Value, Error> {
            Ok(json!({ "prompt": prompt, "max_tokens": max_tokens }))
        }

        fn make_http_request(&self, _request_json: &str) -> Result<String, Error> {
            Ok(r#"{"choices":[{"text":"documented"}],"usage":{"total_tokens":42}}"#.to_string())
        }

        fn parse_response(&self, response_json: &str) -> Result<Completion, Error> {
            let v: Value = serde_json::from_str(response_json)
                .map_err(|e| Error::json(format!("Failed to parse JSON: {}", e)))?;
            Ok(Completion {
                text: v["choices"][0]["text"].as_str().unwrap_or_default().to_string(),
                total_tokens: v["usage"]["total_tokens"].as_u64(),
            })
        }
    }

    #[test]
    fn test_driver_new() {
        let driver = CompletionDriver::new(MockProvider);
        assert_eq!(driver.provider().name(), "mock");
    }

    #[test]
    fn test_driver_complete() {
        let driver = CompletionDriver::new(MockProvider);
        let result = driver.complete("add docs", 100, None).unwrap();
        assert_eq!(result.text, "documented");
        assert_eq!(result.total_tokens, Some(42));
    }

    #[test]
    fn test_driver_complete_with_stop() {
        let driver = CompletionDriver::new(MockProvider);
        let result = driver.complete("add docs", 100, Some("</script>"));
        assert!(result.is_ok());
    }
}
