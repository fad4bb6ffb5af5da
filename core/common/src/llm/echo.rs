//! Echoプロバイダの実装
//!
//! このプロバイダは実際に補完 API を呼び出さず、プロンプトをそのまま返します。
//! デバッグやテスト用に使用します。

use crate::error::Error;
use crate::llm::provider::{Completion, CompletionProvider};
use serde_json::{json, Value};

/// Echoプロバイダ
#[derive(Debug, Clone, Default)]
pub struct EchoProvider;

impl EchoProvider {
    /// 新しいEchoプロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

impl CompletionProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(
        &self,
        prompt: &str,
        max_tokens: usize,
        stop: Option<&str>,
    ) -> Result<Value, Error> {
        let mut payload = json!({
            "prompt": prompt,
            "max_tokens": max_tokens,
        });
        if let Some(stop) = stop {
            payload["stop"] = json!(stop);
        }
        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // 実際のAPI呼び出しは行わず、リクエストをそのまま包んで返す
        let v: Value = serde_json::from_str(request_json)
            .map_err(|e| Error::json(format!("Failed to parse request JSON: {}", e)))?;
        Ok(json!({ "echo": v["prompt"] }).to_string())
    }

    fn parse_response(&self, response_json: &str) -> Result<Completion, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;
        let text = v["echo"].as_str().unwrap_or_default().to_string();
        Ok(Completion {
            text,
            total_tokens: None,
        })
    }
}
