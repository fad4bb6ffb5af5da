//! OpenAI 補完プロバイダの実装（legacy completions エンドポイント）

use crate::domain::{ApiKey, ModelName};
use crate::error::Error;
use crate::llm::provider::{Completion, CompletionProvider};
use serde_json::{json, Value};

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/completions";
const DEFAULT_MODEL: &str = "text-davinci-003";

/// OpenAI 補完プロバイダ
///
/// 決定的な出力に寄せるため temperature / top_p は 0.0 固定。
pub struct DavinciProvider {
    model: ModelName,
    api_key: ApiKey,
}

impl DavinciProvider {
    /// 新しいプロバイダを作成
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API キー
    /// * `model` - モデル名（デフォルト: "text-davinci-003"）
    pub fn new(api_key: ApiKey, model: Option<ModelName>) -> Self {
        Self {
            model: model.unwrap_or_else(|| ModelName::new(DEFAULT_MODEL)),
            api_key,
        }
    }
}

impl CompletionProvider for DavinciProvider {
    fn name(&self) -> &str {
        "davinci"
    }

    fn make_request_payload(
        &self,
        prompt: &str,
        max_tokens: usize,
        stop: Option<&str>,
    ) -> Result<Value, Error> {
        let mut payload = json!({
            "model": self.model.as_ref(),
            "prompt": prompt,
            "max_tokens": max_tokens,
            "temperature": 0.0,
            "top_p": 0.0,
            "frequency_penalty": 0.0,
            "presence_penalty": 0.0,
        });
        if let Some(stop) = stop {
            payload["stop"] = json!(stop);
        }
        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let client = reqwest::blocking::Client::new();
        let response = client
            .post(COMPLETIONS_URL)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key.as_str()))
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::api(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::api(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // エラーレスポンスを解析してメッセージを抽出
            let error_msg = if let Ok(v) = serde_json::from_str::<Value>(&response_text) {
                v["error"]["message"]
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
            } else {
                format!("HTTP {}: {}", status, response_text)
            };
            return Err(Error::api(format!("OpenAI API error: {}", error_msg)));
        }

        Ok(response_text)
    }

    fn parse_response(&self, response_json: &str) -> Result<Completion, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        // エラーチェック
        if let Some(error) = v.get("error") {
            let error_msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::api(format!("OpenAI API error: {}", error_msg)));
        }

        // テキストを抽出
        let text = v["choices"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| Error::api("No completion text in response"))?;

        Ok(Completion {
            text,
            total_tokens: v["usage"]["total_tokens"].as_u64(),
        })
    }
}
