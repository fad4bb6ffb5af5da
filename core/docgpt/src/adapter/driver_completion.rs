//! 補完ドライバーを TextCompletion ポートに適合させるアダプタ

use common::domain::ApiKey;
use common::error::Error;
use common::llm::{Completion, CompletionDriver, CompletionProvider, DavinciProvider};

use crate::ports::outbound::{CompletionFactory, TextCompletion};

/// CompletionDriver をポートに適合させるアダプタ
pub struct DriverCompletion<P: CompletionProvider> {
    driver: CompletionDriver<P>,
}

impl<P: CompletionProvider> DriverCompletion<P> {
    pub fn new(provider: P) -> Self {
        Self {
            driver: CompletionDriver::new(provider),
        }
    }
}

impl<P: CompletionProvider> TextCompletion for DriverCompletion<P> {
    fn complete(
        &self,
        prompt: &str,
        max_tokens: usize,
        stop: Option<&str>,
    ) -> Result<Completion, Error> {
        self.driver.complete(prompt, max_tokens, stop)
    }
}

/// 標準の補完ファクトリ（OpenAI プロバイダで組み立てる）
#[derive(Debug, Clone, Default)]
pub struct StdCompletionFactory;

impl CompletionFactory for StdCompletionFactory {
    fn create_completion(&self, api_key: &ApiKey) -> Result<Box<dyn TextCompletion>, Error> {
        let provider = DavinciProvider::new(api_key.clone(), None);
        Ok(Box::new(DriverCompletion::new(provider)))
    }
}
