//! テスト用スタブアダプタ
//!
//! ポート経由で注入し、端末・環境変数・標準入力・補完 API をネットワークと
//! 実端末なしで再現する。

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

use common::domain::{ApiKey, ConfigDir};
use common::error::Error;
use common::llm::EchoProvider;
use common::ports::outbound::{Console, EnvResolver, StdinSource};

use crate::adapter::DriverCompletion;
use crate::ports::outbound::{CompletionFactory, TextCompletion};

/// 出力を捕捉し、対話入力を差し込める Console スタブ
#[derive(Default)]
pub struct StubConsole {
    pub lines: Mutex<Vec<String>>,
    pub warnings: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
    pub highlights: Mutex<Vec<String>>,
    pub prompt_answers: Mutex<VecDeque<String>>,
}

impl StubConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answers(answers: &[&str]) -> Self {
        let console = Self::default();
        *console.prompt_answers.lock().unwrap() =
            answers.iter().map(|s| s.to_string()).collect();
        console
    }

    pub fn warnings_joined(&self) -> String {
        self.warnings.lock().unwrap().join("\n")
    }

    pub fn lines_joined(&self) -> String {
        self.lines.lock().unwrap().join("\n")
    }

    pub fn remaining_answers(&self) -> usize {
        self.prompt_answers.lock().unwrap().len()
    }
}

impl Console for StubConsole {
    fn print(&self, msg: &str) {
        self.lines.lock().unwrap().push(msg.to_string());
    }

    fn print_warning(&self, msg: &str) {
        self.warnings.lock().unwrap().push(msg.to_string());
    }

    fn print_error(&self, msg: &str) {
        self.errors.lock().unwrap().push(msg.to_string());
    }

    fn print_highlight(&self, msg: &str) {
        self.highlights.lock().unwrap().push(msg.to_string());
    }

    fn prompt_line(&self, _prompt: &str) -> Result<String, Error> {
        Ok(self
            .prompt_answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }
}

/// 標準入力スタブ（tty か、固定のパイプ内容）
pub struct StubStdin {
    tty: bool,
    data: String,
}

impl StubStdin {
    /// 対話端末に接続された標準入力
    pub fn tty() -> Self {
        Self {
            tty: true,
            data: String::new(),
        }
    }

    /// パイプから固定内容を流し込む標準入力
    pub fn piped(data: impl Into<String>) -> Self {
        Self {
            tty: false,
            data: data.into(),
        }
    }
}

impl StdinSource for StubStdin {
    fn is_tty(&self) -> bool {
        self.tty
    }

    fn read_all(&self) -> Result<String, Error> {
        Ok(self.data.clone())
    }
}

/// 環境変数スタブ
pub struct StubEnv {
    pub api_key: Option<String>,
    pub config_dir: PathBuf,
}

impl EnvResolver for StubEnv {
    fn api_key_from_env(&self) -> Option<ApiKey> {
        self.api_key
            .clone()
            .filter(|s| !s.is_empty())
            .map(ApiKey::new)
    }

    fn resolve_config_dir(&self) -> Result<ConfigDir, Error> {
        Ok(ConfigDir::new(self.config_dir.clone()))
    }
}

/// ネットワーク不要の補完ファクトリ（Echo プロバイダ）
#[derive(Debug, Clone, Default)]
pub struct EchoCompletionFactory;

impl CompletionFactory for EchoCompletionFactory {
    fn create_completion(&self, _api_key: &ApiKey) -> Result<Box<dyn TextCompletion>, Error> {
        Ok(Box::new(DriverCompletion::new(EchoProvider::new())))
    }
}
