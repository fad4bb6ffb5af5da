//! CLI 層（引数解析と変換）

pub mod args;

pub use args::{config_to_request, parse_args, print_completion, Config, ParseOutcome};

/// 起動時に表示するバナー
pub const BANNER: &str = "DocGPT: automatic comments and docstrings for your source code";
