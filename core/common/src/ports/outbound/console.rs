//! 端末出力 Outbound ポート
//!
//! 色付き表示と対話入力を抽象化する。usecase は println を直接呼ばず、
//! この trait 経由で表示することでテスト時に出力を捕捉できる。

use crate::error::Error;

/// 端末抽象（Outbound ポート）
///
/// 実装は `common::adapter::AnsiConsole` やテスト用のスタブなど。
pub trait Console: Send + Sync {
    /// 通常メッセージ（装飾なし、標準出力）
    fn print(&self, msg: &str);

    /// 警告メッセージ（黄色、標準出力）
    fn print_warning(&self, msg: &str);

    /// エラーメッセージ（赤色、標準エラー出力）
    fn print_error(&self, msg: &str);

    /// 強調メッセージ（シアン、バナー等）
    fn print_highlight(&self, msg: &str);

    /// プロンプトを表示して1行読み込む（末尾の改行は除去）
    fn prompt_line(&self, prompt: &str) -> Result<String, Error>;
}
