//! ドキュメント化リクエスト
//!
//! CLI の Config から変換された、1回分の実行内容。

/// 1回のドキュメント化実行の入力
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocRequest {
    /// ソースファイルのパス（None ならパイプ入力を試す）
    pub source: Option<String>,
    /// 出力先のパス（None なら source から導出）
    pub target: Option<String>,
    /// --api-key で渡された API キー
    pub api_key: Option<String>,
    /// ソースファイルを上書きするモード
    pub overwrite: bool,
}
