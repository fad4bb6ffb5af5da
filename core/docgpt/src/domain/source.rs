//! ソース入力のドメイン型と定数

/// パイプ入力として受け付ける最小文字数
///
/// 空や書きかけの入力を誤って送信しないためのガード。
pub const MIN_SOURCE_LENGTH: usize = 40;

/// パイプ入力時に「ソースのパス」として使う番兵値（カレントディレクトリ）
pub const STDIN_SOURCE_PATH: &str = ".";

/// 解決済みソース
///
/// `path` は実在のファイルパス、またはパイプ入力を表す番兵値。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    pub text: String,
    pub path: String,
}
