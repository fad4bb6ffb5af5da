//! エラーハンドリング
//!
//! 失敗は種別ごとの variant とメッセージで統一する。
//! usage 系（引数不正・ソース未指定）は `is_usage()` で判別し、
//! main が使い方の表示を追加で行う。

use thiserror::Error;

/// エラー型
///
/// すべてユーザーが回復可能な想定内の失敗。プロセス終了コードへの
/// 変換は呼び出し側（main）の責務（成功 0 / 失敗 1）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// 引数の組み合わせが不正（usage エラー）
    #[error("{0}")]
    InvalidArgument(String),

    /// ソースファイルが存在しない
    #[error("{0}")]
    NotFound(String),

    /// ディレクトリ入力など未対応の入力
    #[error("{0}")]
    UnsupportedInput(String),

    /// パイプ入力が最小長に満たない
    #[error("{0}")]
    TooSmall(String),

    /// ソースが一切与えられていない（usage エラー）
    #[error("{0}")]
    NoSource(String),

    /// ファイル・ストリーム I/O の失敗
    #[error("{0}")]
    Io(String),

    /// 環境変数・設定まわりの失敗
    #[error("{0}")]
    Env(String),

    /// JSON の整形・解析の失敗
    #[error("{0}")]
    Json(String),

    /// 補完 API の失敗
    #[error("{0}")]
    Api(String),
}

impl Error {
    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// ソース未検出エラー
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// 未対応入力エラー
    pub fn unsupported_input(msg: impl Into<String>) -> Self {
        Self::UnsupportedInput(msg.into())
    }

    /// 入力過小エラー
    pub fn too_small(msg: impl Into<String>) -> Self {
        Self::TooSmall(msg.into())
    }

    /// ソース未指定エラー
    pub fn no_source(msg: impl Into<String>) -> Self {
        Self::NoSource(msg.into())
    }

    /// I/O エラー
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// 環境変数エラー
    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    /// JSON エラー
    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    /// API エラー
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// 使い方の表示が必要なエラーかどうか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::NoSource(_))
    }
}
