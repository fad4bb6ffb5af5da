//! Ports & Adapters のポート定義
//!
//! usecase はここで定義した trait 経由でのみ外界（ファイル・環境変数・端末）に触れる。

pub mod outbound;
