//! ユースケース層
//!
//! ドメインの純粋ロジックをポート経由の I/O とつなぐ。

pub mod api_key;
pub mod document;
pub mod source;

pub use api_key::{ApiKeyUseCase, API_KEY_FILE_NAME};
pub use document::DocumentUseCase;
pub use source::SourceResolver;
