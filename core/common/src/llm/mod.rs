//! LLMドライバーとプロバイダの実装
//!
//! テキスト補完 API のプロバイダ差異（ペイロード・HTTP・レスポンス解析）を
//! trait に閉じ込め、共通の呼び出しフローをドライバーに置く。

pub mod davinci;
pub mod driver;
pub mod echo;
pub mod provider;

pub use davinci::DavinciProvider;
pub use driver::CompletionDriver;
pub use echo::EchoProvider;
pub use provider::{Completion, CompletionProvider};
