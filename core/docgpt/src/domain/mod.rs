//! ドメイン層（純粋ロジック）
//!
//! ソース解決・トークン見積もり・出力先解決の判断はすべてここに置く。
//! I/O は一切行わず、usecase がポート経由で外界と接続する。

pub mod budget;
pub mod prompt;
pub mod request;
pub mod source;
pub mod target;

pub use budget::{BudgetVerdict, PromptBudget, MAX_CONTEXT_LENGTH};
pub use prompt::{build_prompt, ENDS_TAG};
pub use request::DocRequest;
pub use source::{ResolvedSource, MIN_SOURCE_LENGTH, STDIN_SOURCE_PATH};
pub use target::{resolve_target, validate_args};
