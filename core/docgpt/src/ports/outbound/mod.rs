//! Outbound ポート: アプリが外界を使うための trait

pub mod completion;

pub use completion::{CompletionFactory, TextCompletion};
