//! アダプタ（Outbound ポートの実装）

pub mod driver_completion;

pub use driver_completion::{DriverCompletion, StdCompletionFactory};
