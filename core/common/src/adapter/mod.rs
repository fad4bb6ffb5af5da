//! 標準アダプタ（Outbound ポートの実装）
//!
//! usecase にはここの Std* / Ansi* を注入する。テストではスタブに差し替える。

pub mod ansi_console;
pub mod std_env_resolver;
pub mod std_fs;
pub mod std_stdin;

pub use ansi_console::AnsiConsole;
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
pub use std_stdin::StdStdin;
