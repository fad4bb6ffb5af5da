//! Outbound ポート: アプリが外界を使うための trait

pub mod console;
pub mod env_resolver;
pub mod fs;
pub mod stdin;

pub use console::Console;
pub use env_resolver::EnvResolver;
pub use fs::{FileMetadata, FileSystem};
pub use stdin::StdinSource;
