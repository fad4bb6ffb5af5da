//! 標準入力 Outbound ポート
//!
//! パイプ入力の検出と全量読み込みを抽象化する。

use crate::error::Error;

/// 標準入力抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdStdin` やテスト用のスタブなど。
pub trait StdinSource: Send + Sync {
    /// 標準入力が対話端末に接続されているか
    fn is_tty(&self) -> bool;

    /// 標準入力を EOF まで読み切って返す（行単位の加工はしない）
    fn read_all(&self) -> Result<String, Error>;
}
