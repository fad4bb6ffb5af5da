//! 標準入力実装（std::io::stdin を委譲）

use crate::error::Error;
use crate::ports::outbound::StdinSource;
use std::io::{IsTerminal, Read};

/// プロセスの標準入力をそのまま使う StdinSource 実装
#[derive(Debug, Clone, Default)]
pub struct StdStdin;

impl StdinSource for StdStdin {
    fn is_tty(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn read_all(&self) -> Result<String, Error> {
        let mut buf = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .map_err(|e| Error::io_msg(format!("Failed to read piped input: {}", e)))?;
        Ok(buf)
    }
}
