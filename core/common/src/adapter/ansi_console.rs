//! ANSI カラー端末実装
//!
//! 警告は黄色、エラーは赤、強調（バナー等）はシアンで表示する。
//! エラーのみ標準エラー出力に書く。

use crate::error::Error;
use crate::ports::outbound::Console;
use std::io::{BufRead, Write};

const YELLOW: u32 = 33;
const RED: u32 = 31;
const CYAN: u32 = 36;

/// カラーコードを端末エスケープシーケンスに変換
fn code_to_chars(code: u32) -> String {
    format!("\x1b[{}m", code)
}

/// 端末色をデフォルトに戻す
fn reset() -> String {
    code_to_chars(0)
}

fn paint(code: u32, msg: &str) -> String {
    format!("{}{}{}", code_to_chars(code), msg, reset())
}

/// ANSI エスケープで色付けする Console 実装
#[derive(Debug, Clone, Default)]
pub struct AnsiConsole;

impl Console for AnsiConsole {
    fn print(&self, msg: &str) {
        println!("{}", msg);
    }

    fn print_warning(&self, msg: &str) {
        println!("{}", paint(YELLOW, msg));
    }

    fn print_error(&self, msg: &str) {
        eprintln!("{}", paint(RED, msg));
    }

    fn print_highlight(&self, msg: &str) {
        println!("{}", paint(CYAN, msg));
    }

    fn prompt_line(&self, prompt: &str) -> Result<String, Error> {
        print!("{}", paint(YELLOW, prompt));
        std::io::stdout()
            .flush()
            .map_err(|e| Error::io_msg(format!("Failed to flush stdout: {}", e)))?;

        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(format!("Failed to read from stdin: {}", e)))?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
