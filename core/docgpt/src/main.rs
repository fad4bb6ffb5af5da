mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{config_to_request, parse_args, print_completion, Config, ParseOutcome, BANNER};
use common::adapter::AnsiConsole;
use common::error::Error;
use common::ports::outbound::Console;
use ports::inbound::RunDocApp;
use wiring::{wire_docgpt, App};

/// Config をディスパッチする Runner（help の分岐は main レイヤーに集約）
struct Runner {
    app: App,
}

impl RunDocApp for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        if config.help {
            print_help();
            return Ok(0);
        }

        self.app.console.print_highlight(BANNER);
        let request = config_to_request(config);
        self.app.doc_use_case.run(&request)
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            // 想定内の失敗はすべて 1 で終了する
            report_error(&AnsiConsole, &e)
        }
    };
    process::exit(exit_code);
}

/// 失敗をエラーチャンネル（赤）で報告し、終了コードを返す
fn report_error(console: &dyn Console, e: &Error) -> i32 {
    console.print_error(&format!("docgpt: {}", e));
    if e.is_usage() {
        print_usage();
    }
    1
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match outcome {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_docgpt();
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Common use cases:");
    eprintln!("  docgpt --source <source> --target <target>");
    eprintln!("  docgpt --source <source> --overwrite");
    eprintln!("  docgpt --source <source>");
    eprintln!("  docgpt <source>");
    eprintln!("  cat <source> | docgpt");
}

fn print_help() {
    println!("Usage: docgpt [options] [source]");
    println!("Options:");
    println!("  -h, --help             Show this help message");
    println!("      --source <path>    Path to the source file (or pipe the source via stdin)");
    println!("      --target <path>    Path where the documented file will be stored.");
    println!("                         Default: <source>_docgpt.<ext>");
    println!("      --overwrite        Overwrite the source file with the documented version");
    println!("                         (mutually exclusive with --target)");
    println!("      --api-key <key>    OpenAI API key. Falls back to the OPENAI_API_KEY");
    println!("                         environment variable, then the key cached in ~/.docgpt");
    println!("      --generate <shell> Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Description:");
    println!("  Send a source file (or piped source code) to a text-completion model and");
    println!("  write back an annotated copy with added comments and docstrings.");
    println!("  Directory inputs are not supported.");
    println!();
    println!("Examples:");
    println!("  docgpt main.py");
    println!("  docgpt --source main.py --target documented.py");
    println!("  docgpt --source main.py --overwrite");
    println!("  cat main.py | docgpt --target documented.py");
}
