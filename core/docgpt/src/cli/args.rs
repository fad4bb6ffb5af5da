use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;

use crate::domain::DocRequest;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub help: bool,
    /// ソースファイルのパス（位置引数または --source。どちらもなければパイプ入力）
    pub source: Option<String>,
    /// --target: 出力先のパス
    pub target: Option<String>,
    /// --api-key: OpenAI API キー（環境変数・キャッシュより優先）
    pub api_key: Option<String>,
    /// --overwrite: ソースファイルを注釈済みの内容で上書きする
    pub overwrite: bool,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("docgpt")
        .about("Automatically document source code with a text-completion model")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("source-flag")
                .long("source")
                .value_name("path")
                .help("Path to the source file (or pipe the source via stdin)")
                .conflicts_with("source")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("target")
                .long("target")
                .value_name("path")
                .help("Path where the documented file will be stored")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("overwrite")
                .long("overwrite")
                .help("Overwrite the source file with the documented version")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("api-key")
                .long("api-key")
                .alias("api_key")
                .value_name("key")
                .help("OpenAI API key (falls back to OPENAI_API_KEY, then the cached key)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script (bash, zsh, fish)")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("source")
                .index(1)
                .help("Path to the source file (same as --source)")
                .num_args(0..=1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let help = matches.get_flag("help");
    // 位置引数と --source は同じ意味（排他は clap が担保）
    let source = matches
        .get_one::<String>("source-flag")
        .or_else(|| matches.get_one::<String>("source"))
        .cloned();
    let target = matches.get_one::<String>("target").cloned();
    let api_key = matches.get_one::<String>("api-key").cloned();
    let overwrite = matches.get_flag("overwrite");

    Config {
        help,
        source,
        target,
        api_key,
        overwrite,
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// Config を実行リクエストに変換する
pub fn config_to_request(config: Config) -> DocRequest {
    DocRequest {
        source: config.source,
        target: config.target,
        api_key: config.api_key,
        overwrite: config.overwrite,
    }
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "docgpt", &mut std::io::stdout());
}
