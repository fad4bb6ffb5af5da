//! ソース解決ユースケース
//!
//! 注釈対象のテキストと「ソースのパス」を、ファイル引数または
//! パイプ入力から決める。ファイルと標準入力にはポート経由でのみ触れる。

use std::path::Path;
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{FileSystem, StdinSource};

use crate::domain::{ResolvedSource, MIN_SOURCE_LENGTH, STDIN_SOURCE_PATH};

/// ソース解決
pub struct SourceResolver {
    fs: Arc<dyn FileSystem>,
    stdin: Arc<dyn StdinSource>,
}

impl SourceResolver {
    pub fn new(fs: Arc<dyn FileSystem>, stdin: Arc<dyn StdinSource>) -> Self {
        Self { fs, stdin }
    }

    /// ソースを解決する
    ///
    /// - パスが明示されていれば、そのファイルを読み前後の空白を落とす。
    ///   ファイル由来なら空になっても許す（最小長はパイプ入力のみに課す）。
    /// - パスがなく標準入力がパイプなら、全量をそのまま読む。
    ///   最小長未満は TooSmall。パスには番兵値 "." を入れる。
    /// - どちらもなければ NoSource（usage エラー）。
    pub fn resolve(&self, explicit: Option<&str>) -> Result<ResolvedSource, Error> {
        if let Some(source) = explicit {
            let path = Path::new(source);
            if !self.fs.exists(path) {
                return Err(Error::not_found(format!(
                    "Source file does not exist at '{}'",
                    source
                )));
            }

            // ディレクトリ（一括変換）は未対応
            if self.fs.metadata(path)?.is_dir() {
                return Err(Error::unsupported_input(
                    "Current version of DocGPT does not support directory inputs. \
                     If you need the feature to recursively convert all source files in a \
                     directory, please submit an issue: \
                     https://github.com/amir-abdi/docgpt/issues",
                ));
            }

            let text = self.fs.read_to_string(path)?;
            return Ok(ResolvedSource {
                text: text.trim().to_string(),
                path: source.to_string(),
            });
        }

        // パイプ入力を試す
        if !self.stdin.is_tty() {
            let source_code = self.stdin.read_all()?;
            if source_code.chars().count() < MIN_SOURCE_LENGTH {
                return Err(Error::too_small(format!(
                    "The source code you passed is too small:\n\n{}",
                    source_code
                )));
            }
            return Ok(ResolvedSource {
                text: source_code,
                path: STDIN_SOURCE_PATH.to_string(),
            });
        }

        Err(Error::no_source("No source provided."))
    }
}
