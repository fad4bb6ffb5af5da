//! 出力先パスの解決と引数検証
//!
//! ファイルシステムには一切触れない純粋な文字列計算。

use common::error::Error;

/// --target 未指定時にステムへ付け足す製品タグ
pub const DEFAULT_TARGET_APPEND: &str = "docgpt";

/// 解決済み出力先
///
/// `notice` は「導出した出力先を知らせる」情報メッセージ。
/// 表示するかどうかは呼び出し側が決める（この層は I/O をしない）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub path: String,
    pub notice: Option<String>,
}

/// パスを（ステム, 拡張子）に分割する
///
/// Python の os.path.splitext と同じ規則: ベース名の最後のドットで割り、
/// ベース名の先頭に連続するドットは拡張子とみなさない。
fn split_ext(path: &str) -> (&str, &str) {
    let sep_index = path.rfind('/').map(|i| i as isize).unwrap_or(-1);
    let dot_index = match path.rfind('.') {
        Some(i) => i as isize,
        None => return (path, ""),
    };
    if dot_index > sep_index {
        let mut filename_index = sep_index + 1;
        while filename_index < dot_index {
            if path.as_bytes()[filename_index as usize] != b'.' {
                return (&path[..dot_index as usize], &path[dot_index as usize..]);
            }
            filename_index += 1;
        }
    }
    (path, "")
}

/// 出力先パスを解決する
///
/// - overwrite なら source_path をそのまま返す（拡張子の正規化もしない）
/// - target 未指定なら `ステム_docgpt拡張子` を導出して notice を添える
/// - 出来上がったパスがソース側の拡張子で終わっていなければ、その拡張子を
///   付け足す。別の拡張子が付いていても置換はしない（`new_target.py` +
///   `.cpp` ソース → `new_target.py.cpp`）。意図された仕様であり修正しない。
pub fn resolve_target(source_path: &str, overwrite: bool, target: Option<&str>) -> ResolvedTarget {
    // ソースファイルを上書きする
    if overwrite {
        return ResolvedTarget {
            path: source_path.to_string(),
            notice: None,
        };
    }

    let (stem, ext) = split_ext(source_path);
    let (mut path, notice) = match target {
        // 出力先はユーザー指定
        Some(t) if !t.is_empty() => (t.to_string(), None),
        // source_path から出力先を導出
        _ => {
            let derived = format!("{}_{}{}", stem, DEFAULT_TARGET_APPEND, ext);
            let notice = format!(
                "No '--target' specified; will store the documented file at '{}'",
                derived
            );
            (derived, Some(notice))
        }
    };

    // ソース側の拡張子で終わっていなければ付け足す
    if !path.ends_with(ext) {
        path.push_str(ext);
    }

    ResolvedTarget { path, notice }
}

/// 引数の組み合わせを検証する
pub fn validate_args(
    source: Option<&str>,
    target: Option<&str>,
    overwrite: bool,
) -> Result<(), Error> {
    // --overwrite には --source が必要
    if overwrite && source.is_none() {
        return Err(Error::invalid_argument(
            "The '--source' flag is required when the '--overwrite' flag is used.",
        ));
    }

    // --overwrite と --target は排他
    if overwrite && target.is_some() {
        return Err(Error::invalid_argument(
            "The '--overwrite' and '--target' flags are mutually exclusive, use either, not both.",
        ));
    }

    // --source も --target もないと出力先が決められない
    if source.is_none() && target.is_none() {
        return Err(Error::invalid_argument(
            "In absence of '--source', please specify where you wish to export via the '--target' flag.",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_target_appends_tag_before_extension() {
        let t = resolve_target("/path/to/sample.py", false, None);
        assert_eq!(t.path, "/path/to/sample_docgpt.py");
        assert!(t.notice.unwrap().contains("/path/to/sample_docgpt.py"));
    }

    #[test]
    fn test_explicit_target_gets_source_extension() {
        let t = resolve_target("/path/to/sample.cpp", false, Some("new_target"));
        assert_eq!(t.path, "new_target.cpp");
        assert!(t.notice.is_none());
    }

    #[test]
    fn test_source_extension_appended_even_over_other_extension() {
        // 置換ではなく追加。意図された挙動（バグ扱いで直さない）
        let t = resolve_target("/path/to/sample.cpp", false, Some("new_target.py"));
        assert_eq!(t.path, "new_target.py.cpp");
    }

    #[test]
    fn test_target_already_carrying_source_extension_is_untouched() {
        let t = resolve_target("/path/to/sample.cpp", false, Some("new_target.cpp"));
        assert_eq!(t.path, "new_target.cpp");
    }

    #[test]
    fn test_overwrite_returns_source_verbatim() {
        let t = resolve_target("/path/to/sample.py", true, None);
        assert_eq!(t.path, "/path/to/sample.py");
        assert!(t.notice.is_none());

        // overwrite は target の有無に関わらずソースをそのまま返す
        let t = resolve_target("/path/to/sample.py", true, Some("elsewhere"));
        assert_eq!(t.path, "/path/to/sample.py");
    }

    #[test]
    fn test_source_without_extension() {
        let t = resolve_target("/path/to/Makefile", false, None);
        assert_eq!(t.path, "/path/to/Makefile_docgpt");
    }

    #[test]
    fn test_stdin_sentinel_source_path() {
        // パイプ入力の番兵値 "." には拡張子がない
        let t = resolve_target(".", false, Some("out.py"));
        assert_eq!(t.path, "out.py");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let a = resolve_target("/p/sample.py", false, Some("out"));
        let b = resolve_target("/p/sample.py", false, Some("out"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_split_ext_basic() {
        assert_eq!(split_ext("/path/to/sample.py"), ("/path/to/sample", ".py"));
        assert_eq!(split_ext("sample.tar.gz"), ("sample.tar", ".gz"));
        assert_eq!(split_ext("no_extension"), ("no_extension", ""));
    }

    #[test]
    fn test_split_ext_leading_dots_are_not_extensions() {
        assert_eq!(split_ext(".bashrc"), (".bashrc", ""));
        assert_eq!(split_ext("/home/u/.bashrc"), ("/home/u/.bashrc", ""));
        assert_eq!(split_ext("..."), ("...", ""));
        assert_eq!(split_ext(".hidden.py"), (".hidden", ".py"));
    }

    #[test]
    fn test_validate_args_overwrite_requires_source() {
        let e = validate_args(None, None, true).unwrap_err();
        assert!(e.is_usage());
        assert!(e.to_string().contains("--source"));
    }

    #[test]
    fn test_validate_args_overwrite_and_target_are_exclusive() {
        let e = validate_args(Some("a.py"), Some("b.py"), true).unwrap_err();
        assert!(e.is_usage());
        assert!(e.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn test_validate_args_source_or_target_required() {
        let e = validate_args(None, None, false).unwrap_err();
        assert!(e.is_usage());
        assert!(e.to_string().contains("--target"));
    }

    #[test]
    fn test_validate_args_accepts_valid_combinations() {
        assert!(validate_args(Some("a.py"), None, false).is_ok());
        assert!(validate_args(Some("a.py"), Some("b.py"), false).is_ok());
        assert!(validate_args(Some("a.py"), None, true).is_ok());
        assert!(validate_args(None, Some("b.py"), false).is_ok());
    }
}
