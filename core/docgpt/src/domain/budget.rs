//! プロンプト予算（トークン数の見積もりと上限チェック）
//!
//! 見積もりは実トークナイザではなく経験則による近似。下流のしきい値は
//! この近似に合わせて較正されているため、厳密なトークナイザに
//! 「修正」してはならない。

use regex::Regex;
use std::sync::OnceLock;

/// 警告を出す見積もりトークン数のしきい値
pub const MAX_PROMPT_LENGTH_THRESHOLD: usize = 1800;

/// モデルのコンテキスト長（プロンプト+補完の合計上限）
pub const MAX_CONTEXT_LENGTH: usize = 4097;

/// 断片数からトークン数への経験則係数
pub const TOKEN_ESTIMATE_COEFF: f64 = 1.28;

/// 単語でない文字（アンダースコア含む）の並びにマッチする区切り
fn separator_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\W_]+").expect("separator regex is valid"))
}

/// プロンプト予算の判定結果
///
/// TooLarge は勧告であってエラーではない。中断するかどうかは呼び出し側が決める。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetVerdict {
    /// しきい値以内
    Fits,
    /// しきい値超過（警告文を添える）
    TooLarge {
        estimated_tokens: usize,
        advisory: String,
    },
}

/// プロンプト予算（しきい値とコンテキスト長）
#[derive(Debug, Clone, Copy)]
pub struct PromptBudget {
    pub threshold: usize,
    pub context_length: usize,
}

impl PromptBudget {
    /// 既定の予算（text-davinci-003 向けに較正済み）
    pub fn standard() -> Self {
        Self {
            threshold: MAX_PROMPT_LENGTH_THRESHOLD,
            context_length: MAX_CONTEXT_LENGTH,
        }
    }

    /// プロンプトのトークン数を見積もる
    ///
    /// `[\W_]+` の並びを区切りとして分割し、区切り自身も1断片として数える
    /// （先頭・末尾の空断片も含む）。断片数に係数を掛けて切り捨てる。
    pub fn estimate_tokens(&self, text: &str) -> usize {
        // 区切りが n 個なら断片は 2n + 1 個（両端の空断片を含む）
        let fragments = 2 * separator_regex().find_iter(text).count() + 1;
        (fragments as f64 * TOKEN_ESTIMATE_COEFF) as usize
    }

    /// 見積もりトークン数をしきい値と照合する
    pub fn check(&self, estimated_tokens: usize) -> BudgetVerdict {
        if estimated_tokens > self.threshold {
            BudgetVerdict::TooLarge {
                estimated_tokens,
                advisory: format!(
                    "Your file is too big. It contains around {} which is more than \
                     half the model's context length ({}). \
                     Not enough context space left for auto-documentation. \
                     Please partition the file into smaller chunks and try each separately.",
                    estimated_tokens, self.context_length
                ),
            }
        } else {
            BudgetVerdict::Fits
        }
    }

    /// 補完側に割り当てられるトークン数
    pub fn max_completion_tokens(&self, estimated_tokens: usize) -> usize {
        self.context_length.saturating_sub(estimated_tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_tokens_reference_case() {
        // this, ' ', is, /, a, +, 4 の7断片
        let budget = PromptBudget::standard();
        assert_eq!(
            budget.estimate_tokens("this is/a+4"),
            (7.0 * TOKEN_ESTIMATE_COEFF) as usize
        );
    }

    #[test]
    fn test_estimate_tokens_empty() {
        // 空文字列でも空断片が1つある
        let budget = PromptBudget::standard();
        assert_eq!(budget.estimate_tokens(""), (1.0 * TOKEN_ESTIMATE_COEFF) as usize);
    }

    #[test]
    fn test_estimate_tokens_counts_edge_fragments() {
        // " a " は ['', ' ', 'a', ' ', ''] の5断片
        let budget = PromptBudget::standard();
        assert_eq!(budget.estimate_tokens(" a "), (5.0 * TOKEN_ESTIMATE_COEFF) as usize);
    }

    #[test]
    fn test_estimate_tokens_underscore_is_separator() {
        // snake_case は ['snake', '_', 'case'] の3断片
        let budget = PromptBudget::standard();
        assert_eq!(
            budget.estimate_tokens("snake_case"),
            (3.0 * TOKEN_ESTIMATE_COEFF) as usize
        );
    }

    #[test]
    fn test_estimate_tokens_is_deterministic() {
        let budget = PromptBudget::standard();
        let text = "def f(x):\n    return x + 1\n";
        assert_eq!(budget.estimate_tokens(text), budget.estimate_tokens(text));
    }

    #[test]
    fn test_check_at_threshold_fits() {
        let budget = PromptBudget::standard();
        assert_eq!(budget.check(MAX_PROMPT_LENGTH_THRESHOLD), BudgetVerdict::Fits);
    }

    #[test]
    fn test_check_above_threshold_is_advisory() {
        let budget = PromptBudget::standard();
        match budget.check(MAX_PROMPT_LENGTH_THRESHOLD + 1) {
            BudgetVerdict::TooLarge {
                estimated_tokens,
                advisory,
            } => {
                assert_eq!(estimated_tokens, 1801);
                assert!(advisory.starts_with(
                    "Your file is too big. It contains around 1801 which is more than \
                     half the model's context length (4097)."
                ));
                assert!(advisory.contains("Not enough context space left"));
            }
            BudgetVerdict::Fits => panic!("expected TooLarge"),
        }
    }

    #[test]
    fn test_max_completion_tokens() {
        let budget = PromptBudget::standard();
        assert_eq!(budget.max_completion_tokens(1800), 4097 - 1800);
        assert_eq!(budget.max_completion_tokens(5000), 0);
    }
}
