//! ドキュメント化ユースケース
//!
//! 1回の実行で resolve → estimate → resolve の列を厳密に順番どおり行う。
//! 状態は一切持たない（毎回の呼び出しが入力の純関数 + 記述済みの I/O のみ）。

use std::path::Path;
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Console, FileSystem};

use crate::domain::{
    build_prompt, resolve_target, validate_args, BudgetVerdict, DocRequest, PromptBudget,
    ENDS_TAG, MAX_CONTEXT_LENGTH,
};
use crate::ports::outbound::CompletionFactory;
use crate::usecase::{ApiKeyUseCase, SourceResolver};

/// ドキュメント化ユースケース
pub struct DocumentUseCase {
    fs: Arc<dyn FileSystem>,
    console: Arc<dyn Console>,
    api_keys: ApiKeyUseCase,
    sources: SourceResolver,
    completions: Arc<dyn CompletionFactory>,
    budget: PromptBudget,
}

impl DocumentUseCase {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        console: Arc<dyn Console>,
        api_keys: ApiKeyUseCase,
        sources: SourceResolver,
        completions: Arc<dyn CompletionFactory>,
        budget: PromptBudget,
    ) -> Self {
        Self {
            fs,
            console,
            api_keys,
            sources,
            completions,
            budget,
        }
    }

    /// リクエストを実行して終了コードを返す
    pub fn run(&self, request: &DocRequest) -> Result<i32, Error> {
        // 1) API キーを解決してキャッシュ
        let api_key = self.api_keys.resolve(request.api_key.as_deref())?;
        self.api_keys.cache(&api_key)?;

        // 2) ソースを解決
        let source = self.sources.resolve(request.source.as_deref())?;

        // 3) プロンプトを組み立ててトークン数を見積もる
        let prompt = build_prompt(&source.text);
        let estimated_tokens = self.budget.estimate_tokens(&prompt);
        if let BudgetVerdict::TooLarge { advisory, .. } = self.budget.check(estimated_tokens) {
            // 勧告のみの条件。警告を出してネットワーク呼び出し前に中断する
            self.console.print_warning(&advisory);
            return Ok(1);
        }

        // 4) 引数の組み合わせを検証
        validate_args(
            request.source.as_deref(),
            request.target.as_deref(),
            request.overwrite,
        )?;

        // 5) 出力先を解決
        let target = resolve_target(&source.path, request.overwrite, request.target.as_deref());
        if let Some(notice) = &target.notice {
            self.console.print_warning(notice);
        }

        self.console.print(&format!("source: {}", source.path));
        self.console.print(&format!("target: {}", target.path));

        // 6) 補完モデルを呼び出す
        self.console.print("Waiting for the completion model to respond...");
        let completion = self.completions.create_completion(&api_key)?;
        let result = completion.complete(
            &prompt,
            self.budget.max_completion_tokens(estimated_tokens),
            Some(ENDS_TAG),
        )?;

        if let Some(total) = result.total_tokens {
            if total as usize > MAX_CONTEXT_LENGTH - 10 {
                self.console.print_warning(
                    "Model ran out of token space (reached max context length). \
                     The output file is probably missing some lines. \
                     Please chunk the source code into multiple files and retry each separately.",
                );
            }
        }

        // 7) 末尾を整えて書き出す
        let mut documented = result.text.trim().to_string();
        documented.push('\n');
        self.fs.write(Path::new(&target.path), &documented)?;

        self.console
            .print(&format!("Documented source code exported: {}", target.path));
        Ok(0)
    }
}
