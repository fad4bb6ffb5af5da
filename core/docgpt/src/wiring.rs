//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{AnsiConsole, StdEnvResolver, StdFileSystem, StdStdin};
use common::ports::outbound::{Console, EnvResolver, FileSystem, StdinSource};

use crate::adapter::StdCompletionFactory;
use crate::domain::PromptBudget;
use crate::ports::outbound::CompletionFactory;
use crate::usecase::{ApiKeyUseCase, DocumentUseCase, SourceResolver};

/// 組み立て済みアプリケーション
pub struct App {
    pub console: Arc<dyn Console>,
    pub doc_use_case: DocumentUseCase,
}

/// 配線: 標準アダプタで DocumentUseCase を組み立てる
pub fn wire_docgpt() -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let console: Arc<dyn Console> = Arc::new(AnsiConsole);
    let stdin: Arc<dyn StdinSource> = Arc::new(StdStdin);

    let api_keys = ApiKeyUseCase::new(Arc::clone(&env), Arc::clone(&fs), Arc::clone(&console));
    let sources = SourceResolver::new(Arc::clone(&fs), stdin);
    let completions: Arc<dyn CompletionFactory> = Arc::new(StdCompletionFactory);

    let doc_use_case = DocumentUseCase::new(
        Arc::clone(&fs),
        Arc::clone(&console),
        api_keys,
        sources,
        completions,
        PromptBudget::standard(),
    );

    App {
        console,
        doc_use_case,
    }
}
