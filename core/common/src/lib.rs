//! DocGPT共通ライブラリ
//!
//! `docgpt`コマンドの足回り（エラー・ドメイン型・ポート・標準アダプタ・LLM）を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Outbound ポート定義
pub mod ports;

/// 標準アダプタ実装
pub mod adapter;

/// LLMドライバーとプロバイダ
pub mod llm;
