//! モジュールテスト（スタブアダプタで usecase を検証）

mod support;
