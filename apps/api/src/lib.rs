//! # Todoflow API サーバー
//!
//! Todo の一覧・作成・更新・完了切り替え・削除を提供する HTTP API。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────────┐
//! │  Frontend   │────▶│   handler   │────▶│     usecase     │
//! │  (Next.js)  │     │   (axum)    │     │ TodoUseCaseImpl │
//! └─────────────┘     └─────────────┘     └────────┬────────┘
//!                                                  ↓
//!                                         ┌─────────────────┐
//!                                         │ TodoRepository  │
//!                                         │  (in-memory)    │
//!                                         └─────────────────┘
//! ```
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーター構築（CORS・トレーシング層を含む）
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - ビジネスロジック

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
