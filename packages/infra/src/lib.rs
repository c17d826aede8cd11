//! # Todoflow インフラ層
//!
//! ドメインモデルの保存先（ストア）を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層は [`repository::TodoRepository`] トレイトにのみ依存する
//! - **プロセス内ストア**: 永続化は行わず、プロセスのメモリ上に保持する
//! - **排他制御**: 変更系操作は確認と書き込みを単一のロック区間で行う
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトとインメモリ実装

pub mod error;
pub mod repository;

pub use error::InfraError;
