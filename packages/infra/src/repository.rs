//! # リポジトリ
//!
//! ドメインエンティティの保存・取得を抽象化するトレイトと、その実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケースは `Arc<dyn TodoRepository>` を受け取る
//! - **テスタビリティ**: トレイト経由で差し替え可能

pub mod todo_repository;

pub use todo_repository::{InMemoryTodoRepository, TodoMutation, TodoRepository};
