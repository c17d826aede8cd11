//! # Todoflow ドメイン層
//!
//! Todo 管理の中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（例: [`todo::Todo`]）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（例:
//!   [`todo::Priority`]）
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（ストア、HTTP）には一切依存しない。
//! シリアライズ形式の決定は API 層の DTO が担う。
//!
//! ## モジュール構成
//!
//! - [`todo`] - Todo エンティティと優先度
//!
//! ## 使用例
//!
//! ```rust
//! use todoflow_domain::todo::{Priority, Todo, TodoId};
//!
//! let todo = Todo::new(TodoId::new(1), "牛乳を買う", false, Priority::High);
//! assert!(todo.toggled().completed());
//! ```

pub mod todo;
