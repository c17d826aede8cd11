//! # Todoflow 共有ユーティリティ
//!
//! 複数のクレートから使用される、ビジネスロジックを含まない型を提供する。
//!
//! - 外部クレートへの依存は最小限に抑える（axum には依存しない）
//! - トレーシング初期化は `observability` feature でのみ有効

pub mod error_response;
pub mod observability;

pub use error_response::ErrorResponse;
