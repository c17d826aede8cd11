//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## エラーの階層
//!
//! ```text
//! インフラ層エラー (InfraError)
//!        ↓ ユースケースで変換
//! API エラー (ApiError)
//!        ↓ IntoResponse
//! HTTP レスポンス (StatusCode + RFC 9457 JSON)
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "type": "https://todoflow.example.com/errors/not-found",
//!   "title": "Not Found",
//!   "status": 404,
//!   "detail": "Todo not found"
//! }
//! ```

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use todoflow_infra::InfraError;
use todoflow_shared::ErrorResponse;

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// リソースが見つからない（404 Not Found）
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// 競合（409 Conflict）
   #[error("競合が発生しました: {0}")]
   Conflict(String),

   /// ストアエラー（500 Internal Server Error）
   #[error("ストアエラー: {0}")]
   Infra(#[from] InfraError),
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, body) = match self {
         ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(detail)),
         ApiError::Conflict(detail) => (StatusCode::CONFLICT, ErrorResponse::conflict(detail)),
         ApiError::Infra(e) => {
            // セキュリティ: 内部エラー詳細はログのみ
            tracing::error!("ストアエラー: {e}");
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::internal_error(),
            )
         }
      };

      (status, Json(body)).into_response()
   }
}
