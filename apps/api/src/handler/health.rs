//! # ヘルスチェックハンドラ
//!
//! アプリケーションの稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "ok": true,
//!   "secret_loaded": true
//! }
//! ```

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

/// ヘルスチェックの共有状態
///
/// シークレットキーそのものは保持せず、読み込み済みかどうかだけを持つ。
pub struct HealthState {
   pub secret_loaded: bool,
}

/// ヘルスチェックレスポンス
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
   /// 稼働状態（常に `true`）
   pub ok:            bool,
   /// シークレットキーが読み込まれているか
   pub secret_loaded: bool,
}

/// ヘルスチェックエンドポイント
///
/// 常に 200 OK を返す。
pub async fn health_check(State(state): State<Arc<HealthState>>) -> Json<HealthResponse> {
   Json(HealthResponse {
      ok:            true,
      secret_loaded: state.secret_loaded,
   })
}
