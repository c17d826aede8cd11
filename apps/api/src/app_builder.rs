//! # アプリケーション構築
//!
//! ルーター構築と CORS・トレーシング層の適用を担当する。
//! `main.rs` は設定読み込み・DI・サーバー起動に集中する。
//!
//! ## ルート一覧
//!
//! | メソッド | パス | ハンドラ |
//! |----------|------|----------|
//! | GET | `/` | [`health_check`] |
//! | GET / POST | `/todos`, `/todos/` | [`list_todos`] / [`create_todo`] |
//! | PUT / DELETE | `/todos/{todo_id}` | [`update_todo`] / [`delete_todo`] |
//! | PATCH | `/todos/{todo_id}/toggle` | [`toggle_todo`] |

use std::sync::Arc;

use axum::{
   Router,
   http::HeaderValue,
   routing::{get, patch, put},
};
use tower_http::{
   cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
   trace::TraceLayer,
};

use crate::handler::{
   HealthState,
   TodoState,
   create_todo,
   delete_todo,
   health_check,
   list_todos,
   toggle_todo,
   update_todo,
};

/// ルーターを構築する
pub fn build_app(
   health_state: Arc<HealthState>,
   todo_state: Arc<TodoState>,
   cors_origins: &[String],
) -> Router {
   Router::new()
      .route("/", get(health_check))
      .with_state(health_state)
      .route("/todos", get(list_todos).post(create_todo))
      .route("/todos/", get(list_todos).post(create_todo))
      .route("/todos/{todo_id}", put(update_todo).delete(delete_todo))
      .route("/todos/{todo_id}/toggle", patch(toggle_todo))
      .with_state(todo_state)
      .layer(cors_layer(cors_origins))
      .layer(TraceLayer::new_for_http())
}

/// CORS 層を構築する
///
/// - 指定オリジンのみ許可（`*` を含む場合はリクエストのオリジンをそのまま許可）
/// - メソッド・ヘッダはすべて許可
/// - 資格情報（Cookie 等）を許可
///
/// 資格情報を許可する場合、tower-http はワイルドカード（`Any`）を受け付けないため、
/// メソッドとヘッダはプリフライトリクエストの内容を反映する。
pub fn cors_layer(origins: &[String]) -> CorsLayer {
   let allow_origin = if origins.iter().any(|o| o == "*") {
      AllowOrigin::mirror_request()
   } else {
      let origins: Vec<HeaderValue> = origins
         .iter()
         .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
               tracing::warn!(%origin, "不正なオリジンを CORS 設定から除外しました");
               None
            }
         })
         .collect();
      AllowOrigin::list(origins)
   };

   CorsLayer::new()
      .allow_origin(allow_origin)
      .allow_methods(AllowMethods::mirror_request())
      .allow_headers(AllowHeaders::mirror_request())
      .allow_credentials(true)
}
