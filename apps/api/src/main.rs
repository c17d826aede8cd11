//! # Todoflow API サーバー
//!
//! Todo 管理 API のエントリーポイント。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_SECRET_KEY` | **Yes** | API シークレットキー（未設定なら起動しない） |
//! | `CORS_ORIGINS` | No | 許可オリジン（デフォルト: `http://localhost:3000`） |
//! | `TODO_API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `TODO_API_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `TODO_SEED_SAMPLE_DATA` | No | サンプル Todo の投入（デフォルト: `true`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! API_SECRET_KEY=dev cargo run -p todoflow-api
//!
//! # 本番環境
//! API_SECRET_KEY=... CORS_ORIGINS=https://app.example.com LOG_FORMAT=json \
//!   cargo run -p todoflow-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use todoflow_api::{
   app_builder::build_app,
   config::AppConfig,
   handler::{HealthState, TodoState},
   usecase::TodoUseCaseImpl,
};
use todoflow_infra::repository::{InMemoryTodoRepository, TodoRepository};
use todoflow_shared::observability::{LogFormat, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   init_tracing(LogFormat::from_env());

   // 設定読み込み（必須項目が欠けていれば起動しない）
   let config = AppConfig::from_env()?;

   tracing::info!(
      "Todoflow API サーバーを起動します: {}:{}",
      config.server.host,
      config.server.port
   );
   if !config.api_secret_key.is_loaded() {
      tracing::warn!("API_SECRET_KEY が空です");
   }

   // 依存コンポーネントを初期化
   let todo_repository: Arc<dyn TodoRepository> = if config.seed_sample_data {
      Arc::new(InMemoryTodoRepository::with_sample_data())
   } else {
      Arc::new(InMemoryTodoRepository::new())
   };
   let todo_state = Arc::new(TodoState {
      usecase: TodoUseCaseImpl::new(todo_repository),
   });
   let health_state = Arc::new(HealthState {
      secret_loaded: config.api_secret_key.is_loaded(),
   });

   let app = build_app(health_state, todo_state, &config.cors_origins);

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

   let listener = TcpListener::bind(addr).await?;
   tracing::info!(
      cors_origins = ?config.cors_origins,
      "Todoflow API サーバーが起動しました: {addr}"
   );

   axum::serve(listener, app).await?;

   Ok(())
}
