//! # Todo ハンドラ
//!
//! Todo の CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /todos` - Todo 一覧（新しいものが先頭）
//! - `POST /todos` - Todo 作成
//! - `PUT /todos/{todo_id}` - Todo 更新（内容を丸ごと置き換え）
//! - `PATCH /todos/{todo_id}/toggle` - 完了状態の切り替え
//! - `DELETE /todos/{todo_id}` - Todo 削除
//!
//! `GET` / `POST` は末尾スラッシュ付きの `/todos/` でも受け付ける。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use todoflow_domain::todo::{Priority, Todo, TodoId};

use crate::{
   error::ApiError,
   usecase::{TodoUseCaseImpl, UpdateTodoInput},
};

/// Todo API の共有状態
pub struct TodoState {
   pub usecase: TodoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// Todo DTO
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoDto {
   pub id:        i64,
   pub title:     String,
   pub completed: bool,
   pub priority:  Priority,
}

impl From<&Todo> for TodoDto {
   fn from(todo: &Todo) -> Self {
      Self {
         id:        todo.id().as_i64(),
         title:     todo.title().to_string(),
         completed: todo.completed(),
         priority:  todo.priority(),
      }
   }
}

/// Todo 作成リクエスト
///
/// `id` はクライアント採番。`completed` と `priority` は省略可能。
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
   pub id:        i64,
   pub title:     String,
   #[serde(default)]
   pub completed: bool,
   #[serde(default)]
   pub priority:  Priority,
}

/// Todo 更新リクエスト
///
/// 本文の `id` は省略可能で、指定されても無視する（パスの ID が正）。
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
   #[serde(default)]
   pub id:        Option<i64>,
   pub title:     String,
   #[serde(default)]
   pub completed: bool,
   #[serde(default)]
   pub priority:  Priority,
}

/// Todo 削除レスポンス
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteTodoResponse {
   pub deleted: i64,
}

// --- ハンドラ ---

/// GET /todos
///
/// Todo 一覧を現在の並び順で取得する。
#[tracing::instrument(skip_all)]
pub async fn list_todos(
   State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, ApiError> {
   let todos = state.usecase.list_todos().await?;

   let items: Vec<TodoDto> = todos.iter().map(TodoDto::from).collect();
   Ok((StatusCode::OK, Json(items)))
}

/// POST /todos
///
/// Todo を作成し、一覧の先頭に追加する。
///
/// ## レスポンス
///
/// - `201 Created`: 作成された Todo
/// - `409 Conflict`: 同じ ID の Todo が既に存在する
#[tracing::instrument(skip_all, fields(todo_id = req.id))]
pub async fn create_todo(
   State(state): State<Arc<TodoState>>,
   Json(req): Json<CreateTodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let todo = Todo::new(TodoId::new(req.id), req.title, req.completed, req.priority);

   let created = state.usecase.create_todo(todo).await?;

   Ok((StatusCode::CREATED, Json(TodoDto::from(&created))))
}

/// PUT /todos/{todo_id}
///
/// Todo の内容を丸ごと置き換える。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の Todo
/// - `404 Not Found`: Todo が見つからない
#[tracing::instrument(skip_all, fields(%todo_id))]
pub async fn update_todo(
   State(state): State<Arc<TodoState>>,
   Path(todo_id): Path<i64>,
   Json(req): Json<UpdateTodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
   if let Some(payload_id) = req.id
      && payload_id != todo_id
   {
      tracing::debug!(payload_id, "本文の id はパスと異なるため無視します");
   }

   let input = UpdateTodoInput {
      id:        TodoId::new(todo_id),
      title:     req.title,
      completed: req.completed,
      priority:  req.priority,
   };

   let updated = state.usecase.update_todo(input).await?;

   Ok((StatusCode::OK, Json(TodoDto::from(&updated))))
}

/// PATCH /todos/{todo_id}/toggle
///
/// Todo の完了状態を反転する。
///
/// ## レスポンス
///
/// - `200 OK`: 切り替え後の Todo
/// - `404 Not Found`: Todo が見つからない
#[tracing::instrument(skip_all, fields(%todo_id))]
pub async fn toggle_todo(
   State(state): State<Arc<TodoState>>,
   Path(todo_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
   let toggled = state.usecase.toggle_todo(TodoId::new(todo_id)).await?;

   Ok((StatusCode::OK, Json(TodoDto::from(&toggled))))
}

/// DELETE /todos/{todo_id}
///
/// Todo を削除する。
///
/// ## レスポンス
///
/// - `200 OK`: `{"deleted": <id>}`
/// - `404 Not Found`: Todo が見つからない
#[tracing::instrument(skip_all, fields(%todo_id))]
pub async fn delete_todo(
   State(state): State<Arc<TodoState>>,
   Path(todo_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
   let deleted = state.usecase.delete_todo(TodoId::new(todo_id)).await?;

   Ok((
      StatusCode::OK,
      Json(DeleteTodoResponse {
         deleted: deleted.as_i64(),
      }),
   ))
}
