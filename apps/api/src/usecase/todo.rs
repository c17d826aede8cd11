//! Todo 管理ユースケース

use std::sync::Arc;

use todoflow_domain::todo::{Priority, Todo, TodoId};
use todoflow_infra::{InfraError, repository::TodoRepository};

use crate::error::ApiError;

const TODO_NOT_FOUND: &str = "Todo not found";
const TODO_ALREADY_EXISTS: &str = "Todo with this id already exists";

/// Todo 更新の入力
///
/// 内容は丸ごと置き換える。対象はパスの `id` で特定し、
/// 保存される Todo の `id` も常にパスの値になる。
pub struct UpdateTodoInput {
   pub id:        TodoId,
   pub title:     String,
   pub completed: bool,
   pub priority:  Priority,
}

/// Todo 管理ユースケース
pub struct TodoUseCaseImpl {
   todo_repository: Arc<dyn TodoRepository>,
}

impl TodoUseCaseImpl {
   pub fn new(todo_repository: Arc<dyn TodoRepository>) -> Self {
      Self { todo_repository }
   }

   /// Todo 一覧を現在の並び順で取得する
   pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
      let todos = self.todo_repository.find_all().await?;
      Ok(todos)
   }

   /// Todo を作成する
   ///
   /// 同じ ID の Todo が既に存在する場合は Conflict。
   pub async fn create_todo(&self, todo: Todo) -> Result<Todo, ApiError> {
      self
         .todo_repository
         .insert(&todo)
         .await
         .map_err(|e| match e {
            InfraError::Conflict { .. } => {
               tracing::debug!(todo_id = %todo.id(), "ID が重複しているため作成を拒否しました");
               ApiError::Conflict(TODO_ALREADY_EXISTS.to_string())
            }
         })?;

      tracing::info!(
         todo_id = %todo.id(),
         priority = %todo.priority(),
         "Todo を作成しました"
      );
      Ok(todo)
   }

   /// Todo の内容を置き換える
   pub async fn update_todo(&self, input: UpdateTodoInput) -> Result<Todo, ApiError> {
      let UpdateTodoInput {
         id,
         title,
         completed,
         priority,
      } = input;

      let updated = self
         .todo_repository
         .update_by_id(
            &id,
            Box::new(move |todo: Todo| todo.with_contents(title, completed, priority)),
         )
         .await?
         .ok_or_else(|| not_found(id))?;

      tracing::info!(todo_id = %id, "Todo を更新しました");
      Ok(updated)
   }

   /// Todo の完了フラグを反転する
   pub async fn toggle_todo(&self, id: TodoId) -> Result<Todo, ApiError> {
      let toggled = self
         .todo_repository
         .update_by_id(&id, Box::new(Todo::toggled))
         .await?
         .ok_or_else(|| not_found(id))?;

      tracing::info!(todo_id = %id, completed = toggled.completed(), "Todo の完了状態を切り替えました");
      Ok(toggled)
   }

   /// Todo を削除し、削除した ID を返す
   pub async fn delete_todo(&self, id: TodoId) -> Result<TodoId, ApiError> {
      if !self.todo_repository.delete(&id).await? {
         return Err(not_found(id));
      }

      tracing::info!(todo_id = %id, "Todo を削除しました");
      Ok(id)
   }
}

fn not_found(id: TodoId) -> ApiError {
   tracing::debug!(todo_id = %id, "Todo が見つかりません");
   ApiError::NotFound(TODO_NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::{fixture, rstest};
   use todoflow_infra::repository::InMemoryTodoRepository;

   use super::*;

   #[fixture]
   fn repository() -> Arc<InMemoryTodoRepository> {
      Arc::new(InMemoryTodoRepository::with_sample_data())
   }

   fn sut(repository: &Arc<InMemoryTodoRepository>) -> TodoUseCaseImpl {
      TodoUseCaseImpl::new(repository.clone())
   }

   fn ids(todos: &[Todo]) -> Vec<i64> {
      todos.iter().map(|t| t.id().as_i64()).collect()
   }

   #[rstest]
   #[tokio::test]
   async fn test_作成した順に新しいものが先頭に並ぶ(repository: Arc<InMemoryTodoRepository>) {
      let sut = sut(&repository);

      for id in 3..=5 {
         sut.create_todo(Todo::new(TodoId::new(id), format!("todo {id}"), false, Priority::Low))
            .await
            .unwrap();
      }

      let todos = sut.list_todos().await.unwrap();
      assert_eq!(ids(&todos), vec![5, 4, 3, 1, 2]);
   }

   #[rstest]
   #[tokio::test]
   async fn test_重複した_idの作成はconflictで一覧は変わらない(
      repository: Arc<InMemoryTodoRepository>,
   ) {
      let sut = sut(&repository);
      let before = sut.list_todos().await.unwrap();

      let result = sut
         .create_todo(Todo::new(TodoId::new(2), "dup", false, Priority::Low))
         .await;

      assert!(matches!(result, Err(ApiError::Conflict(ref msg)) if msg == TODO_ALREADY_EXISTS));
      assert_eq!(sut.list_todos().await.unwrap(), before);
   }

   #[rstest]
   #[tokio::test]
   async fn test_更新は内容を置き換えidは維持する(repository: Arc<InMemoryTodoRepository>) {
      let sut = sut(&repository);

      let updated = sut
         .update_todo(UpdateTodoInput {
            id:        TodoId::new(1),
            title:     "Learn Rust".to_string(),
            completed: true,
            priority:  Priority::High,
         })
         .await
         .unwrap();

      let expected = Todo::new(TodoId::new(1), "Learn Rust", true, Priority::High);
      assert_eq!(updated, expected);
      assert_eq!(sut.list_todos().await.unwrap()[0], expected);
   }

   #[rstest]
   #[tokio::test]
   async fn test_存在しない_idの更新はnot_foundで一覧は変わらない(
      repository: Arc<InMemoryTodoRepository>,
   ) {
      let sut = sut(&repository);
      let before = sut.list_todos().await.unwrap();

      let result = sut
         .update_todo(UpdateTodoInput {
            id:        TodoId::new(42),
            title:     "ghost".to_string(),
            completed: false,
            priority:  Priority::Low,
         })
         .await;

      assert!(matches!(result, Err(ApiError::NotFound(ref msg)) if msg == TODO_NOT_FOUND));
      assert_eq!(sut.list_todos().await.unwrap(), before);
   }

   #[rstest]
   #[tokio::test]
   async fn test_2回トグルすると元の完了状態に戻る(repository: Arc<InMemoryTodoRepository>) {
      let sut = sut(&repository);

      let first = sut.toggle_todo(TodoId::new(2)).await.unwrap();
      let second = sut.toggle_todo(TodoId::new(2)).await.unwrap();

      assert!(first.completed());
      assert!(!second.completed());
   }

   #[rstest]
   #[tokio::test]
   async fn test_存在しない_idのトグルはnot_found(repository: Arc<InMemoryTodoRepository>) {
      let result = sut(&repository).toggle_todo(TodoId::new(99)).await;

      assert!(matches!(result, Err(ApiError::NotFound(_))));
   }

   #[rstest]
   #[tokio::test]
   async fn test_削除は1件だけ減らし再削除はnot_found(repository: Arc<InMemoryTodoRepository>) {
      let sut = sut(&repository);

      let deleted = sut.delete_todo(TodoId::new(1)).await.unwrap();

      assert_eq!(deleted, TodoId::new(1));
      assert_eq!(ids(&sut.list_todos().await.unwrap()), vec![2]);
      assert!(matches!(
         sut.delete_todo(TodoId::new(1)).await,
         Err(ApiError::NotFound(_))
      ));
      assert_eq!(ids(&sut.list_todos().await.unwrap()), vec![2]);
   }
}
