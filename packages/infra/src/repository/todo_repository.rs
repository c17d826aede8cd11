//! # TodoRepository
//!
//! Todo の保存・取得を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **並び順の保持**: 一覧は `Vec` の順序そのまま。新規作成は先頭に挿入する
//! - **原子的な変更**: 重複チェックと挿入、検索と書き換えは同一の書き込みロック内で行う
//! - **線形探索**: 想定件数が小さいため、ID からの索引は持たない

use async_trait::async_trait;
use todoflow_domain::todo::{Priority, Todo, TodoId};
use tokio::sync::RwLock;

use crate::error::InfraError;

/// 既存の Todo から新しい Todo を作る変更関数
///
/// ストアは書き込みロックを保持したままこの関数を呼び出す。
/// 戻り値の `id` は引数と同じでなければならない。
pub type TodoMutation = Box<dyn FnOnce(Todo) -> Todo + Send>;

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
   /// すべての Todo を現在の並び順で取得する
   async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

   /// Todo を先頭に挿入する
   ///
   /// 同じ ID の Todo が既に存在する場合は [`InfraError::Conflict`] を返し、
   /// コレクションは変更しない。
   async fn insert(&self, todo: &Todo) -> Result<(), InfraError>;

   /// 指定 ID の Todo に変更関数を適用し、その位置のまま置き換える
   ///
   /// 対象が存在しない場合は `Ok(None)` を返す。
   async fn update_by_id(
      &self,
      id: &TodoId,
      mutation: TodoMutation,
   ) -> Result<Option<Todo>, InfraError>;

   /// 指定 ID の Todo を削除する
   ///
   /// 削除した場合は `true`、対象が存在しなかった場合は `false` を返す。
   async fn delete(&self, id: &TodoId) -> Result<bool, InfraError>;
}

/// プロセスメモリ上の Todo リポジトリ
///
/// アプリケーション起動時に 1 つだけ構築し、`Arc` で各ハンドラに共有する。
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
   todos: RwLock<Vec<Todo>>,
}

impl InMemoryTodoRepository {
   /// 空のリポジトリを作成する
   pub fn new() -> Self {
      Self::default()
   }

   /// 指定した Todo 群（この順序）で初期化する
   pub fn with_todos(todos: Vec<Todo>) -> Self {
      Self {
         todos: RwLock::new(todos),
      }
   }

   /// サンプルデータ入りで初期化する
   pub fn with_sample_data() -> Self {
      Self::with_todos(sample_todos())
   }
}

/// 起動時に投入するサンプルデータ
pub fn sample_todos() -> Vec<Todo> {
   vec![
      Todo::new(TodoId::new(1), "Learn Next.js", false, Priority::Medium),
      Todo::new(TodoId::new(2), "Study FastAPI", false, Priority::High),
   ]
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
   async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
      Ok(self.todos.read().await.clone())
   }

   async fn insert(&self, todo: &Todo) -> Result<(), InfraError> {
      let mut todos = self.todos.write().await;
      if todos.iter().any(|t| t.id() == todo.id()) {
         return Err(InfraError::conflict("Todo", todo.id()));
      }
      todos.insert(0, todo.clone());
      Ok(())
   }

   async fn update_by_id(
      &self,
      id: &TodoId,
      mutation: TodoMutation,
   ) -> Result<Option<Todo>, InfraError> {
      let mut todos = self.todos.write().await;
      let Some(slot) = todos.iter_mut().find(|t| t.id() == *id) else {
         return Ok(None);
      };

      let updated = mutation(slot.clone());
      debug_assert_eq!(updated.id(), *id, "変更関数が ID を書き換えた");
      *slot = updated.clone();
      Ok(Some(updated))
   }

   async fn delete(&self, id: &TodoId) -> Result<bool, InfraError> {
      let mut todos = self.todos.write().await;
      let before = todos.len();
      todos.retain(|t| t.id() != *id);
      Ok(todos.len() < before)
   }
}
