//! # Todo エンティティ
//!
//! ユーザーが管理するタスク 1 件を表現する。
//!
//! ## 設計判断
//!
//! ### クライアント採番の ID
//!
//! `TodoId` はクライアントが採番する整数（典型的には `Date.now()` のミリ秒値）。
//! サーバー側では生成せず、一意性はストアへの挿入時に検証する。
//!
//! ### 不変な更新
//!
//! 状態変更メソッド（[`Todo::toggled`], [`Todo::with_contents`]）は `self` を消費して
//! 新しい `Todo` を返す。ストアはロック内で旧値を新値に差し替えるだけでよい。
//!
//! ## 使用例
//!
//! ```rust
//! use todoflow_domain::todo::{Priority, Todo, TodoId};
//!
//! let todo = Todo::new(TodoId::new(3), "レビュー", false, Priority::default());
//! assert_eq!(todo.priority(), Priority::Low);
//!
//! let done = todo.toggled();
//! assert!(done.completed());
//! ```

use serde::{Deserialize, Serialize};

/// Todo の識別子
///
/// Newtype パターンで `i64` をラップし、他の整数値との取り違えを防ぐ。
/// JSON 上は素の整数として表現される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(i64);

impl TodoId {
   /// 整数値から Todo ID を作成する
   pub fn new(value: i64) -> Self {
      Self(value)
   }

   /// 内部の整数値を取得する
   pub fn as_i64(&self) -> i64 {
      self.0
   }
}

impl std::fmt::Display for TodoId {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      write!(f, "{}", self.0)
   }
}

/// Todo の優先度
///
/// JSON 上は `"High"` / `"Medium"` / `"Low"` の文字列で表現する。
/// 省略時は `Low`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Priority {
   High,
   Medium,
   #[default]
   Low,
}

/// Todo エンティティ
///
/// # 不変条件
///
/// - `id` はストア内で一意（ストアが挿入時に保証する）
/// - 更新・トグルで `id` は変わらない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
   id:        TodoId,
   title:     String,
   completed: bool,
   priority:  Priority,
}

impl Todo {
   /// Todo を作成する
   pub fn new(id: TodoId, title: impl Into<String>, completed: bool, priority: Priority) -> Self {
      Self {
         id,
         title: title.into(),
         completed,
         priority,
      }
   }

   pub fn id(&self) -> TodoId {
      self.id
   }

   pub fn title(&self) -> &str {
      &self.title
   }

   pub fn completed(&self) -> bool {
      self.completed
   }

   pub fn priority(&self) -> Priority {
      self.priority
   }

   /// 完了フラグを反転した Todo を返す
   pub fn toggled(self) -> Self {
      Self {
         completed: !self.completed,
         ..self
      }
   }

   /// ID を維持したまま、内容（タイトル・完了フラグ・優先度）を丸ごと置き換える
   pub fn with_contents(self, title: impl Into<String>, completed: bool, priority: Priority) -> Self {
      Self {
         id: self.id,
         title: title.into(),
         completed,
         priority,
      }
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::{fixture, rstest};

   use super::*;

   #[fixture]
   fn todo() -> Todo {
      Todo::new(TodoId::new(1), "Learn Next.js", false, Priority::Medium)
   }

   #[rstest]
   fn test_トグルで完了フラグが反転する(todo: Todo) {
      let sut = todo.toggled();

      assert!(sut.completed());
      assert_eq!(sut.id(), TodoId::new(1));
      assert_eq!(sut.title(), "Learn Next.js");
      assert_eq!(sut.priority(), Priority::Medium);
   }

   #[rstest]
   fn test_2回トグルすると元に戻る(todo: Todo) {
      let before = todo.clone();

      let sut = todo.toggled().toggled();

      assert_eq!(sut, before);
   }

   #[rstest]
   fn test_内容の置き換えでidは維持される(todo: Todo) {
      let sut = todo.with_contents("Study Rust", true, Priority::High);

      let expected = Todo::new(TodoId::new(1), "Study Rust", true, Priority::High);
      assert_eq!(sut, expected);
   }

   #[test]
   fn test_優先度のデフォルトはlow() {
      assert_eq!(Priority::default(), Priority::Low);
   }

   #[rstest]
   #[case(Priority::High, "\"High\"")]
   #[case(Priority::Medium, "\"Medium\"")]
   #[case(Priority::Low, "\"Low\"")]
   fn test_優先度のjson表現(#[case] priority: Priority, #[case] expected: &str) {
      assert_eq!(serde_json::to_string(&priority).unwrap(), expected);
   }

   #[test]
   fn test_未知の優先度はデシリアライズに失敗する() {
      let result = serde_json::from_str::<Priority>("\"Urgent\"");

      assert!(result.is_err());
   }

   #[test]
   fn test_todo_idは素の整数としてシリアライズされる() {
      let json = serde_json::to_string(&TodoId::new(1_700_000_000_000)).unwrap();

      assert_eq!(json, "1700000000000");
   }

   #[test]
   fn test_優先度の表示名() {
      assert_eq!(Priority::High.to_string(), "High");
      assert_eq!(Priority::Low.to_string(), "Low");
   }
}
