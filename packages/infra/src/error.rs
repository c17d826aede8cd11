//! # インフラ層エラー定義
//!
//! ストア操作で発生するエラーを表現する。
//!
//! 「見つからない」はエラーではなく `Option` / `bool` で返す。
//! HTTP ステータスへの対応付けはユースケース層の責務。

use thiserror::Error;

/// インフラ層で発生するエラー
#[derive(Debug, Error)]
pub enum InfraError {
   /// 一意制約違反（同じ ID のエンティティが既に存在する）
   #[error("競合が発生しました: {entity}(id={id})")]
   Conflict {
      /// エンティティ名（例: "Todo"）
      entity: &'static str,
      /// 重複した識別子
      id:     String,
   },
}

impl InfraError {
   /// 一意制約違反エラーを作成する
   pub fn conflict(entity: &'static str, id: impl ToString) -> Self {
      Self::Conflict {
         entity,
         id: id.to_string(),
      }
   }
}
