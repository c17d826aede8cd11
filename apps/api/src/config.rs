//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 設計方針
//!
//! [12-Factor App](https://12factor.net/ja/config) の原則に従い、
//! すべての設定を環境変数から読み込む。開発環境では `.env` ファイルも利用できる
//! （`main` で `dotenvy` が先に読み込む）。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `API_SECRET_KEY` | **Yes** | - | API シークレットキー |
//! | `CORS_ORIGINS` | No | `http://localhost:3000` | 許可するオリジン（カンマ区切り） |
//! | `TODO_API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `TODO_API_PORT` | No | `8000` | ポート番号 |
//! | `TODO_SEED_SAMPLE_DATA` | No | `true` | 起動時にサンプル Todo を投入するか |
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todoflow_api::config::AppConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env()?;
//! println!("サーバー: {}:{}", config.server.host, config.server.port);
//! ```

use std::{env, fmt};

use thiserror::Error;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// 設定読み込みエラー
///
/// 起動時に発生し、プロセスはこのエラーで終了する。
#[derive(Debug, Error)]
pub enum ConfigError {
   /// 必須の環境変数が未設定
   #[error("{0} が設定されていません")]
   Missing(&'static str),

   /// 環境変数の値が解釈できない
   #[error("{name} の値が不正です: {value:?}")]
   Invalid { name: &'static str, value: String },
}

/// API シークレットキー
///
/// ログへの漏洩を防ぐため、`Debug` 出力は `[REDACTED]` にマスクする。
/// `Display` は実装しない。
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
   pub fn new(value: impl Into<String>) -> Self {
      Self(value.into())
   }

   /// キーが読み込まれているか（空文字列でないか）
   pub fn is_loaded(&self) -> bool {
      !self.0.is_empty()
   }
}

impl fmt::Debug for SecretKey {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str("SecretKey([REDACTED])")
   }
}

/// HTTP サーバー設定
#[derive(Debug, Clone)]
pub struct ServerConfig {
   /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
   pub host: String,
   /// ポート番号
   pub port: u16,
}

/// アプリケーション全体の設定
///
/// アプリケーション起動時に一度だけ構築し、各コンポーネントに渡す。
#[derive(Debug, Clone)]
pub struct AppConfig {
   /// HTTP サーバー設定
   pub server:           ServerConfig,
   /// API シークレットキー
   pub api_secret_key:   SecretKey,
   /// CORS で許可するオリジン
   pub cors_origins:     Vec<String>,
   /// 起動時にサンプル Todo を投入するか
   pub seed_sample_data: bool,
}

impl AppConfig {
   /// 環境変数から設定を読み込む
   ///
   /// # エラー
   ///
   /// - `API_SECRET_KEY` が未設定: [`ConfigError::Missing`]
   /// - ポート番号や真偽値が解釈できない: [`ConfigError::Invalid`]
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// プロセスの環境変数を書き換えずにテストするために分離している。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let api_secret_key = lookup("API_SECRET_KEY")
         .map(SecretKey::new)
         .ok_or(ConfigError::Missing("API_SECRET_KEY"))?;

      let cors_origins = parse_origins(
         &lookup("CORS_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string()),
      );

      let port = match lookup("TODO_API_PORT") {
         Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name: "TODO_API_PORT",
            value,
         })?,
         None => DEFAULT_PORT,
      };

      let seed_sample_data = match lookup("TODO_SEED_SAMPLE_DATA") {
         Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
            name: "TODO_SEED_SAMPLE_DATA",
            value,
         })?,
         None => true,
      };

      Ok(Self {
         server: ServerConfig {
            host: lookup("TODO_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
         },
         api_secret_key,
         cors_origins,
         seed_sample_data,
      })
   }
}

/// カンマ区切りのオリジン一覧を分解する（前後の空白除去、空要素は除外）
fn parse_origins(raw: &str) -> Vec<String> {
   raw.split(',')
      .map(str::trim)
      .filter(|origin| !origin.is_empty())
      .map(str::to_string)
      .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
   match raw.trim().to_ascii_lowercase().as_str() {
      "true" | "1" | "yes" => Some(true),
      "false" | "0" | "no" => Some(false),
      _ => None,
   }
}
