//! YouTube ライブチャットのポーリング
//!
//! 動画IDからライブチャットIDを解決し、サーバー推奨間隔を守りながら
//! 新着メッセージを取得して分類・ディスパッチする。

pub mod client;
pub mod dispatcher;
pub mod errors;
pub mod interval;
pub mod message;
pub mod poller;
pub mod resolver;
pub mod state;
pub mod types;
pub mod waiter;

#[cfg(test)]
mod fake;
