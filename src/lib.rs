//! BOM部品表データシート照合・収集ツール
//!
//! BOM（部品表）の各行をデータシートフォルダと照合し、
//! 一致したファイルをプロジェクトフォルダへ正規化した名前でコピーする。
//! 見つからなかった部品は対話式で手動補完できる。

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod reconciler;
pub mod report;
pub mod scanner;
