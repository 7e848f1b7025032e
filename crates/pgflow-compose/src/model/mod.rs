//! compose.yml のデータモデル
//!
//! 出力する compose ドキュメントを構成する値オブジェクトを定義します。
//! 各モデルは機能ごとにモジュールに分離されています。

mod compose;
mod port;
mod service;
mod volume;

// Re-exports
pub use compose::*;
pub use port::*;
pub use service::*;
pub use volume::*;
