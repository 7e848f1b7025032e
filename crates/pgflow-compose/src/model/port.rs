//! ポート定義

use crate::canon::ToCompose;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// ポート定義
///
/// compose.yml 上では `"ホスト:コンテナ"` 形式の文字列になります。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub host: u16,
    pub container: u16,
}

impl ToCompose for Port {
    fn to_compose(&self) -> Value {
        Value::String(format!("{}:{}", self.host, self.container))
    }
}
