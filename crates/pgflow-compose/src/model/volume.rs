//! ボリュームマウント定義

use crate::canon::ToCompose;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::PathBuf;

/// 名前付きボリュームのマウント定義
///
/// compose.yml 上では `"ボリューム名:コンテナパス"` 形式の文字列になります。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    /// 名前付きボリューム名（トップレベル volumes でも宣言される）
    pub name: String,
    /// コンテナ内のマウント先
    pub container: PathBuf,
}

impl ToCompose for Volume {
    fn to_compose(&self) -> Value {
        Value::String(format!("{}:{}", self.name, self.container.display()))
    }
}
