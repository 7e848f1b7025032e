//! compose ドキュメントのトップレベル定義

use super::service::Service;
use crate::canon::ToCompose;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// compose.yml 全体
///
/// サービスは構築順のまま保持し、出力時にサービス名をキーにした
/// マッピングへ変換します。named volume の宣言は null 値（出力時は
/// 空スカラー）として volumes セクションに並びます。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Compose {
    pub services: Vec<Service>,
    /// 宣言する named volume 名（重複なし・挿入順）
    #[serde(default)]
    pub volumes: Vec<String>,
}

impl ToCompose for Compose {
    fn to_compose(&self) -> Value {
        let mut services = Mapping::new();
        for service in &self.services {
            services.insert(Value::String(service.name.clone()), service.to_compose());
        }

        let mut r = Mapping::new();
        r.insert(Value::String("services".into()), Value::Mapping(services));

        // volumes セクションは一つも無ければキーごと省略する
        if !self.volumes.is_empty() {
            let mut volumes = Mapping::new();
            for name in &self.volumes {
                volumes.insert(Value::String(name.clone()), Value::Null);
            }
            r.insert(Value::String("volumes".into()), Value::Mapping(volumes));
        }

        Value::Mapping(r)
    }
}
