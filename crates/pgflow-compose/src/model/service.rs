//! サービス定義

use super::port::Port;
use super::volume::Volume;
use crate::canon::{ToCompose, insert_if_present, insert_if_some};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::path::PathBuf;

/// サービス定義
///
/// `name` は組み立て時の管理用キーで、compose.yml のサービス定義の中には
/// 出力されません（サービス名はトップレベルのキー側に現れます）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_name")]
    pub name: String,
    pub image: Option<String>,
    /// ビルド設定
    pub build: Option<BuildConfig>,
    pub command: Option<Command>,
    #[serde(default)]
    pub depends_on: Vec<String>,
    #[serde(default)]
    pub ports: Vec<Port>,
    #[serde(default)]
    pub volumes: Vec<Volume>,
}

impl ToCompose for Service {
    fn to_compose(&self) -> Value {
        let mut r = Mapping::new();
        insert_if_some(&mut r, "image", &self.image);
        insert_if_some(&mut r, "build", &self.build);
        insert_if_some(&mut r, "command", &self.command);
        insert_if_present(&mut r, "depends_on", &self.depends_on);
        insert_if_present(&mut r, "ports", &self.ports);
        insert_if_present(&mut r, "volumes", &self.volumes);
        Value::Mapping(r)
    }
}

/// ビルド設定
///
/// ビルド引数が無ければコンテキストパスの裸の文字列、あれば
/// `{context, args}` の形に正準化されます。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    /// ビルドコンテキストのパス（プロジェクトルートからの相対パス）
    pub context: PathBuf,
    /// ビルド引数（記述順を保持する）
    #[serde(default)]
    pub args: Vec<(String, String)>,
}

impl ToCompose for BuildConfig {
    fn to_compose(&self) -> Value {
        let context = Value::String(self.context.display().to_string());
        if self.args.is_empty() {
            return context;
        }
        let mut args = Mapping::new();
        for (key, value) in &self.args {
            args.insert(
                Value::String(key.clone()),
                Value::String(value.clone()),
            );
        }
        let mut r = Mapping::new();
        r.insert(Value::String("context".into()), context);
        r.insert(Value::String("args".into()), Value::Mapping(args));
        Value::Mapping(r)
    }
}

/// 起動コマンド
///
/// compose.yml の command はシェル形式の一行でも exec 形式の配列でも
/// 書けるため、どちらの形も保持できるようにしています。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Command {
    /// シェル形式（一行）
    Line(String),
    /// exec 形式（引数の配列）
    Argv(Vec<String>),
}

impl ToCompose for Command {
    fn to_compose(&self) -> Value {
        match self {
            Command::Line(line) => Value::String(line.clone()),
            Command::Argv(argv) => argv.to_compose(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_omits_absent_fields() {
        let service = Service {
            name: "base".to_string(),
            image: Some("base:el7".to_string()),
            build: Some(BuildConfig {
                context: PathBuf::from("base-el7"),
                args: vec![],
            }),
            command: Some(Command::Line("/usr/bin/true".to_string())),
            ..Default::default()
        };

        let value = service.to_compose();
        let map = value.as_mapping().unwrap();

        // 存在するフィールドだけがキーになる
        let keys: Vec<&str> = map.keys().map(|k| k.as_str().unwrap()).collect();
        assert_eq!(keys, vec!["image", "build", "command"]);
    }

    #[test]
    fn test_service_name_is_not_emitted() {
        let service = Service {
            name: "internal".to_string(),
            image: Some("x:1".to_string()),
            ..Default::default()
        };

        let value = service.to_compose();
        assert!(value.get("name").is_none());
        assert!(value.get("_name").is_none());
        assert!(value.get("image").is_some());
    }

    #[test]
    fn test_build_without_args_is_bare_context() {
        let build = BuildConfig {
            context: PathBuf::from("base-el7"),
            args: vec![],
        };
        assert_eq!(build.to_compose(), Value::String("base-el7".to_string()));
    }

    #[test]
    fn test_build_with_args_keeps_order() {
        let build = BuildConfig {
            context: PathBuf::from("image-postgis"),
            args: vec![
                ("postgresql_version_full".to_string(), "9.4".to_string()),
                ("postgresql_version_abbr".to_string(), "94".to_string()),
                ("postgis_package_version_abbr".to_string(), "2".to_string()),
            ],
        };

        let value = build.to_compose();
        assert_eq!(
            value.get("context"),
            Some(&Value::String("image-postgis".to_string()))
        );

        let args = value.get("args").unwrap();
        let keys: Vec<&str> = args
            .as_mapping()
            .unwrap()
            .keys()
            .map(|k| k.as_str().unwrap())
            .collect();
        assert_eq!(
            keys,
            vec![
                "postgresql_version_full",
                "postgresql_version_abbr",
                "postgis_package_version_abbr",
            ]
        );
    }

    #[test]
    fn test_port_and_volume_render_as_strings() {
        let port = Port {
            host: 5432,
            container: 5432,
        };
        assert_eq!(port.to_compose(), Value::String("5432:5432".to_string()));

        let volume = Volume {
            name: "pgdata94".to_string(),
            container: PathBuf::from("/var/lib/pgdata/9.4/data"),
        };
        assert_eq!(
            volume.to_compose(),
            Value::String("pgdata94:/var/lib/pgdata/9.4/data".to_string())
        );
    }

    #[test]
    fn test_service_serde_uses_private_name_key() {
        let service = Service {
            name: "postgis_21_94_db".to_string(),
            image: Some("postgis:21_94".to_string()),
            ports: vec![Port {
                host: 5432,
                container: 5432,
            }],
            ..Default::default()
        };

        // JSON シリアライズ: 管理用の name は `_name` キーになる
        let json = serde_json::to_string(&service).unwrap();
        assert!(json.contains("\"_name\":\"postgis_21_94_db\""));
        assert!(!json.contains("\"name\""));

        // JSON デシリアライズ
        let deserialized: Service = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.name, service.name);
        assert_eq!(deserialized.image, service.image);
        assert_eq!(deserialized.ports, service.ports);
    }

    #[test]
    fn test_command_argv_renders_as_sequence() {
        let command = Command::Argv(vec!["postgres".to_string(), "-D".to_string()]);
        let value = command.to_compose();
        assert!(value.is_sequence());
        assert_eq!(value.as_sequence().unwrap().len(), 2);
    }
}
