//! モデルから compose ドキュメント正準形への変換
//!
//! 各モデルが実装する [`ToCompose`] を起点に、ネストした値を
//! `serde_yaml::Value`（挿入順を保持するマッピング／シーケンス）へ
//! 再帰的に変換します。null は後段の出力で空スカラーに解決される
//! 意味のある値なので、この段階では落としません。

use serde_yaml::{Mapping, Value};

/// compose ドキュメントの正準形へ変換できる値
///
/// 文字列は文字の列としてではなく常にスカラーとして扱います。
pub trait ToCompose {
    fn to_compose(&self) -> Value;
}

impl ToCompose for String {
    fn to_compose(&self) -> Value {
        Value::String(self.clone())
    }
}

/// 既に正準形の値はそのまま
impl ToCompose for Value {
    fn to_compose(&self) -> Value {
        self.clone()
    }
}

/// None は null として保持される（キーの省略は各モデル側の責務）
impl<T: ToCompose> ToCompose for Option<T> {
    fn to_compose(&self) -> Value {
        match self {
            Some(inner) => inner.to_compose(),
            None => Value::Null,
        }
    }
}

impl<T: ToCompose> ToCompose for Vec<T> {
    fn to_compose(&self) -> Value {
        Value::Sequence(self.iter().map(ToCompose::to_compose).collect())
    }
}

/// 値が Some の場合だけキーを挿入する
///
/// compose.yml では未指定のフィールドは null ではなくキーごと
/// 現れない、が出力契約なのでここで省略する。
pub fn insert_if_some<T: ToCompose>(map: &mut Mapping, key: &str, value: &Option<T>) {
    if let Some(value) = value {
        map.insert(Value::String(key.to_string()), value.to_compose());
    }
}

/// リストが空でない場合だけキーを挿入する
pub fn insert_if_present<T: ToCompose>(map: &mut Mapping, key: &str, values: &[T]) {
    if !values.is_empty() {
        map.insert(
            Value::String(key.to_string()),
            Value::Sequence(values.iter().map(ToCompose::to_compose).collect()),
        );
    }
}

/// 値が null のエントリをマッピングから再帰的に取り除く
///
/// `{x: null}` -> `{}`。残ったエントリの相対順序は保たれる。
pub fn strip_null_entries(value: &Value) -> Value {
    match value {
        Value::Mapping(map) => {
            let mut r = Mapping::new();
            for (key, value) in map {
                match value {
                    Value::Null => continue,
                    Value::Mapping(_) => {
                        r.insert(key.clone(), strip_null_entries(value));
                    }
                    _ => {
                        r.insert(key.clone(), value.clone());
                    }
                }
            }
            Value::Mapping(r)
        }
        _ => value.clone(),
    }
}

/// `_` で始まる管理用キーをマッピングから再帰的に取り除く
///
/// `{a: 1, _b: 2}` -> `{a: 1}`。残ったエントリの相対順序は保たれる。
pub fn strip_private_keys(value: &Value) -> Value {
    match value {
        Value::Mapping(map) => {
            let mut r = Mapping::new();
            for (key, value) in map {
                if key.as_str().is_some_and(|k| k.starts_with('_')) {
                    continue;
                }
                match value {
                    Value::Mapping(_) => {
                        r.insert(key.clone(), strip_private_keys(value));
                    }
                    _ => {
                        r.insert(key.clone(), value.clone());
                    }
                }
            }
            Value::Mapping(r)
        }
        _ => value.clone(),
    }
}
