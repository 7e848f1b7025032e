//! compose ドキュメントの YAML 出力
//!
//! serde_yaml の出力はキー順や null の表現を細かく制御できないため、
//! 正準形（`serde_yaml::Value`）からテキストへの変換は自前で行います。
//! - キーは挿入順のまま（辞書順への並べ替えをしない）
//! - 常にブロックスタイル
//! - null の表現は [`NullStyle`] で呼び出し側が明示的に指定する

use serde_yaml::{Mapping, Sequence, Value};
use std::fmt::Write;

/// null スカラーの出力方法
///
/// compose.yml のトップレベル volumes では「デフォルト設定の named
/// volume」を `名前:` と空のまま書くのが慣例なので、生成器は
/// [`NullStyle::Blank`] を使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullStyle {
    /// 空スカラーとして出力（`key:`）
    Blank,
    /// `null` キーワードとして出力（`key: null`）
    Keyword,
}

/// 正準形をブロックスタイルの YAML テキストへ変換する
pub fn to_yaml(value: &Value, null_style: NullStyle) -> String {
    let mut out = String::new();
    match value {
        Value::Mapping(map) if !map.is_empty() => write_mapping(&mut out, map, 0, null_style),
        Value::Sequence(seq) if !seq.is_empty() => write_sequence(&mut out, seq, 0, null_style),
        other => {
            let _ = writeln!(out, "{}", scalar_token(other, null_style));
        }
    }
    out
}

fn write_mapping(out: &mut String, map: &Mapping, indent: usize, null_style: NullStyle) {
    let pad = "  ".repeat(indent);
    for (key, value) in map {
        let key = match key {
            Value::String(s) => quote_if_needed(s),
            other => scalar_token(other, NullStyle::Keyword),
        };
        match value {
            Value::Mapping(m) if !m.is_empty() => {
                let _ = writeln!(out, "{pad}{key}:");
                write_mapping(out, m, indent + 1, null_style);
            }
            Value::Sequence(s) if !s.is_empty() => {
                let _ = writeln!(out, "{pad}{key}:");
                write_sequence(out, s, indent + 1, null_style);
            }
            other => {
                let token = scalar_token(other, null_style);
                if token.is_empty() {
                    let _ = writeln!(out, "{pad}{key}:");
                } else {
                    let _ = writeln!(out, "{pad}{key}: {token}");
                }
            }
        }
    }
}

fn write_sequence(out: &mut String, seq: &Sequence, indent: usize, null_style: NullStyle) {
    let pad = "  ".repeat(indent);
    for item in seq {
        match item {
            Value::Mapping(m) if !m.is_empty() => {
                let _ = writeln!(out, "{pad}-");
                write_mapping(out, m, indent + 1, null_style);
            }
            Value::Sequence(s) if !s.is_empty() => {
                let _ = writeln!(out, "{pad}-");
                write_sequence(out, s, indent + 1, null_style);
            }
            other => {
                let token = scalar_token(other, null_style);
                if token.is_empty() {
                    let _ = writeln!(out, "{pad}-");
                } else {
                    let _ = writeln!(out, "{pad}- {token}");
                }
            }
        }
    }
}

fn scalar_token(value: &Value, null_style: NullStyle) -> String {
    match value {
        Value::Null => match null_style {
            NullStyle::Blank => String::new(),
            NullStyle::Keyword => "null".to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote_if_needed(s),
        // 空のコレクションだけはフロー表記になる
        Value::Mapping(_) => "{}".to_string(),
        Value::Sequence(_) => "[]".to_string(),
        Value::Tagged(tagged) => scalar_token(&tagged.value, null_style),
    }
}

/// プレーンスカラーとして安全に読み戻せない文字列はシングルクォートで囲む
fn quote_if_needed(s: &str) -> String {
    if needs_quoting(s) {
        format!("'{}'", s.replace('\'', "''"))
    } else {
        s.to_string()
    }
}

fn needs_quoting(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    // 数値・真偽値・null に見える文字列は文字列のまま読み戻せない
    if s.parse::<f64>().is_ok() {
        return true;
    }
    if matches!(
        s.to_ascii_lowercase().as_str(),
        "true" | "false" | "null" | "~" | "yes" | "no" | "on" | "off"
    ) {
        return true;
    }
    if s.starts_with([
        ' ', '-', '?', '&', '*', '!', '|', '>', '%', '@', '`', '"', '\'', '#', ',', '[', ']',
        '{', '}',
    ]) || s.ends_with(' ')
    {
        return true;
    }
    s.chars().any(|c| {
        matches!(
            c,
            ':' | '#' | '[' | ']' | '{' | '}' | ',' | '&' | '*' | '\'' | '"' | '\n' | '\t'
        )
    })
}
