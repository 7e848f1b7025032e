//! バージョン付きソフトウェアコンポーネントと状態遷移
//!
//! PostgreSQL と PostGIS は独立にバージョンが進むため、組み合わせの
//! 状態を [`VersionPair`] で持ち、1 ステップ = どちらか一方の
//! バージョンアップとして [`UpgradeStep::apply`] で進めます。

use crate::error::{Result, UpgradeError};
use std::path::PathBuf;

/// アップグレードの 1 ステップ
///
/// 新しいコンポーネント種別を追加するときはこのトレイトを実装する
/// だけでよく、組み立て側のコードは変わらない。
pub trait UpgradeStep: std::fmt::Debug {
    /// 現在の状態にこのステップを適用した新しい状態を返す
    ///
    /// 既にインストール済みのバージョンと同じステップは
    /// [`UpgradeError::InvalidTransition`] になる。
    fn apply(&self, state: &VersionPair) -> Result<VersionPair>;
}

/// PostgreSQL と PostGIS の組み合わせ状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPair {
    pub postgresql: Postgresql,
    pub postgis: Postgis,
}

/// PostgreSQL コンポーネント
///
/// 構築後は不変。`abbr` はバージョン文字列から区切りを除いた
/// 短縮形（"9.4" -> "94"）で、構築時に計算して保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postgresql {
    version: String,
    abbr: String,
}

impl Postgresql {
    pub fn new(version: impl Into<String>) -> Self {
        let version = version.into();
        let abbr = abbreviate(&version);
        Self { version, abbr }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn abbr(&self) -> &str {
        &self.abbr
    }

    /// pgdata を置く named volume 名（"pgdata94" など）
    pub fn pgdata_volume_name(&self) -> String {
        format!("pgdata{}", self.abbr)
    }

    /// コンテナ内の pgdata マウント先
    pub fn pgdata_container_path(&self) -> PathBuf {
        PathBuf::from(format!("/var/lib/pgdata/{}/data", self.version))
    }
}

impl UpgradeStep for Postgresql {
    fn apply(&self, state: &VersionPair) -> Result<VersionPair> {
        if *self == state.postgresql {
            return Err(UpgradeError::InvalidTransition {
                component: "postgresql",
                version: self.version.clone(),
                postgresql: state.postgresql.version.clone(),
                postgis: state.postgis.version.clone(),
            });
        }
        Ok(VersionPair {
            postgresql: self.clone(),
            postgis: state.postgis.clone(),
        })
    }
}

/// PostGIS コンポーネント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postgis {
    version: String,
    abbr: String,
}

impl Postgis {
    pub fn new(version: impl Into<String>) -> Self {
        let version = version.into();
        let abbr = abbreviate(&version);
        Self { version, abbr }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn abbr(&self) -> &str {
        &self.abbr
    }
}

impl UpgradeStep for Postgis {
    fn apply(&self, state: &VersionPair) -> Result<VersionPair> {
        if *self == state.postgis {
            return Err(UpgradeError::InvalidTransition {
                component: "postgis",
                version: self.version.clone(),
                postgresql: state.postgresql.version.clone(),
                postgis: state.postgis.version.clone(),
            });
        }
        Ok(VersionPair {
            postgresql: state.postgresql.clone(),
            postgis: self.clone(),
        })
    }
}

fn abbreviate(version: &str) -> String {
    version.replace('.', "")
}
