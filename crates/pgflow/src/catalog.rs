//! バージョンカタログとアップグレード計画のリテラル定義
//!
//! ここがこのジェネレータの唯一の入力。グローバルではなく、起動時に
//! 一度だけ構築して組み立て側へ明示的に渡す。

use pgflow_core::{Postgis, Postgresql, UpgradePlan, VersionPair};

/// EL7 ベースの PostgreSQL/PostGIS アップグレード経路
///
/// 9.4/2.1 から始めて、PostGIS と PostgreSQL を交互に上げていく。
pub fn upgrade_plan() -> UpgradePlan {
    UpgradePlan {
        start: VersionPair {
            postgresql: Postgresql::new("9.4"),
            postgis: Postgis::new("2.1"),
        },
        steps: vec![
            Box::new(Postgis::new("2.4")),
            Box::new(Postgresql::new("11")),
            Box::new(Postgis::new("3.3")),
            Box::new(Postgresql::new("15")),
        ],
    }
}
