//! イメージタグとビルド引数の導出規則

use crate::component::{Postgis, Postgresql};

/// チェックポイントを識別するイメージタグ（"21_94" など）
///
/// サービス名（`postgis_<tag>`）とイメージ参照（`postgis:<tag>`）の
/// 両方の接尾辞として使う。
pub fn image_tag(postgresql: &Postgresql, postgis: &Postgis) -> String {
    format!("{}_{}", postgis.abbr(), postgresql.abbr())
}

/// yum パッケージ名に使われる PostGIS バージョンの短縮形
///
/// 初期の EL7 パッケージングでは postgis2_94 系のようにマイナー番号を
/// 含まない名前だったため、この 3 組だけは短縮形の先頭 1 文字になる。
/// 例外リストは歴史的事実そのものなので、リテラルのまま保守する。
pub fn postgis_package_version_abbr(postgresql: &Postgresql, postgis: &Postgis) -> String {
    const LEGACY_PAIRS: [(&str, &str); 3] = [("2.1", "9.4"), ("2.2", "9.5"), ("2.3", "9.6")];

    if LEGACY_PAIRS.contains(&(postgis.version(), postgresql.version())) {
        postgis.abbr()[..1].to_string()
    } else {
        postgis.abbr().to_string()
    }
}
