use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpgradeError {
    #[error(
        "無効なアップグレード遷移: {component} {version} へのステップは現在の状態 (postgresql {postgresql} / postgis {postgis}) を変えません（同一バージョンへのステップはアップグレード列の誤り）"
    )]
    InvalidTransition {
        component: &'static str,
        version: String,
        /// エラー時点の PostgreSQL バージョン
        postgresql: String,
        /// エラー時点の PostGIS バージョン
        postgis: String,
    },
}

pub type Result<T> = std::result::Result<T, UpgradeError>;
