//! アップグレード系列から compose ドキュメントを組み立てる

use crate::component::{UpgradeStep, VersionPair};
use crate::error::Result;
use crate::tag::{image_tag, postgis_package_version_abbr};
use pgflow_compose::{BuildConfig, Command, Compose, Port, Service, Volume};
use std::path::PathBuf;

/// アップグレード計画
///
/// 開始時点のバージョン組み合わせと、順番に適用するステップの列。
/// 起動時にリテラルから一度だけ構築し、不変のまま渡す。
#[derive(Debug)]
pub struct UpgradePlan {
    pub start: VersionPair,
    pub steps: Vec<Box<dyn UpgradeStep>>,
}

/// 計画から compose ドキュメントを組み立てる
///
/// 開始状態をチェックポイント 0 として、ステップごとに状態を進め、
/// チェックポイントごとにコマンド用サービスと DB サービスの対を
/// 追加する。named volume は挿入順を保って重複なく集める。
/// 無効な遷移があれば全体が失敗する（部分出力はしない）。
pub fn assemble(plan: &UpgradePlan) -> Result<Compose> {
    let mut services = vec![base_service()];
    let mut volume_names: Vec<String> = Vec::new();

    let mut state = plan.start.clone();
    for step in std::iter::once(None).chain(plan.steps.iter().map(Some)) {
        if let Some(step) = step {
            state = step.apply(&state)?;
        }
        let tag = image_tag(&state.postgresql, &state.postgis);
        tracing::debug!(%tag, "チェックポイントを追加");

        let volume_name = state.postgresql.pgdata_volume_name();
        if !volume_names.contains(&volume_name) {
            volume_names.push(volume_name);
        }

        let (cli, db) = checkpoint_services(&state, &tag);
        services.push(cli);
        services.push(db);
    }

    Ok(Compose {
        services,
        volumes: volume_names,
    })
}

/// 全イメージの土台になるビルド専用サービス
fn base_service() -> Service {
    Service {
        name: "base".to_string(),
        image: Some("base:el7".to_string()),
        build: Some(BuildConfig {
            context: PathBuf::from("base-el7"),
            args: vec![],
        }),
        command: Some(Command::Line("/usr/bin/true".to_string())),
        ..Default::default()
    }
}

/// 1 チェックポイント分のサービス対（コマンド用, DB）を構築する
fn checkpoint_services(state: &VersionPair, tag: &str) -> (Service, Service) {
    let name = format!("postgis_{tag}");
    let db_name = format!("{name}_db");
    let image = format!("postgis:{tag}");

    let db = Service {
        name: db_name.clone(),
        image: Some(image.clone()),
        build: Some(BuildConfig {
            context: PathBuf::from("image-postgis"),
            args: vec![
                (
                    "postgresql_version_full".to_string(),
                    state.postgresql.version().to_string(),
                ),
                (
                    "postgresql_version_abbr".to_string(),
                    state.postgresql.abbr().to_string(),
                ),
                (
                    "postgis_package_version_abbr".to_string(),
                    postgis_package_version_abbr(&state.postgresql, &state.postgis),
                ),
            ],
        }),
        command: Some(Command::Line("/usr/sbin/init".to_string())),
        ports: vec![Port {
            host: 5432,
            container: 5432,
        }],
        volumes: vec![Volume {
            name: state.postgresql.pgdata_volume_name(),
            container: state.postgresql.pgdata_container_path(),
        }],
        ..Default::default()
    };

    let cli = Service {
        name,
        image: Some(image),
        depends_on: vec![db_name],
        ..Default::default()
    };

    (cli, db)
}
