//! バージョン取得 → ビルド → （任意）公開 を順に実行するパイプライン
//!
//! 最初に失敗したステップで残りのステップを中断する。リトライや後片付けは行わない。

use crate::builder::ImageBuilder;
use crate::engine::ContainerEngine;
use crate::error::Result;
use crate::publisher::{ImagePublisher, normalize_registry_url};
use crate::version::load_version;
use colored::Colorize;
use dockship_config::Settings;
use std::sync::Arc;

/// パイプラインの実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    pub version: String,
    /// ビルドしたローカルイメージ（`name:version`）
    pub image: String,
    /// 公開したイメージ（--push 時のみ）
    pub published: Option<String>,
}

pub struct Pipeline {
    settings: Settings,
    builder: ImageBuilder,
    publisher: ImagePublisher,
}

impl Pipeline {
    pub fn new(settings: Settings, engine: Arc<dyn ContainerEngine>) -> Self {
        Self {
            settings,
            builder: ImageBuilder::new(engine.clone()),
            publisher: ImagePublisher::new(engine),
        }
    }

    pub async fn run(&self, push: bool) -> Result<PipelineOutcome> {
        let settings = &self.settings;

        let version = load_version(&settings.version_script_path)?;
        println!(
            "バージョン ({}): {}",
            settings.version_script_path.display(),
            version.cyan()
        );

        println!(
            "Dockerfile: {}",
            settings.dockerfile_path.display().to_string().cyan()
        );
        println!("{}", "Dockerイメージをビルド中...".green());
        let image = self
            .builder
            .build(&settings.image_name, &version, &settings.dockerfile_path)
            .await?;

        let published = if push {
            let registry_url = normalize_registry_url(settings.require_publish_url()?);

            println!();
            println!("{}", "📤 イメージをプッシュ中...".blue().bold());
            let target = self
                .publisher
                .publish(&settings.image_name, &registry_url, &version)
                .await?;
            Some(target)
        } else {
            tracing::debug!("Push not requested, skipping publish");
            None
        };

        Ok(PipelineOutcome {
            version,
            image,
            published,
        })
    }
}
