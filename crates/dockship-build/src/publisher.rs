//! イメージ公開処理
//!
//! ビルド済みのローカルイメージにレジストリ用のタグを付け、プッシュします。

use crate::builder::image_tag;
use crate::engine::ContainerEngine;
use crate::error::PublishError;
use colored::Colorize;
use std::sync::Arc;

/// レジストリURLの末尾を `/` に正規化
///
/// すでに `/` で終わる場合はそのまま返す。
pub fn normalize_registry_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

/// `{registry}/{name}:{version}` 形式の公開用参照を生成
pub fn publish_reference(registry_url: &str, image_name: &str, version: &str) -> String {
    format!(
        "{}{}",
        normalize_registry_url(registry_url),
        image_tag(image_name, version)
    )
}

/// タグ付けとプッシュを実行するハンドラ
pub struct ImagePublisher {
    engine: Arc<dyn ContainerEngine>,
}

impl ImagePublisher {
    pub fn new(engine: Arc<dyn ContainerEngine>) -> Self {
        Self { engine }
    }

    /// イメージをレジストリに公開
    ///
    /// # Arguments
    /// * `image_name` - ローカルのイメージ名（タグなし）
    /// * `registry_url` - レジストリのベースURL（末尾の `/` は省略可）
    /// * `version` - イメージタグ
    ///
    /// # Returns
    /// 公開したイメージの完全な参照
    ///
    /// プッシュに失敗してもタグ付けは取り消さない。
    pub async fn publish(
        &self,
        image_name: &str,
        registry_url: &str,
        version: &str,
    ) -> Result<String, PublishError> {
        let local = image_tag(image_name, version);
        let target = publish_reference(registry_url, image_name, version);

        println!("  → {}", target.cyan());

        tracing::info!("Tagging {} as {}", local, target);
        self.engine
            .run(&["tag".to_string(), local.clone(), target.clone()])
            .await
            .map_err(|source| PublishError::Tag {
                source_ref: local.clone(),
                target: target.clone(),
                source,
            })?;

        tracing::info!("Pushing {}", target);
        self.engine
            .run(&["push".to_string(), target.clone()])
            .await
            .map_err(|source| PublishError::Push {
                target: target.clone(),
                source,
            })?;

        println!(
            "{} イメージ {} を公開しました",
            "✓".green(),
            local.cyan()
        );
        Ok(target)
    }
}
