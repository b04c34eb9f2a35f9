use crate::engine::ContainerEngine;
use crate::error::BuildError;
use colored::Colorize;
use std::path::Path;
use std::sync::Arc;

/// `{name}:{version}` 形式のイメージタグを生成
pub fn image_tag(image_name: &str, version: &str) -> String {
    debug_assert!(!image_name.is_empty(), "image name must not be empty");
    debug_assert!(!version.is_empty(), "version must not be empty");
    format!("{}:{}", image_name, version)
}

pub struct ImageBuilder {
    engine: Arc<dyn ContainerEngine>,
}

impl ImageBuilder {
    pub fn new(engine: Arc<dyn ContainerEngine>) -> Self {
        Self { engine }
    }

    /// イメージをビルド
    ///
    /// カレントディレクトリをビルドコンテキストとして
    /// `build -t <name:version> -f <dockerfile> .` を実行し、ビルドしたタグを返す。
    pub async fn build(
        &self,
        image_name: &str,
        version: &str,
        dockerfile_path: &Path,
    ) -> Result<String, BuildError> {
        let tag = image_tag(image_name, version);
        tracing::info!("Building image: {}", tag);

        let args = build_args(&tag, dockerfile_path);
        self.engine
            .run(&args)
            .await
            .map_err(|source| BuildError::Failed {
                tag: tag.clone(),
                source,
            })?;

        println!(
            "{} イメージ {} のビルドが完了しました",
            "✓".green(),
            tag.cyan()
        );
        tracing::info!("Successfully built: {}", tag);
        Ok(tag)
    }
}

fn build_args(tag: &str, dockerfile_path: &Path) -> Vec<String> {
    vec![
        "build".to_string(),
        "-t".to_string(),
        tag.to_string(),
        "-f".to_string(),
        dockerfile_path.to_string_lossy().into_owned(),
        ".".to_string(),
    ]
}
