//! dockship のビルド・公開処理
//!
//! バージョン定義ファイルの読み込み、コンテナエンジンによるイメージビルド、
//! レジストリへのタグ付けとプッシュ、およびそれらを順に実行するパイプラインを提供します。

pub mod builder;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod publisher;
pub mod version;

pub use builder::{ImageBuilder, image_tag};
pub use engine::{CliEngine, ContainerEngine};
pub use error::{BuildError, EngineError, LoadError, PublishError, ShipError};
pub use pipeline::{Pipeline, PipelineOutcome};
pub use publisher::{ImagePublisher, normalize_registry_url, publish_reference};
pub use version::load_version;
