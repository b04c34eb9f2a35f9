pub mod error;

pub use error::*;

use std::ffi::OsString;
use std::path::PathBuf;

pub const IMAGE_NAME_VAR: &str = "DOCKER_IMAGE_NAME";
pub const VERSION_SCRIPT_PATH_VAR: &str = "APP_VERSION_SCRIPT_PATH";
pub const DOCKERFILE_PATH_VAR: &str = "DOCKER_FILE_PATH";
pub const PUBLISH_URL_VAR: &str = "CR_PUBLISH_URL";
pub const ENGINE_VAR: &str = "CONTAINER_ENGINE";

pub const DEFAULT_VERSION_SCRIPT_PATH: &str = "./app/version.py";
pub const DEFAULT_DOCKERFILE_PATH: &str = "Dockerfile";
pub const DEFAULT_ENGINE: &str = "docker";

/// 起動時に一度だけ解決される実行設定
///
/// 環境変数の読み出しはここに集約し、各ステップには参照で渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// イメージ名（DOCKER_IMAGE_NAME、必須）
    pub image_name: String,
    /// バージョン定義ファイル（APP_VERSION_SCRIPT_PATH）
    pub version_script_path: PathBuf,
    /// Dockerfile（DOCKER_FILE_PATH）
    pub dockerfile_path: PathBuf,
    /// レジストリのベースURL（CR_PUBLISH_URL、--push 時のみ必須）
    pub publish_url: Option<String>,
    /// コンテナエンジンの実行ファイル（CONTAINER_ENGINE）
    pub engine: String,
}

impl Settings {
    /// プロセスの環境変数から設定を解決
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// 任意のルックアップ関数から設定を解決
    ///
    /// 空文字列の変数は未設定として扱う。UTF-8 でない値はエラー。
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let get = |name: &'static str| -> Result<Option<String>> {
            match lookup(name) {
                Some(value) if value.is_empty() => Ok(None),
                Some(value) => value
                    .into_string()
                    .map(Some)
                    .map_err(|_| ConfigError::InvalidVar(name)),
                None => Ok(None),
            }
        };

        let image_name = get(IMAGE_NAME_VAR)?.ok_or(ConfigError::MissingVar(IMAGE_NAME_VAR))?;

        let version_script_path = get(VERSION_SCRIPT_PATH_VAR)?
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_VERSION_SCRIPT_PATH));
        let dockerfile_path = get(DOCKERFILE_PATH_VAR)?
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCKERFILE_PATH));
        let publish_url = get(PUBLISH_URL_VAR)?;
        let engine = get(ENGINE_VAR)?.unwrap_or_else(|| DEFAULT_ENGINE.to_string());

        tracing::debug!(
            image = %image_name,
            version_script = %version_script_path.display(),
            dockerfile = %dockerfile_path.display(),
            engine = %engine,
            "Resolved settings"
        );

        Ok(Self {
            image_name,
            version_script_path,
            dockerfile_path,
            publish_url,
            engine,
        })
    }

    /// プッシュ先URLを取得（未設定ならエラー）
    pub fn require_publish_url(&self) -> Result<&str> {
        self.publish_url
            .as_deref()
            .ok_or(ConfigError::MissingVar(PUBLISH_URL_VAR))
    }
}
