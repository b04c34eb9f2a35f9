use dockship_config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// コンテナエンジン呼び出しのエラー
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{program} を起動できません: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` が失敗しました ({})", exit_label(.code))]
    Exit { command: String, code: Option<i32> },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "シグナルにより終了".to_string(),
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("バージョンファイルを読み込めません: {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("VERSION が定義されていません: {path}")]
    MissingConstant { path: PathBuf },

    #[error("バージョン定義が不正です: {path}:{line}: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("JSONとして解析できません: {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("バージョンが空です: {path}")]
    EmptyVersion { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("イメージ {tag} のビルドに失敗しました: {source}")]
    Failed {
        tag: String,
        #[source]
        source: EngineError,
    },
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("{source_ref} を {target} にタグ付けできませんでした: {source}")]
    Tag {
        source_ref: String,
        target: String,
        #[source]
        source: EngineError,
    },

    #[error("{target} のプッシュに失敗しました: {source}")]
    Push {
        target: String,
        #[source]
        source: EngineError,
    },
}

/// パイプライン全体のエラー（失敗したステージごとに分類）
#[derive(Debug, Error)]
pub enum ShipError {
    #[error("設定エラー: {0}")]
    Config(#[from] ConfigError),

    #[error("バージョン取得エラー: {0}")]
    Load(#[from] LoadError),

    #[error("ビルドエラー: {0}")]
    Build(#[from] BuildError),

    #[error("公開エラー: {0}")]
    Publish(#[from] PublishError),
}

impl ShipError {
    /// ユーザー向けの分かりやすいエラーメッセージ
    pub fn user_message(&self) -> String {
        match self {
            ShipError::Config(e) => e.user_message(),
            ShipError::Load(LoadError::MissingConstant { path }) => {
                format!(
                    "{}\n\
                     \n\
                     解決方法:\n\
                     {} に次の行を追加してください:\n\
                        VERSION = \"1.0.0\"",
                    self,
                    path.display()
                )
            }
            ShipError::Load(LoadError::Read { path, .. }) => {
                format!(
                    "{}\n\
                     \n\
                     APP_VERSION_SCRIPT_PATH でファイルの場所を指定できます（現在: {}）",
                    self,
                    path.display()
                )
            }
            ShipError::Build(BuildError::Failed {
                source: EngineError::Spawn { program, .. },
                ..
            })
            | ShipError::Publish(PublishError::Tag {
                source: EngineError::Spawn { program, .. },
                ..
            })
            | ShipError::Publish(PublishError::Push {
                source: EngineError::Spawn { program, .. },
                ..
            }) => {
                format!(
                    "{}\n\
                     \n\
                     {} がインストールされ PATH に含まれているか確認してください。\n\
                     CONTAINER_ENGINE で別のエンジンを指定できます。",
                    self, program
                )
            }
            ShipError::Build(_) => {
                format!(
                    "{}\n\
                     \n\
                     Dockerfileの内容を確認してください。",
                    self
                )
            }
            ShipError::Publish(PublishError::Push { .. }) => {
                format!(
                    "{}\n\
                     \n\
                     レジストリへのログイン状態を確認してください。\n\
                     ローカルのタグ付け済みイメージはそのまま残っています。",
                    self
                )
            }
            _ => format!("{}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShipError>;
