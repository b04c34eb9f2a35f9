use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("環境変数 {0} が設定されていません")]
    MissingVar(&'static str),

    #[error("環境変数 {0} の値が UTF-8 ではありません")]
    InvalidVar(&'static str),
}

impl ConfigError {
    /// ユーザー向けの分かりやすいエラーメッセージ
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::MissingVar(name) => {
                format!(
                    "{}\n\
                     \n\
                     解決方法:\n\
                     export {}=<値> を設定してから再実行してください",
                    self, name
                )
            }
            ConfigError::InvalidVar(name) => {
                format!(
                    "{}\n\
                     \n\
                     {} を UTF-8 の文字列で設定し直してください",
                    self, name
                )
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
