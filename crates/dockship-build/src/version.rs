//! バージョン定義ファイルの読み込み
//!
//! ファイルはコードとして実行せず、テキストとして解析します。
//!
//! 対応形式:
//! - 代入形式（デフォルト）: `VERSION = "1.2.3"`（`app/version.py` をそのまま利用可能）
//! - JSON（拡張子 `.json`）: `{"version": "1.2.3"}`
//! - プレーンテキスト（拡張子 `.txt` またはファイル名 `VERSION`）: 最初の空でない行

use crate::error::LoadError;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

/// `VERSION =` / `VERSION: str =` で始まる行
static ASSIGNMENT_HEAD: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^VERSION\s*(?::\s*[A-Za-z_][\w.]*\s*)?=(?:[^=]|$)").expect("valid regex")
});

/// 右辺が単一の文字列リテラルである代入（末尾コメント可）
static ASSIGNMENT: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r#"^VERSION\s*(?::\s*[A-Za-z_][\w.]*\s*)?=\s*(?:"([^"\\]*)"|'([^'\\]*)')\s*(?:#.*)?$"#,
    )
    .expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VersionFormat {
    Assignment,
    Json,
    PlainText,
}

impl VersionFormat {
    fn detect(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => VersionFormat::Json,
            Some("txt") => VersionFormat::PlainText,
            _ if path.file_name().is_some_and(|name| name == "VERSION") => {
                VersionFormat::PlainText
            }
            _ => VersionFormat::Assignment,
        }
    }
}

#[derive(Deserialize)]
struct VersionManifest {
    #[serde(alias = "VERSION")]
    version: Option<String>,
}

/// バージョン定義ファイルから VERSION の値を取得
pub fn load_version(path: &Path) -> Result<String, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // Python は BOM 付きのソースも受け付ける
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let format = VersionFormat::detect(path);
    tracing::debug!("Loading version from {} as {:?}", path.display(), format);

    let version = match format {
        VersionFormat::Assignment => parse_assignment(path, content)?,
        VersionFormat::Json => parse_json(path, content)?,
        VersionFormat::PlainText => parse_plain(content),
    };

    match version {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(LoadError::EmptyVersion {
            path: path.to_path_buf(),
        }),
        None => Err(LoadError::MissingConstant {
            path: path.to_path_buf(),
        }),
    }
}

/// トップレベルの最後の `VERSION =` 代入を採用（モジュール実行時と同じ束縛）
fn parse_assignment(path: &Path, content: &str) -> Result<Option<String>, LoadError> {
    let mut last: Option<(usize, Option<String>)> = None;

    for (index, line) in content.lines().enumerate() {
        // インデントされた行はトップレベルの定義ではない
        if !ASSIGNMENT_HEAD.is_match(line) {
            continue;
        }

        let value = ASSIGNMENT.captures(line.trim_end()).and_then(|captures| {
            captures
                .get(1)
                .or_else(|| captures.get(2))
                .map(|m| m.as_str().to_string())
        });
        last = Some((index + 1, value));
    }

    match last {
        Some((_, Some(value))) => Ok(Some(value)),
        Some((line, None)) => Err(LoadError::Malformed {
            path: path.to_path_buf(),
            line,
            reason: "VERSION には文字列リテラルを代入してください".to_string(),
        }),
        None => Ok(None),
    }
}

fn parse_json(path: &Path, content: &str) -> Result<Option<String>, LoadError> {
    let manifest: VersionManifest =
        serde_json::from_str(content).map_err(|source| LoadError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(manifest.version)
}

fn parse_plain(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
