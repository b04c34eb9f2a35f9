use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 環境変数の影響を受けないよう、dockship が読む変数を除去したコマンドを作成
#[allow(deprecated)]
pub fn dockship() -> Command {
    let mut cmd = Command::cargo_bin("dockship").unwrap();
    for var in [
        "DOCKER_IMAGE_NAME",
        "APP_VERSION_SCRIPT_PATH",
        "DOCKER_FILE_PATH",
        "CR_PUBLISH_URL",
        "CONTAINER_ENGINE",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// ビルドコンテキストとなる一時プロジェクト
pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("Dockerfile"), "FROM alpine:latest\n").unwrap();
        Self { root }
    }

    /// ./app/version.py を作成
    pub fn write_version_py(&self, content: &str) {
        let dir = self.root.path().join("app");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("version.py"), content).unwrap();
    }

    /// 呼び出し引数を記録する偽のコンテナエンジンを作成
    ///
    /// `FAKE_ENGINE_FAIL` に指定したサブコマンドは exit code 7 で失敗する。
    #[cfg(unix)]
    pub fn install_fake_engine(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.root.path().join("fake-engine");
        let script = format!(
            "#!/bin/sh\n\
             echo \"$*\" >> '{}'\n\
             if [ -n \"$FAKE_ENGINE_FAIL\" ] && [ \"$1\" = \"$FAKE_ENGINE_FAIL\" ]; then\n\
             \x20 exit 7\n\
             fi\n\
             exit 0\n",
            self.engine_log().display()
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[allow(dead_code)]
    pub fn engine_log(&self) -> PathBuf {
        self.root.path().join("engine.log")
    }

    /// 偽エンジンが受け取った呼び出し（1行1回）
    #[allow(dead_code)]
    pub fn engine_calls(&self) -> Vec<String> {
        fs::read_to_string(self.engine_log())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn path(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }
}
