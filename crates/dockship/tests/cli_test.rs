use predicates::prelude::*;
mod common;
use common::{TestProject, dockship};

/// CLIヘルプが正しく表示されることを確認
#[test]
fn test_cli_help() {
    dockship()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--push"))
        .stdout(predicate::str::contains("DOCKER_IMAGE_NAME"))
        .stdout(predicate::str::contains("CR_PUBLISH_URL"));
}

/// バージョン表示が正しく動作することを確認
#[test]
fn test_cli_version() {
    dockship()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dockship"));
}

/// 不正な引数でエラーになることを確認
#[test]
fn test_invalid_argument() {
    dockship()
        .arg("--publish")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

/// DOCKER_IMAGE_NAME 未設定ではエンジンを呼ばずに失敗することを確認
#[cfg(unix)]
#[test]
fn test_missing_image_name() {
    let project = TestProject::new();
    project.write_version_py("VERSION = \"1.2.3\"\n");
    let engine = project.install_fake_engine();

    dockship()
        .current_dir(project.path())
        .env("CONTAINER_ENGINE", &engine)
        .arg("--push")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("DOCKER_IMAGE_NAME"));

    assert!(project.engine_calls().is_empty());
}

/// 空のDOCKER_IMAGE_NAMEは未設定と同じ扱い
#[test]
fn test_empty_image_name() {
    let project = TestProject::new();

    dockship()
        .current_dir(project.path())
        .env("DOCKER_IMAGE_NAME", "")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DOCKER_IMAGE_NAME"));
}

/// バージョンファイルが無い場合はビルド前に失敗することを確認
#[test]
fn test_missing_version_file() {
    let project = TestProject::new();

    dockship()
        .current_dir(project.path())
        .env("DOCKER_IMAGE_NAME", "myapp")
        .env("CONTAINER_ENGINE", "dockship-no-such-engine")
        .assert()
        .failure()
        .stderr(predicate::str::contains("バージョン取得エラー"))
        .stderr(predicate::str::contains("APP_VERSION_SCRIPT_PATH"));
}
