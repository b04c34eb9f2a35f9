use clap::Parser;
use colored::Colorize;
use dockship_build::{CliEngine, Pipeline, PipelineOutcome, ShipError};
use dockship_config::Settings;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "dockship")]
#[command(version)]
#[command(
    about = "アプリのバージョンでタグ付けしたDockerイメージをビルドし、必要ならレジストリに公開する",
    long_about = None
)]
#[command(after_help = "環境変数:\n    \
    DOCKER_IMAGE_NAME        イメージ名（必須）\n    \
    APP_VERSION_SCRIPT_PATH  バージョン定義ファイル（デフォルト: ./app/version.py）\n    \
    DOCKER_FILE_PATH         Dockerfile（デフォルト: Dockerfile）\n    \
    CR_PUBLISH_URL           レジストリのベースURL（--push 時に必須）\n    \
    CONTAINER_ENGINE         コンテナエンジン（デフォルト: docker）")]
struct Cli {
    /// ビルド後にレジストリにプッシュ
    #[arg(long)]
    push: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdoutは進捗表示に使うので、ログはstderrに出力
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // 外部プロセスを1つずつ待つだけなのでシングルスレッドで十分
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match runtime.block_on(run(cli.push)) {
        Ok(outcome) => {
            print_summary(&outcome);
            Ok(())
        }
        Err(e) => {
            tracing::debug!("Aborted: {:?}", e);
            eprintln!("{} {}", "Error:".red().bold(), e.user_message());
            std::process::exit(1);
        }
    }
}

async fn run(push: bool) -> Result<PipelineOutcome, ShipError> {
    let settings = Settings::from_env()?;
    let engine = Arc::new(CliEngine::new(settings.engine.clone()));

    tracing::info!(image = %settings.image_name, push, "Starting pipeline");
    Pipeline::new(settings, engine).run(push).await
}

fn print_summary(outcome: &PipelineOutcome) {
    println!();
    match &outcome.published {
        Some(published) => {
            println!(
                "{}",
                "✓ イメージがビルド＆プッシュされました！".green().bold()
            );
            println!("  {} {}", "ビルド:".bold(), outcome.image.cyan());
            println!("  {} {}", "公開:".bold(), published.cyan());
        }
        None => {
            println!("{}", "✓ イメージがビルドされました！".green().bold());
            println!("  {} {}", "ビルド:".bold(), outcome.image.cyan());
        }
    }
}
