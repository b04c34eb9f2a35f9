//! Container engine CLI wrapper
//!
//! Runs `docker` (or any CLI-compatible engine such as `podman`) as a child
//! process. Standard streams are inherited so build and push output reaches
//! the terminal unchanged.

use crate::error::EngineError;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Container engine abstraction
///
/// Builder and publisher only need "run these arguments and tell me whether
/// it succeeded", which keeps them testable without a real engine.
#[async_trait]
pub trait ContainerEngine: Send + Sync {
    /// Run the engine with the given arguments and wait for it to exit
    async fn run(&self, args: &[String]) -> Result<(), EngineError>;
}

/// Engine backed by an installed CLI
pub struct CliEngine {
    program: String,
}

impl CliEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl ContainerEngine for CliEngine {
    async fn run(&self, args: &[String]) -> Result<(), EngineError> {
        let command_line = format!("{} {}", self.program, args.join(" "));
        tracing::debug!("Running: {}", command_line);

        let status = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| EngineError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            tracing::debug!("{} exited with {:?}", self.program, status.code());
            return Err(EngineError::Exit {
                command: command_line,
                code: status.code(),
            });
        }

        Ok(())
    }
}
