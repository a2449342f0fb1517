use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::constants::DEFAULT_FIRMWARE_COMMAND;
use super::{CommandSource, Subcommand};
use crate::error::{Error, Result};

/// Runs the firmware query tool once per read
///
/// The call blocks the tick until the child exits; there is no timeout. The
/// child is killed if the read future is dropped before it finishes.
#[derive(Debug, Clone)]
pub struct CommandMetricSource {
    program: String,
}

impl CommandMetricSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandMetricSource {
    fn default() -> Self {
        Self::new(DEFAULT_FIRMWARE_COMMAND)
    }
}

#[async_trait]
impl CommandSource for CommandMetricSource {
    async fn read_raw(&self, subcommand: Subcommand) -> Result<String> {
        let output = Command::new(&self.program)
            .arg(subcommand.as_str())
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| Error::command_unavailable(&self.program, e))?;

        if !output.status.success() {
            debug!(
                program = %self.program,
                %subcommand,
                stderr = %String::from_utf8_lossy(&output.stderr).trim_end(),
                "firmware query failed"
            );
            return Err(Error::command_failed(format!("{} {}", self.program, subcommand), output.status));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| Error::invalid_data(format!("{} {}: {}", self.program, subcommand, e)))
    }
}
