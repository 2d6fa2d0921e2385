//! Subprocess-backed generator adapter.
//!
//! Spawns a configured AI CLI, writes a JSON request (prompt, draft,
//! attachments) to its stdin, and parses the single JSON document the tool
//! prints to stdout. Any spawn, exit-status, or parse problem surfaces as
//! an error; the negotiation protocol decides whether that is fatal.

use std::process::Stdio;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use pacer_store::models::ProjectDraft;

use super::prompt;
use super::trait_def::RoadmapGenerator;
use super::types::{Attachment, FeasibilityReport};
use crate::roadmap::parser::parse_day_plans;
use crate::roadmap::plan_format::DayPlan;

/// Default binary looked up on `$PATH` when none is configured.
const DEFAULT_BINARY: &str = "gemini";

/// Generator backend that shells out to an external AI CLI.
#[derive(Debug, Clone)]
pub struct CliGenerator {
    /// Path to the generator binary. Defaults to [`DEFAULT_BINARY`].
    binary_path: String,
}

impl CliGenerator {
    /// Create an adapter that will look for the default binary on `$PATH`.
    pub fn new() -> Self {
        Self {
            binary_path: DEFAULT_BINARY.to_string(),
        }
    }

    /// Create an adapter with a custom binary path.
    pub fn with_binary(path: impl Into<String>) -> Self {
        Self {
            binary_path: path.into(),
        }
    }

    /// Run one request/response exchange with the external tool, returning
    /// the raw (fence-stripped) response body.
    async fn invoke(
        &self,
        prompt_text: String,
        draft: &ProjectDraft,
        attachments: &[Attachment],
    ) -> Result<String> {
        let request = serde_json::json!({
            "prompt": prompt_text,
            "project": draft,
            "attachments": attachments,
        });

        debug!(binary = %self.binary_path, "invoking generator subprocess");

        let mut child = Command::new(&self.binary_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to spawn generator {:?}", self.binary_path))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(request.to_string().as_bytes())
                .await
                .context("failed to write request to generator stdin")?;
            // Dropping stdin closes the pipe so the tool starts processing.
        }

        let output = child
            .wait_with_output()
            .await
            .context("failed to wait for generator subprocess")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "generator {:?} exited with {}: {}",
                self.binary_path,
                output.status,
                stderr.trim()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(strip_code_fences(stdout.trim()).to_owned())
    }
}

impl Default for CliGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoadmapGenerator for CliGenerator {
    fn name(&self) -> &str {
        &self.binary_path
    }

    async fn check_feasibility(
        &self,
        draft: &ProjectDraft,
        attachments: &[Attachment],
    ) -> Result<FeasibilityReport> {
        let body = self
            .invoke(prompt::feasibility_prompt(draft), draft, attachments)
            .await?;
        serde_json::from_str(&body).with_context(|| {
            format!(
                "generator returned an unparseable feasibility report: {}",
                snippet(&body, 200)
            )
        })
    }

    async fn generate_roadmap(
        &self,
        draft: &ProjectDraft,
        attachments: &[Attachment],
    ) -> Result<Vec<DayPlan>> {
        let body = self
            .invoke(prompt::roadmap_prompt(draft), draft, attachments)
            .await?;
        parse_day_plans(&body)
            .with_context(|| format!("generator returned an invalid roadmap: {}", snippet(&body, 200)))
    }
}

/// Strip a Markdown code fence if the tool wrapped its JSON in one.
fn strip_code_fences(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    // Skip an optional language tag on the opening fence line.
    let rest = match rest.split_once('\n') {
        Some((_lang, body)) => body,
        None => rest,
    };
    rest.strip_suffix("```").map_or(rest, str::trim).trim()
}

/// Truncate a string for error messages, appending "..." if shortened.
fn snippet(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        return s.to_owned();
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
