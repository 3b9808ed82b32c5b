//! Git-backed artifact publisher.
//!
//! Stages the given artifact files, commits, and pushes to the configured
//! remote of the work directory. One failing step fails the publish; the
//! driver treats that as reportable, never fatal.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::ArtifactPublisher;
use crate::error::{ChorebotError, Result};

/// Publishes artifacts by committing and pushing them from a git work tree.
#[derive(Debug)]
pub struct GitPublisher {
    work_dir: PathBuf,
}

impl GitPublisher {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    fn git(&self, args: &[&str]) -> Result<()> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|e| ChorebotError::Publish(format!("Failed to execute git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ChorebotError::Publish(format!(
                "git {} failed: {}",
                args.first().unwrap_or(&""),
                stderr.trim()
            )));
        }

        Ok(())
    }
}

impl ArtifactPublisher for GitPublisher {
    fn publish(&self, paths: &[PathBuf], message: &str) -> Result<()> {
        let mut add_args = vec!["add".to_string()];
        for path in paths {
            add_args.push(path.display().to_string());
        }
        let add_refs: Vec<&str> = add_args.iter().map(String::as_str).collect();

        self.git(&add_refs)?;
        self.git(&["commit", "-m", message])?;
        self.git(&["push"])?;

        log::info!("Published {} artifact(s) to remote", paths.len());
        Ok(())
    }
}
