//! `<artifact>.provenance.json` sidecars: which code, command, parameters and
//! inputs produced an artifact.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub planar_version: &'static str,
    pub command: &'static str,
    pub callsite: Callsite,
    pub params: Value,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

impl Provenance {
    /// Records the caller's location as the callsite.
    #[track_caller]
    pub fn new(command: &'static str, params: Value) -> Self {
        let at = Location::caller();
        Self {
            code_rev: code_rev(),
            planar_version: planar::VERSION,
            command,
            callsite: Callsite {
                file: at.file(),
                line: at.line(),
            },
            params,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn input(mut self, path: &Path) -> Self {
        self.inputs.push(path.to_string_lossy().into_owned());
        self
    }

    /// Write the sidecar for `artifact` and return its path.
    pub fn write_next_to(mut self, artifact: &Path) -> Result<PathBuf> {
        self.outputs.push(artifact.to_string_lossy().into_owned());
        let path = sidecar_path(artifact);
        let body = serde_json::to_vec_pretty(&self)?;
        std::fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `diagram.json` -> `diagram.provenance.json`.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` at build time or run time, then `git rev-parse HEAD`, else "unknown".
pub fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    from_env
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            let rev = String::from_utf8(out.stdout).ok()?.trim().to_owned();
            (out.status.success() && !rev.is_empty()).then_some(rev)
        })
        .unwrap_or_else(|| "unknown".to_owned())
}
