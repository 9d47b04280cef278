use anyhow::{Context, Result};
use diskcloud::params::GenParams;
use diskcloud::pipeline::RunReport;
use serde::Serialize;
use serde_json::json;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Parameters that reproduce a point file, as recorded in its sidecar.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunParams {
    pub count: usize,
    pub label: String,
    pub seed: u64,
    pub radius_bound: f32,
    pub radius_rule: String,
    pub normalization: String,
    pub offset: [f32; 2],
    pub byte_order: &'static str,
}

impl RunParams {
    pub fn new(params: &GenParams, report: &RunReport) -> Self {
        let radius_rule = match params.radius {
            diskcloud::params::RadiusRule::Fixed(r) => format!("fixed({r})"),
            diskcloud::params::RadiusRule::QuarticRoot => "count^0.25".to_string(),
        };
        Self {
            count: report.count,
            label: params.count.label.clone(),
            seed: report.seed,
            radius_bound: report.radius_bound,
            radius_rule,
            normalization: params.normalization.to_string(),
            offset: [report.offset.x, report.offset.y],
            byte_order: "little",
        }
    }
}

/// Write `<artifact>.provenance.json` containing the git commit, callsite, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, params: &RunParams) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": diskcloud::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_name()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("points"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}
