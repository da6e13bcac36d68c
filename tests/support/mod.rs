#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn site_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_site"))
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn service_json(slug: &str, title: &str, icon: &str) -> Value {
    json!({
        "id": format!("svc-{slug}"),
        "slug": slug,
        "title": title,
        "short_description": format!("{title} in brief."),
        "long_description": format!("{title} in depth."),
        "icon": icon,
        "image": format!("/static/images/services/{slug}.jpg"),
        "features": [
            { "title": format!("{title} feature"), "description": "Does the thing." }
        ],
        "benefits": [format!("{title} benefit")]
    })
}

/// The three-service catalog used throughout the resolver scenarios.
pub fn fixture_content() -> Value {
    json!({
        "schema_version": "site_content_v1",
        "site": {
            "title": "Congruity HR",
            "description": "HR services.",
            "phone": "844-247-4100",
            "email": "info@congruityhr.com",
            "location": "HQ in North Carolina, Nationwide"
        },
        "services": [
            service_json("peo", "PEO", "Users"),
            service_json("aso", "ASO", "FileText"),
            service_json("benefits", "Benefits", "Heart")
        ],
        "team": {
            "leadership": [
                {
                    "name": "Jordan Ellis",
                    "title": "CEO",
                    "credentials": "SPHR",
                    "bio": "Leads the company.",
                    "image": "/static/images/team/jordan.jpg"
                }
            ],
            "board": [
                { "name": "Casey Whitfield", "title": "Board Chair", "company": "Whitfield Capital" }
            ]
        },
        "footer_links": [
            {
                "column_name": "Services",
                "links": [
                    { "title": "PEO", "href": "/services/peo" },
                    { "title": "ASO", "href": "/services/aso" }
                ]
            }
        ]
    })
}

/// Lay out `content` as `<tmp>/content/site_content.json` next to a copy of
/// the repository schema, mirroring the repo layout the loader expects.
pub fn write_content_tree(content: &Value) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new().context("allocating temp content dir")?;
    fs::create_dir_all(dir.path().join("content"))?;
    fs::create_dir_all(dir.path().join("schema"))?;
    fs::copy(
        repo_root().join("schema/site_content.schema.json"),
        dir.path().join("schema/site_content.schema.json"),
    )?;
    let content_path = dir.path().join("content/site_content.json");
    fs::write(&content_path, serde_json::to_vec_pretty(content)?)?;
    Ok((dir, content_path))
}

pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
