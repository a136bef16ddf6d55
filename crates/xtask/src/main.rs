use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Crates whose sources must stay free of I/O and async runtimes.
const PURE_CRATES: &[&str] = &["mrsheet-domain", "mrsheet-shared"];

/// Dependencies a pure crate must not pull in.
const FORBIDDEN_DEPS: &[&str] = &[
    "tokio",
    "reqwest",
    "async-trait",
    "directories",
    "dotenvy",
    "tracing-subscriber",
];

/// Source patterns that signal I/O inside a pure crate.
const FORBIDDEN_SOURCE: &str = r"\b(std::fs|std::net|std::process|std::env|tokio::|reqwest::)";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    #[serde(default)]
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let pattern = regex_lite::Regex::new(FORBIDDEN_SOURCE).context("compiling source pattern")?;

    let mut violations = dependency_violations(&metadata);
    for package in metadata
        .packages
        .iter()
        .filter(|p| PURE_CRATES.contains(&p.name.as_str()))
    {
        let src = package
            .manifest_path
            .parent()
            .map(|dir| dir.join("src"))
            .context("manifest without a directory")?;
        violations.extend(source_violations(&package.name, &src, &pattern)?);
    }

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }
    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

/// Normal (non-dev) dependencies of pure crates that are on the forbidden list.
fn dependency_violations(metadata: &Metadata) -> Vec<String> {
    metadata
        .packages
        .iter()
        .filter(|p| PURE_CRATES.contains(&p.name.as_str()))
        .flat_map(|package| {
            package
                .dependencies
                .iter()
                .filter(|dep| dep.kind.is_none())
                .filter(|dep| FORBIDDEN_DEPS.contains(&dep.name.as_str()))
                .map(move |dep| format!("{} depends on {}", package.name, dep.name))
        })
        .collect()
}

fn source_violations(
    crate_name: &str,
    dir: &Path,
    pattern: &regex_lite::Regex,
) -> anyhow::Result<Vec<String>> {
    let mut violations = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            violations.extend(source_violations(crate_name, &path, pattern)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            violations.extend(
                source
                    .lines()
                    .enumerate()
                    .filter(|(_, line)| !line.trim_start().starts_with("//"))
                    .filter(|(_, line)| pattern.is_match(line))
                    .map(|(n, _)| format!("{crate_name}: I/O in {}:{}", path.display(), n + 1)),
            );
        }
    }
    Ok(violations)
}
