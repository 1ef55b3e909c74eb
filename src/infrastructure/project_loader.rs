use anyhow::{Context, Result};
use cargo_metadata::MetadataCommand;
use std::fs;
use std::path::Path;

pub struct ProjectLoader;

impl ProjectLoader {
    /// Load all source files from a Cargo workspace manifest.
    /// Returns a vector of (file_path, file_content).
    pub fn load_workspace(manifest_path: &str) -> Result<Vec<(String, String)>> {
        let metadata = MetadataCommand::new()
            .manifest_path(manifest_path)
            .no_deps()
            .exec()
            .context("failed to execute cargo metadata")?;

        let mut files = Vec::new();

        for package_id in &metadata.workspace_members {
            if let Some(package) = metadata.packages.iter().find(|p| &p.id == package_id) {
                for target in &package.targets {
                    // Only lib/bin targets carry source we care about.
                    if !target
                        .kind
                        .iter()
                        .any(|k| k == "lib" || k == "bin" || k == "proc-macro")
                    {
                        continue;
                    }

                    let src_path = &target.src_path;
                    let src_dir = src_path.parent().unwrap_or(src_path);
                    Self::collect_rs_recursive(src_dir.as_std_path(), &mut files)?;
                }
            }
        }

        // Dedup when multiple targets point at the same files.
        files.sort_by(|a, b| a.0.cmp(&b.0));
        files.dedup_by(|a, b| a.0 == b.0);

        Ok(files)
    }

    /// Recursively collect `.rs` files under a directory, skipping
    /// `target/` and `.git/`.
    pub fn collect_dir(dir: &Path) -> Result<Vec<(String, String)>> {
        let mut files = Vec::new();
        Self::collect_rs_recursive(dir, &mut files)?;
        Ok(files)
    }

    fn collect_rs_recursive(dir: &Path, out: &mut Vec<(String, String)>) -> Result<()> {
        if dir.ends_with("target") || dir.ends_with(".git") {
            return Ok(());
        }
        if !dir.exists() {
            return Ok(());
        }

        if dir.is_file() {
            // Single-file targets (main.rs) land here.
            if let Some(ext) = dir.extension() {
                if ext == "rs" {
                    let content = fs::read_to_string(dir)
                        .with_context(|| format!("failed to read {}", dir.display()))?;
                    out.push((dir.display().to_string(), content));
                }
            }
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() {
                Self::collect_rs_recursive(&path, out)?;
            } else if let Some(ext) = path.extension() {
                if ext == "rs" {
                    let content = fs::read_to_string(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    out.push((path.display().to_string(), content));
                }
            }
        }
        Ok(())
    }
}
