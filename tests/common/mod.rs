use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Scratch directory holding BOM exports written by a test
pub struct BomDir {
    dir : TempDir
}

impl BomDir {
    pub fn new() -> anyhow::Result<BomDir> {
        Ok(BomDir { dir : tempfile::tempdir()? })
    }

    /// Write `contents` to `name` inside the scratch directory
    pub fn write(&self, name : &str, contents : &str) -> anyhow::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}

/// Render a diff report exactly as the command line tool prints it
#[allow(dead_code)] // used by test_diff, but not test_loader or test_cli
pub fn render(report : &bomdiff::bom::diff::DiffReport) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    bomdiff::bom::report::write_report(&mut buf, report)?;
    Ok(String::from_utf8(buf)?)
}
