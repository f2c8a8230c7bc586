pub mod bom;

use std::io::Write;
use std::path::Path;

use crate::bom::diff::{diff,DiffReport};
use crate::bom::loader::{load_parts,LoadError};
use crate::bom::options::Options;
use crate::bom::report::write_report;

/// Load both BOMs and compare them.  Nothing is reported unless both load.
pub fn compare_files(from : &Path, to : &Path) -> Result<DiffReport, LoadError> {
    let parts_from = load_parts(from)?;
    let parts_to = load_parts(to)?;
    Ok(diff(&parts_from, &parts_to))
}

pub fn run_bom_diff_to<W : Write>(opt : &Options, out : &mut W) -> anyhow::Result<i32> {
    let report = compare_files(&opt.from, &opt.to)?;
    write_report(out, &report)?;
    out.flush()?;
    Ok(0)
}

pub fn run_bom_diff(opt : Options) -> anyhow::Result<i32> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_bom_diff_to(&opt, &mut out)
}
