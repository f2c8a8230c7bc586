use std::io::Write;
use log::{Level,LevelFilter,Log,Metadata};

use bomdiff::bom::loader::MISMATCH_LOG_TARGET;
use bomdiff::bom::options::{parse_args,Invocation};

fn logging_builder() -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder.format(|buf, record| {
        match record.level() {
            Level::Warn => { writeln!(buf, "WARNING: {}", record.args()) }
            level => { writeln!(buf, "{}: {}", level, record.args()) }
        }
    });
    builder
}

/// RUST_LOG may raise or lower verbosity, but quantity mismatch warnings are
/// part of the tool's output and stay on even under `RUST_LOG=error` or `off`
fn init_logging() {
    let mismatch = Metadata::builder().level(Level::Warn).target(MISMATCH_LOG_TARGET).build();
    let from_env = logging_builder().build();
    let mut builder = logging_builder();
    if !from_env.enabled(&mismatch) {
        builder.filter_module(MISMATCH_LOG_TARGET, LevelFilter::Warn);
    }
    builder.init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    match parse_args(std::env::args_os()) {
        Ok(Invocation::Run(opt)) => {
            let ec = bomdiff::run_bom_diff(opt)?;
            std::process::exit(ec);
        }
        Ok(Invocation::Usage(text)) => {
            println!("{}", text);
            Ok(())
        }
        Err(e) => { e.exit() }
    }
}
