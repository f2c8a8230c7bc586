use std::process::Command;

mod common;
use common::BomDir;

fn bom_diff() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bom-diff"))
}

#[test]
fn test_usage_without_arguments() -> anyhow::Result<()> {
    let out = bom_diff().output()?;
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout)?;
    assert!(stdout.starts_with("Usage: "));
    assert!(stdout.trim_end().ends_with("from.csv to.csv"));
    Ok(())
}

#[test]
fn test_usage_does_not_open_files() -> anyhow::Result<()> {
    // The single argument does not exist; a usage exit must not care
    let out = bom_diff().arg("/nonexistent/from.csv").output()?;
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout)?.starts_with("Usage: "));
    assert!(out.stderr.is_empty());
    Ok(())
}

#[test]
fn test_report_and_warnings() -> anyhow::Result<()> {
    let dir = BomDir::new()?;
    let from = dir.write("from.csv", "Quantity,Designator,MPN\n3,\"R1, R2\",MPN001\n")?;
    let to = dir.write("to.csv", "Quantity,Designator,MPN\n3,\"R1, R2, R3\",MPN001\n2,\"R4, R5\",MPN002\n")?;

    let out = bom_diff().arg(&from).arg(&to).env_remove("RUST_LOG").output()?;
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout)?,
               "** NEW LINE ITEMS **\n\
                \x20 MPN002:  R4, R5\n\
                ** QUANTITY CHANGES **\n\
                \x20 MPN001:   Was: 2. Now: 3. Added R3\n");
    assert_eq!(String::from_utf8(out.stderr)?,
               format!("WARNING: {} line 2: quantity is 3, but there are 2 designators\n", from.display()));
    Ok(())
}

#[test]
fn test_bad_quantity_aborts() -> anyhow::Result<()> {
    let dir = BomDir::new()?;
    let from = dir.write("from.csv", "Quantity,Designator,MPN\nmany,R1,MPN001\n")?;
    let to = dir.write("to.csv", "Quantity,Designator,MPN\n1,R1,MPN002\n")?;

    let out = bom_diff().arg(&from).arg(&to).output()?;
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8(out.stderr)?.contains("quantity 'many' is not an integer"));
    Ok(())
}

#[test]
fn test_warnings_survive_quiet_log_filter() -> anyhow::Result<()> {
    let dir = BomDir::new()?;
    let from = dir.write("from.csv", "Quantity,Designator,MPN\n3,\"R1, R2\",MPN001\n")?;
    let to = dir.write("to.csv", "Quantity,Designator,MPN\n2,\"R1, R2\",MPN001\n")?;
    let expected = format!("WARNING: {} line 2: quantity is 3, but there are 2 designators\n", from.display());

    for filter in ["error", "off", "bomdiff=off"] {
        let out = bom_diff().arg(&from).arg(&to).env("RUST_LOG", filter).output()?;
        assert!(out.status.success());
        assert!(out.stdout.is_empty());
        assert_eq!(String::from_utf8(out.stderr)?, expected, "RUST_LOG={}", filter);
    }
    Ok(())
}
