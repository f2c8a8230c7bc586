use std::io::Write;

use crate::bom::diff::{Change,DiffReport,LineItem};

pub const NEW_BANNER : &str = "** NEW LINE ITEMS **";
pub const REMOVED_BANNER : &str = "** REMOVED LINE ITEMS **";
pub const CHANGED_BANNER : &str = "** QUANTITY CHANGES **";

/// Write the report as plain text
///
/// Each section banner is only written if the section has at least one entry,
/// so a diff with no differences writes nothing at all.
pub fn write_report<W : Write>(out : &mut W, report : &DiffReport) -> std::io::Result<()> {
    write_section(out, NEW_BANNER, &report.added, write_line_item)?;
    write_section(out, REMOVED_BANNER, &report.removed, write_line_item)?;
    write_section(out, CHANGED_BANNER, &report.changed, write_change)?;
    Ok(())
}

fn write_section<W, T, F>(out : &mut W, banner : &str, items : &[T], write_item : F) -> std::io::Result<()>
    where W : Write, F : Fn(&mut W, &T) -> std::io::Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", banner)?;
    for item in items {
        write_item(&mut *out, item)?;
    }
    Ok(())
}

fn write_line_item<W : Write>(out : &mut W, item : &LineItem) -> std::io::Result<()> {
    writeln!(out, "  {}:  {}", item.identifier, item.designators.join(", "))
}

fn write_change<W : Write>(out : &mut W, change : &Change) -> std::io::Result<()> {
    writeln!(out, "  {}: {}", change.identifier, describe_change(change))
}

/// `  Was: 2. Now: 3. Added R3 Removed R7`, with each clause only present when
/// it applies
pub fn describe_change(change : &Change) -> String {
    let mut desc = String::new();
    if let Some((was, now)) = change.count {
        desc.push_str(&format!("  Was: {}. Now: {}.", was, now));
    }
    if !change.added_designators.is_empty() {
        desc.push_str(" Added ");
        desc.push_str(&join(&change.added_designators));
    }
    if !change.removed_designators.is_empty() {
        desc.push_str(" Removed ");
        desc.push_str(&join(&change.removed_designators));
    }
    desc
}

fn join<'a, I : IntoIterator<Item = &'a String>>(items : I) -> String {
    items.into_iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")
}
