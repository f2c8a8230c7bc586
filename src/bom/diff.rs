use std::collections::BTreeSet;

use crate::bom::table::PartTable;

/// A part number that only exists on one side of the diff
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct LineItem {
    pub identifier : String,
    pub designators : Vec<String>
}

/// A part number present on both sides whose designators differ
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Change {
    pub identifier : String,
    /// (was, now) designator counts, only when they differ
    pub count : Option<(usize, usize)>,
    pub added_designators : BTreeSet<String>,
    pub removed_designators : BTreeSet<String>
}

#[derive(Debug,Clone,Default,PartialEq,Eq)]
pub struct DiffReport {
    pub added : Vec<LineItem>,
    pub removed : Vec<LineItem>,
    pub changed : Vec<Change>
}

impl DiffReport {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

/// Compare two BOMs
///
/// Every section is ordered by part number.  Designator comparisons use set
/// semantics, so a designator repeated within one side does not count as a
/// change unless the total count also moved.
pub fn diff(from : &PartTable, to : &PartTable) -> DiffReport {
    let only_in = |a : &PartTable, b : &PartTable| -> Vec<LineItem> {
        a.iter()
            .filter(|(id, _)| !b.contains(id))
            .map(|(id, des)| LineItem { identifier : id.clone(), designators : des.clone() })
            .collect()
    };

    let changed = from.iter().filter_map(|(id, was)| {
        let now = to.get(id)?;
        compare_designators(id, was, now)
    }).collect();

    DiffReport {
        added : only_in(to, from),
        removed : only_in(from, to),
        changed
    }
}

fn compare_designators(identifier : &str, was : &[String], now : &[String]) -> Option<Change> {
    let was_set : BTreeSet<&String> = was.iter().collect();
    let now_set : BTreeSet<&String> = now.iter().collect();

    let count = if was.len() != now.len() { Some((was.len(), now.len())) } else { None };
    let added_designators : BTreeSet<String> = now_set.difference(&was_set).map(|d| (*d).clone()).collect();
    let removed_designators : BTreeSet<String> = was_set.difference(&now_set).map(|d| (*d).clone()).collect();

    if count.is_none() && added_designators.is_empty() && removed_designators.is_empty() {
        return None;
    }
    Some(Change { identifier : identifier.to_owned(), count, added_designators, removed_designators })
}
