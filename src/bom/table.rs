use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// A row whose declared quantity disagrees with the number of designators
/// listed on it.  This never stops a load; it is only reported.
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct QuantityMismatch {
    pub file : String,
    /// 1-based record number; the header is row 1
    pub row : usize,
    pub quantity : i64,
    pub designators : usize
}

impl fmt::Display for QuantityMismatch {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} line {}: quantity is {}, but there are {} designators",
               self.file, self.row, self.quantity, self.designators)
    }
}

/// All of the designators in one BOM, keyed by manufacturer part number
///
/// Designators for a part that appears on several rows are concatenated in row
/// order; duplicates are kept.  Iteration is ordered by part number so that
/// reports are reproducible.
#[derive(Debug,Clone,Default,PartialEq,Eq)]
pub struct PartTable {
    parts : BTreeMap<String, Vec<String>>,
    warnings : Vec<QuantityMismatch>
}

impl PartTable {
    pub(crate) fn new() -> Self {
        PartTable::default()
    }

    pub(crate) fn append(&mut self, identifier : String, mut designators : Vec<String>) {
        self.parts.entry(identifier).or_default().append(&mut designators);
    }

    pub(crate) fn record_warning(&mut self, warning : QuantityMismatch) {
        self.warnings.push(warning);
    }

    pub fn get(&self, identifier : &str) -> Option<&[String]> {
        self.parts.get(identifier).map(|d| d.as_slice())
    }

    pub fn contains(&self, identifier : &str) -> bool {
        self.parts.contains_key(identifier)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.parts.iter()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Quantity mismatches encountered while this table was loaded
    pub fn warnings(&self) -> &[QuantityMismatch] {
        &self.warnings
    }
}

impl<'a> IntoIterator for &'a PartTable {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
impl<I, D> FromIterator<(I, D)> for PartTable
    where I : Into<String>, D : IntoIterator, D::Item : Into<String> {
    fn from_iter<T : IntoIterator<Item = (I, D)>>(iter : T) -> Self {
        let mut table = PartTable::new();
        for (id, des) in iter {
            table.append(id.into(), des.into_iter().map(Into::into).collect());
        }
        table
    }
}
