use super::model::{PolicyRecord, PolicyTable};
use super::selector::Selection;

/// Read-only subset of the full table.
///
/// Always derived from the full table, never from another view.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    table: &'a PolicyTable,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub fn table(&self) -> &'a PolicyTable {
        self.table
    }

    /// Positions of the kept rows in the full table, ascending
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn records(&self) -> impl Iterator<Item = &'a PolicyRecord> + '_ {
        let records = self.table.records();
        self.indices.iter().map(move |&i| &records[i])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Keeps a row iff its Region, Location and Construction are all in the
/// selection. An empty set for any column gives an empty view.
pub fn apply_filter<'a>(table: &'a PolicyTable, selection: &Selection) -> FilteredView<'a> {
    let indices = if selection.excludes_everything() {
        Vec::new()
    } else {
        table
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| selection.admits(record))
            .map(|(i, _)| i)
            .collect()
    };

    FilteredView { table, indices }
}
