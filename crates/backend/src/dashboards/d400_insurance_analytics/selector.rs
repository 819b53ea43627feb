use std::collections::HashSet;

use contracts::dashboards::d400_insurance_analytics::{
    FilterColumn, FilterOptionSet, SelectionRequest,
};
use thiserror::Error;

use super::model::{Dimension, PolicyRecord, PolicyTable};

#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("value `{value}` does not occur in column {column}")]
    UnknownValue { column: String, value: String },
    #[error("unknown column `{0}`")]
    UnknownColumn(String),
}

/// Distinct values of a dimension over the full table.
///
/// Keeps first-appearance order so the sidebar lists options the way they
/// appear in the sheet.
pub fn distinct_values(table: &PolicyTable, dimension: Dimension) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut values = Vec::new();
    for record in table.records() {
        let value = dimension.value(record);
        if seen.insert(value) {
            values.push(value.to_string());
        }
    }
    values
}

/// Option sets for the three sidebar multi-selects
pub fn filter_options(table: &PolicyTable) -> Vec<FilterOptionSet> {
    FilterColumn::ALL
        .iter()
        .map(|column| FilterOptionSet {
            column: *column,
            label: column.label().to_string(),
            options: distinct_values(table, Dimension::from(*column)),
        })
        .collect()
}

/// Allowed values per filter column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    region: HashSet<String>,
    location: HashSet<String>,
    construction: HashSet<String>,
}

impl Selection {
    pub fn new(
        region: HashSet<String>,
        location: HashSet<String>,
        construction: HashSet<String>,
    ) -> Self {
        Self {
            region,
            location,
            construction,
        }
    }

    /// Default selection: every distinct value of every filter column
    pub fn all(table: &PolicyTable) -> Self {
        let set = |column: FilterColumn| -> HashSet<String> {
            distinct_values(table, column.into()).into_iter().collect()
        };
        Self::new(
            set(FilterColumn::Region),
            set(FilterColumn::Location),
            set(FilterColumn::Construction),
        )
    }

    /// Turns a request into a selection. Omitted columns default to every
    /// distinct value; values that never occur in the column are rejected.
    pub fn resolve(table: &PolicyTable, request: &SelectionRequest) -> Result<Self, SelectionError> {
        let resolve_column = |column: FilterColumn| -> Result<HashSet<String>, SelectionError> {
            let distinct = distinct_values(table, column.into());
            let Some(requested) = request.get(column) else {
                return Ok(distinct.into_iter().collect());
            };

            let known: HashSet<&str> = distinct.iter().map(String::as_str).collect();
            if let Some(unknown) = requested.iter().find(|v| !known.contains(v.as_str())) {
                return Err(SelectionError::UnknownValue {
                    column: column.column_name().to_string(),
                    value: unknown.clone(),
                });
            }
            Ok(requested.iter().cloned().collect())
        };

        Ok(Self::new(
            resolve_column(FilterColumn::Region)?,
            resolve_column(FilterColumn::Location)?,
            resolve_column(FilterColumn::Construction)?,
        ))
    }

    pub fn allowed(&self, column: FilterColumn) -> &HashSet<String> {
        match column {
            FilterColumn::Region => &self.region,
            FilterColumn::Location => &self.location,
            FilterColumn::Construction => &self.construction,
        }
    }

    /// True when every filter column's value is in its allowed set
    pub fn admits(&self, record: &PolicyRecord) -> bool {
        FilterColumn::ALL.iter().all(|column| {
            self.allowed(*column)
                .contains(Dimension::from(*column).value(record))
        })
    }

    /// True when some column allows nothing, i.e. the view must be empty
    pub fn excludes_everything(&self) -> bool {
        FilterColumn::ALL
            .iter()
            .any(|column| self.allowed(*column).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::fixtures::{example_table, sample_table};
    use super::*;
    use maplit::hashset;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_distinct_values_first_appearance_order() {
        let table = sample_table();
        assert_eq!(
            distinct_values(&table, Dimension::Region),
            strings(&["East", "West", "North"])
        );
        assert_eq!(
            distinct_values(&table, Dimension::State),
            strings(&["Dar", "Arusha", "Mwanza"])
        );
    }

    #[test]
    fn test_filter_options_cover_three_columns() {
        let options = filter_options(&example_table());
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].column, FilterColumn::Region);
        assert_eq!(options[0].label, "Select region");
        assert_eq!(options[1].options, strings(&["A", "B"]));
        assert_eq!(options[2].options, strings(&["Brick", "Wood"]));
    }

    #[test]
    fn test_default_request_resolves_to_all() {
        let table = example_table();
        let selection = Selection::resolve(&table, &SelectionRequest::default()).unwrap();
        assert_eq!(selection, Selection::all(&table));
        assert_eq!(
            selection.allowed(FilterColumn::Region),
            &hashset! {"East".to_string(), "West".to_string()}
        );
    }

    #[test]
    fn test_explicit_request() {
        let table = example_table();
        let request = SelectionRequest {
            region: Some(strings(&["East"])),
            location: Some(vec![]),
            construction: None,
        };
        let selection = Selection::resolve(&table, &request).unwrap();
        assert_eq!(
            selection.allowed(FilterColumn::Region),
            &hashset! {"East".to_string()}
        );
        assert!(selection.allowed(FilterColumn::Location).is_empty());
        assert_eq!(selection.allowed(FilterColumn::Construction).len(), 2);
        assert!(selection.excludes_everything());
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        let table = example_table();
        let request = SelectionRequest {
            construction: Some(strings(&["Brick", "Steel"])),
            ..Default::default()
        };
        assert_eq!(
            Selection::resolve(&table, &request),
            Err(SelectionError::UnknownValue {
                column: "Construction".to_string(),
                value: "Steel".to_string(),
            })
        );
    }

    #[test]
    fn test_admits_requires_every_column() {
        let table = example_table();
        let selection = Selection::new(
            hashset! {"East".to_string()},
            hashset! {"A".to_string(), "B".to_string()},
            hashset! {"Brick".to_string()},
        );
        let admitted: Vec<bool> = table.records().iter().map(|r| selection.admits(r)).collect();
        assert_eq!(admitted, vec![true, false, false]);
        assert!(!selection.excludes_everything());
    }
}
