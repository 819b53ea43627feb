use contracts::dashboards::d400_insurance_analytics::FilterColumn;
use std::fmt;

/// Column headers the sheet must provide
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Region",
    "Location",
    "Construction",
    "State",
    "BusinessType",
    "Investment",
    "Rating",
];

/// Raw spreadsheet cell, independent of the source format
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Date/time or error cells: shown as text, never numeric
    Other(String),
}

impl Cell {
    /// Coerces the cell to a number; `None` when it cannot be read as one.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) if n.is_finite() => Some(*n),
            Cell::Number(_) => None,
            Cell::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Cell::Empty | Cell::Other(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) | Cell::Other(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// One insurance policy with the fields the dashboard works on
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyRecord {
    pub region: String,
    pub location: String,
    pub construction: String,
    pub state: String,
    pub business_type: String,
    /// `None` when the cell failed numeric coercion
    pub investment: Option<f64>,
    pub rating: Option<f64>,
    /// Display text of every cell, in sheet column order
    pub cells: Vec<String>,
}

/// Categorical attribute a record can be grouped or filtered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Region,
    Location,
    Construction,
    State,
    BusinessType,
}

impl Dimension {
    pub fn column_name(&self) -> &'static str {
        match self {
            Dimension::Region => "Region",
            Dimension::Location => "Location",
            Dimension::Construction => "Construction",
            Dimension::State => "State",
            Dimension::BusinessType => "BusinessType",
        }
    }

    pub fn value<'a>(&self, record: &'a PolicyRecord) -> &'a str {
        match self {
            Dimension::Region => &record.region,
            Dimension::Location => &record.location,
            Dimension::Construction => &record.construction,
            Dimension::State => &record.state,
            Dimension::BusinessType => &record.business_type,
        }
    }
}

impl From<FilterColumn> for Dimension {
    fn from(column: FilterColumn) -> Self {
        match column {
            FilterColumn::Region => Dimension::Region,
            FilterColumn::Location => Dimension::Location,
            FilterColumn::Construction => Dimension::Construction,
        }
    }
}

/// The full record table, read once at startup and never mutated
#[derive(Debug, Clone, Default)]
pub struct PolicyTable {
    columns: Vec<String>,
    records: Vec<PolicyRecord>,
    coercion_skips: usize,
}

impl PolicyTable {
    pub fn new(columns: Vec<String>, records: Vec<PolicyRecord>, coercion_skips: usize) -> Self {
        Self {
            columns,
            records,
            coercion_skips,
        }
    }

    /// Sheet headers in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[PolicyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of non-empty Investment/Rating cells that were not numeric
    pub fn coercion_skips(&self) -> usize {
        self.coercion_skips
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn record(
        region: &str,
        location: &str,
        construction: &str,
        state: &str,
        business_type: &str,
        investment: Option<f64>,
        rating: Option<f64>,
    ) -> PolicyRecord {
        let number = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();
        PolicyRecord {
            region: region.to_string(),
            location: location.to_string(),
            construction: construction.to_string(),
            state: state.to_string(),
            business_type: business_type.to_string(),
            investment,
            rating,
            cells: vec![
                region.to_string(),
                location.to_string(),
                construction.to_string(),
                state.to_string(),
                business_type.to_string(),
                number(investment),
                number(rating),
            ],
        }
    }

    pub fn table(records: Vec<PolicyRecord>) -> PolicyTable {
        let columns = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
        PolicyTable::new(columns, records, 0)
    }

    /// Three rows from the reference example plus nothing else
    pub fn example_table() -> PolicyTable {
        table(vec![
            record("East", "A", "Brick", "Dar", "Retail", Some(100.0), Some(3.0)),
            record("East", "B", "Wood", "Arusha", "Office", Some(200.0), Some(4.0)),
            record("West", "A", "Brick", "Dar", "Office", Some(50.0), Some(5.0)),
        ])
    }

    /// A larger table covering every dimension and a missing investment
    pub fn sample_table() -> PolicyTable {
        table(vec![
            record("East", "Urban", "Brick", "Dar", "Retail", Some(1000.0), Some(3.0)),
            record("East", "Rural", "Wood", "Arusha", "Farm", Some(250.0), Some(2.0)),
            record("West", "Urban", "Concrete", "Mwanza", "Retail", Some(4000.0), Some(5.0)),
            record("West", "Urban", "Brick", "Mwanza", "Office", None, Some(4.0)),
            record("North", "Rural", "Wood", "Arusha", "Retail", Some(750.0), None),
            record("North", "Urban", "Concrete", "Dar", "Office", Some(1500.0), Some(1.0)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_numeric_coercion() {
        assert_eq!(Cell::Number(12.5).to_number(), Some(12.5));
        assert_eq!(Cell::Text(" 300 ".to_string()).to_number(), Some(300.0));
        assert_eq!(Cell::Text("".to_string()).to_number(), None);
        assert_eq!(Cell::Text("n/a".to_string()).to_number(), None);
        assert_eq!(Cell::Text("NaN".to_string()).to_number(), None);
        assert_eq!(Cell::Number(f64::NAN).to_number(), None);
        assert_eq!(Cell::Bool(true).to_number(), Some(1.0));
        assert_eq!(Cell::Empty.to_number(), None);
        assert_eq!(Cell::Other("2024-01-01".to_string()).to_number(), None);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Number(100.0).to_string(), "100");
        assert_eq!(Cell::Number(12.5).to_string(), "12.5");
        assert_eq!(Cell::Empty.to_string(), "");
        assert_eq!(Cell::Text("Dar".to_string()).to_string(), "Dar");
    }

    #[test]
    fn test_dimension_values() {
        let record = fixtures::record("East", "A", "Brick", "Dar", "Retail", Some(1.0), None);
        assert_eq!(Dimension::Region.value(&record), "East");
        assert_eq!(Dimension::Location.value(&record), "A");
        assert_eq!(Dimension::Construction.value(&record), "Brick");
        assert_eq!(Dimension::State.value(&record), "Dar");
        assert_eq!(Dimension::BusinessType.value(&record), "Retail");
        assert_eq!(Dimension::from(FilterColumn::Location), Dimension::Location);
    }

    #[test]
    fn test_column_index() {
        let table = fixtures::example_table();
        assert_eq!(table.column_index("Region"), Some(0));
        assert_eq!(table.column_index("Rating"), Some(6));
        assert_eq!(table.column_index("Missing"), None);
        assert_eq!(table.len(), 3);
    }
}
