use contracts::dashboards::d400_insurance_analytics::TreemapNode;
use std::collections::HashMap;

/// Flat row: one key per grouping column plus the value to aggregate
#[derive(Debug, Clone)]
pub struct RawRow {
    pub keys: Vec<String>,
    pub value: f64,
}

impl RawRow {
    pub fn new(keys: Vec<String>, value: f64) -> Self {
        Self { keys, value }
    }
}

/// Tree builder for transforming flat grouped results to a hierarchy
pub struct TreeBuilder {
    /// Grouping column names (in order)
    grouping_columns: Vec<String>,
}

impl TreeBuilder {
    /// Create a new tree builder
    pub fn new(grouping_columns: Vec<String>) -> Self {
        Self { grouping_columns }
    }

    pub fn grouping_columns(&self) -> &[String] {
        &self.grouping_columns
    }

    /// Build the hierarchy. Each node's value is the sum of its children;
    /// leaves sum the rows sharing their full key path.
    pub fn build(&self, rows: &[RawRow]) -> Vec<TreemapNode> {
        if rows.is_empty() || self.grouping_columns.is_empty() {
            return vec![];
        }

        let rows: Vec<&RawRow> = rows.iter().collect();
        self.build_recursive(&rows, 0, None)
    }

    /// Recursively build tree at current level
    fn build_recursive(
        &self,
        rows: &[&RawRow],
        level: usize,
        parent_id: Option<&str>,
    ) -> Vec<TreemapNode> {
        // Group rows by the key at this level
        let mut groups: HashMap<&str, Vec<&RawRow>> = HashMap::new();
        for &row in rows {
            let key = row.keys.get(level).map(String::as_str).unwrap_or("");
            groups.entry(key).or_default().push(row);
        }

        let mut group_keys: Vec<&str> = groups.keys().copied().collect();
        group_keys.sort();

        let mut result = Vec::with_capacity(group_keys.len());
        for group_key in group_keys {
            let Some(group_rows) = groups.get(group_key) else {
                continue;
            };

            let id = match parent_id {
                Some(parent) => format!("{}/{}", parent, group_key),
                None => group_key.to_string(),
            };

            let children = if level + 1 < self.grouping_columns.len() {
                self.build_recursive(group_rows, level + 1, Some(&id))
            } else {
                vec![]
            };

            let value = if children.is_empty() {
                Self::calculate_subtotal(group_rows)
            } else {
                children.iter().map(|c| c.value).sum()
            };

            result.push(TreemapNode {
                id,
                label: group_key.to_string(),
                level,
                value,
                children,
            });
        }

        result
    }

    fn calculate_subtotal(rows: &[&RawRow]) -> f64 {
        rows.iter().map(|r| r.value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(state: &str, business: &str, value: f64) -> RawRow {
        RawRow::new(vec![state.to_string(), business.to_string()], value)
    }

    #[test]
    fn test_two_level_grouping() {
        let rows = vec![
            row("Dar", "Retail", 100.0),
            row("Arusha", "Office", 200.0),
            row("Dar", "Office", 50.0),
        ];

        let builder = TreeBuilder::new(vec!["State".to_string(), "BusinessType".to_string()]);
        let result = builder.build(&rows);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].label, "Arusha");
        assert_eq!(result[0].value, 200.0);
        assert_eq!(result[1].label, "Dar");
        assert_eq!(result[1].value, 150.0);
        assert_eq!(result[1].level, 0);

        let dar_children: Vec<(&str, f64)> = result[1]
            .children
            .iter()
            .map(|c| (c.label.as_str(), c.value))
            .collect();
        assert_eq!(dar_children, vec![("Office", 50.0), ("Retail", 100.0)]);
        assert_eq!(result[1].children[0].id, "Dar/Office");
        assert_eq!(result[1].children[0].level, 1);
        assert!(result[1].children[0].children.is_empty());

        let root_total: f64 = result.iter().map(|n| n.value).sum();
        assert_eq!(root_total, 350.0);
    }

    #[test]
    fn test_leaf_sums_duplicate_paths() {
        let rows = vec![row("Dar", "Retail", 1.0), row("Dar", "Retail", 2.5)];
        let builder = TreeBuilder::new(vec!["State".to_string(), "BusinessType".to_string()]);
        let result = builder.build(&rows);
        assert_eq!(result[0].children.len(), 1);
        assert_eq!(result[0].children[0].value, 3.5);
    }

    #[test]
    fn test_empty_rows() {
        let builder = TreeBuilder::new(vec!["State".to_string()]);
        assert!(builder.build(&[]).is_empty());
        assert!(TreeBuilder::new(vec![]).build(&[row("a", "b", 1.0)]).is_empty());
    }
}
