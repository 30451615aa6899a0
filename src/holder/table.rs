//! Additional parameters attached to a holder request.

use serde::{Deserialize, Serialize};

/// Rows of free-form parameters forwarded with a holder request.
///
/// Providers carry the table onto the resource untouched; no row layout is
/// assumed here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterTable {
    rows: Vec<Vec<String>>,
}

impl ParameterTable {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self { Self { rows: Vec::new() } }

    /// Create a table from pre-split rows.
    #[must_use]
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Rows of the table in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] { &self.rows }

    /// Whether the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::ParameterTable;

    #[test]
    fn new_table_is_empty() {
        assert!(ParameterTable::new().is_empty());
        assert_eq!(ParameterTable::new(), ParameterTable::default());
    }

    #[test]
    fn rows_keep_their_order() {
        let table = ParameterTable::from_rows([["config", "native", "enabled"], ["env", "A", "1"]]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[1], vec!["env", "A", "1"]);
    }
}
