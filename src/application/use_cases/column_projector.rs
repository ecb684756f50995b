// ============================================================
// COLUMN PROJECTOR USE CASE
// ============================================================
// Keep a user-chosen subset of columns in their original order

use std::collections::HashSet;

use tracing::{info, warn};

use crate::domain::table::Table;

/// Restrict `table` to the columns named in `names`.
///
/// The result keeps the table's own column order, not the order of `names`,
/// and the row count is unchanged even when no column is chosen. Unknown
/// names are skipped.
pub fn project_columns<S: AsRef<str>>(table: &Table, names: &[S]) -> Table {
    let wanted: HashSet<&str> = names.iter().map(|n| n.as_ref()).collect();

    for name in wanted.iter().filter(|n| table.column(n).is_none()) {
        warn!(column = *name, "Ignoring unknown column in selection");
    }

    let projected = table.select(|column| wanted.contains(column.name()));
    info!(
        kept = projected.column_count(),
        dropped = table.column_count() - projected.column_count(),
        "Columns projected"
    );
    projected
}

/// Every column name, the default selection
pub fn all_columns(table: &Table) -> Vec<String> {
    table.column_names().into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::{Cell, Column};
    use proptest::prelude::*;

    fn table() -> Table {
        Table::new(vec![
            Column::infer("a", vec![Cell::Number(1.0), Cell::Number(2.0)]),
            Column::infer("b", vec![Cell::Text("x".into()), Cell::Text("y".into())]),
            Column::infer("c", vec![Cell::Missing, Cell::Number(3.0)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_keeps_original_order() {
        let projected = project_columns(&table(), &["c", "a"]);
        assert_eq!(projected.column_names(), vec!["a", "c"]);
        assert_eq!(projected.row_count(), 2);
    }

    #[test]
    fn test_default_selection_is_identity() {
        let table = table();
        assert_eq!(project_columns(&table, all_columns(&table).as_slice()), table);
    }

    #[test]
    fn test_empty_selection_keeps_row_count() {
        let projected = project_columns::<&str>(&table(), &[]);
        assert_eq!(projected.column_count(), 0);
        assert_eq!(projected.row_count(), 2);
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        let projected = project_columns(&table(), &["b", "zzz"]);
        assert_eq!(projected.column_names(), vec!["b"]);
    }

    proptest! {
        #[test]
        fn prop_projection_is_ordered_subset(mask in proptest::collection::vec(any::<bool>(), 3)) {
            let table = table();
            let names = ["a", "b", "c"];
            let mut chosen: Vec<&str> = names
                .iter()
                .zip(&mask)
                .filter(|(_, keep)| **keep)
                .map(|(name, _)| *name)
                .collect();
            let expected = chosen.clone();
            chosen.reverse();

            let projected = project_columns(&table, chosen.as_slice());
            prop_assert_eq!(projected.column_names(), expected);
            prop_assert_eq!(projected.row_count(), table.row_count());
        }
    }
}
