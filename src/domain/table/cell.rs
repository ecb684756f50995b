use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single table value.
///
/// Serializes untagged, so the UI receives plain JSON numbers, strings and
/// `null` for missing cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(value) => write!(f, "{}", value),
            Cell::Text(value) => f.write_str(value),
            Cell::Missing => Ok(()),
        }
    }
}

/// Hashable identity of a cell, used when comparing whole rows.
///
/// Two missing cells are equal, and `-0.0` equals `0.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKey<'a> {
    Number(u64),
    Text(&'a str),
    Missing,
}

impl<'a> From<&'a Cell> for CellKey<'a> {
    fn from(cell: &'a Cell) -> Self {
        match cell {
            Cell::Number(value) => {
                let normalized = if *value == 0.0 { 0.0 } else { *value };
                CellKey::Number(normalized.to_bits())
            }
            Cell::Text(value) => CellKey::Text(value),
            Cell::Missing => CellKey::Missing,
        }
    }
}

impl Hash for CellKey<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            CellKey::Number(bits) => {
                0u8.hash(state);
                bits.hash(state);
            }
            CellKey::Text(value) => {
                1u8.hash(state);
                value.hash(state);
            }
            CellKey::Missing => 2u8.hash(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_shortest_number_form() {
        assert_eq!(Cell::Number(15.0).to_string(), "15");
        assert_eq!(Cell::Number(2.5).to_string(), "2.5");
        assert_eq!(Cell::Text("a".into()).to_string(), "a");
        assert_eq!(Cell::Missing.to_string(), "");
    }

    #[test]
    fn test_signed_zero_keys_match() {
        let pos = Cell::Number(0.0);
        let neg = Cell::Number(-0.0);
        assert_eq!(CellKey::from(&pos), CellKey::from(&neg));
    }

    #[test]
    fn test_untagged_serialization() {
        let cells = vec![Cell::Number(1.5), Cell::Text("x".into()), Cell::Missing];
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"[1.5,"x",null]"#);
    }
}
