// ============================================================
// COLUMN TYPE INFERENCE
// ============================================================
// Build typed columns from raw cell values, the way dataframe readers do

use std::collections::{HashMap, HashSet};

use crate::domain::sweeper_config::SweeperConfig;
use crate::domain::table::{Cell, Column};

enum RawValue {
    Missing,
    /// A value that parsed as a number, with its source text in case the
    /// column turns out to be text
    Number { value: f64, text: String },
    Text(String),
}

/// Collects one column's raw values, then settles on a single column kind
pub struct ColumnBuilder<'c> {
    name: String,
    values: Vec<RawValue>,
    config: &'c SweeperConfig,
}

impl<'c> ColumnBuilder<'c> {
    pub fn new(name: impl Into<String>, config: &'c SweeperConfig) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            config,
        }
    }

    /// Push a textual value: missing token, number, or plain text.
    pub fn push_text(&mut self, raw: &str) {
        if self.config.is_missing_token(raw) {
            self.values.push(RawValue::Missing);
            return;
        }
        match raw.trim().parse::<f64>() {
            Ok(value) => self.values.push(RawValue::Number {
                value,
                text: raw.to_string(),
            }),
            Err(_) => self.values.push(RawValue::Text(raw.to_string())),
        }
    }

    /// Push text that must stay text, such as a rendered date or boolean.
    pub fn push_literal(&mut self, raw: String) {
        self.values.push(RawValue::Text(raw));
    }

    pub fn push_number(&mut self, value: f64) {
        self.values.push(RawValue::Number {
            value,
            text: Cell::Number(value).to_string(),
        });
    }

    pub fn push_missing(&mut self) {
        self.values.push(RawValue::Missing);
    }

    /// Numeric when every present value is a number, text otherwise
    pub fn finish(self) -> Column {
        let is_text = self.values.iter().any(|v| matches!(v, RawValue::Text(_)));

        let cells: Vec<Cell> = self
            .values
            .into_iter()
            .map(|raw| match raw {
                RawValue::Missing => Cell::Missing,
                RawValue::Number { text, .. } if is_text => Cell::Text(text),
                RawValue::Number { value, .. } => Cell::Number(value),
                RawValue::Text(text) => Cell::Text(text),
            })
            .collect();

        if is_text {
            Column::text(self.name, cells)
        } else {
            Column::infer(self.name, cells)
        }
    }
}

/// Make header names usable as column identifiers.
///
/// Blank names become `Unnamed: {index}`. A repeated name gets a `.N` suffix
/// with the smallest N not already taken, so `a, a, a` becomes `a, a.1, a.2`.
pub fn normalize_headers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<String> = raw
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            let name = name.as_ref();
            if name.trim().is_empty() {
                format!("Unnamed: {}", idx)
            } else {
                name.to_string()
            }
        })
        .collect();

    let mut taken: HashSet<String> = HashSet::new();
    let mut next_suffix: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::with_capacity(names.len());

    for name in names {
        if taken.insert(name.clone()) {
            out.push(name);
            continue;
        }
        let counter = next_suffix.entry(name.clone()).or_insert(1);
        let mut candidate = format!("{}.{}", name, counter);
        while taken.contains(&candidate) {
            *counter += 1;
            candidate = format!("{}.{}", name, counter);
        }
        *counter += 1;
        taken.insert(candidate.clone());
        out.push(candidate);
    }

    out
}
