//! Display snapshot entries for the parameters pane

use std::fmt;

/// A value shown next to a label in the parameters pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryValue {
    Number(u64),
    Text(String),
}

impl fmt::Display for MemoryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryValue::Number(n) => write!(f, "{}", n),
            MemoryValue::Text(s) => f.write_str(s),
        }
    }
}

/// One labeled loop variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEntry {
    pub label: String,
    pub value: MemoryValue,
}

impl MemoryEntry {
    pub fn number(label: &str, value: impl Into<u64>) -> Self {
        MemoryEntry {
            label: label.to_string(),
            value: MemoryValue::Number(value.into()),
        }
    }

    pub fn text(label: &str, value: String) -> Self {
        MemoryEntry {
            label: label.to_string(),
            value: MemoryValue::Text(value),
        }
    }
}

/// Format an array the way the parameters pane shows it: `[a, b, c]`
pub fn format_array(values: &[u32]) -> String {
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

/// Build the five-entry snapshot of the sort's loop variables.
///
/// `j + 1` must be a valid index into `array`.
pub fn loop_snapshot(i: usize, j: usize, array: &[u32]) -> Vec<MemoryEntry> {
    vec![
        MemoryEntry::number("i", i as u64),
        MemoryEntry::number("j", j as u64),
        MemoryEntry::number("arr[j]", array[j]),
        MemoryEntry::number("arr[j+1]", array[j + 1]),
        MemoryEntry::text("array", format_array(array)),
    ]
}
