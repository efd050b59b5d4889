//! Flattening option sets into dictionary rows
//!
//! Expands the one-to-many (option set, options) relationship into one flat
//! row per option value, prepends a literal column-title row, and sorts the
//! whole sequence for export. The header row takes part in the sort, so its
//! final position depends on how its titles compare against the data.

use serde::Serialize;

use crate::option_set::OptionSet;

/// One flattened dictionary row: a (set, option) pair or the header.
///
/// Fields serialize in declaration order, which is the column order of the
/// exported file. Optional source fields flatten to empty strings.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FlatRow {
    pub id: String,
    pub name: String,
    pub code: String,
    pub value_type: String,
    pub option_id: String,
    pub option_name: String,
    pub option_code: String,
}

/// Literal column-title row written alongside the data rows.
pub fn header_row() -> FlatRow {
    FlatRow {
        id: "ID".to_string(),
        name: "Name".to_string(),
        code: "Code".to_string(),
        value_type: "value Type".to_string(),
        option_id: "Option Id".to_string(),
        option_name: "Option Name".to_string(),
        option_code: "Option Code".to_string(),
    }
}

/// Flatten each option set into one row per option value.
///
/// A set with no options contributes no rows at all. Input order is
/// preserved: sets in given order, each set's options in their given order.
pub fn flatten_option_sets(option_sets: &[OptionSet]) -> Vec<FlatRow> {
    option_sets
        .iter()
        .flat_map(|option_set| {
            option_set.options.iter().map(move |option| FlatRow {
                id: option_set.id.clone(),
                name: option_set.name.clone(),
                code: option_set.code.clone().unwrap_or_default(),
                value_type: option_set.value_type.clone().unwrap_or_default(),
                option_id: option.id.clone(),
                option_name: option.name.clone(),
                option_code: option.code.clone().unwrap_or_default(),
            })
        })
        .collect()
}

/// Build the full dictionary row sequence ready for export.
///
/// Header plus flattened rows, stably sorted ascending by set name then
/// option name, lexicographic on the raw strings.
pub fn dictionary_rows(option_sets: &[OptionSet]) -> Vec<FlatRow> {
    let mut rows = vec![header_row()];
    rows.extend(flatten_option_sets(option_sets));
    rows.sort_by(|a, b| {
        (a.name.as_str(), a.option_name.as_str()).cmp(&(b.name.as_str(), b.option_name.as_str()))
    });
    rows
}

/// Collapse path separators and spaces in an export name to underscores.
pub fn formatted_export_name(name: &str) -> String {
    name.split('/')
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join("_")
        .split(' ')
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
