use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{int_field, str_field};

// ---------------------------------------------------------------------------
// CardSetInfo - One entry of the cardsets.php response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSetInfo {
    pub set_name: String,
    pub set_code: Option<String>,
    pub num_of_cards: Option<i64>,
    pub tcg_date: Option<String>,
    pub set_image: Option<String>,
}

impl CardSetInfo {
    /// Read a set entry. Only `set_name` is required; an optional field of
    /// the wrong type reads as `None`.
    pub fn from_value(entry: &Value) -> Option<Self> {
        Some(Self {
            set_name: str_field(entry, "set_name")?,
            set_code: str_field(entry, "set_code"),
            num_of_cards: int_field(entry, "num_of_cards"),
            tcg_date: str_field(entry, "tcg_date"),
            set_image: str_field(entry, "set_image"),
        })
    }
}

/// Parse the set list response, skipping entries that lack a string `set_name`.
///
/// Returns an empty vector when `value` is not an array.
pub fn parse_set_list(value: &Value) -> Vec<CardSetInfo> {
    let Some(entries) = value.as_array() else {
        log::warn!("Card set response is not a JSON array");
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let set = CardSetInfo::from_value(entry);
            if set.is_none() {
                log::warn!("Skipping card set entry without a set_name: {}", entry);
            }
            set
        })
        .collect()
}

/// Names of the given sets, sorted lexicographically. Duplicates are kept.
pub fn sorted_set_names(sets: &[CardSetInfo]) -> Vec<String> {
    let mut names: Vec<String> = sets.iter().map(|s| s.set_name.clone()).collect();
    names.sort();
    names
}
