//! `Bangladesh`: map coloring of the eight administrative divisions.
//!
//! Divisions are assigned in alphabetical order and colors are tried in the
//! order of [`COLORS`]. Dhaka borders six of the other seven divisions.

use std::collections::BTreeMap;

use deliberate_search::csp::ColoringProblem;

use crate::contract::WorldV1;

/// Shared borders, as listed per division.
pub const BORDERS: &[(&str, &[&str])] = &[
    ("Rangpur", &["Rajshahi", "Mymensingh"]),
    ("Rajshahi", &["Rangpur", "Mymensingh", "Dhaka", "Khulna"]),
    ("Mymensingh", &["Rangpur", "Rajshahi", "Dhaka", "Sylhet"]),
    ("Sylhet", &["Mymensingh", "Dhaka", "Chattogram"]),
    (
        "Dhaka",
        &["Rajshahi", "Mymensingh", "Sylhet", "Khulna", "Barishal", "Chattogram"],
    ),
    ("Khulna", &["Rajshahi", "Dhaka", "Barishal"]),
    ("Barishal", &["Khulna", "Dhaka", "Chattogram"]),
    ("Chattogram", &["Sylhet", "Dhaka", "Barishal"]),
];

pub const COLORS: &[&str] = &["Red", "Green", "Blue", "Yellow"];

/// The division map with a configurable palette.
#[derive(Debug, Clone, Copy)]
pub struct BangladeshMap {
    pub colors: &'static [&'static str],
}

impl Default for BangladeshMap {
    fn default() -> Self {
        Self { colors: COLORS }
    }
}

impl BangladeshMap {
    #[must_use]
    pub fn problem(&self) -> ColoringProblem<&'static str, &'static str> {
        let adjacency: BTreeMap<&'static str, Vec<&'static str>> = BORDERS
            .iter()
            .map(|(division, adjacent)| (*division, adjacent.to_vec()))
            .collect();
        ColoringProblem::from_adjacency(&adjacency, self.colors.to_vec())
    }
}

impl WorldV1 for BangladeshMap {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "bangladesh_divisions"
    }

    fn fixture(&self) -> serde_json::Value {
        let borders: serde_json::Map<_, _> = BORDERS
            .iter()
            .map(|(division, adjacent)| ((*division).to_string(), serde_json::json!(adjacent)))
            .collect();
        serde_json::json!({
            "borders": borders,
            "colors": self.colors,
            "world_id": "bangladesh_divisions",
        })
    }
}
