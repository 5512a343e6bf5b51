//! Renderers for the dashboard, atlas tables and advisor conversation.
//!
//! - [`terminal`] — colored tables and cards for interactive use.
//! - [`chart`] — PNG bar and radar charts drawn with plotters.
//! - [`pdf`] — a printable report with a cover page and one ranked table per
//!   indicator.

pub mod chart;
pub mod pdf;
pub mod terminal;

use serde::Serialize;

use crate::models::{MapCategory, Rating};
use crate::rating::classifier::{rank, rate};

/// One line of a ranked indicator table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtlasRow {
    pub rank: usize,
    pub id: &'static str,
    pub name: &'static str,
    pub value: f64,
    pub rating: Rating,
}

/// Every barangay ranked by `category`, with its rating.
pub fn atlas_rows(category: MapCategory) -> Vec<AtlasRow> {
    rank(category)
        .into_iter()
        .enumerate()
        .map(|(i, b)| AtlasRow {
            rank: i + 1,
            id: b.id,
            name: b.name,
            value: b.value(category),
            rating: rate(b, category),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atlas_rows_are_ranked_and_rated() {
        let rows = atlas_rows(MapCategory::Hazard);
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].id, "luzong");
        assert_eq!(rows[0].rating, Rating::VeryHigh);
        assert_eq!(rows[10].id, "san-ramon-east");
        assert_eq!(rows[10].rating, Rating::VeryLow);
    }

    #[test]
    fn test_atlas_row_json() {
        let rows = atlas_rows(MapCategory::HardCm);
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["name"], "Luzong");
        assert_eq!(json["rating"], "Moderate");
        let json = serde_json::to_value(&rows[1]).unwrap();
        assert_eq!(json["rating"], "Low/Very Low");
    }
}
