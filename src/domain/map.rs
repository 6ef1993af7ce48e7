// src/domain/map.rs

use crate::domain::record::Record;
use rand::Rng;

/// Markers stay inside this percentage band so they never touch the map edge.
pub const MARKER_MIN_PCT: f64 = 10.0;
pub const MARKER_MAX_PCT: f64 = 90.0;

/// Screen position for one record on the placeholder map, in percent.
#[derive(Debug, Clone, Copy)]
pub struct Marker<'a> {
    pub record: &'a Record,
    pub left_pct: f64,
    pub top_pct: f64,
}

/// Scatters the records over the map. Positions are not geographic; every
/// call draws fresh ones from `rng`.
pub fn place_markers<'a, R: Rng>(rng: &mut R, records: &[&'a Record]) -> Vec<Marker<'a>> {
    records
        .iter()
        .map(|&record| Marker {
            record,
            left_pct: rng.gen_range(MARKER_MIN_PCT..=MARKER_MAX_PCT),
            top_pct: rng.gen_range(MARKER_MIN_PCT..=MARKER_MAX_PCT),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{Category, Status};
    use chrono::NaiveDate;
    use rand::{rngs::StdRng, SeedableRng};

    fn record(id: u32) -> Record {
        Record {
            id,
            title: format!("r{id}"),
            description: String::new(),
            location: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            category: Category::Bribery,
            status: Some(Status::Pending),
            reporter: None,
            impact: None,
            upvotes: 0,
            comments: 0,
            evidence: false,
        }
    }

    #[test]
    fn markers_stay_inside_the_band() {
        let records: Vec<Record> = (0..200).map(record).collect();
        let refs: Vec<&Record> = records.iter().collect();
        let mut rng = StdRng::seed_from_u64(7);

        let markers = place_markers(&mut rng, &refs);
        assert_eq!(markers.len(), refs.len());
        for m in &markers {
            assert!((MARKER_MIN_PCT..=MARKER_MAX_PCT).contains(&m.left_pct));
            assert!((MARKER_MIN_PCT..=MARKER_MAX_PCT).contains(&m.top_pct));
        }
    }

    #[test]
    fn markers_keep_record_order() {
        let records: Vec<Record> = (1..=3).map(record).collect();
        let refs: Vec<&Record> = records.iter().collect();
        let mut rng = StdRng::seed_from_u64(1);

        let ids: Vec<u32> = place_markers(&mut rng, &refs).iter().map(|m| m.record.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
