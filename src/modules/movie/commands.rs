use serde::Serialize;

use crate::modules::movie::{
    domain::services::aggregator::{self, ComparisonRow, GenreGraph},
    MovieRecord,
};

/// Numbers behind the comparison charts for one result set or import
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetStats {
    pub total_records: usize,
    pub unique_titles: usize,
    pub average_runtime: f64,
    pub average_rating_percent: f64,
    pub rows: Vec<ComparisonRow>,
    pub genres: GenreGraph,
}

pub fn get_dataset_stats(records: &[MovieRecord]) -> DatasetStats {
    let rows = aggregator::comparison_rows(records);
    DatasetStats {
        total_records: records.len(),
        unique_titles: rows.len(),
        average_runtime: aggregator::average_runtime(records),
        average_rating_percent: aggregator::average_rating_percent(records),
        rows,
        genres: aggregator::genre_connections(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::movie::LooseNumber;

    #[test]
    fn test_stats_dedupe_titles() {
        let records = vec![
            MovieRecord {
                title: "Avatar".to_string(),
                runtime: Some(LooseNumber::from(162)),
                rating_secondary: Some(LooseNumber::from(81)),
                ..MovieRecord::default()
            },
            MovieRecord {
                title: "Avatar".to_string(),
                runtime: Some(LooseNumber::from(192)),
                ..MovieRecord::default()
            },
        ];
        let stats = get_dataset_stats(&records);
        assert_eq!(stats.total_records, 2);
        assert_eq!(stats.unique_titles, 1);
        assert_eq!(stats.average_runtime, 162.0);
        assert_eq!(stats.average_rating_percent, 81.0);
    }
}
