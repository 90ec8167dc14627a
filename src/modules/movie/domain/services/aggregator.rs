//! Derived statistics over a record collection, backing the rating and
//! runtime comparison charts.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

use super::field_resolver;
use crate::modules::movie::domain::entities::MovieRecord;

/// Source keys holding a movie's genres (a list of names or a single name)
pub const GENRE_KEYS: &[&str] = &["genre", "genres"];
const MOVIE_ID_KEYS: &[&str] = &["id"];

/// One bar in the rating/runtime comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub title: String,
    pub year: String,
    pub rating_percent: f64,
    pub runtime_minutes: Option<f64>,
}

/// Records with a title not seen earlier in the slice. Distinct films sharing a
/// title collapse into the first one.
pub fn unique_by_title(records: &[MovieRecord]) -> Vec<&MovieRecord> {
    let mut seen: HashSet<&str> = HashSet::new();
    records
        .iter()
        .filter(|record| seen.insert(record.title.as_str()))
        .collect()
}

/// Mean runtime over title-deduplicated records, ignoring non-positive and
/// non-numeric values. Returns 0 when nothing is usable.
pub fn average_runtime(records: &[MovieRecord]) -> f64 {
    let runtimes: Vec<f64> = unique_by_title(records)
        .into_iter()
        .filter_map(MovieRecord::runtime_minutes)
        .filter(|minutes| *minutes > 0.0)
        .collect();

    if runtimes.is_empty() {
        0.0
    } else {
        runtimes.iter().sum::<f64>() / runtimes.len() as f64
    }
}

/// Rating on a 0–100 scale: `jwRating * 100` rounded up when present and
/// non-zero, otherwise the tomatometer as-is, otherwise 0
pub fn rating_percent(record: &MovieRecord) -> f64 {
    let primary = record
        .rating_primary
        .as_ref()
        .and_then(|r| r.as_f64())
        .filter(|r| *r != 0.0);

    let percent = match primary {
        // 0.95 * 100 is 95.00000000000001 in binary floating point
        Some(fraction) => ((fraction * 100.0 * 1e6).round() / 1e6).ceil(),
        None => record
            .rating_secondary
            .as_ref()
            .and_then(|r| r.as_f64())
            .unwrap_or(0.0),
    };

    percent.clamp(0.0, 100.0)
}

/// Mean of `rating_percent` over title-deduplicated records that have any rating
pub fn average_rating_percent(records: &[MovieRecord]) -> f64 {
    let ratings: Vec<f64> = unique_by_title(records)
        .into_iter()
        .map(rating_percent)
        .filter(|p| *p > 0.0)
        .collect();

    if ratings.is_empty() {
        0.0
    } else {
        ratings.iter().sum::<f64>() / ratings.len() as f64
    }
}

pub fn comparison_rows(records: &[MovieRecord]) -> Vec<ComparisonRow> {
    unique_by_title(records)
        .into_iter()
        .map(|record| ComparisonRow {
            title: record.title.clone(),
            year: record.year.clone(),
            rating_percent: rating_percent(record),
            runtime_minutes: record.runtime_minutes().filter(|m| *m > 0.0),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreGraphMovie {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreEdge {
    pub movie_id: String,
    pub genre: String,
}

/// Movie and genre nodes joined by movie-genre edges, the data behind the
/// genre connection chart. Nodes and edges appear once, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenreGraph {
    pub movies: Vec<GenreGraphMovie>,
    pub genres: Vec<String>,
    pub edges: Vec<GenreEdge>,
}

impl GenreGraph {
    /// Titles linked to `genre`, in edge order
    pub fn titles_in(&self, genre: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|edge| edge.genre == genre)
            .filter_map(|edge| self.movies.iter().find(|m| m.id == edge.movie_id))
            .map(|movie| movie.title.as_str())
            .collect()
    }
}

/// Only items whose source carries an `id` and that have a title take part
pub fn genre_connections(records: &[MovieRecord]) -> GenreGraph {
    let mut graph = GenreGraph::default();
    let mut seen_movies: HashSet<String> = HashSet::new();
    let mut seen_genres: HashSet<String> = HashSet::new();
    let mut seen_edges: HashSet<(String, String)> = HashSet::new();

    for record in records {
        let Some(item) = record.raw.as_object() else {
            continue;
        };
        let id = field_resolver::resolve_text(item, MOVIE_ID_KEYS);
        if id.is_empty() || record.title.is_empty() {
            continue;
        }

        if seen_movies.insert(id.clone()) {
            graph.movies.push(GenreGraphMovie {
                id: id.clone(),
                title: record.title.clone(),
            });
        }

        for genre in genre_names(item) {
            if seen_genres.insert(genre.clone()) {
                graph.genres.push(genre.clone());
            }
            if seen_edges.insert((id.clone(), genre.clone())) {
                graph.edges.push(GenreEdge {
                    movie_id: id.clone(),
                    genre,
                });
            }
        }
    }

    graph
}

fn genre_names(item: &Map<String, Value>) -> Vec<String> {
    match field_resolver::resolve(item, GENRE_KEYS) {
        Some(Value::Array(names)) => names
            .iter()
            .filter_map(Value::as_str)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(name)) => vec![name.clone()],
        _ => Vec::new(),
    }
}
