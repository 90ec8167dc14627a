use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{
    modules::movie::MovieRecord,
    shared::{
        errors::{AppError, AppResult},
        utils::validation::Validator,
    },
};

pub const DEFAULT_MIN_YEAR: i32 = 1990;

/// Upper end of the default year window: the current calendar year
pub fn default_max_year() -> i32 {
    Local::now().year()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Provider order
    #[default]
    Relevance,
    YearNewest,
    YearOldest,
    RatingHighest,
}

impl FromStr for SortMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "relevance" => Ok(SortMode::Relevance),
            "newest" | "year_newest" => Ok(SortMode::YearNewest),
            "oldest" | "year_oldest" => Ok(SortMode::YearOldest),
            "rating" | "rating_highest" => Ok(SortMode::RatingHighest),
            other => Err(AppError::InvalidInput(format!(
                "Unknown sort mode '{}' (expected relevance, newest, oldest or rating)",
                other
            ))),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SortMode::Relevance => "relevance",
            SortMode::YearNewest => "newest",
            SortMode::YearOldest => "oldest",
            SortMode::RatingHighest => "rating",
        };
        f.write_str(name)
    }
}

/// Year window and ordering applied to a result set before display or export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub min_year: i32,
    pub max_year: i32,
    pub sort: SortMode,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: default_max_year(),
            sort: SortMode::default(),
        }
    }
}

impl SearchFilters {
    pub fn new(min_year: i32, max_year: i32, sort: SortMode) -> AppResult<Self> {
        Validator::validate_year_range(min_year, max_year)?;
        Ok(Self {
            min_year,
            max_year,
            sort,
        })
    }

    /// Records without a numeric year are never filtered out
    pub fn accepts(&self, record: &MovieRecord) -> bool {
        match record.year_number() {
            Some(year) => (self.min_year..=self.max_year).contains(&year),
            None => true,
        }
    }

    /// Filter, then stable-sort; records missing the sort key go last
    pub fn apply(&self, records: Vec<MovieRecord>) -> Vec<MovieRecord> {
        let mut kept: Vec<MovieRecord> = records.into_iter().filter(|r| self.accepts(r)).collect();

        match self.sort {
            SortMode::Relevance => {}
            SortMode::YearNewest => kept.sort_by(|a, b| {
                missing_last(a.year_number(), b.year_number(), |x, y| y.cmp(x))
            }),
            SortMode::YearOldest => kept.sort_by(|a, b| {
                missing_last(a.year_number(), b.year_number(), |x, y| x.cmp(y))
            }),
            SortMode::RatingHighest => kept.sort_by(|a, b| {
                missing_last(primary_rating(a), primary_rating(b), |x, y| {
                    y.partial_cmp(x).unwrap_or(Ordering::Equal)
                })
            }),
        }
        kept
    }
}

fn primary_rating(record: &MovieRecord) -> Option<f64> {
    record.rating_primary.as_ref().and_then(|n| n.as_f64())
}

fn missing_last<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(&x, &y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
