/// Test data factories using builder pattern
///
/// Provides movie records and raw provider payloads with sensible defaults
use reelscout_lib::modules::movie::{LooseNumber, MovieRecord, StreamingOffer};
use serde_json::{json, Number, Value};

pub struct MovieFactory {
    title: String,
    year: String,
    runtime: Option<LooseNumber>,
    rating_primary: Option<LooseNumber>,
    rating_secondary: Option<LooseNumber>,
    rating_certified: bool,
    poster_url: String,
    overview: String,
    detail_link: String,
    streaming_offers: Vec<StreamingOffer>,
}

impl Default for MovieFactory {
    fn default() -> Self {
        Self {
            title: "Test Movie".to_string(),
            year: "2020".to_string(),
            runtime: None,
            rating_primary: None,
            rating_secondary: None,
            rating_certified: false,
            poster_url: String::new(),
            overview: String::new(),
            detail_link: String::new(),
            streaming_offers: Vec::new(),
        }
    }
}

impl MovieFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn complete() -> Self {
        Self::default()
            .with_title("Dune")
            .with_year("2021")
            .with_runtime(155)
            .with_rating(0.83)
            .with_tomatometer(83)
            .certified()
            .with_poster("https://images.example/dune.jpg")
            .with_overview("Paul Atreides travels to the planet Arrakis.")
            .with_link("/title/tt1160419/")
            .with_offer("Max", "FLATRATE", "https://play.max.com/dune")
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_year(mut self, year: &str) -> Self {
        self.year = year.to_string();
        self
    }

    pub fn with_runtime(mut self, minutes: i64) -> Self {
        self.runtime = Some(LooseNumber::from(minutes));
        self
    }

    pub fn with_runtime_text(mut self, text: &str) -> Self {
        self.runtime = Some(LooseNumber::from(text));
        self
    }

    pub fn with_rating(mut self, fraction: f64) -> Self {
        self.rating_primary = Number::from_f64(fraction).map(LooseNumber::Number);
        self
    }

    pub fn with_tomatometer(mut self, percent: i64) -> Self {
        self.rating_secondary = Some(LooseNumber::from(percent));
        self
    }

    pub fn certified(mut self) -> Self {
        self.rating_certified = true;
        self
    }

    pub fn with_poster(mut self, url: &str) -> Self {
        self.poster_url = url.to_string();
        self
    }

    pub fn with_overview(mut self, overview: &str) -> Self {
        self.overview = overview.to_string();
        self
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.detail_link = link.to_string();
        self
    }

    pub fn with_offer(mut self, name: &str, offer_type: &str, url: &str) -> Self {
        self.streaming_offers.push(StreamingOffer::new(name, offer_type, url));
        self
    }

    pub fn build(self) -> MovieRecord {
        MovieRecord {
            title: self.title,
            year: self.year,
            runtime: self.runtime,
            rating_primary: self.rating_primary,
            rating_secondary: self.rating_secondary,
            rating_certified: self.rating_certified,
            poster_url: self.poster_url,
            overview: self.overview,
            detail_link: self.detail_link,
            streaming_offers: self.streaming_offers,
            raw: Value::Null,
        }
    }
}

/// Raw provider item shaped like a JustWatch search hit
pub fn raw_item(title: &str, year: i64) -> Value {
    json!({
        "title": title,
        "original_release_year": year,
        "runtime": 120,
        "jwRating": 0.75,
        "tomatometer": 80,
        "tomatocertifiedFresh": true,
        "photo_url": [
            "//images.justwatch.com/poster/1/s592",
            "//images.justwatch.com/poster/2/s592"
        ],
        "short_description": format!("{} overview", title),
        "url": format!("/title/{}/", title.to_lowercase().replace(' ', "-")),
        "offers": [
            {"name": "Netflix", "type": "FLATRATE", "url": "https://netflix.com/x"},
            {"name": "Netflix 4K", "type": "FLATRATE", "url": "https://netflix.com/x"},
            {"name": "Cinema", "type": "CINEMA"}
        ]
    })
}
