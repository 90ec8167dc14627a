use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Where a title can be watched
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreamingOffer {
    pub name: String,
    #[serde(rename = "type")]
    pub offer_type: String,
    pub url: String,
}

impl StreamingOffer {
    pub fn new(
        name: impl Into<String>,
        offer_type: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            offer_type: offer_type.into(),
            url: url.into(),
        }
    }

    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Drop offers whose url was already seen. Offers without a url are always kept.
pub fn dedupe_offers(offers: Vec<StreamingOffer>) -> Vec<StreamingOffer> {
    let mut seen: HashSet<String> = HashSet::new();
    offers
        .into_iter()
        .filter(|offer| !offer.has_url() || seen.insert(offer.url.clone()))
        .collect()
}
