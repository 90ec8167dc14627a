pub mod movie_record;
pub mod streaming_offer;

pub use movie_record::{MovieRecord, DETAIL_LINK_BASE};
pub use streaming_offer::{dedupe_offers, StreamingOffer};
