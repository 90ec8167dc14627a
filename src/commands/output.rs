use crate::modules::movie::{
    commands::DatasetStats, domain::services::rating_percent, MovieRecord, StreamingOffer,
};

const CARD_OVERVIEW_CHARS: usize = 160;

pub fn print_card(position: usize, record: &MovieRecord, favorite: bool) {
    let title = if record.title.is_empty() {
        "(untitled)"
    } else {
        record.title.as_str()
    };
    let year = if record.year.is_empty() {
        "n/a"
    } else {
        record.year.as_str()
    };
    let star = if favorite { " *" } else { "" };
    println!("{:>3}. {} ({}){}", position, title, year, star);

    let rating = rating_percent(record);
    let mut facts = Vec::new();
    if rating > 0.0 {
        facts.push(format!("rating {:.0}%", rating));
    }
    if record.rating_certified {
        facts.push("certified fresh".to_string());
    }
    if let Some(minutes) = record.runtime_minutes().filter(|m| *m > 0.0) {
        facts.push(format!("{:.0} min", minutes));
    }
    if !facts.is_empty() {
        println!("     {}", facts.join(" | "));
    }

    if !record.overview.is_empty() {
        let mut overview: String = record.overview.chars().take(CARD_OVERVIEW_CHARS).collect();
        if record.overview.chars().count() > CARD_OVERVIEW_CHARS {
            overview.push_str("...");
        }
        println!("     {}", overview);
    }
    if !record.poster_url.is_empty() {
        println!("     poster: {}", record.poster_url);
    }
    if let Some(link) = record.absolute_detail_link() {
        println!("     details: {}", link);
    }
    print_offers(&record.streaming_offers);
}

pub fn print_offers(offers: &[StreamingOffer]) {
    for offer in offers {
        let name = if offer.name.is_empty() {
            "unknown"
        } else {
            offer.name.as_str()
        };
        match (offer.offer_type.is_empty(), offer.has_url()) {
            (false, true) => println!("     watch: {} [{}] {}", name, offer.offer_type, offer.url),
            (true, true) => println!("     watch: {} {}", name, offer.url),
            (false, false) => println!("     watch: {} [{}]", name, offer.offer_type),
            (true, false) => println!("     watch: {}", name),
        }
    }
}

pub fn print_stats(stats: &DatasetStats) {
    println!(
        "{} records, {} distinct titles",
        stats.total_records, stats.unique_titles
    );
    println!("average runtime: {:.1} min", stats.average_runtime);
    println!("average rating:  {:.1}%", stats.average_rating_percent);
    println!();
    println!(
        "{:<40} {:>6} {:>7} {:>8}",
        "title", "year", "rating", "runtime"
    );
    for row in &stats.rows {
        let title: String = row.title.chars().take(40).collect();
        let runtime = row
            .runtime_minutes
            .map(|m| format!("{:.0}", m))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<40} {:>6} {:>6.0}% {:>8}",
            title, row.year, row.rating_percent, runtime
        );
    }

    if !stats.genres.edges.is_empty() {
        println!();
        println!("genre connections:");
        for genre in &stats.genres.genres {
            let titles = stats.genres.titles_in(genre).join(", ");
            println!("  {:<20} {}", genre, titles);
        }
    }
}
