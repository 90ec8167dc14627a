use serde::{Deserialize, Serialize};
use std::fmt;

/// Screens of the movie browser. `Detail` carries the index of the selected
/// search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "page", content = "index", rename_all = "snake_case")]
pub enum Page {
    #[default]
    Start,
    Search,
    Detail(usize),
    ImportView,
}

impl Page {
    pub fn can_transition_to(&self, next: &Page) -> bool {
        use Page::*;
        matches!(
            (self, next),
            (Start, Search)
                | (Start, ImportView)
                | (Search, Start)
                | (Search, Detail(_))
                | (Search, ImportView)
                | (Detail(_), Search)
                | (Detail(_), Start)
                | (ImportView, Start)
                | (ImportView, Search)
        )
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Page::Start => write!(f, "start"),
            Page::Search => write!(f, "search"),
            Page::Detail(index) => write!(f, "detail #{}", index),
            Page::ImportView => write!(f, "import_view"),
        }
    }
}
