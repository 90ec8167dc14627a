pub mod adapter;

pub use adapter::JustWatchAdapter;
