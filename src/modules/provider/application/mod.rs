pub mod search_pipeline;

pub use search_pipeline::SearchPipeline;
