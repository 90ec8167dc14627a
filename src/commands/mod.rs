pub mod cli;
pub mod output;
pub mod registry;

pub use cli::Cli;
pub use registry::dispatch;
