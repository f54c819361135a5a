pub mod fallback;
pub mod orchestrator;
pub mod parser;
pub mod providers;

pub use orchestrator::Orchestrator;
