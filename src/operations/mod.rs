mod analyze_roof;
pub mod query;

pub use analyze_roof::AnalyzeRoof;
