pub mod algorithm;
pub mod hash_record;
pub mod run_record;
pub mod summary;

pub use algorithm::HashAlgorithm;
pub use hash_record::HashRecord;
pub use run_record::RunRecord;
pub use summary::{AnalysisReport, Summary};
