mod example;
mod model_stats;
mod prediction;
mod training_report;

pub use example::Example;
pub use model_stats::ModelStats;
pub use prediction::Prediction;
pub use training_report::TrainingReport;
