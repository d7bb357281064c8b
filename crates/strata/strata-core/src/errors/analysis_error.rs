/// Sensitivity analysis errors.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("baseline for {parameter} is not finite: {value}")]
    NonFiniteBaseline { parameter: String, value: f64 },
}
