use thiserror::Error;

/// Errors surfaced by agent construction and the per-call operations
///
/// Misconfiguration is rejected at construction time; per-call index errors
/// fail the single call and leave the table untouched. An unseen state is
/// never an error, it reads as an all-zero value row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgentError {
    /// A construction-time parameter was outside its documented range
    #[error("invalid configuration: `{name}` = {value}, expected {expected}")]
    InvalidConfiguration {
        name: &'static str,
        value: f32,
        expected: &'static str,
    },

    /// An action or state index did not fit the table bounds
    #[error("{axis} index {index} is out of range, table holds {bound}")]
    IndexOutOfRange {
        axis: &'static str,
        index: usize,
        bound: usize,
    },
}
