/// The tabular Q-learning agent
pub mod agent;

/// Error taxonomy
pub mod error;

/// Exploration policies
pub mod exploration;

/// Epsilon schedules for training drivers
pub mod schedule;

/// Action-value table storage
pub mod table;

mod util;
