use std::collections::HashMap;

use log::trace;

use crate::error::AgentError;

/// Backing representation for the action-value table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    /// Row-major array over a state space of known size, allocated up front
    ///
    /// States must lie in `[0, n_states)`; anything else is rejected before
    /// the table is touched.
    Dense { n_states: usize },
    /// State-keyed map with value rows materialized to zeros on first write
    ///
    /// Supports state spaces whose size is unknown up front.
    Sparse,
}

/// The action-value table: one estimate of expected discounted return per
/// (state, action) pair
///
/// Dense and sparse backings are semantically equivalent. Every state that
/// has been written resolves to a row of exactly `n_actions` finite values,
/// and a state that has never been touched reads as all zeros.
#[derive(Debug, Clone)]
pub struct QTable {
    n_actions: usize,
    entries: Entries,
}

#[derive(Debug, Clone)]
enum Entries {
    Dense(Vec<f32>),
    Sparse(HashMap<usize, Vec<f32>>),
}

impl QTable {
    /// Create an all-zero table for `n_actions` actions
    pub fn new(n_actions: usize, storage: Storage) -> Self {
        let entries = match storage {
            Storage::Dense { n_states } => Entries::Dense(vec![0.0; n_states * n_actions]),
            Storage::Sparse => Entries::Sparse(HashMap::new()),
        };
        Self { n_actions, entries }
    }

    pub fn n_actions(&self) -> usize {
        self.n_actions
    }

    /// Size of the state space for dense storage, `None` for sparse
    pub fn n_states(&self) -> Option<usize> {
        match &self.entries {
            Entries::Dense(values) => Some(values.len() / self.n_actions),
            Entries::Sparse(_) => None,
        }
    }

    /// Number of states with a materialized row
    pub fn seen_states(&self) -> usize {
        match &self.entries {
            Entries::Dense(values) => values.len() / self.n_actions,
            Entries::Sparse(map) => map.len(),
        }
    }

    pub(crate) fn check_state(&self, state: usize) -> Result<(), AgentError> {
        match self.n_states() {
            Some(bound) if state >= bound => Err(AgentError::IndexOutOfRange {
                axis: "state",
                index: state,
                bound,
            }),
            _ => Ok(()),
        }
    }

    /// Current estimate for a (state, action) pair, zero if never updated
    pub fn get(&self, state: usize, action: usize) -> f32 {
        self.row(state).map_or(0.0, |row| row[action])
    }

    /// The state's value row, or `None` if the state has no materialized row
    pub fn row(&self, state: usize) -> Option<&[f32]> {
        match &self.entries {
            Entries::Dense(values) => {
                let start = state * self.n_actions;
                values.get(start..start + self.n_actions)
            }
            Entries::Sparse(map) => map.get(&state).map(Vec::as_slice),
        }
    }

    /// Mutable access to the state's value row, materializing an all-zero row
    /// on the first write to an unseen sparse state
    ///
    /// **Panics** if a dense state is out of range; the agent validates
    /// states before reaching here.
    pub fn row_mut(&mut self, state: usize) -> &mut [f32] {
        let n_actions = self.n_actions;
        match &mut self.entries {
            Entries::Dense(values) => {
                let start = state * n_actions;
                &mut values[start..start + n_actions]
            }
            Entries::Sparse(map) => map.entry(state).or_insert_with(|| {
                trace!("materializing zero row for state {state}");
                vec![0.0; n_actions]
            }),
        }
    }

    /// Greatest value in the state's row, zero if the state has never been
    /// touched
    pub fn max(&self, state: usize) -> f32 {
        self.row(state).map_or(0.0, |row| {
            row.iter()
                .copied()
                .max_by(|a, b| a.partial_cmp(b).unwrap())
                .unwrap_or(0.0)
        })
    }
}
