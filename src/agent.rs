use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    assert_interval,
    error::AgentError,
    exploration::Exploration,
    table::{QTable, Storage},
};

/// Configuration for the [`TabularAgent`]
///
/// Fixed at construction and immutable afterwards.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Number of actions available in every state - must be at least 1
    pub n_actions: usize,
    /// Learning rate - must be in the interval `(0, 1]`
    pub alpha: f32,
    /// Discount factor - must be in the interval `[0, 1]`
    pub gamma: f32,
    /// Exploration policy used by [`TabularAgent::select_action`]
    pub exploration: Exploration,
    /// Backing representation for the action-value table
    pub storage: Storage,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            n_actions: 4,
            alpha: 0.01,
            gamma: 1.0,
            exploration: Exploration::EpsilonSoft,
            storage: Storage::Sparse,
        }
    }
}

impl AgentConfig {
    fn validate(&self) -> Result<(), AgentError> {
        if self.n_actions < 1 {
            return Err(AgentError::InvalidConfiguration {
                name: "n_actions",
                value: self.n_actions as f32,
                expected: "at least one action",
            });
        }
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(AgentError::InvalidConfiguration {
                name: "alpha",
                value: self.alpha,
                expected: "a value in (0, 1]",
            });
        }
        if !(self.gamma >= 0.0 && self.gamma <= 1.0) {
            return Err(AgentError::InvalidConfiguration {
                name: "gamma",
                value: self.gamma,
                expected: "a value in [0, 1]",
            });
        }
        Ok(())
    }
}

/// A tabular Q-learning agent for discrete state and action spaces
///
/// The agent owns an action-value table and exposes two operations: policy
/// driven action selection and a one-step bootstrapped value update. The
/// interaction loop itself belongs to the caller, which feeds states in and
/// experience tuples back.
///
/// The random source is injected so that action selection is reproducible
/// under a fixed seed.
pub struct TabularAgent<R: Rng> {
    q: QTable,
    exploration: Exploration,
    alpha: f32,
    gamma: f32,
    rng: R,
}

impl TabularAgent<StdRng> {
    /// Initialize an agent with an entropy-seeded random source
    ///
    /// Fails with [`AgentError::InvalidConfiguration`] if `n_actions < 1` or
    /// `alpha`/`gamma` lie outside their documented ranges.
    pub fn new(config: AgentConfig) -> Result<Self, AgentError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Initialize an agent with a deterministic random source
    pub fn seeded(config: AgentConfig, seed: u64) -> Result<Self, AgentError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TabularAgent<R> {
    /// Initialize an agent with a caller-supplied random source
    pub fn with_rng(config: AgentConfig, rng: R) -> Result<Self, AgentError> {
        config.validate()?;
        debug!(
            "tabular agent: {} actions, alpha {}, gamma {}, {:?} exploration, {:?} storage",
            config.n_actions, config.alpha, config.gamma, config.exploration, config.storage
        );
        Ok(Self {
            q: QTable::new(config.n_actions, config.storage),
            exploration: config.exploration,
            alpha: config.alpha,
            gamma: config.gamma,
            rng,
        })
    }

    /// Read access to the learned action-value table
    pub fn q_table(&self) -> &QTable {
        &self.q
    }

    /// Select an action for `state` via the exploration policy
    ///
    /// `epsilon` is the exploration probability for this call and must lie in
    /// the interval `[0, 1]` (**panics** otherwise). A state that has never
    /// been seen selects over an all-zero value row. The table is not
    /// modified.
    ///
    /// With dense storage, a state outside `[0, n_states)` fails with
    /// [`AgentError::IndexOutOfRange`].
    pub fn select_action(&mut self, state: usize, epsilon: f32) -> Result<usize, AgentError> {
        assert_interval!(epsilon, 0.0, 1.0);
        self.q.check_state(state)?;

        let zeros;
        let row = match self.q.row(state) {
            Some(row) => row,
            None => {
                zeros = vec![0.0; self.q.n_actions()];
                &zeros
            }
        };
        Ok(self.exploration.choose(row, epsilon, &mut self.rng))
    }

    /// Update the value estimate for one (state, action) pair from a single
    /// experience tuple
    ///
    /// Applies the one-step Q-learning update
    ///
    /// ```text
    /// Q[s][a] += alpha * (reward + gamma * max(Q[s']) - Q[s][a])
    /// ```
    ///
    /// mutating exactly one table entry. Unseen states are materialized as
    /// zero rows, never errors.
    ///
    /// `_done` is accepted for interface compatibility with episodic drivers
    /// but does not alter the rule: the bootstrap term `gamma * max(Q[s'])`
    /// is included on terminal transitions as well. Terminal states are never
    /// themselves updated, so their rows stay at zero unless the caller
    /// reuses their identifiers for live states.
    ///
    /// Fails with [`AgentError::IndexOutOfRange`] before touching the table
    /// if `action >= n_actions`, or if either state falls outside a dense
    /// table's bounds.
    pub fn step(
        &mut self,
        state: usize,
        action: usize,
        reward: f32,
        next_state: usize,
        _done: bool,
    ) -> Result<(), AgentError> {
        let n_actions = self.q.n_actions();
        if action >= n_actions {
            return Err(AgentError::IndexOutOfRange {
                axis: "action",
                index: action,
                bound: n_actions,
            });
        }
        self.q.check_state(state)?;
        self.q.check_state(next_state)?;

        let max_next = self.q.max(next_state);
        let row = self.q.row_mut(state);
        row[action] += self.alpha * (reward + self.gamma * max_next - row[action]);
        Ok(())
    }
}
