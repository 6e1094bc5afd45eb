//! Epsilon schedules for annealing exploration across episodes
//!
//! The agent takes `epsilon` per call and never decays it itself; the
//! training driver owns the decay. These schedules cover the common
//! annealing shapes.

use crate::error::AgentError;

/// An epsilon value that decays over training time
pub trait Schedule {
    /// Evaluate the schedule at episode `t`
    fn evaluate(&self, t: f32) -> f32;
}

fn validate(rate: f32, init: f32, floor: f32) -> Result<(), AgentError> {
    ((rate >= 0.0 && init > floor) || (rate < 0.0 && init < floor))
        .then_some(())
        .ok_or(AgentError::InvalidConfiguration {
            name: "rate",
            value: rate,
            expected: "the same sign as `init - floor`",
        })
}

/// A constant epsilon
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constant {
    value: f32,
}

impl Constant {
    pub fn new(value: f32) -> Self {
        Self { value }
    }
}

impl Schedule for Constant {
    fn evaluate(&self, _t: f32) -> f32 {
        self.value
    }
}

/// e(t) = floor + (init - floor) * e<sup>-rate * t</sup>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Exponential {
    rate: f32,
    init: f32,
    floor: f32,
}

impl Exponential {
    pub fn new(rate: f32, init: f32, floor: f32) -> Result<Self, AgentError> {
        validate(rate, init, floor)?;
        Ok(Self { rate, init, floor })
    }
}

impl Schedule for Exponential {
    fn evaluate(&self, t: f32) -> f32 {
        let &Self { rate, init, floor } = self;
        floor + (init - floor) * (-rate * t).exp()
    }
}

/// e(t) = floor + (init - floor) / (1 + rate * t)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InverseTime {
    rate: f32,
    init: f32,
    floor: f32,
}

impl InverseTime {
    pub fn new(rate: f32, init: f32, floor: f32) -> Result<Self, AgentError> {
        validate(rate, init, floor)?;
        Ok(Self { rate, init, floor })
    }
}

impl Schedule for InverseTime {
    fn evaluate(&self, t: f32) -> f32 {
        let &Self { rate, init, floor } = self;
        floor + (init - floor) / (1.0 + rate * t)
    }
}

/// e(t) = max(init - rate * t, floor)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Linear {
    rate: f32,
    init: f32,
    floor: f32,
}

impl Linear {
    pub fn new(rate: f32, init: f32, floor: f32) -> Result<Self, AgentError> {
        validate(rate, init, floor)?;
        Ok(Self { rate, init, floor })
    }
}

impl Schedule for Linear {
    fn evaluate(&self, t: f32) -> f32 {
        let &Self { rate, init, floor } = self;
        (init - rate * t).max(floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_checks_sign_consistency() {
        assert!(validate(1.0, 1.0, 0.0).is_ok());
        assert!(validate(1.0, -1.0, 0.0).is_err());
        assert!(validate(-1.0, 1.0, 0.0).is_err());
        assert!(validate(-1.0, -1.0, 0.0).is_ok());
    }

    #[test]
    fn constant_schedule() {
        let e = Constant::new(0.1);
        assert_eq!(e.evaluate(0.0), 0.1);
        assert_eq!(e.evaluate(500.0), 0.1);
    }

    #[test]
    fn exponential_schedule() {
        let e = Exponential::new(2.0, 1.0, 0.25).unwrap();
        assert_eq!(e.evaluate(0.0), 1.0);
        assert_eq!(e.evaluate(1.0), 0.25 + 0.75 * f32::exp(-2.0));
    }

    #[test]
    fn inverse_time_schedule() {
        let e = InverseTime::new(3.0, 1.0, 0.2).unwrap();
        assert_eq!(e.evaluate(0.0), 1.0);
        assert_eq!(e.evaluate(1.0), 0.4);
    }

    #[test]
    fn linear_schedule() {
        let e = Linear::new(0.2, 1.0, 0.1).unwrap();
        assert_eq!(e.evaluate(0.0), 1.0);
        assert_eq!(e.evaluate(1.0), 0.8);
        assert_eq!(e.evaluate(100.0), 0.1, "never decays past the floor");
    }
}
