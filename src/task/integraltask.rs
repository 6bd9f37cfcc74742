use serde::Deserialize;
use tracing::{
    debug,
    warn
};

use crate::input::integralinput::IntegralInput;
use crate::math::function::fixedintegrand::FixedIntegrand;
use crate::math::function::integrand::Integrand;
use crate::math::quadrature::quadrature::QuadratureRule;
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::task::integralreport::IntegralReport;

/// Whether `lower_bound > upper_bound` is integrated (signed result) or refused.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Deserialize)]
pub enum BoundsPolicy {
    #[default]
    Allow,
    Reject
}

impl BoundsPolicy {
    pub fn check(&self, input: &IntegralInput) -> Result<(), QuadratureError> {
        match self {
            BoundsPolicy::Reject if input.is_reversed() => Err(QuadratureError::invalid_argument(
                format!("lower_bound {} exceeds upper_bound {}", input.lower_bound(), input.upper_bound())
            )),
            _ => Ok(())
        }
    }
}

/// One integrand, one interval, and the rules to apply to it.
#[derive(Debug, Clone)]
pub struct IntegralTask {
    name: String,
    integrand: FixedIntegrand,
    rules: Vec<QuadratureRule>,
    input: IntegralInput
}

impl IntegralTask {
    /// Empty `rules` falls back to the integrand's default rules.
    pub fn new(name: String,
               integrand: FixedIntegrand,
               rules: Vec<QuadratureRule>,
               input: IntegralInput) -> IntegralTask {
        let rules = if rules.is_empty() { integrand.default_rules() } else { rules };
        IntegralTask { name, integrand, rules, input }
    }

    pub fn integrand(&self) -> FixedIntegrand {
        self.integrand
    }

    pub fn rules(&self) -> &[QuadratureRule] {
        &self.rules
    }

    pub fn input(&self) -> &IntegralInput {
        &self.input
    }

    /// Runs every rule; the first failing rule aborts the whole task.
    pub fn evaluate(&self, 
                    policy: BoundsPolicy, 
                    precision: usize) -> Result<IntegralReport, QuadratureError> {
        policy.check(&self.input)?;
        let f = |x: f64| self.integrand.value(x);
        let mut report = IntegralReport::new(self.name.clone(), self.integrand.formula(), precision);
        for rule in &self.rules {
            let value = rule.integrate(
                f,
                self.input.lower_bound(),
                self.input.upper_bound(),
                self.input.num_intervals()
            )?;
            if !value.is_finite() {
                warn!(task = %self.name, rule = %rule, "integrand not finite on the interval");
            }
            debug!(task = %self.name, rule = %rule, value, "evaluated");
            report.push(rule.name(), value);
        }
        Ok(report)
    }
}
