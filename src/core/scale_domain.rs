use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_f64, decimal_to_i64};
use crate::core::types::{AxisId, AxisMode, Dimension};
use crate::error::{PlotError, PlotResult};

/// How data values are placed along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScaleKind {
    /// Uniform spacing in raw data units.
    #[default]
    Linear,
    /// Uniform spacing in base-10 exponents. Domain bounds and step are exponents.
    Log10,
}

impl ScaleKind {
    /// Converts a raw data value into the coordinate the domain bounds are expressed in.
    #[must_use]
    pub fn transform(self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::Log10 => value.log10(),
        }
    }
}

/// Validated value range of one axis.
///
/// `step` is kept as an exact decimal so tick values are exact multiples of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleDomain {
    min: Decimal,
    max: Decimal,
    step: Decimal,
    kind: ScaleKind,
    first_index: i64,
    last_index: i64,
    min_f64: f64,
    max_f64: f64,
}

impl ScaleDomain {
    /// Domain used by an axis that has not been configured yet.
    pub const DEFAULT: ScaleDomain = ScaleDomain {
        min: Decimal::ZERO,
        max: Decimal::ONE,
        step: Decimal::ONE,
        kind: ScaleKind::Linear,
        first_index: 0,
        last_index: 1,
        min_f64: 0.0,
        max_f64: 1.0,
    };

    pub fn linear(min: Decimal, max: Decimal, step: Decimal) -> PlotResult<Self> {
        Self::build(min, max, step, ScaleKind::Linear)
    }

    /// Creates a base-10 logarithmic domain over integer exponents.
    pub fn log10(min_exponent: i32, max_exponent: i32, step: i32) -> PlotResult<Self> {
        Self::build(
            Decimal::from(min_exponent),
            Decimal::from(max_exponent),
            Decimal::from(step),
            ScaleKind::Log10,
        )
    }

    fn build(min: Decimal, max: Decimal, step: Decimal, kind: ScaleKind) -> PlotResult<Self> {
        let span_too_small = max.checked_sub(min).is_none_or(|span| span < step);
        if min >= max || span_too_small || step <= Decimal::ZERO {
            return Err(PlotError::Range(format!(
                "expected {min} < {max} and 0 < {step} <= {max} - {min}"
            )));
        }

        let first_index = floor_index(min, step)?;
        let last_index = floor_index(max, step)?;

        Ok(Self {
            min,
            max,
            step,
            kind,
            first_index,
            last_index,
            min_f64: decimal_to_f64(min, "domain min")?,
            max_f64: decimal_to_f64(max, "domain max")?,
        })
    }

    #[must_use]
    pub fn min(&self) -> Decimal {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Decimal {
        self.max
    }

    #[must_use]
    pub fn step(&self) -> Decimal {
        self.step
    }

    #[must_use]
    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.min_f64, self.max_f64)
    }

    #[must_use]
    pub fn range(&self) -> f64 {
        self.max_f64 - self.min_f64
    }

    /// Inclusive tick index range `[floor(min/step), floor(max/step)]`.
    ///
    /// The first index may yield a value below `min`; tick enumeration skips it.
    #[must_use]
    pub fn index_range(&self) -> (i64, i64) {
        (self.first_index, self.last_index)
    }

    /// Inclusive bounds check on a domain-space value.
    #[must_use]
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }
}

fn floor_index(bound: Decimal, step: Decimal) -> PlotResult<i64> {
    let quotient = bound
        .checked_div(step)
        .ok_or_else(|| PlotError::Range(format!("{bound} / {step} overflows")))?;
    decimal_to_i64(quotient.floor(), "tick index")
}

/// Configuration state of one axis identity.
///
/// An axis moves from `Unconfigured` to `Configured` exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisState {
    Unconfigured,
    Configured(ScaleDomain),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisContext {
    id: AxisId,
    enabled: bool,
    state: AxisState,
}

impl AxisContext {
    #[must_use]
    pub fn id(&self) -> AxisId {
        self.id
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn state(&self) -> AxisState {
        self.state
    }

    /// Configured domain, or [`ScaleDomain::DEFAULT`] before configuration.
    #[must_use]
    pub fn domain(&self) -> ScaleDomain {
        match self.state {
            AxisState::Unconfigured => ScaleDomain::DEFAULT,
            AxisState::Configured(domain) => domain,
        }
    }
}

/// Per-axis contexts for x, x2, y and y2, keyed by [`AxisId`].
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSet {
    contexts: [AxisContext; 4],
}

impl AxisSet {
    #[must_use]
    pub fn new(x_mode: AxisMode, y_mode: AxisMode) -> Self {
        let contexts = AxisId::ALL.map(|id| AxisContext {
            id,
            enabled: match id {
                AxisId::X | AxisId::Y => true,
                AxisId::X2 => x_mode.is_dual(),
                AxisId::Y2 => y_mode.is_dual(),
            },
            state: AxisState::Unconfigured,
        });
        Self { contexts }
    }

    /// Returns the context of an enabled axis.
    pub fn context(&self, id: AxisId) -> PlotResult<&AxisContext> {
        let context = &self.contexts[id.index()];
        if !context.enabled {
            return Err(PlotError::Config(format!(
                "axis `{}` requires a dual {} dimension",
                id.name(),
                match id.dimension() {
                    Dimension::Horizontal => "x",
                    Dimension::Vertical => "y",
                }
            )));
        }
        Ok(context)
    }

    pub fn domain(&self, id: AxisId) -> PlotResult<ScaleDomain> {
        self.context(id).map(AxisContext::domain)
    }

    pub fn is_configured(&self, id: AxisId) -> PlotResult<bool> {
        Ok(matches!(self.context(id)?.state, AxisState::Configured(_)))
    }

    /// Fails unless `id` is enabled and still unconfigured.
    pub fn ensure_configurable(&self, id: AxisId) -> PlotResult<()> {
        if self.is_configured(id)? {
            return Err(PlotError::State(format!(
                "axis `{}` is already configured",
                id.name()
            )));
        }
        Ok(())
    }

    pub fn configure(&mut self, id: AxisId, domain: ScaleDomain) -> PlotResult<()> {
        self.ensure_configurable(id)?;
        self.contexts[id.index()].state = AxisState::Configured(domain);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().expect("decimal literal")
    }

    #[test]
    fn rejects_inverted_and_narrow_domains() {
        for (min, max, step) in [("1", "1", "0.1"), ("2", "1", "0.1"), ("0", "0.05", "0.1")] {
            let err = ScaleDomain::linear(dec(min), dec(max), dec(step)).expect_err("invalid");
            assert!(matches!(err, PlotError::Range(_)));
        }
        let err = ScaleDomain::linear(dec("0"), dec("1"), dec("0")).expect_err("zero step");
        assert!(matches!(err, PlotError::Range(_)));
    }

    #[test]
    fn index_range_uses_floor() {
        let domain = ScaleDomain::linear(dec("0.42"), dec("0.8"), dec("0.05")).expect("domain");
        assert_eq!(domain.index_range(), (8, 16));

        let negative = ScaleDomain::linear(dec("-0.25"), dec("0.1"), dec("0.1")).expect("domain");
        assert_eq!(negative.index_range(), (-3, 1));
    }

    #[test]
    fn secondary_axes_follow_axis_mode() {
        let axes = AxisSet::new(AxisMode::Single, AxisMode::Dual);
        assert!(matches!(axes.context(AxisId::X2), Err(PlotError::Config(_))));
        assert!(axes.context(AxisId::Y2).is_ok());
    }

    #[test]
    fn configuration_is_one_shot() {
        let mut axes = AxisSet::new(AxisMode::Single, AxisMode::Single);
        let domain = ScaleDomain::linear(dec("0"), dec("1"), dec("0.5")).expect("domain");
        axes.configure(AxisId::X, domain).expect("first configuration");
        let err = axes.configure(AxisId::X, domain).expect_err("second configuration");
        assert!(matches!(err, PlotError::State(_)));
        assert_eq!(axes.domain(AxisId::X).expect("domain"), domain);
        assert_eq!(axes.domain(AxisId::Y).expect("domain"), ScaleDomain::DEFAULT);
    }
}
