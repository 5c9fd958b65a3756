use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::scale_domain::{ScaleDomain, ScaleKind};

/// Labels for the exponents that read better as plain decimals.
const LOG_DECADE_LABELS: [(i64, &str); 5] = [
    (-2, "0.01"),
    (-1, "0.1"),
    (0, "1"),
    (1, "10"),
    (2, "100"),
];

/// Number format for linear tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelFormat {
    /// Rounds to at most `max_decimals` fraction digits and drops trailing zeros.
    Trimmed { max_decimals: u32 },
    /// Always prints exactly `decimals` fraction digits.
    Fixed { decimals: u32 },
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self::Trimmed { max_decimals: 3 }
    }
}

impl LabelFormat {
    #[must_use]
    pub fn format(self, value: Decimal) -> String {
        match self {
            Self::Trimmed { max_decimals } => value
                .round_dp_with_strategy(max_decimals, RoundingStrategy::MidpointAwayFromZero)
                .normalize()
                .to_string(),
            Self::Fixed { decimals } => {
                let rounded = value
                    .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
                format!("{rounded:.prec$}", prec = decimals as usize)
            }
        }
    }
}

/// Label of a log-scale tick at `exponent`.
#[must_use]
pub fn log_tick_label(exponent: i64) -> String {
    LOG_DECADE_LABELS
        .iter()
        .find(|(known, _)| *known == exponent)
        .map(|(_, label)| (*label).to_owned())
        .unwrap_or_else(|| format!("10e{exponent:+}"))
}

/// One labeled reference mark.
///
/// `value` is in the domain's own coordinate: a raw value for linear
/// domains, an exponent for log domains.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: Decimal,
    pub label: String,
}

impl Tick {
    /// Coordinate handed to the mapper; already log-transformed for log domains.
    #[must_use]
    pub fn coordinate(&self) -> f64 {
        self.value.to_f64().unwrap_or(f64::NAN)
    }
}

/// Lazily enumerates the ticks of a configured domain.
///
/// Candidates are `index * step` for every index in
/// [`ScaleDomain::index_range`]; a candidate outside `[min, max]` is skipped.
#[derive(Debug, Clone)]
pub struct TickIter {
    domain: ScaleDomain,
    format: LabelFormat,
    next_index: i64,
}

impl TickIter {
    #[must_use]
    pub fn new(domain: ScaleDomain, format: LabelFormat) -> Self {
        let (first, _) = domain.index_range();
        Self {
            domain,
            format,
            next_index: first,
        }
    }

    fn label(&self, value: Decimal) -> String {
        match self.domain.kind() {
            ScaleKind::Linear => self.format.format(value),
            ScaleKind::Log10 => value
                .to_i64()
                .map(log_tick_label)
                .unwrap_or_else(|| value.to_string()),
        }
    }
}

impl Iterator for TickIter {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        let (_, last) = self.domain.index_range();
        while self.next_index <= last {
            let index = self.next_index;
            self.next_index += 1;

            let Some(value) = Decimal::from(index).checked_mul(self.domain.step()) else {
                continue;
            };
            if !self.domain.contains(value) {
                continue;
            }
            let label = self.label(value);
            return Some(Tick { value, label });
        }
        None
    }
}

impl ScaleDomain {
    /// Tick sequence of this domain, labeled with `format` on linear domains.
    #[must_use]
    pub fn ticks(&self, format: LabelFormat) -> TickIter {
        TickIter::new(*self, format)
    }
}
