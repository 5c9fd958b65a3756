use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{PlotError, PlotResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> PlotResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| PlotError::Range(format!("{field_name} cannot be represented as f64")))
}

pub fn decimal_to_i64(value: Decimal, field_name: &str) -> PlotResult<i64> {
    value
        .to_i64()
        .ok_or_else(|| PlotError::Range(format!("{field_name} is outside the integer index range")))
}
