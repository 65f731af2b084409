// ============================================================================
// Numeric Module
// Exact decimal plumbing shared by the vector type
// ============================================================================
//
// This module provides:
// - IntoCoordinate: conversion of caller values into exact decimals
// - VectorError / ErrorKind: error types for vector operations
// - Checked helpers that turn decimal overflow into VectorError
//
// Design principles:
// - Coordinates are rust_decimal::Decimal, never binary floating point
// - All arithmetic returns Result (no panics)
// - Square roots are the single place f64 is involved

mod coordinate;
mod errors;

pub use coordinate::IntoCoordinate;
pub use errors::{ErrorKind, VectorError, VectorResult};

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

#[inline]
pub(crate) fn checked_add(
    a: Decimal,
    b: Decimal,
    operation: &'static str,
) -> VectorResult<Decimal> {
    a.checked_add(b).ok_or(VectorError::Overflow { operation })
}

#[inline]
pub(crate) fn checked_sub(
    a: Decimal,
    b: Decimal,
    operation: &'static str,
) -> VectorResult<Decimal> {
    a.checked_sub(b).ok_or(VectorError::Overflow { operation })
}

#[inline]
pub(crate) fn checked_mul(
    a: Decimal,
    b: Decimal,
    operation: &'static str,
) -> VectorResult<Decimal> {
    a.checked_mul(b).ok_or(VectorError::Overflow { operation })
}

/// Checked division. Callers are expected to rule out a zero divisor first
/// so that `None` here can only mean overflow.
#[inline]
pub(crate) fn checked_div(
    a: Decimal,
    b: Decimal,
    operation: &'static str,
) -> VectorResult<Decimal> {
    a.checked_div(b).ok_or(VectorError::Overflow { operation })
}

/// Square root of a non-negative decimal, computed in `f64`.
///
/// This is the precision boundary of the crate: the result carries at most
/// the ~17 significant digits an `f64` holds, then is rounded to `precision`
/// significant digits.
pub(crate) fn sqrt(value: Decimal, precision: u32) -> VectorResult<Decimal> {
    let operation = "square root";
    let root = value
        .to_f64()
        .map(f64::sqrt)
        .and_then(Decimal::from_f64)
        .ok_or(VectorError::Overflow { operation })?;
    Ok(root.round_sf(precision).unwrap_or(root))
}
