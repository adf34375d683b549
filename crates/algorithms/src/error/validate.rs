//! Validation utilities for the curve primitives

use super::{EncodingFault, Error, Result};

/// Validate an exact encoding length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::length(context, expected, actual));
    }
    Ok(())
}

/// Validate that two paired sequences have the same number of elements
#[inline(always)]
pub fn same_length(context: &'static str, left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(Error::LengthMismatch {
            context,
            left,
            right,
        });
    }
    Ok(())
}

/// Validate an encoding condition
#[inline(always)]
pub fn encoding(condition: bool, context: &'static str, reason: EncodingFault) -> Result<()> {
    if !condition {
        return Err(Error::encoding(context, reason));
    }
    Ok(())
}

/// Validate that decoded coordinates satisfy the curve equation
#[inline(always)]
pub fn on_curve(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::NotOnCurve { context });
    }
    Ok(())
}

/// Validate prime-order subgroup membership
#[inline(always)]
pub fn in_subgroup(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::NotInSubgroup { context });
    }
    Ok(())
}

/// Validate that a divisor is not zero
#[inline(always)]
pub fn nonzero(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::DivisionByZero { context });
    }
    Ok(())
}
