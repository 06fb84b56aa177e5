// Copyright (c) tallydb.com 2025
// This file is licensed under the MIT, see license.md file

//! Per-operator evaluation routines.
//!
//! Each routine receives the two original values plus the representation
//! the widening policy selected, extracts both operands at that width and
//! wraps the raw result back into the same representation.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use tallydb_type::{
	Value,
	error::diagnostic::operator::invalid_operand,
	return_error,
};

use crate::evaluate::Operator;

mod add;
mod div;
mod mul;
mod sub;

pub(crate) use add::add;
pub(crate) use div::div;
pub(crate) use mul::mul;
pub(crate) use sub::sub;

pub use div::{
	DIVISION_EXTRA_PRECISION, DIVISION_MIN_SCALE, divide_decimal,
};

pub(crate) fn int4_operands(
	operator: Operator,
	left: &Value,
	right: &Value,
) -> crate::Result<(i32, i32)> {
	match (left.to_int4(), right.to_int4()) {
		(Some(l), Some(r)) => Ok((l, r)),
		_ => return_error!(invalid_operand(
			operator.symbol(),
			left.get_type(),
			right.get_type(),
		)),
	}
}

pub(crate) fn int8_operands(
	operator: Operator,
	left: &Value,
	right: &Value,
) -> crate::Result<(i64, i64)> {
	match (left.to_int8(), right.to_int8()) {
		(Some(l), Some(r)) => Ok((l, r)),
		_ => return_error!(invalid_operand(
			operator.symbol(),
			left.get_type(),
			right.get_type(),
		)),
	}
}

pub(crate) fn float8_operands(
	operator: Operator,
	left: &Value,
	right: &Value,
) -> crate::Result<(f64, f64)> {
	match (left.to_float8(), right.to_float8()) {
		(Some(l), Some(r)) => Ok((l, r)),
		_ => return_error!(invalid_operand(
			operator.symbol(),
			left.get_type(),
			right.get_type(),
		)),
	}
}

pub(crate) fn varint_operands(
	operator: Operator,
	left: &Value,
	right: &Value,
) -> crate::Result<(BigInt, BigInt)> {
	match (left.to_varint(), right.to_varint()) {
		(Some(l), Some(r)) => Ok((l, r)),
		_ => return_error!(invalid_operand(
			operator.symbol(),
			left.get_type(),
			right.get_type(),
		)),
	}
}

pub(crate) fn decimal_operands(
	operator: Operator,
	left: &Value,
	right: &Value,
) -> crate::Result<(BigDecimal, BigDecimal)> {
	match (left.to_decimal(), right.to_decimal()) {
		(Some(l), Some(r)) => Ok((l, r)),
		_ => return_error!(invalid_operand(
			operator.symbol(),
			left.get_type(),
			right.get_type(),
		)),
	}
}
