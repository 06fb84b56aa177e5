// Copyright (c) tallydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use tallydb_type::{
	Type, Value,
	error::diagnostic::operator::invalid_operand,
	return_error,
};
use tracing::instrument;

mod arith;
mod merge;

pub use arith::{
	DIVISION_EXTRA_PRECISION, DIVISION_MIN_SCALE, divide_decimal,
};
pub use merge::merge_arrays;

/// Closed set of basic arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	Add,
	Sub,
	Mul,
	Div,
}

impl Display for Operator {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Operator::Add => f.write_str("+"),
			Operator::Sub => f.write_str("-"),
			Operator::Mul => f.write_str("*"),
			Operator::Div => f.write_str("/"),
		}
	}
}

impl Operator {
	/// Display symbol used in diagnostics.
	pub fn symbol(&self) -> &'static str {
		match self {
			Operator::Add => "+",
			Operator::Sub => "-",
			Operator::Mul => "*",
			Operator::Div => "/",
		}
	}
}

/// Performs the binary operation on the two operands after widening both
/// values to a common representation.
///
/// The result carries the widened representation, with one exception:
/// division between exact representations always yields a `Decimal` so
/// that integer quotients are never silently truncated.
#[instrument(name = "evaluate::arith", level = "trace", skip(left, right), fields(operator = %operator))]
pub fn evaluate(
	operator: Operator,
	left: &Value,
	right: &Value,
) -> crate::Result<Value> {
	let target = Type::promote(left.get_type(), right.get_type());
	if !target.is_number() {
		return_error!(invalid_operand(
			operator.symbol(),
			left.get_type(),
			right.get_type(),
		));
	}
	match operator {
		Operator::Add => arith::add(left, right, target),
		Operator::Sub => arith::sub(left, right, target),
		Operator::Mul => arith::mul(left, right, target),
		Operator::Div => arith::div(left, right, target),
	}
}
