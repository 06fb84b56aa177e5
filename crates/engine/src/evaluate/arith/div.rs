// Copyright (c) tallydb.com 2025
// This file is licensed under the MIT, see license.md file

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use tallydb_type::{
	Decimal, Type, Value,
	error::diagnostic::{
		number::division_by_zero, operator::invalid_operand,
	},
	return_error,
};

use crate::evaluate::{
	Operator,
	arith::{decimal_operands, float8_operands},
};

/// Extra significand digits granted to a non-terminating quotient beyond
/// the wider operand's precision.
pub const DIVISION_EXTRA_PRECISION: u64 = 10;

/// Smallest scale bound applied when trimming a non-terminating quotient.
pub const DIVISION_MIN_SCALE: i64 = 10;

pub(crate) fn div(
	left: &Value,
	right: &Value,
	target: Type,
) -> crate::Result<Value> {
	match target {
		Type::Float8 => {
			let (l, r) =
				float8_operands(Operator::Div, left, right)?;
			// IEEE-754: a zero divisor yields infinity or NaN,
			// never an error
			Ok(Value::float8(l / r))
		}
		// every exact representation divides in decimal arithmetic
		// and yields a decimal-typed result
		Type::Int4 | Type::Int8 | Type::VarInt | Type::Decimal => {
			let (l, r) =
				decimal_operands(Operator::Div, left, right)?;
			divide_decimal(&Decimal::new(l), &Decimal::new(r))
				.map(Value::decimal)
		}
		Type::Undefined => return_error!(invalid_operand(
			Operator::Div.symbol(),
			left.get_type(),
			right.get_type(),
		)),
	}
}

/// Divides two decimals, preferring the exact quotient.
///
/// When the exact quotient does not terminate (1/3), the result is
/// computed with `max(precision(left), precision(right)) +`
/// [`DIVISION_EXTRA_PRECISION`] significant digits and trimmed half-up to
/// `max(scale(left), scale(right),` [`DIVISION_MIN_SCALE`]`)`. A zero
/// divisor is an error, not a fallback case.
pub fn divide_decimal(
	left: &Decimal,
	right: &Decimal,
) -> crate::Result<Decimal> {
	if right.is_zero() {
		return_error!(division_by_zero(Operator::Div.symbol()));
	}
	match exact_quotient(left, right) {
		Some(quotient) => Ok(quotient),
		None => Ok(bounded_quotient(left, right)),
	}
}

/// Returns the terminating quotient at its smallest sufficient scale, or
/// `None` when the decimal expansion does not terminate.
fn exact_quotient(left: &Decimal, right: &Decimal) -> Option<Decimal> {
	let (ln, ls) = left.inner().as_bigint_and_exponent();
	let (rn, rs) = right.inner().as_bigint_and_exponent();

	let gcd = gcd(&ln, &rn);
	let num = &ln / &gcd;
	let den = &rn / &gcd;

	let num = if den.is_negative() { -num } else { num };
	let mut den = den.abs();

	// the reduced quotient terminates iff the divisor is 2^a * 5^b
	let twos = strip_factor(&mut den, 2);
	let fives = strip_factor(&mut den, 5);
	if !den.is_one() {
		return None;
	}

	let extra = twos.max(fives);
	let unscaled = num
		* BigInt::from(2).pow(extra - twos)
		* BigInt::from(5).pow(extra - fives);
	Some(Decimal::new(BigDecimal::new(
		unscaled,
		ls - rs + extra as i64,
	)))
}

/// Half-up long division at the derived precision, then the scale trim.
fn bounded_quotient(left: &Decimal, right: &Decimal) -> Decimal {
	let (ln, ls) = left.inner().as_bigint_and_exponent();
	let (rn, rs) = right.inner().as_bigint_and_exponent();

	let precision = left.precision().max(right.precision())
		+ DIVISION_EXTRA_PRECISION;

	let negative = ln.is_negative() != rn.is_negative();
	let n = ln.abs();
	let d = rn.abs();

	// shift the dividend so the integer quotient carries `precision`
	// significant digits (one more at most, trimmed below)
	let shift = right.precision() as i64 + precision as i64
		- left.precision() as i64;
	let scaled = &n * BigInt::from(10).pow(shift as u32);
	let mut quotient = &scaled / &d;
	let remainder = &scaled - &quotient * &d;
	if &remainder * 2 >= d {
		quotient += 1;
	}
	let mut scale = ls - rs + shift;

	if decimal_digits(&quotient) > precision {
		let last = &quotient % 10;
		quotient = &quotient / 10;
		if last >= BigInt::from(5) {
			quotient += 1;
		}
		scale -= 1;
	}

	if negative {
		quotient = -quotient;
	}
	let result = BigDecimal::new(quotient, scale);

	let bound = left.scale().max(right.scale()).max(DIVISION_MIN_SCALE);
	let result = if result.fractional_digit_count() > bound {
		result.with_scale_round(bound, RoundingMode::HalfUp)
	} else {
		result
	};
	Decimal::new(result)
}

fn gcd(left: &BigInt, right: &BigInt) -> BigInt {
	let mut a = left.abs();
	let mut b = right.abs();
	while !b.is_zero() {
		let remainder = &a % &b;
		a = b;
		b = remainder;
	}
	a
}

fn strip_factor(value: &mut BigInt, factor: u32) -> u32 {
	let factor = BigInt::from(factor);
	let mut count = 0;
	loop {
		let remainder = &*value % &factor;
		if !remainder.is_zero() {
			return count;
		}
		*value = &*value / &factor;
		count += 1;
	}
}

fn decimal_digits(value: &BigInt) -> u64 {
	BigDecimal::new(value.clone(), 0).digits()
}

#[cfg(test)]
mod tests {
	use tallydb_type::{Decimal, Value};

	use super::{divide_decimal, DIVISION_MIN_SCALE};
	use crate::evaluate::{Operator, evaluate};

	fn decimal(s: &str) -> Decimal {
		s.parse().unwrap()
	}

	#[test]
	fn test_exact_quotient_is_untouched() {
		let result =
			divide_decimal(&decimal("10"), &decimal("2")).unwrap();
		assert_eq!(result.to_string(), "5");
		assert_eq!(result.scale(), 0);
	}

	#[test]
	fn test_exact_quotient_keeps_preferred_scale() {
		let result =
			divide_decimal(&decimal("2.50"), &decimal("0.5"))
				.unwrap();
		assert_eq!(result.to_string(), "5.0");
	}

	#[test]
	fn test_exact_quotient_extends_scale_when_needed() {
		let result =
			divide_decimal(&decimal("1"), &decimal("8")).unwrap();
		assert_eq!(result.to_string(), "0.125");
	}

	#[test]
	fn test_exact_quotient_with_negative_scale() {
		let result =
			divide_decimal(&decimal("1e3"), &decimal("2")).unwrap();
		assert_eq!(result, decimal("500"));
	}

	#[test]
	fn test_non_terminating_falls_back() {
		let result =
			divide_decimal(&decimal("1"), &decimal("3")).unwrap();
		assert_eq!(result.to_string(), "0.3333333333");
		assert_eq!(result.scale(), DIVISION_MIN_SCALE);
	}

	#[test]
	fn test_non_terminating_rounds_half_up() {
		let result =
			divide_decimal(&decimal("2"), &decimal("3")).unwrap();
		assert_eq!(result.to_string(), "0.6666666667");
	}

	#[test]
	fn test_non_terminating_negative() {
		let result =
			divide_decimal(&decimal("-1"), &decimal("3")).unwrap();
		assert_eq!(result.to_string(), "-0.3333333333");

		let result =
			divide_decimal(&decimal("1"), &decimal("-3")).unwrap();
		assert_eq!(result.to_string(), "-0.3333333333");
	}

	#[test]
	fn test_operand_scale_raises_the_trim_bound() {
		let result = divide_decimal(
			&decimal("1.000000000000"),
			&decimal("3"),
		)
		.unwrap();
		assert_eq!(result.to_string(), "0.333333333333");
		assert_eq!(result.scale(), 12);
	}

	#[test]
	fn test_zero_dividend() {
		let result =
			divide_decimal(&decimal("0"), &decimal("3")).unwrap();
		assert_eq!(result.to_string(), "0");
	}

	#[test]
	fn test_division_by_zero_is_an_error() {
		let err = divide_decimal(&decimal("5"), &decimal("0"))
			.unwrap_err();
		assert_eq!(err.code(), "NUMBER_001");
	}

	#[test]
	fn test_integer_division_routes_through_decimal() {
		let result = evaluate(
			Operator::Div,
			&Value::int4(1),
			&Value::int4(3),
		)
		.unwrap();
		assert_eq!(
			result,
			Value::decimal(decimal("0.3333333333"))
		);

		let result = evaluate(
			Operator::Div,
			&Value::int8(10i64),
			&Value::int4(2),
		)
		.unwrap();
		assert_eq!(result, Value::decimal(decimal("5")));
	}

	#[test]
	fn test_integer_division_by_zero_is_an_error() {
		for (left, right) in [
			(Value::int4(1), Value::int4(0)),
			(Value::int8(1i64), Value::int8(0i64)),
			(Value::varint(1), Value::varint(0)),
		] {
			let err = evaluate(Operator::Div, &left, &right)
				.unwrap_err();
			assert_eq!(err.code(), "NUMBER_001");
		}
	}

	#[test]
	fn test_float8_division_by_zero_yields_infinity() {
		let result = evaluate(
			Operator::Div,
			&Value::float8(5.0),
			&Value::float8(0.0),
		)
		.unwrap();
		assert_eq!(result, Value::float8(f64::INFINITY));

		let result = evaluate(
			Operator::Div,
			&Value::float8(-5.0),
			&Value::float8(0.0),
		)
		.unwrap();
		assert_eq!(result, Value::float8(f64::NEG_INFINITY));
	}

	#[test]
	fn test_float8_zero_over_zero_is_nan() {
		let result = evaluate(
			Operator::Div,
			&Value::float8(0.0),
			&Value::float8(0.0),
		)
		.unwrap();
		match result {
			Value::Float8(v) => assert!(v.is_nan()),
			other => panic!("expected float, got {other:?}"),
		}
	}

	#[test]
	fn test_mixed_operands_divide_in_decimal() {
		let result = evaluate(
			Operator::Div,
			&Value::int4(1),
			&Value::decimal(decimal("3")),
		)
		.unwrap();
		assert_eq!(
			result,
			Value::decimal(decimal("0.3333333333"))
		);
	}

	#[test]
	fn test_large_quotient_keeps_integer_digits() {
		let result = divide_decimal(
			&decimal("1000000000000000000000"),
			&decimal("3"),
		)
		.unwrap();
		assert_eq!(
			result.to_string(),
			"333333333333333333333.3333333333"
		);
	}
}
