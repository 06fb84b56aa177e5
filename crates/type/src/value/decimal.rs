// Copyright (c) tallydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::{
	Error, Type, error::diagnostic::number::invalid_number_format,
	value::lexical::clean_number,
};

/// An arbitrary-precision decimal.
///
/// Equality is numeric: `2.5` and `2.50` are equal. Precision and scale of
/// the underlying representation stay observable through [`precision`] and
/// [`scale`], which the division policy depends on.
///
/// [`precision`]: Decimal::precision
/// [`scale`]: Decimal::scale
#[derive(
	Clone,
	Debug,
	Default,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	Serialize,
	Deserialize,
)]
pub struct Decimal(BigDecimal);

impl Decimal {
	pub fn new(inner: BigDecimal) -> Self {
		Decimal(inner)
	}

	pub fn inner(&self) -> &BigDecimal {
		&self.0
	}

	pub fn into_inner(self) -> BigDecimal {
		self.0
	}

	/// Number of digits in the significand.
	pub fn precision(&self) -> u64 {
		self.0.digits()
	}

	/// Number of fractional digits; negative when the significand carries
	/// trailing powers of ten.
	pub fn scale(&self) -> i64 {
		self.0.fractional_digit_count()
	}

	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}
}

impl From<BigDecimal> for Decimal {
	fn from(value: BigDecimal) -> Self {
		Decimal(value)
	}
}

impl From<BigInt> for Decimal {
	fn from(value: BigInt) -> Self {
		Decimal(BigDecimal::from(value))
	}
}

impl From<i32> for Decimal {
	fn from(value: i32) -> Self {
		Decimal(BigDecimal::from(value))
	}
}

impl From<i64> for Decimal {
	fn from(value: i64) -> Self {
		Decimal(BigDecimal::from(value))
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl FromStr for Decimal {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value = clean_number(s);
		if value.is_empty() {
			crate::return_error!(invalid_number_format(
				s,
				Type::Decimal
			));
		}
		BigDecimal::from_str(&value).map(Decimal).map_err(|_| {
			crate::error!(invalid_number_format(s, Type::Decimal))
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_integer() {
		let decimal: Decimal = "123".parse().unwrap();
		assert_eq!(decimal.to_string(), "123");
	}

	#[test]
	fn test_parse_with_fractional() {
		let decimal: Decimal = "123.45".parse().unwrap();
		assert_eq!(decimal.to_string(), "123.45");
	}

	#[test]
	fn test_parse_with_underscores() {
		let decimal: Decimal = "1_234.56".parse().unwrap();
		assert_eq!(decimal.to_string(), "1234.56");
	}

	#[test]
	fn test_parse_negative() {
		let decimal: Decimal = "-123.45".parse().unwrap();
		assert_eq!(decimal.to_string(), "-123.45");
	}

	#[test]
	fn test_parse_empty() {
		assert!("".parse::<Decimal>().is_err());
	}

	#[test]
	fn test_parse_invalid() {
		let err = "not_a_number".parse::<Decimal>().unwrap_err();
		assert_eq!(err.code(), "NUMBER_002");
	}

	#[test]
	fn test_parse_scientific_notation() {
		let decimal: Decimal = "1.23e2".parse().unwrap();
		assert_eq!(decimal, "123".parse().unwrap());
	}

	#[test]
	fn test_precision_and_scale() {
		let decimal: Decimal = "123.45".parse().unwrap();
		assert_eq!(decimal.precision(), 5);
		assert_eq!(decimal.scale(), 2);
	}

	#[test]
	fn test_numeric_equality_ignores_scale() {
		let a: Decimal = "2.5".parse().unwrap();
		let b: Decimal = "2.50".parse().unwrap();
		assert_eq!(a, b);
	}
}
