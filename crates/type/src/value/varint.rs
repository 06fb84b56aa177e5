// Copyright (c) tallydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::{
	Error, Type, error::diagnostic::number::invalid_number_format,
	value::lexical::clean_number,
};

/// An arbitrary-precision signed integer.
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
pub struct VarInt(pub BigInt);

impl VarInt {
	pub fn zero() -> Self {
		VarInt(BigInt::from(0))
	}

	pub fn inner(&self) -> &BigInt {
		&self.0
	}

	pub fn into_inner(self) -> BigInt {
		self.0
	}
}

impl From<BigInt> for VarInt {
	fn from(value: BigInt) -> Self {
		VarInt(value)
	}
}

impl From<i32> for VarInt {
	fn from(value: i32) -> Self {
		VarInt(BigInt::from(value))
	}
}

impl From<i64> for VarInt {
	fn from(value: i64) -> Self {
		VarInt(BigInt::from(value))
	}
}

impl Display for VarInt {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl FromStr for VarInt {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value = clean_number(s);
		BigInt::from_str(&value).map(VarInt).map_err(|_| {
			crate::error!(invalid_number_format(s, Type::VarInt))
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse() {
		let value: VarInt = "123".parse().unwrap();
		assert_eq!(value.to_string(), "123");
	}

	#[test]
	fn test_parse_negative() {
		let value: VarInt = "-42".parse().unwrap();
		assert_eq!(value.to_string(), "-42");
	}

	#[test]
	fn test_parse_with_underscores() {
		let value: VarInt = "1_000_000".parse().unwrap();
		assert_eq!(value.to_string(), "1000000");
	}

	#[test]
	fn test_parse_beyond_64_bit() {
		let value: VarInt =
			"170141183460469231731687303715884105728".parse().unwrap();
		assert_eq!(
			value.to_string(),
			"170141183460469231731687303715884105728"
		);
	}

	#[test]
	fn test_parse_invalid() {
		let err = "not_a_number".parse::<VarInt>().unwrap_err();
		assert_eq!(err.code(), "NUMBER_002");
	}
}
