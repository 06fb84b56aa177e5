// Copyright (c) tallydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod promote;

/// All possible numeric representations.
#[derive(
	Clone,
	Copy,
	Debug,
	Hash,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Serialize,
	Deserialize,
)]
pub enum Type {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// An 8-byte floating point
	Float8,
	/// An arbitrary-precision signed integer
	VarInt,
	/// An arbitrary-precision decimal
	Decimal,
}

impl Type {
	pub fn is_number(&self) -> bool {
		matches!(
			self,
			Type::Int4
				| Type::Int8 | Type::Float8
				| Type::VarInt | Type::Decimal
		)
	}

	pub fn is_integer(&self) -> bool {
		matches!(self, Type::Int4 | Type::Int8 | Type::VarInt)
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float8)
	}

	pub fn is_arbitrary_precision(&self) -> bool {
		matches!(self, Type::VarInt | Type::Decimal)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Undefined => f.write_str("UNDEFINED"),
			Type::Int4 => f.write_str("INT4"),
			Type::Int8 => f.write_str("INT8"),
			Type::Float8 => f.write_str("FLOAT8"),
			Type::VarInt => f.write_str("VARINT"),
			Type::Decimal => f.write_str("DECIMAL"),
		}
	}
}
