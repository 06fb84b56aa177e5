// Copyright (c) tallydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};
use serde::{Deserialize, Serialize};

pub mod decimal;
mod lexical;
mod ordered_f64;
mod r#type;
mod varint;

pub use decimal::Decimal;
pub use ordered_f64::OrderedF64;
pub use r#type::Type;
pub use varint::VarInt;

/// A numeric value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// An arbitrary-precision signed integer
	VarInt(VarInt),
	/// An arbitrary-precision decimal
	Decimal(Decimal),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		Value::Float8(OrderedF64::from(v.into()))
	}

	pub fn varint(v: impl Into<VarInt>) -> Self {
		Value::VarInt(v.into())
	}

	pub fn decimal(v: impl Into<Decimal>) -> Self {
		Value::Decimal(v.into())
	}
}

impl Value {
	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Float8(_) => Type::Float8,
			Value::VarInt(_) => Type::VarInt,
			Value::Decimal(_) => Type::Decimal,
		}
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}
}

/// Widening extraction.
///
/// Each accessor yields the payload at the requested representation when
/// the conversion is lossless at that width; `None` otherwise. The
/// evaluator only ever extracts at the promoted representation, so the
/// narrowing directions are deliberately absent.
impl Value {
	pub fn to_int4(&self) -> Option<i32> {
		match self {
			Value::Int4(v) => Some(*v),
			_ => None,
		}
	}

	pub fn to_int8(&self) -> Option<i64> {
		match self {
			Value::Int4(v) => Some(*v as i64),
			Value::Int8(v) => Some(*v),
			_ => None,
		}
	}

	pub fn to_float8(&self) -> Option<f64> {
		match self {
			Value::Int4(v) => Some(*v as f64),
			Value::Int8(v) => Some(*v as f64),
			Value::Float8(v) => Some(v.value()),
			Value::VarInt(v) => Some(big_int_to_f64(&v.0)),
			_ => None,
		}
	}

	pub fn to_varint(&self) -> Option<BigInt> {
		match self {
			Value::Int4(v) => Some(BigInt::from(*v)),
			Value::Int8(v) => Some(BigInt::from(*v)),
			Value::VarInt(v) => Some(v.0.clone()),
			_ => None,
		}
	}

	pub fn to_decimal(&self) -> Option<BigDecimal> {
		match self {
			Value::Int4(v) => Some(BigDecimal::from(*v)),
			Value::Int8(v) => Some(BigDecimal::from(*v)),
			Value::Float8(v) => {
				BigDecimal::try_from(v.value()).ok()
			}
			Value::VarInt(v) => {
				Some(BigDecimal::from(v.0.clone()))
			}
			Value::Decimal(v) => Some(v.inner().clone()),
			_ => None,
		}
	}
}

// magnitudes beyond f64 range saturate to infinity
fn big_int_to_f64(v: &BigInt) -> f64 {
	match v.to_f64() {
		Some(f) => f,
		None => {
			if v.is_negative() {
				f64::NEG_INFINITY
			} else {
				f64::INFINITY
			}
		}
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Int4(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int8(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float8(OrderedF64::from(value))
	}
}

impl From<BigInt> for Value {
	fn from(value: BigInt) -> Self {
		Value::VarInt(VarInt(value))
	}
}

impl From<BigDecimal> for Value {
	fn from(value: BigDecimal) -> Self {
		Value::Decimal(Decimal::new(value))
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::VarInt(value) => Display::fmt(value, f),
			Value::Decimal(value) => Display::fmt(value, f),
		}
	}
}
