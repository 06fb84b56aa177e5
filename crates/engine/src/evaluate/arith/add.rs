// Copyright (c) tallydb.com 2025
// This file is licensed under the MIT, see license.md file

use tallydb_type::{
	Type, Value,
	error::diagnostic::operator::invalid_operand,
	return_error,
};

use crate::evaluate::{
	Operator,
	arith::{
		decimal_operands, float8_operands, int4_operands,
		int8_operands, varint_operands,
	},
};

pub(crate) fn add(
	left: &Value,
	right: &Value,
	target: Type,
) -> crate::Result<Value> {
	match target {
		Type::Int4 => {
			let (l, r) = int4_operands(Operator::Add, left, right)?;
			Ok(Value::int4(l.wrapping_add(r)))
		}
		Type::Int8 => {
			let (l, r) = int8_operands(Operator::Add, left, right)?;
			Ok(Value::int8(l.wrapping_add(r)))
		}
		Type::Float8 => {
			let (l, r) =
				float8_operands(Operator::Add, left, right)?;
			Ok(Value::float8(l + r))
		}
		Type::VarInt => {
			let (l, r) =
				varint_operands(Operator::Add, left, right)?;
			Ok(Value::from(l + r))
		}
		Type::Decimal => {
			let (l, r) =
				decimal_operands(Operator::Add, left, right)?;
			Ok(Value::from(l + r))
		}
		Type::Undefined => return_error!(invalid_operand(
			Operator::Add.symbol(),
			left.get_type(),
			right.get_type(),
		)),
	}
}
