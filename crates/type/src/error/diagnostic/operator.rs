// Copyright (c) tallydb.com 2025
// This file is licensed under the MIT, see license.md file

use crate::{error::diagnostic::Diagnostic, value::Type};

pub fn invalid_operand(operator: &str, left: Type, right: Type) -> Diagnostic {
	Diagnostic {
		code: "OPERATOR_001".to_string(),
		message: format!(
			"cannot apply operator '{}' to {} and {}",
			operator, left, right
		),
		label: Some("operand is not a numeric value".to_string()),
		help: Some(
			"arithmetic operators require two defined numeric operands"
				.to_string(),
		),
		notes: vec![
			"numeric types are INT4, INT8, FLOAT8, VARINT and DECIMAL"
				.to_string(),
		],
		cause: None,
	}
}
