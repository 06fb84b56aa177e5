// Copyright (c) tallydb.com 2025
// This file is licensed under the MIT, see license.md file

use crate::{error::diagnostic::Diagnostic, value::Type};

pub fn division_by_zero(operator: &str) -> Diagnostic {
	Diagnostic {
		code: "NUMBER_001".to_string(),
		message: format!(
			"operator '{}' attempted an exact division by zero",
			operator
		),
		label: Some("divisor is zero".to_string()),
		help: Some(
			"exact numeric types cannot represent the result of a division by zero"
				.to_string(),
		),
		notes: vec![
			"FLOAT8 division by zero yields infinity instead of an error"
				.to_string(),
		],
		cause: None,
	}
}

pub fn invalid_number_format(input: &str, target: Type) -> Diagnostic {
	Diagnostic {
		code: "NUMBER_002".to_string(),
		message: format!("invalid {} literal: '{}'", target, input),
		label: Some(format!("cannot be parsed as {}", target)),
		help: Some(
			"use decimal digits with an optional sign, underscores are permitted as separators"
				.to_string(),
		),
		notes: vec![],
		cause: None,
	}
}
