// Copyright (c) tallydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

pub mod number;
pub mod operator;

/// A structured description of an error condition with a stable code.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
	/// Stable machine-readable code, e.g. `NUMBER_001`
	pub code: String,
	/// Primary human-readable message
	pub message: String,
	/// Short label describing the offending element
	pub label: Option<String>,
	/// Suggested remediation
	pub help: Option<String>,
	/// Additional background notes
	pub notes: Vec<String>,
	/// Underlying diagnostic that caused this one
	pub cause: Option<Box<Diagnostic>>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}] {}", self.code, self.message)?;
		if let Some(label) = &self.label {
			write!(f, " ({})", label)?;
		}
		Ok(())
	}
}
