// Copyright (c) tallydb.com 2025
// This file is licensed under the MIT, see license.md file

pub mod evaluate;

pub use evaluate::{
	DIVISION_EXTRA_PRECISION, DIVISION_MIN_SCALE, Operator, divide_decimal,
	evaluate, merge_arrays,
};
pub use tallydb_type::Error;

pub type Result<T> = std::result::Result<T, Error>;
