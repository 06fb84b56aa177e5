// Copyright (c) tallydb.com 2025
// This file is licensed under the MIT, see license.md file

use tallydb_type::Value;

/// Merges several arrays by taking the first defined value for each
/// respective position.
///
/// `None` entries stand in for a whole missing array and are skipped.
/// The result has the length of the longest input; positions for which
/// no input carries a defined value hold [`Value::Undefined`].
pub fn merge_arrays(arrays: &[Option<&[Value]>]) -> Vec<Value> {
	let mut merged: Vec<Value> = Vec::new();
	for array in arrays.iter().flatten() {
		for (index, value) in array.iter().enumerate() {
			if merged.len() <= index {
				merged.push(value.clone());
			} else if merged[index].is_undefined()
				&& !value.is_undefined()
			{
				merged[index] = value.clone();
			}
		}
	}
	merged
}

#[cfg(test)]
mod tests {
	use tallydb_type::Value;

	use super::*;

	#[test]
	fn test_takes_first_defined_value_per_position() {
		let first = [Value::int4(1), Value::undefined()];
		let second =
			[Value::undefined(), Value::int4(2), Value::int4(9)];
		let merged =
			merge_arrays(&[None, Some(&first), Some(&second)]);
		assert_eq!(
			merged,
			vec![Value::int4(1), Value::int4(2), Value::int4(9)]
		);
	}

	#[test]
	fn test_earlier_arrays_win() {
		let first = [Value::int4(1)];
		let second = [Value::int4(7), Value::int4(8)];
		let merged = merge_arrays(&[Some(&first), Some(&second)]);
		assert_eq!(merged, vec![Value::int4(1), Value::int4(8)]);
	}

	#[test]
	fn test_result_spans_the_longest_input() {
		let short = [Value::int4(1)];
		let long = [
			Value::undefined(),
			Value::undefined(),
			Value::int4(3),
		];
		let merged = merge_arrays(&[Some(&short), Some(&long)]);
		assert_eq!(merged.len(), 3);
		assert_eq!(merged[2], Value::int4(3));
	}

	#[test]
	fn test_position_without_defined_value_stays_undefined() {
		let first = [Value::undefined(), Value::int4(2)];
		let second = [Value::undefined()];
		let merged = merge_arrays(&[Some(&first), Some(&second)]);
		assert_eq!(
			merged,
			vec![Value::undefined(), Value::int4(2)]
		);
	}

	#[test]
	fn test_empty_input() {
		assert!(merge_arrays(&[]).is_empty());
		assert!(merge_arrays(&[None, None]).is_empty());
	}
}
