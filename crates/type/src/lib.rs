// Copyright (c) tallydb.com 2025
// This file is licensed under the MIT, see license.md file

pub mod error;
pub mod value;

pub use error::{Error, diagnostic::Diagnostic};
pub use value::{Decimal, OrderedF64, Type, Value, VarInt};

pub type Result<T> = std::result::Result<T, Error>;
