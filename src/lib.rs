#![doc = include_str!("../README.md")]

pub use crate::error::{Error, Result};
pub use crate::great_circle::*;
pub use crate::types::*;
pub use crate::units::*;

pub mod dms;
mod error;
mod great_circle;
mod types;
pub mod units;
