#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod alphabet;
mod error;
mod generator;
mod integer;
mod key;
mod midpoint;
#[cfg(feature = "serde")]
mod serde;

pub use crate::alphabet::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::integer::*;
pub use crate::key::*;
pub use crate::midpoint::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
