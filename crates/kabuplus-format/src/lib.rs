//! KDB schema conversion for KABU+ daily stock prices.
//!
//! - [`replace_market`] - Rewrites market segment labels
//! - [`to_kdb`] - Maps one feed row to a [`KdbRow`](kabuplus_types::KdbRow)
//! - [`KdbWriter`] - CSV writer for KDB rows
//! - [`transform_to_kdb`] - Converts a whole decoded feed

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod kdb;
mod market;
mod writer;

pub use kdb::{thousand_yen, to_kdb};
pub use market::{MARKET_LABELS, replace_market};
pub use writer::{KdbWriter, TransformError, transform_to_kdb};
