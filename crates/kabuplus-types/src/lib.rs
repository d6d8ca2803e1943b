//! Core types for the KABU+ daily stock price fetcher.
//!
//! - [`Credentials`] - Basic-auth login for the KABU+ WebDAV endpoint
//! - [`PriceRow`] - A row of the `japan-all-stock-prices` feed
//! - [`KdbRow`] - A row of the 9-column KDB schema
//! - [`KabuPlusError`] - Umbrella error returned by the price client

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod credentials;
mod error;
mod row;

pub use credentials::Credentials;
pub use error::{KabuPlusError, Result, RowWidthError};
pub use row::{KdbRow, PriceRow};
