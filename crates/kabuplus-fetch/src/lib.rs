//! HTTP client and Shift-JIS decoding for KABU+ daily stock prices.
//!
//! This crate provides the download pipeline:
//!
//! - [`url::price_url`] - Constructs dated feed URLs
//! - [`PriceClient`] - Blocking HTTP client with basic authentication
//! - [`decode::decode_shift_jis`] - Shift-JIS to UTF-8 decoding
//! - [`KabuPlus`] - Fetch, decode and optionally convert in one call

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod decode;
mod prices;
pub mod url;

pub use client::{ClientConfig, FetchError, PriceClient};
pub use decode::{DecodeError, decode_shift_jis};
pub use prices::KabuPlus;
