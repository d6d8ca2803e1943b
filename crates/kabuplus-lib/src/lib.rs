//! Fetch and convert KABU+ daily Japanese stock prices.
//!
//! This is a facade crate that re-exports functionality from the kabuplus
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use kabuplus_lib::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let client = KabuPlus::new("user", "password")?;
//!     let date = chrono::NaiveDate::from_ymd_opt(2020, 1, 10).unwrap();
//!
//!     let kdb = client.fetch_transformed_prices(date)?;
//!     std::io::Write::write_all(&mut std::io::stdout(), &kdb)?;
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use kabuplus_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use kabuplus_fetch::{
    ClientConfig, DecodeError, FetchError, KabuPlus, PriceClient, decode_shift_jis, url,
};

// Re-export conversion
#[cfg(feature = "format")]
pub use kabuplus_format::{
    KdbWriter, MARKET_LABELS, TransformError, replace_market, thousand_yen, to_kdb,
    transform_to_kdb,
};

/// Prelude module for convenient imports.
///
/// ```
/// use kabuplus_lib::prelude::*;
/// ```
pub mod prelude {
    pub use kabuplus_types::{Credentials, KabuPlusError, KdbRow, PriceRow, Result};

    #[cfg(feature = "fetch")]
    pub use kabuplus_fetch::{ClientConfig, KabuPlus};

    #[cfg(feature = "format")]
    pub use kabuplus_format::transform_to_kdb;
}
