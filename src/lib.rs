//! Argon2 password hashing with PHC string encoding.
//!
//! ```no_run
//! use argon2_phc::{Params, verify_encoded};
//!
//! let encoded = Params::default().hash_encoded(b"hunter2")?;
//! assert!(verify_encoded(b"hunter2", &encoded)?);
//! # Ok::<(), argon2_phc::Error>(())
//! ```

pub mod crypto;
mod error;
pub mod format;
mod hasher;
mod params;
mod record;

pub use crate::crypto::{Argon2Kdf, Kdf, wipe};
pub use crate::error::{Error, Result};
pub use crate::hasher::verify_encoded;
pub use crate::params::{Params, Variant, Version};
pub use crate::record::Record;
