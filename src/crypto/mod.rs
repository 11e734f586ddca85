//! Cryptographic collaborators of the hasher.
//!
//! Provides the key-derivation seam, salt generation, and buffer wiping.

pub mod kdf;
pub mod random;
pub mod wipe;

pub use kdf::{Argon2Kdf, Kdf};
pub use random::generate_salt;
pub use wipe::wipe;
