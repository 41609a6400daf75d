//! classic-ciphers: classical substitution ciphers
//!
//! Pure-function implementations of two historical ciphers:
//!
//! - **Playfair**: 5x5 key-square digraph substitution with the classic
//!   row/column/rectangle rules and filler-letter padding
//! - **Caesar**: fixed-shift letter substitution, case-preserving
//!
//! ## Security Warning
//!
//! These are historical encoding schemes, trivially breakable with pen and
//! paper. Educational use only; never protect real data with them.
//!
//! ## Examples
//!
//! ```rust
//! use classic_ciphers::playfair;
//!
//! let cipher = playfair::encrypt("Hide the gold in the tree stump", "playfair example")?;
//! assert_eq!(cipher, "BMODZBXDNABEKUDMUIXMMOUVIF");
//! # Ok::<(), playfair::Error>(())
//! ```

pub mod caesar;
pub mod playfair;

// Re-export the Playfair core types
pub use playfair::{Error as PlayfairError, KeySquare};
