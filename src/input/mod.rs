//! Run inputs
//!
//! This module validates the base URL and loads the candidate wordlist
//! before any request is dispatched.

pub mod target;
pub mod wordlist;

// Re-export commonly used items
pub use target::{is_valid_url, validate_base_url};
pub use wordlist::{Wordlist, ensure_wordlist_exists, load_wordlist, parse_candidates};
