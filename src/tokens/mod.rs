//! Design-token resolution core.
//!
//! A token tree is a nested JSON object mapping string keys to either a
//! scalar value or another nested object. One tree holds one token
//! category (colors, spacing, typography, radii, shadows) for one theme.
//! Trees are loaded once at startup from embedded data and never mutated,
//! so lookups are pure functions and concurrent requests cannot race.
//!
//! # Modules
//!
//! - [`resolve`] — dot-notation nested-path resolution
//! - [`validate`] — lenient CSS/color value validators (advisory only)
//! - [`suggest`] — edit-distance "did you mean" suggestions and token
//!   path enumeration
//! - [`store`] — the loaded token catalog and its lookup operations

pub mod resolve;
pub mod store;
pub mod suggest;
pub mod validate;

pub use resolve::{resolve, Resolution};
pub use store::{TokenCategory, TokenLookup, TokenStore};
pub use suggest::{available_tokens, edit_distance, similar_tokens};
pub use validate::{is_valid_color, is_valid_css_value};
