//! Translation layer test modules.
//!
//! - `core`: pass-through and synthesis per statement kind
//! - `dialects`: vendor-specific quoting, literals, and failures
