// Rule-based career advice over a parsed resume.
// Everything here is static tables and string matching; no model calls.

pub mod fallback;
pub mod gap;
pub mod paths;
pub mod roles;
