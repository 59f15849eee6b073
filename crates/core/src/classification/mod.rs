//! HS-hierarchy classification helpers.
//!
//! The HS nomenclature is hierarchical: chapter (2 digits), heading (4),
//! subheading (6), full TARIC code (10). When an exact 10-digit code has no
//! measures, the prefix index recommends the closest known codes by longest
//! shared prefix.

mod prefix_index;

pub use prefix_index::{HsMatch, HsPrefixIndex};
