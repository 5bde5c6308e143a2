//! Design tokens
//!
//! Tokens are the themeable values of the design system:
//! - Colors (brand, surface, text, border, status, component-scoped)
//! - Typography (families, weights, sizes, line heights)
//! - Spacing and radii
//! - Shadows and effects
//! - Motion durations and easings

mod catalog;
mod category;

pub use catalog::*;
pub use category::*;
