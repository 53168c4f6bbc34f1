//! Feature preprocessing
//!
//! Standardizes the four measurement columns before fitting so gradient
//! descent converges on the raw centimeter values.

mod scaler;

pub use scaler::StandardScaler;
