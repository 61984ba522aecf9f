//! Shared primitive types used across the entire simulator.

/// A calendar year on a chart axis.
pub type Year = u16;

/// A sea-level height or delta in centimetres.
pub type Centimetres = f64;

/// A sea-level height or delta in millimetres.
pub type Millimetres = f64;
