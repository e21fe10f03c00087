//! Scalar type and shared numeric constants.

/// Our Real scalar type. All dimensions are millimeters.
pub type Real = f64;

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;

/// Tolerance for geometric comparisons
pub const EPSILON: Real = 1e-9;
