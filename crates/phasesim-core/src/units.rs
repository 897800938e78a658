//! Compile-time unit safety for circuit quantities.
//!
//! Keeps volts, ohms, hertz and seconds from being swapped at call sites
//! that take several bare numbers in a row (the simulator entry points
//! take five of them).
//!
//! All types use `#[repr(transparent)]` and serialize as the bare number.
//!
//! ```
//! use phasesim_core::units::{Hertz, Volts};
//!
//! let v = Volts(230.0) * 2.0 - Volts(60.0);
//! assert_eq!(v.value(), 400.0);
//!
//! let omega = Hertz(50.0).angular_frequency();
//! assert!((omega - 100.0 * std::f64::consts::PI).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Macro to implement common arithmetic operations for unit types
macro_rules! impl_unit_ops {
    ($type:ty, $unit_name:literal) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $type {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{:.4} {}", self.0, $unit_name)
            }
        }

        impl $type {
            /// Get the raw numeric value
            #[inline]
            pub const fn value(self) -> f64 {
                self.0
            }
        }
    };
}

/// Voltage in volts (V)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Volts(pub f64);

impl_unit_ops!(Volts, "V");

/// Impedance magnitude in ohms (Ω)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Ohms(pub f64);

impl_unit_ops!(Ohms, "Ω");

/// Apparent power in volt-amperes (VA)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct VoltAmperes(pub f64);

impl_unit_ops!(VoltAmperes, "VA");

/// Frequency in hertz (Hz)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Hertz(pub f64);

impl_unit_ops!(Hertz, "Hz");

/// Duration in seconds (s)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Seconds(pub f64);

impl_unit_ops!(Seconds, "s");

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Radians(pub f64);

impl_unit_ops!(Radians, "rad");

impl Hertz {
    /// Angular frequency ω = 2πf in rad/s
    #[inline]
    pub fn angular_frequency(self) -> f64 {
        2.0 * PI * self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_arithmetic() {
        let v = Volts(100.0);
        assert_eq!((v + Volts(20.0)).value(), 120.0);
        assert_eq!((v - Volts(20.0)).value(), 80.0);
        assert_eq!((-v).value(), -100.0);
        assert_eq!((v * 2.0).value(), 200.0);
        assert_eq!((v / 4.0).value(), 25.0);
    }

    #[test]
    fn test_angular_frequency() {
        assert!((Hertz(60.0).angular_frequency() - 120.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_radians_arithmetic() {
        let quarter = Radians(PI / 2.0);
        assert_eq!(Radians(PI) - quarter, quarter);
        assert_eq!((-quarter).value(), -PI / 2.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Volts(230.0)), "230.0000 V");
        assert_eq!(format!("{}", VoltAmperes(12.5)), "12.5000 VA");
        assert_eq!(format!("{}", Ohms(10.0)), "10.0000 Ω");
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Hertz(50.0)).unwrap();
        assert_eq!(json, "50.0");
        let back: Seconds = serde_json::from_str("0.02").unwrap();
        assert_eq!(back, Seconds(0.02));
    }
}
