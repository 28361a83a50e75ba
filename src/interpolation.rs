// Interpolation laws of the ENDF/ACE TAB1 format

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

use crate::error::DataFormatError;

/// Law used between two adjacent tabulated points.
///
/// The discriminants are the ENDF `INT` codes stored in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Interpolation {
    /// y is constant across the interval (takes the left value)
    Histogram = 1,
    /// y linear in x
    LinLin = 2,
    /// y linear in ln(x)
    LinLog = 3,
    /// ln(y) linear in x
    LogLin = 4,
    /// ln(y) linear in ln(x)
    LogLog = 5,
}

impl TryFrom<u32> for Interpolation {
    type Error = DataFormatError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Interpolation::Histogram),
            2 => Ok(Interpolation::LinLin),
            3 => Ok(Interpolation::LinLog),
            4 => Ok(Interpolation::LogLin),
            5 => Ok(Interpolation::LogLog),
            _ => Err(DataFormatError::InvalidInterpolation(code)),
        }
    }
}

impl From<Interpolation> for u32 {
    fn from(law: Interpolation) -> Self {
        law as u32
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Interpolation::Histogram => "histogram",
            Interpolation::LinLin => "lin-lin",
            Interpolation::LinLog => "lin-log",
            Interpolation::LogLin => "log-lin",
            Interpolation::LogLog => "log-log",
        };
        f.write_str(name)
    }
}

impl Interpolation {
    /// ENDF `INT` code of this law.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Interpolate at `x` inside the interval `[x1, x2]` with end values `y1`, `y2`.
    #[inline]
    pub fn interpolate(self, x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
        match self {
            Interpolation::Histogram => y1,
            Interpolation::LinLin => y1 + (x - x1) / (x2 - x1) * (y2 - y1),
            Interpolation::LinLog => y1 + (x / x1).ln() / (x2 / x1).ln() * (y2 - y1),
            Interpolation::LogLin => y1 * ((x - x1) / (x2 - x1) * (y2 / y1).ln()).exp(),
            Interpolation::LogLog => {
                let n = (y2 / y1).ln() / (x2 / x1).ln();
                y1 * (x / x1).powf(n)
            }
        }
    }

    /// Integral of the interpolant over `[a, b]`, with `x1 <= a <= b <= x2`.
    pub fn integrate(self, a: f64, b: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
        if b <= a {
            return 0.0;
        }
        match self {
            Interpolation::Histogram => y1 * (b - a),
            Interpolation::LinLin => {
                let ya = self.interpolate(a, x1, y1, x2, y2);
                let yb = self.interpolate(b, x1, y1, x2, y2);
                0.5 * (ya + yb) * (b - a)
            }
            Interpolation::LinLog => {
                // y = y1 + k ln(x/x1), antiderivative y1 x + k (x ln(x/x1) - x)
                let k = (y2 - y1) / (x2 / x1).ln();
                let antiderivative = |x: f64| y1 * x + k * (x * (x / x1).ln() - x);
                antiderivative(b) - antiderivative(a)
            }
            Interpolation::LogLin => {
                let slope = (y2 / y1).ln() / (x2 - x1);
                if slope.abs() < 1e-12 {
                    return y1 * (b - a);
                }
                let ya = self.interpolate(a, x1, y1, x2, y2);
                let yb = self.interpolate(b, x1, y1, x2, y2);
                (yb - ya) / slope
            }
            Interpolation::LogLog => {
                let n = (y2 / y1).ln() / (x2 / x1).ln();
                if (n + 1.0).abs() < 1e-12 {
                    return y1 * x1 * (b / a).ln();
                }
                let ya = self.interpolate(a, x1, y1, x2, y2);
                let yb = self.interpolate(b, x1, y1, x2, y2);
                (yb * b - ya * a) / (n + 1.0)
            }
        }
    }
}
