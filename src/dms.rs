//! Degrees/minutes/seconds angles
//!
//! This is the thin text boundary of the crate. Aviation charts and flight
//! planning tools write angles as `D:M:S` (for example `37:37:00`), with the
//! hemisphere implied by context rather than by sign.

use crate::error::{Error, Result};
use crate::units::{degrees_to_radians, dms_to_decimal_degrees};
use std::fmt;
use std::str::FromStr;

/// An unsigned angle split into degrees, minutes and seconds, plus a sign flag
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dms {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    /// Set when the text carried a leading `-`
    pub negative: bool,
}

impl Dms {
    /// Create a positive DMS angle, validating each component
    ///
    /// Degrees must be non-negative; minutes and seconds must lie in `[0, 60)`.
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Result<Self> {
        check_component("degrees", degrees, f64::INFINITY)?;
        check_component("minutes", minutes, 60.0)?;
        check_component("seconds", seconds, 60.0)?;

        Ok(Self {
            degrees,
            minutes,
            seconds,
            negative: false,
        })
    }

    /// Flip the sign of the angle
    pub fn negate(self) -> Self {
        Self {
            negative: !self.negative,
            ..self
        }
    }

    pub fn to_decimal_degrees(&self) -> f64 {
        let value = dms_to_decimal_degrees(self.degrees, self.minutes, self.seconds);
        if self.negative { -value } else { value }
    }

    pub fn to_radians(&self) -> f64 {
        degrees_to_radians(self.to_decimal_degrees())
    }
}

fn check_component(component: &'static str, value: f64, upper: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 && value < upper {
        Ok(())
    } else {
        Err(Error::DmsOutOfRange { component, value })
    }
}

impl FromStr for Dms {
    type Err = Error;

    /// Parse `D`, `D:M` or `D:M:S`, each component a decimal number
    ///
    /// A single leading `-` marks the angle as negative. Whitespace around the
    /// whole text is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidDms {
            input: s.to_string(),
            reason,
        };

        let text = s.trim();
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        if text.is_empty() {
            return Err(invalid("empty input"));
        }

        let mut components = [0.0; 3];
        let mut count = 0;
        for part in text.split(':') {
            if count == components.len() {
                return Err(invalid("more than three components"));
            }
            components[count] = part
                .trim()
                .parse::<f64>()
                .map_err(|_| invalid("component is not a number"))?;
            count += 1;
        }

        let [degrees, minutes, seconds] = components;
        let dms = Dms::new(degrees, minutes, seconds)?;
        Ok(if negative { dms.negate() } else { dms })
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{sign}{}:{}:{}",
            self.degrees, self.minutes, self.seconds
        )
    }
}
