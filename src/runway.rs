use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::{PerfError, FT_TO_M};
use crate::wind::headwind_component;

/// Side letter of a parallel runway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Center,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Center => Side::Center,
        }
    }

    fn letter(self) -> char {
        match self {
            Side::Left => 'L',
            Side::Right => 'R',
            Side::Center => 'C',
        }
    }
}

/// Parsed runway identifier: magnetic heading tens (1-36) plus optional side letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunwayIdent {
    pub designator: u8,
    pub side: Option<Side>,
}

impl RunwayIdent {
    /// Identifier of the opposite runway end. Involution: applying twice
    /// returns the original identifier.
    pub fn reciprocal(self) -> Self {
        Self {
            designator: ((self.designator + 18 - 1) % 36) + 1,
            side: self.side.map(Side::opposite),
        }
    }

    /// Magnetic heading in degrees.
    pub fn heading_deg(self) -> f64 {
        f64::from(self.designator) * 10.0
    }
}

impl FromStr for RunwayIdent {
    type Err = PerfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits: String = s.chars().take_while(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(PerfError::InvalidRunwayFormat(format!(
                "no numeric designator in '{s}'"
            )));
        }
        let designator: u8 = digits
            .parse()
            .map_err(|_| PerfError::InvalidRunwayFormat(format!("bad designator in '{s}'")))?;
        if designator == 0 || designator > 36 {
            return Err(PerfError::InvalidRunwayFormat(format!(
                "designator {designator} outside 01-36 in '{s}'"
            )));
        }
        let rest = &s[digits.len()..];
        let side = match rest {
            "" => None,
            "L" => Some(Side::Left),
            "R" => Some(Side::Right),
            "C" => Some(Side::Center),
            _ => {
                return Err(PerfError::InvalidRunwayFormat(format!(
                    "unexpected suffix '{rest}' in '{s}'"
                )))
            }
        };
        Ok(Self { designator, side })
    }
}

impl fmt::Display for RunwayIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.designator)?;
        if let Some(side) = self.side {
            write!(f, "{}", side.letter())?;
        }
        Ok(())
    }
}

/// Runway length in whole meters from a database length in feet.
pub fn length_m(length_ft: f64) -> i32 {
    (length_ft * FT_TO_M) as i32
}

/// Signed slope percent in the direction of travel, positive uphill.
pub fn slope_pct(elev_start_ft: f64, elev_end_ft: f64, length_ft: f64) -> Result<f64, PerfError> {
    if length_ft <= 0.0 {
        return Err(PerfError::InvalidInput(format!(
            "runway length must be positive, got {length_ft} ft"
        )));
    }
    Ok((elev_end_ft - elev_start_ft) / length_ft * 100.0)
}

/// Database record for one runway end, as supplied by the external
/// airport/runway lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunwayRecord {
    pub identifier: String,
    pub length_ft: f64,
    pub elevation_ft: f64,
    pub slope_pct: f64,
}

impl RunwayRecord {
    /// Builds a record from the two end elevations of a runway database
    /// row, deriving the signed slope in the direction of travel.
    pub fn from_ends(
        identifier: String,
        length_ft: f64,
        elev_start_ft: f64,
        elev_end_ft: f64,
    ) -> Result<Self, PerfError> {
        Ok(Self {
            identifier,
            length_ft,
            elevation_ft: elev_start_ft,
            slope_pct: slope_pct(elev_start_ft, elev_end_ft, length_ft)?,
        })
    }
}

/// Runway state derived for one computation: geometry plus the wind
/// component resolved against the runway heading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunwayState {
    pub ident: RunwayIdent,
    pub reciprocal: RunwayIdent,
    pub length_m: i32,
    pub elevation_ft: f64,
    pub slope_pct: f64,
    pub headwind_kt: i32,
}

impl RunwayState {
    pub fn derive(
        record: &RunwayRecord,
        wind_dir_deg: f64,
        wind_speed_kt: f64,
    ) -> Result<Self, PerfError> {
        if record.length_ft <= 0.0 {
            return Err(PerfError::InvalidInput(format!(
                "runway length must be positive, got {} ft",
                record.length_ft
            )));
        }
        let ident: RunwayIdent = record.identifier.parse()?;
        Ok(Self {
            ident,
            reciprocal: ident.reciprocal(),
            length_m: length_m(record.length_ft),
            elevation_ft: record.elevation_ft,
            slope_pct: record.slope_pct,
            headwind_kt: headwind_component(wind_dir_deg, wind_speed_kt, ident.heading_deg()),
        })
    }
}
