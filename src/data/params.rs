//! Display parameters edited through the numeric text inputs.
//!
//! Neither value affects the curve geometry; both are only rendered as labels.

use crate::error::ParamError;

pub const DEFAULT_MAX_ALTITUDE: f64 = 100.0;
pub const DEFAULT_GEOID_UNDULATION: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayParameters {
    /// Maximum altitude (height above ellipsoid) in metres, always `> 0`.
    pub max_altitude: f64,
    /// Geoid undulation (geoidal separation) in metres.
    pub geoid_undulation: f64,
}

impl Default for DisplayParameters {
    fn default() -> Self {
        Self {
            max_altitude: DEFAULT_MAX_ALTITUDE,
            geoid_undulation: DEFAULT_GEOID_UNDULATION,
        }
    }
}

impl DisplayParameters {
    pub fn max_altitude_label(&self) -> String {
        format!("Max. Altitude (HAE): {} m", self.max_altitude)
    }

    pub fn geoid_undulation_label(&self) -> String {
        format!("Geoidal Separation: {} m", self.geoid_undulation)
    }
}

/// Parse free text as a finite number.
pub fn parse_finite(text: &str) -> Result<f64, ParamError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParamError::Empty);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ParamError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(ParamError::NotFinite);
    }
    Ok(value)
}

/// Parse a maximum altitude: finite and strictly positive.
pub fn parse_max_altitude(text: &str) -> Result<f64, ParamError> {
    let value = parse_finite(text)?;
    if value <= 0.0 {
        return Err(ParamError::NotPositive);
    }
    Ok(value)
}

/// Parse a geoid undulation: any finite number, including negative values.
pub fn parse_geoid_undulation(text: &str) -> Result<f64, ParamError> {
    parse_finite(text)
}
