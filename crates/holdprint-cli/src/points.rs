//! Parsing of `x,y x,y ...` point lists from the command line.

use std::str::FromStr;

use holdprint_core::{validate_points, Point};
use thiserror::Error;

/// Errors raised while parsing a point list.
#[derive(Error, Debug, PartialEq)]
pub enum PointParseError {
    /// A pair was not of the form `x,y`.
    #[error("expected 'x,y' but got '{0}'")]
    Malformed(String),

    /// A coordinate did not parse as a number.
    #[error("invalid coordinate '{0}'")]
    BadNumber(String),

    /// A coordinate parsed but is NaN or infinite.
    #[error("{0}")]
    NotFinite(String),
}

/// A whitespace-separated list of `x,y` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct PointList(pub Vec<Point>);

impl PointList {
    /// Consumes the list and returns its points.
    pub fn into_inner(self) -> Vec<Point> {
        self.0
    }
}

fn parse_coord(raw: &str) -> Result<f64, PointParseError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| PointParseError::BadNumber(raw.trim().to_string()))
}

impl FromStr for PointList {
    type Err = PointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let points = s
            .split_whitespace()
            .map(|pair| {
                let (x, y) = pair
                    .split_once(',')
                    .ok_or_else(|| PointParseError::Malformed(pair.to_string()))?;
                Ok(Point::new(parse_coord(x)?, parse_coord(y)?))
            })
            .collect::<Result<Vec<_>, PointParseError>>()?;

        validate_points(&points).map_err(|e| PointParseError::NotFinite(e.to_string()))?;
        Ok(Self(points))
    }
}
