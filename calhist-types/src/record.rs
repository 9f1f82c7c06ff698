use crate::key::DetectorKey;
use crate::time::Mjd;
use serde::{Deserialize, Serialize};

/// A two-dimensional image of calibration values, stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Raster {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}

impl Raster {
    /// Build a raster, returning `None` when `data` does not hold exactly
    /// `rows * cols` values.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        if rows.checked_mul(cols)? != data.len() {
            return None;
        }
        Some(Self { rows, cols, data })
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }
}

/// The value carried by a calibration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    Scalar(f64),
    Vector(Vec<f64>),
    Raster(Raster),
}

impl Payload {
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Scalar(_) => "scalar",
            Payload::Vector(_) => "vector",
            Payload::Raster(_) => "raster",
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Payload::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[f64]> {
        match self {
            Payload::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_raster(&self) -> Option<&Raster> {
        match self {
            Payload::Raster(r) => Some(r),
            _ => None,
        }
    }

    /// Approximate heap footprint in bytes.
    pub fn size_bytes(&self) -> usize {
        match self {
            Payload::Scalar(_) => std::mem::size_of::<f64>(),
            Payload::Vector(v) => v.len() * std::mem::size_of::<f64>(),
            Payload::Raster(r) => r.data.len() * std::mem::size_of::<f64>(),
        }
    }
}

/// One calibration value, valid from `effective_time` onwards.
///
/// Records are immutable once stored; corrections are new records with a
/// later effective time, or a whole new release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    pub effective_time: Mjd,
    pub detector_key: Option<DetectorKey>,
    pub payload: Payload,
}

impl ParameterRecord {
    /// A record scoped to one detector readout.
    pub fn keyed(effective_time: Mjd, key: DetectorKey, payload: Payload) -> Self {
        Self {
            effective_time,
            detector_key: Some(key),
            payload,
        }
    }

    /// An instrument-wide record.
    pub fn global(effective_time: Mjd, payload: Payload) -> Self {
        Self {
            effective_time,
            detector_key: None,
            payload,
        }
    }
}
