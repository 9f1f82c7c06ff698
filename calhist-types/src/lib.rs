//! # calhist-types
//!
//! Core data types for the calhist calibration parameter store.
//!
//! - **Time**: `Mjd`, the mission time scale used for effective and creation times
//! - **Keys**: `DetectorKey`, the (module, output) pair of a CCD readout
//! - **Releases**: `ParamType`, `Release`, `ReleaseId`, `ReleaseSelector`
//! - **Records**: `ParameterRecord`, `Payload`, `Raster`
//!
//! All types are serializable with Serde.
//!
//! ## Examples
//!
//! ```rust
//! use calhist_types::key::DetectorKey;
//! use calhist_types::record::{ParameterRecord, Payload};
//! use calhist_types::time::Mjd;
//!
//! let gain = ParameterRecord::keyed(Mjd(55000.0), DetectorKey::new(2, 1), Payload::Scalar(110.5));
//! assert_eq!(gain.detector_key, Some(DetectorKey::new(2, 1)));
//! ```

pub mod key;
pub mod record;
pub mod release;
pub mod stats;
pub mod time;
