use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one CCD readout: the module number and its output (1-4).
///
/// Global parameters such as spacecraft pointing carry no key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DetectorKey {
    pub module: u8,
    pub output: u8,
}

impl DetectorKey {
    pub const fn new(module: u8, output: u8) -> Self {
        Self { module, output }
    }
}

impl fmt::Display for DetectorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.output)
    }
}

impl From<(u8, u8)> for DetectorKey {
    fn from((module, output): (u8, u8)) -> Self {
        Self::new(module, output)
    }
}
