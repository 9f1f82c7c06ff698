use crate::time::Mjd;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The calibration model a release belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    Gain,
    ReadNoise,
    Linearity,
    Undershoot,
    LargeFlatField,
    SmallFlatField,
    TwoDBlack,
    Prf,
    /// Known bad pixels, each valid over an explicit time interval.
    Pixel,
    Geometry,
    Pointing,
    RollTime,
}

impl ParamType {
    pub const ALL: [ParamType; 12] = [
        ParamType::Gain,
        ParamType::ReadNoise,
        ParamType::Linearity,
        ParamType::Undershoot,
        ParamType::LargeFlatField,
        ParamType::SmallFlatField,
        ParamType::TwoDBlack,
        ParamType::Prf,
        ParamType::Pixel,
        ParamType::Geometry,
        ParamType::Pointing,
        ParamType::RollTime,
    ];

    /// Whether records of this type are scoped to a detector key.
    pub const fn is_keyed(self) -> bool {
        !matches!(
            self,
            ParamType::Geometry | ParamType::Pointing | ParamType::RollTime
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ParamType::Gain => "gain",
            ParamType::ReadNoise => "read_noise",
            ParamType::Linearity => "linearity",
            ParamType::Undershoot => "undershoot",
            ParamType::LargeFlatField => "large_flat_field",
            ParamType::SmallFlatField => "small_flat_field",
            ParamType::TwoDBlack => "two_d_black",
            ParamType::Prf => "prf",
            ParamType::Pixel => "pixel",
            ParamType::Geometry => "geometry",
            ParamType::Pointing => "pointing",
            ParamType::RollTime => "roll_time",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a release: its parameter type and version number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReleaseId {
    pub param_type: ParamType,
    pub version: u32,
}

impl ReleaseId {
    pub const fn new(param_type: ParamType, version: u32) -> Self {
        Self {
            param_type,
            version,
        }
    }
}

impl fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@v{}", self.param_type, self.version)
    }
}

/// A named, versioned collection of records for one parameter type
/// (a "history").
///
/// `created_at` is when the release itself was produced, which is unrelated
/// to the effective times of the records it contains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub id: ReleaseId,
    pub created_at: Mjd,
    pub description: String,
}

impl Release {
    pub fn new(
        param_type: ParamType,
        version: u32,
        created_at: Mjd,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ReleaseId::new(param_type, version),
            created_at,
            description: description.into(),
        }
    }

    pub fn param_type(&self) -> ParamType {
        self.id.param_type
    }

    pub fn version(&self) -> u32 {
        self.id.version
    }
}

/// Which release of a parameter type a query should read.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseSelector {
    /// The release with the latest creation time.
    #[default]
    Current,
    /// The latest release created at or before the given instant.
    AsOf(Mjd),
    /// An explicit version number.
    Version(u32),
}

impl fmt::Display for ReleaseSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseSelector::Current => f.write_str("current"),
            ReleaseSelector::AsOf(instant) => write!(f, "as of {}", instant),
            ReleaseSelector::Version(version) => write!(f, "version {}", version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_types() {
        assert!(ParamType::Gain.is_keyed());
        assert!(ParamType::TwoDBlack.is_keyed());
        assert!(ParamType::Pixel.is_keyed());
        assert!(!ParamType::Pointing.is_keyed());
        assert!(!ParamType::Geometry.is_keyed());
        assert!(!ParamType::RollTime.is_keyed());
    }

    #[test]
    fn test_release_display() {
        let release = Release::new(ParamType::ReadNoise, 3, Mjd(55000.0), "reprocessing");
        assert_eq!(release.id.to_string(), "read_noise@v3");
        assert_eq!(release.param_type(), ParamType::ReadNoise);
        assert_eq!(release.version(), 3);
    }
}
