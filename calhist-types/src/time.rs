use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// MJD of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_MJD: f64 = 40587.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// A Modified Julian Date.
///
/// Used both for the effective time of a calibration record and for the
/// creation time of a release. Equality and ordering follow `f64::total_cmp`,
/// so sorting a series and looking up an exact time agree on what "equal"
/// means. The one exception is zero: `-0.0` and `0.0` compare and hash equal.
///
/// # Examples
///
/// ```
/// use calhist_types::time::Mjd;
///
/// let a = Mjd(55000.0);
/// let b = Mjd(55000.5);
/// assert!(a < b);
/// assert_eq!(a, Mjd(55000.0));
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mjd(pub f64);

impl Mjd {
    /// The current wall-clock time as an MJD.
    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    /// Convert a wall-clock instant to an MJD. Instants before the Unix
    /// epoch are mapped to negative offsets from it.
    pub fn from_system_time(time: SystemTime) -> Self {
        let offset = match time.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs_f64(),
            Err(e) => -e.duration().as_secs_f64(),
        };
        Mjd(UNIX_EPOCH_MJD + offset / SECONDS_PER_DAY)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl PartialEq for Mjd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Mjd {}

impl PartialOrd for Mjd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Mjd {
    fn cmp(&self, other: &Self) -> Ordering {
        // -0.0 and 0.0 are adjacent under total_cmp, so merging them keeps the order total
        if self.0 == 0.0 && other.0 == 0.0 {
            return Ordering::Equal;
        }
        self.0.total_cmp(&other.0)
    }
}

impl std::hash::Hash for Mjd {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let value = if self.0 == 0.0 { 0.0f64 } else { self.0 };
        value.to_bits().hash(state);
    }
}

impl From<f64> for Mjd {
    fn from(value: f64) -> Self {
        Mjd(value)
    }
}

impl fmt::Display for Mjd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MJD {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_total_order() {
        let mut times = vec![Mjd(3.0), Mjd(-1.0), Mjd(2.5), Mjd(0.0)];
        times.sort();
        assert_eq!(times, vec![Mjd(-1.0), Mjd(0.0), Mjd(2.5), Mjd(3.0)]);
    }

    #[test]
    fn test_nan_is_equal_to_itself() {
        assert_eq!(Mjd(f64::NAN), Mjd(f64::NAN));
        assert!(Mjd(f64::INFINITY) < Mjd(f64::NAN));
    }

    #[test]
    fn test_signed_zero_is_one_time() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        assert_eq!(Mjd(-0.0), Mjd(0.0));
        assert!(Mjd(-0.0) > Mjd(-1e-300));
        assert!(Mjd(0.0) < Mjd(1e-300));

        let hash = |t: Mjd| {
            let mut hasher = DefaultHasher::new();
            t.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(Mjd(-0.0)), hash(Mjd(0.0)));
    }

    #[test]
    fn test_from_system_time() {
        assert_eq!(Mjd::from_system_time(UNIX_EPOCH), Mjd(UNIX_EPOCH_MJD));

        let one_day = UNIX_EPOCH + Duration::from_secs(86_400);
        assert_eq!(Mjd::from_system_time(one_day), Mjd(UNIX_EPOCH_MJD + 1.0));
    }
}
