//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for every `last_update` field.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Move `previous` forward to `candidate`, never backwards.
///
/// Wall-clock adjustments can make `now()` go back in time; a `last_update`
/// keeps its previous value in that case.
#[must_use]
pub fn advance(previous: Timestamp, candidate: Timestamp) -> Timestamp {
    previous.max(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_advance_to_later_timestamp() {
        let earlier = now();
        let later = earlier + TimeDelta::seconds(5);
        assert_eq!(advance(earlier, later), later);
    }

    #[test]
    fn should_keep_previous_when_clock_goes_back() {
        let previous = now();
        let stepped_back = previous - TimeDelta::seconds(30);
        assert_eq!(advance(previous, stepped_back), previous);
    }
}
