//! Error types for the luach-holidays crate.

use luach_hdate::HDateError;
use luach_sedra::SedraError;

/// Error type for all fallible operations in the luach-holidays crate.
///
/// Holiday rules never reject a valid year on their own; every failure
/// comes from constructing a date or consulting the reading schedule.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HolidayError {
    /// Returned when a holiday date could not be constructed, usually
    /// because the year is below 1.
    #[error(transparent)]
    Date(#[from] HDateError),

    /// Returned when the Torah reading schedule needed for Shabbat Shirah
    /// is unavailable.
    #[error("reading schedule unavailable: {0}")]
    Sedra(#[from] SedraError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_wraps_date_error() {
        let e: HolidayError = HDateError::InvalidYear { year: -3 }.into();
        assert_eq!(e.to_string(), "invalid Hebrew year: -3 (must be >= 1)");
    }

    #[test]
    fn error_wraps_sedra_error() {
        let e: HolidayError = SedraError::PortionNotFound {
            year: 5783,
            number: 16,
        }
        .into();
        assert_eq!(
            e.to_string(),
            "reading schedule unavailable: portion 16 is not read separately in year 5783"
        );
    }

    #[test]
    fn error_is_std_error_and_send_sync() {
        fn assert_traits<T: std::error::Error + Send + Sync + 'static>() {}
        assert_traits::<HolidayError>();
    }

    #[test]
    fn error_clone_and_eq() {
        let e = HolidayError::Date(HDateError::GregorianYearZero);
        assert_eq!(e.clone(), e);
    }
}
