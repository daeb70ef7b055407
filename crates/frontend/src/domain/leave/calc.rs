//! Working-day counting for leave applications.
//!
//! The UI shows this estimate immediately; the server recount (which also
//! applies the holiday calendar) replaces it before submission when available.

use chrono::{Datelike, NaiveDate, Weekday};
use contracts::leave::DayType;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DayCountError {
    #[error("종료일이 시작일보다 빠릅니다")]
    EndBeforeStart,
    #[error("반차는 시작일과 종료일이 같아야 합니다")]
    HalfDayRange,
}

/// Counts requested leave days, weekends excluded. A half-day request must
/// cover exactly one date and always counts as 0.5.
pub fn count_leave_days(
    day_type: DayType,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<f64, DayCountError> {
    if end < start {
        return Err(DayCountError::EndBeforeStart);
    }

    if day_type.is_half_day() {
        if start != end {
            return Err(DayCountError::HalfDayRange);
        }
        return Ok(0.5);
    }

    let mut days = 0.0;
    let mut cursor = start;
    while cursor <= end {
        if !matches!(cursor.weekday(), Weekday::Sat | Weekday::Sun) {
            days += 1.0;
        }
        cursor = match cursor.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_weekdays_only() {
        // 2024-03-11 (Mon) .. 2024-03-17 (Sun): five working days
        let days = count_leave_days(DayType::Annual, date(2024, 3, 11), date(2024, 3, 17)).unwrap();
        assert_eq!(days, 5.0);
    }

    #[test]
    fn weekend_only_span_counts_zero() {
        let days = count_leave_days(DayType::Annual, date(2024, 3, 16), date(2024, 3, 17)).unwrap();
        assert_eq!(days, 0.0);
    }

    #[test]
    fn single_weekday_counts_one() {
        let days = count_leave_days(DayType::Annual, date(2024, 3, 13), date(2024, 3, 13)).unwrap();
        assert_eq!(days, 1.0);
    }

    #[test]
    fn half_day_is_half_on_single_date() {
        let days = count_leave_days(DayType::HalfDay, date(2024, 3, 13), date(2024, 3, 13)).unwrap();
        assert_eq!(days, 0.5);
    }

    #[test]
    fn half_day_rejects_multi_day_range() {
        let err = count_leave_days(DayType::HalfDay, date(2024, 3, 13), date(2024, 3, 14));
        assert_eq!(err, Err(DayCountError::HalfDayRange));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = count_leave_days(DayType::Annual, date(2024, 3, 14), date(2024, 3, 13));
        assert_eq!(err, Err(DayCountError::EndBeforeStart));
    }
}
