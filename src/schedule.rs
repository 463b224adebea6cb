use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::error::BookingError;

/// One slot the generator plans to create.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotPlan {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Validated inputs for bulk slot generation. Expansion is the cartesian
/// product of the matching dates and the time ranges, produced lazily so a
/// preview can take a prefix without materializing everything.
///
/// Weekday indices follow the calendar convention 0=Sunday .. 6=Saturday.
/// Duplicate (date, start, end) tuples against slots that already exist are
/// not filtered here; re-running an overlapping request creates duplicates.
#[derive(Debug, Clone)]
pub struct SlotSchedule {
    start_date: NaiveDate,
    end_date: NaiveDate,
    weekdays: Vec<u32>,
    time_ranges: Vec<(NaiveTime, NaiveTime)>,
}

impl SlotSchedule {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        weekdays: Vec<u32>,
        time_ranges: Vec<(NaiveTime, NaiveTime)>,
    ) -> Result<Self, BookingError> {
        if start_date > end_date {
            return Err(BookingError::Validation(
                "Start date must not be after end date".to_string(),
            ));
        }
        for &weekday in &weekdays {
            if weekday > 6 {
                return Err(BookingError::Validation(format!(
                    "Invalid weekday index: {}",
                    weekday
                )));
            }
        }
        for (start_time, end_time) in &time_ranges {
            crate::validate::validate_time_range(start_time, end_time)?;
        }

        Ok(Self {
            start_date,
            end_date,
            weekdays,
            time_ranges,
        })
    }

    /// Planned slots in order: dates ascending through the inclusive range,
    /// time ranges in their input order within each date.
    pub fn iter(&self) -> impl Iterator<Item = SlotPlan> + '_ {
        let end_date = self.end_date;
        self.start_date
            .iter_days()
            .take_while(move |date| *date <= end_date)
            .filter(move |date| {
                self.weekdays
                    .contains(&date.weekday().num_days_from_sunday())
            })
            .flat_map(move |date| {
                self.time_ranges
                    .iter()
                    .map(move |&(start_time, end_time)| SlotPlan {
                        date,
                        start_time,
                        end_time,
                    })
            })
    }

    pub fn total(&self) -> usize {
        self.iter().count()
    }
}
