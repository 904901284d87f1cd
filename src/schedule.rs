use crate::status::{PickupStatus, UnknownStatus};
use chrono::{Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of slots per week; the grid covers Monday through Friday.
pub const DAYS_PER_WEEK: usize = 5;

pub const WEEKDAYS: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

pub const DAY_NAMES: [&str; DAYS_PER_WEEK] =
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

#[derive(Debug, Clone)]
pub enum ScheduleError {
    WeekOutOfRange { index: usize, weeks: usize },
    DayOutOfRange { index: usize },
    UnknownStatus { value: String },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::WeekOutOfRange { index, weeks } => write!(
                f,
                "week index {index} is out of range for a schedule of {weeks} weeks"
            ),
            ScheduleError::DayOutOfRange { index } => write!(
                f,
                "day index {index} is out of range for a {DAYS_PER_WEEK}-day week"
            ),
            ScheduleError::UnknownStatus { value } => {
                write!(f, "unknown pickup status '{value}'")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<UnknownStatus> for ScheduleError {
    fn from(value: UnknownStatus) -> Self {
        ScheduleError::UnknownStatus { value: value.value }
    }
}

/// One weekday slot holding a pickup status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub weekday: Weekday,
    pub status: PickupStatus,
}

/// Five weekday slots anchored to the Monday the week starts on.
///
/// The fixed-length array is what enforces the 5-day week shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub start: NaiveDate,
    pub days: [Day; DAYS_PER_WEEK],
}

impl Week {
    /// A fresh week with every day at the default status.
    pub fn starting(start: NaiveDate) -> Self {
        Self::with_statuses(start, [PickupStatus::DEFAULT; DAYS_PER_WEEK])
    }

    pub fn with_statuses(start: NaiveDate, statuses: [PickupStatus; DAYS_PER_WEEK]) -> Self {
        let days = std::array::from_fn(|i| Day {
            weekday: WEEKDAYS[i],
            status: statuses[i],
        });
        Self { start, days }
    }

    /// Calendar dates of the five slots, Monday first.
    pub fn dates(&self) -> [NaiveDate; DAYS_PER_WEEK] {
        std::array::from_fn(|i| self.start + Duration::days(i as i64))
    }

    /// Row label carrying the week-of-year number, e.g. `Week 19`.
    pub fn label(&self) -> String {
        format!("Week {}", self.start.format("%W"))
    }
}

/// The full in-memory grid: an ordered run of weeks, earliest first.
///
/// All edits funnel through [`Schedule::set_status`], [`Schedule::add_week`]
/// and [`Schedule::remove_week`]; nothing else mutates the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    weeks: Vec<Week>,
    start: NaiveDate,
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}

impl Schedule {
    /// Empty schedule anchored at the default term start.
    pub fn new() -> Self {
        Self::new_with_start(NaiveDate::from_ymd_opt(2025, 5, 12).unwrap())
    }

    /// Empty schedule whose first added week will start on `start`.
    pub fn new_with_start(start: NaiveDate) -> Self {
        Self {
            weeks: Vec::new(),
            start,
        }
    }

    /// The grid both binaries start from.
    pub fn current_term() -> Self {
        use PickupStatus::{Available, Holiday, Office, Travel};

        let mut schedule = Self::new();
        for statuses in [
            [Available, Available, Available, Available, Office],
            [Available, Travel, Office, Available, Office],
            [Available, Available, Available, Holiday, Holiday],
            [Office, Available, Available, Available, Available],
            [Holiday, Available, Available, Holiday, Holiday],
            [Available, Available, Available, Available, Holiday],
        ] {
            let start = schedule.next_week_start();
            schedule.weeks.push(Week::with_statuses(start, statuses));
        }
        schedule
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    fn next_week_start(&self) -> NaiveDate {
        match self.weeks.last() {
            Some(week) => week.start + Duration::days(7),
            None => self.start,
        }
    }

    /// Set one day's status in place.
    ///
    /// An invalid position leaves the grid untouched.
    pub fn set_status(
        &mut self,
        week_index: usize,
        day_index: usize,
        status: PickupStatus,
    ) -> Result<(), ScheduleError> {
        let weeks = self.weeks.len();
        let week = self
            .weeks
            .get_mut(week_index)
            .ok_or(ScheduleError::WeekOutOfRange {
                index: week_index,
                weeks,
            })?;
        let day = week
            .days
            .get_mut(day_index)
            .ok_or(ScheduleError::DayOutOfRange { index: day_index })?;
        day.status = status;
        Ok(())
    }

    /// Append a week of default-status days dated after the current last week.
    pub fn add_week(&mut self) {
        let start = self.next_week_start();
        self.weeks.push(Week::starting(start));
    }

    /// Remove the week at `week_index`, shifting later weeks down.
    ///
    /// Removing the only remaining week is permitted and leaves the schedule
    /// empty. Remaining weeks keep their own start dates.
    pub fn remove_week(&mut self, week_index: usize) -> Result<(), ScheduleError> {
        if week_index >= self.weeks.len() {
            return Err(ScheduleError::WeekOutOfRange {
                index: week_index,
                weeks: self.weeks.len(),
            });
        }
        self.weeks.remove(week_index);
        Ok(())
    }
}
