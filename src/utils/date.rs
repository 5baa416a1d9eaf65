use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Canonical day key: the day ordinal counted from 0001-01-01.
/// Used both for occupancy tracking and for range iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(pub i32);

impl From<NaiveDate> for DayKey {
    fn from(d: NaiveDate) -> Self {
        DayKey(d.num_days_from_ce())
    }
}

/// Every day of `[start, end]`, both ends included. Empty when start > end.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

/// Same walk as [`days_inclusive`], yielding canonical keys.
pub fn day_keys_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = DayKey> {
    let (from, to) = (DayKey::from(start).0, DayKey::from(end).0);
    (from..=to).map(DayKey)
}

/// A calendar month (the visible window of the month view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn of(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
        }
    }

    pub fn current() -> Self {
        Self::of(today())
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> Option<Self> {
        let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()?;
        Some(Self::of(d))
    }

    pub fn first_day(&self) -> NaiveDate {
        // Constructors only accept valid months.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day() - Duration::days(1)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        d.year() == self.year && d.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Parse a weekday name as used in the config file (`monday`, `sunday`, ...).
pub fn parse_week_start(s: &str) -> Option<Weekday> {
    s.trim().parse::<Weekday>().ok()
}

/// Whole-week window covering `month`: from the `week_start` on or before
/// the 1st, to the day before the next `week_start` on or after the last day.
pub fn grid_window(month: YearMonth, week_start: Weekday) -> (NaiveDate, NaiveDate) {
    let first = month.first_day();
    let last = month.last_day();

    let lead = first.weekday().days_since(week_start) as i64;
    let week_end = week_start.pred();
    let trail = week_end.days_since(last.weekday()) as i64;

    (first - Duration::days(lead), last + Duration::days(trail))
}

/// Resolve a single period token (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) to its
/// first and last day.
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if p.len() == 7
        && let Some(m) = YearMonth::parse(p)
    {
        return Ok((m.first_day(), m.last_day()));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        let first = NaiveDate::from_ymd_opt(year, 1, 1);
        let last = NaiveDate::from_ymd_opt(year, 12, 31);
        if let (Some(f), Some(l)) = (first, last) {
            return Ok((f, l));
        }
    }

    Err(format!("Invalid period: {}", p))
}

/// Resolve a period expression: a single token or `start:end`, where the
/// range runs from the first day of `start` to the last day of `end`.
/// `all` maps to `None` (no date filtering).
pub fn resolve_period(p: &str) -> Result<Option<(NaiveDate, NaiveDate)>, String> {
    if p.trim() == "all" {
        return Ok(None);
    }

    if let Some((start, end)) = p.split_once(':') {
        let (from, _) = period_bounds(start)?;
        let (_, to) = period_bounds(end)?;
        if from > to {
            return Err(format!("Invalid period: {} (start after end)", p));
        }
        return Ok(Some((from, to)));
    }

    period_bounds(p).map(Some)
}
