//! Calendar and clock primitives.
//!
//! # Design
//!
//! [`Instant`] is a point in wall-clock time at **minute resolution**, stored
//! as minutes since an arbitrary epoch. Minute resolution keeps every
//! schedule computation exact integer arithmetic — no floating point, no
//! leap-second drift — which matters because the shortest-path engine
//! compares instants millions of times per query.
//!
//! [`TimeOfDay`] is a duration reduced modulo 1440 (one day). [`Weekday`] is
//! an ordinal in `[0, 7)` with bit 0 = Sunday (see [`WorkingDaysMask`]).
//! [`Duration`] is a signed minute count used for offsets and differences.

use std::fmt;

// ── Duration ──────────────────────────────────────────────────────────────────

/// A signed count of minutes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Duration(pub i64);

impl Duration {
    pub const ZERO: Duration = Duration(0);

    #[inline]
    pub fn minutes(n: i64) -> Duration {
        Duration(n)
    }

    #[inline]
    pub fn as_minutes(self) -> i64 {
        self.0
    }
}

impl std::ops::Add for Duration {
    type Output = Duration;
    #[inline]
    fn add(self, rhs: Duration) -> Duration {
        Duration(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Duration {
    type Output = Duration;
    #[inline]
    fn sub(self, rhs: Duration) -> Duration {
        Duration(self.0 - rhs.0)
    }
}

impl std::ops::Neg for Duration {
    type Output = Duration;
    #[inline]
    fn neg(self) -> Duration {
        Duration(-self.0)
    }
}

// ── Instant ───────────────────────────────────────────────────────────────────

/// An absolute point in time, minute resolution.
///
/// Stored as an `i64` minute count from an arbitrary epoch (see
/// [`parse_date`]/[`parse_datetime`] for how callers anchor it). `i64`
/// minutes covers well over a million years in either direction, so overflow
/// is not a practical concern for a logistics network.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instant(pub i64);

impl Instant {
    /// Sentinel used as the forward-mode "unreachable" distance.
    pub const MAX: Instant = Instant(i64::MAX);
    /// Sentinel used as the reverse-mode "unreachable" distance.
    pub const MIN: Instant = Instant(i64::MIN);

    /// Day index (floor division; negative instants floor toward `-inf`).
    #[inline]
    pub fn day(self) -> i64 {
        self.0.div_euclid(MINUTES_PER_DAY)
    }

    /// Time-of-day component.
    #[inline]
    pub fn time_of_day(self) -> TimeOfDay {
        TimeOfDay(self.0.rem_euclid(MINUTES_PER_DAY) as u16)
    }

    /// Weekday at this instant, given the weekday of day 0.
    #[inline]
    pub fn weekday(self, epoch_weekday: Weekday) -> Weekday {
        epoch_weekday.add_days(self.day())
    }
}

impl std::ops::Add<Duration> for Instant {
    type Output = Instant;
    #[inline]
    fn add(self, rhs: Duration) -> Instant {
        Instant(self.0 + rhs.0)
    }
}

impl std::ops::Sub<Duration> for Instant {
    type Output = Instant;
    #[inline]
    fn sub(self, rhs: Duration) -> Instant {
        Instant(self.0 - rhs.0)
    }
}

impl std::ops::Sub for Instant {
    type Output = Duration;
    #[inline]
    fn sub(self, rhs: Instant) -> Duration {
        Duration(self.0 - rhs.0)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Instant::MAX {
            return write!(f, "+inf");
        }
        if *self == Instant::MIN {
            return write!(f, "-inf");
        }
        let day = self.day();
        let tod = self.time_of_day();
        write!(f, "d{day}T{:02}:{:02}", tod.hour(), tod.minute())
    }
}

const MINUTES_PER_DAY: i64 = 1_440;

// ── TimeOfDay ─────────────────────────────────────────────────────────────────

/// A value in `[0, 1440)` minutes — the minute-of-day.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay(pub u16);

impl TimeOfDay {
    /// Construct from a raw minute count, reducing modulo one day.
    #[inline]
    pub fn from_minutes(m: i64) -> TimeOfDay {
        TimeOfDay(m.rem_euclid(MINUTES_PER_DAY) as u16)
    }

    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    #[inline]
    pub fn as_minutes(self) -> i64 {
        self.0 as i64
    }

    /// `self + rhs`, wrapping modulo one day.
    #[inline]
    pub fn add_wrapping(self, rhs: Duration) -> TimeOfDay {
        TimeOfDay::from_minutes(self.0 as i64 + rhs.0)
    }

    /// `self - rhs`, wrapping modulo one day.
    #[inline]
    pub fn sub_wrapping(self, rhs: Duration) -> TimeOfDay {
        TimeOfDay::from_minutes(self.0 as i64 - rhs.0)
    }

    /// Signed minute difference `self - rhs`, in `(-1440, 1440)`.
    #[inline]
    pub fn diff(self, rhs: TimeOfDay) -> Duration {
        Duration(self.0 as i64 - rhs.0 as i64)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

// ── Weekday ───────────────────────────────────────────────────────────────────

/// An ordinal in `[0, 7)`. Bit/ordinal 0 is Sunday (see [`WorkingDaysMask`]).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weekday(pub u8);

/// Weekday of day 0 (`1970-01-01`) under the Howard Hinnant civil-from-days
/// algorithm that [`parse_date`]/`days_from_civil` use — 1970-01-01 was a
/// Thursday. Used to convert an [`Instant`]'s day index into a [`Weekday`]
/// via [`Instant::weekday`].
pub const EPOCH_WEEKDAY: Weekday = Weekday::THURSDAY;

impl Weekday {
    pub const SUNDAY: Weekday = Weekday(0);
    pub const MONDAY: Weekday = Weekday(1);
    pub const TUESDAY: Weekday = Weekday(2);
    pub const WEDNESDAY: Weekday = Weekday(3);
    pub const THURSDAY: Weekday = Weekday(4);
    pub const FRIDAY: Weekday = Weekday(5);
    pub const SATURDAY: Weekday = Weekday(6);

    /// `self + n` days, modular.
    #[inline]
    pub fn add_days(self, n: i64) -> Weekday {
        Weekday(((self.0 as i64 + n).rem_euclid(7)) as u8)
    }

    /// `self - n` days, modular.
    #[inline]
    pub fn sub_days(self, n: i64) -> Weekday {
        self.add_days(-n)
    }
}

// ── WorkingDaysMask ───────────────────────────────────────────────────────────

/// A 7-bit mask; bit `k` set iff the route runs on weekday `k`.
///
/// Bit ordering is fixed: bit 0 = Sunday, bit 1 = Monday, … bit 6 = Saturday
/// (spec §6, "Working-day bit ordering").
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkingDaysMask(pub u8);

const DAYS_IN_WEEK: u32 = 7;
const WEEK_BITS: u8 = 0b0111_1111;

impl WorkingDaysMask {
    pub const NONE: WorkingDaysMask = WorkingDaysMask(0);
    pub const ALL: WorkingDaysMask = WorkingDaysMask(WEEK_BITS);

    /// Build a mask from an iterator of weekday ordinals.
    pub fn from_weekdays<I: IntoIterator<Item = u8>>(days: I) -> WorkingDaysMask {
        let mut bits = 0u8;
        for d in days {
            bits |= 1 << (d % 7);
        }
        WorkingDaysMask(bits)
    }

    #[inline]
    pub fn is_set(self, day: Weekday) -> bool {
        self.0 & (1 << day.0) != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Rotate the 7 meaningful bits right by `k` positions (`k` taken mod 7).
    ///
    /// Used to derive the arrival-days mask from the departure-days mask: an
    /// arrival `k` days (plus a possible midnight wrap) after departure runs
    /// on the weekdays that are `k` days after each departure weekday.
    pub fn rotate_right(self, k: u32) -> WorkingDaysMask {
        let k = k % DAYS_IN_WEEK;
        if k == 0 {
            return self;
        }
        let bits = self.0 & WEEK_BITS;
        let rotated = (bits >> k) | (bits << (DAYS_IN_WEEK - k));
        WorkingDaysMask(rotated & WEEK_BITS)
    }

    /// Smallest non-negative `delta < 7` such that bit `(from + delta) mod 7`
    /// is set. `None` if the mask is empty (no working day at all).
    pub fn next_forward(self, from: Weekday) -> Option<u32> {
        if self.is_empty() {
            return None;
        }
        (0..DAYS_IN_WEEK).find(|&delta| self.is_set(from.add_days(delta as i64)))
    }

    /// Smallest non-negative `delta < 7` such that bit `(from - delta) mod 7`
    /// is set. `None` if the mask is empty.
    pub fn next_reverse(self, from: Weekday) -> Option<u32> {
        if self.is_empty() {
            return None;
        }
        (0..DAYS_IN_WEEK).find(|&delta| self.is_set(from.sub_days(delta as i64)))
    }
}

// ── Parsers ───────────────────────────────────────────────────────────────────

/// Errors from the calendar parsers.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid format: {0:?}")]
pub struct InvalidFormat(pub String);

/// Parse `"HH:MM"` into a [`TimeOfDay`]. Hours must be in `[0,23]`, minutes in
/// `[0,59]`.
pub fn parse_time(s: &str) -> Result<TimeOfDay, InvalidFormat> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| InvalidFormat(s.to_string()))?;
    let h: u16 = h.parse().map_err(|_| InvalidFormat(s.to_string()))?;
    let m: u16 = m.parse().map_err(|_| InvalidFormat(s.to_string()))?;
    if h > 23 || m > 59 {
        return Err(InvalidFormat(s.to_string()));
    }
    Ok(TimeOfDay(h * 60 + m))
}

/// Parse `"YYYY-MM-DD"` into an [`Instant`] at 00:00, using the proleptic
/// Gregorian calendar with day 0 anchored at `0001-01-01`.
pub fn parse_date(s: &str) -> Result<Instant, InvalidFormat> {
    let mut parts = s.splitn(3, '-');
    let y = parts.next().ok_or_else(|| InvalidFormat(s.to_string()))?;
    let mo = parts.next().ok_or_else(|| InvalidFormat(s.to_string()))?;
    let d = parts.next().ok_or_else(|| InvalidFormat(s.to_string()))?;
    if parts.next().is_some() {
        return Err(InvalidFormat(s.to_string()));
    }
    let y: i64 = y.parse().map_err(|_| InvalidFormat(s.to_string()))?;
    let mo: u32 = mo.parse().map_err(|_| InvalidFormat(s.to_string()))?;
    let d: u32 = d.parse().map_err(|_| InvalidFormat(s.to_string()))?;
    if !(1..=12).contains(&mo) || !(1..=31).contains(&d) {
        return Err(InvalidFormat(s.to_string()));
    }
    let days = days_from_civil(y, mo, d);
    Ok(Instant(days * MINUTES_PER_DAY))
}

/// Parse `"YYYY-MM-DD HH:MM"` into an [`Instant`].
pub fn parse_datetime(s: &str) -> Result<Instant, InvalidFormat> {
    let (date, time) = s
        .split_once(' ')
        .ok_or_else(|| InvalidFormat(s.to_string()))?;
    let day = parse_date(date)?;
    let tod = parse_time(time)?;
    Ok(day + Duration(tod.as_minutes()))
}

/// Format an [`Instant`] as `"YYYY-MM-DD HH:MM"`, the inverse of
/// [`parse_datetime`].
pub fn format_datetime(t: Instant) -> String {
    let (y, mo, d) = civil_from_days(t.day());
    let tod = t.time_of_day();
    format!("{y:04}-{mo:02}-{d:02} {:02}:{:02}", tod.hour(), tod.minute())
}

/// Calendar date `(year, month, day)` at this instant, proleptic Gregorian.
pub fn civil_date(t: Instant) -> (i64, u32, u32) {
    civil_from_days(t.day())
}

// Howard Hinnant's days-from-civil / civil-from-days algorithms (public
// domain), used here instead of a datetime crate so `Instant` arithmetic
// never leaves pure integer math.
fn days_from_civil(y: i64, m: u32, d: u32) -> i64 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = (m as i64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}
