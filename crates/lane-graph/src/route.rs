//! Routes (graph edges): the temporal cost model and its weight closures.
//!
//! The weight closure is dispatched at compile time on a direction marker
//! type rather than a runtime enum (spec's "closure-as-weight" design note):
//! [`Forward`] answers "earliest arrival", [`Reverse`] answers "latest
//! feasible departure". Both implement [`Direction`].

use lane_core::{Duration, Instant, Movement, TimeOfDay, Vehicle, WorkingDaysMask, EPOCH_WEEKDAY};

// ── EdgeCostAttributes ──────────────────────────────────────────────────────

/// The per-edge temporal model.
///
/// Invariants (enforced by [`EdgeCostAttributes::scheduled`] /
/// [`EdgeCostAttributes::transient`]):
/// - transient edges have `loading = unloading = duration = 0` and both
///   masks are irrelevant;
/// - scheduled edges have `loading, duration, unloading >= 0`,
///   `departure` in `[0, 1440)`, `arrival = (departure + duration) mod 1440`,
///   and a non-empty `departure_mask`.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeCostAttributes {
    pub loading: Duration,
    pub departure: TimeOfDay,
    pub duration: Duration,
    pub unloading: Duration,
    pub arrival: TimeOfDay,
    pub departure_mask: WorkingDaysMask,
    pub arrival_mask: WorkingDaysMask,
    pub transient: bool,
}

impl EdgeCostAttributes {
    /// A zero-cost edge linking co-located facilities (§4.3 "custody edges").
    pub fn transient() -> Self {
        EdgeCostAttributes {
            loading: Duration::ZERO,
            departure: TimeOfDay(0),
            duration: Duration::ZERO,
            unloading: Duration::ZERO,
            arrival: TimeOfDay(0),
            departure_mask: WorkingDaysMask::NONE,
            arrival_mask: WorkingDaysMask::NONE,
            transient: true,
        }
    }

    /// Build a scheduled edge from the raw fields (§4.2 construction steps).
    ///
    /// `departure_days` lists the weekday ordinals the route departs on.
    pub fn scheduled(
        loading: Duration,
        departure: TimeOfDay,
        duration: Duration,
        unloading: Duration,
        departure_days: impl IntoIterator<Item = u8>,
    ) -> Self {
        let arrival = departure.add_wrapping(duration);
        let departure_mask = WorkingDaysMask::from_weekdays(departure_days);

        let whole_days = duration.as_minutes().div_euclid(1_440);
        let wraps_midnight = arrival < departure;
        let k = (whole_days + if wraps_midnight { 1 } else { 0 }).rem_euclid(7) as u32;
        let arrival_mask = departure_mask.rotate_right(k);

        EdgeCostAttributes {
            loading,
            departure,
            duration,
            unloading,
            arrival,
            departure_mask,
            arrival_mask,
            transient: false,
        }
    }
}

// ── Direction ────────────────────────────────────────────────────────────────

/// A traversal mode: forward (earliest arrival) or reverse (latest feasible
/// departure). Parameterizes the weight closure, the priority-queue
/// comparator, and the sentinel/initial values (spec §4.4).
pub trait Direction {
    /// `true` if this mode's search root is chronologically earlier than its
    /// destination (forward: root = source, searched ahead in time).
    /// `false` if the root is chronologically later (reverse: root =
    /// target, searched backwards from the deadline). Used by path
    /// reconstruction to decide whether the pred-walk needs reversing.
    const ROOT_IS_EARLIER: bool;

    /// `Instant` value meaning "unreachable" in this mode.
    fn infinity() -> Instant;

    /// `true` iff `candidate` improves over `current` (the `cmp` of §4.4).
    fn improves(candidate: Instant, current: Instant) -> bool;

    /// Apply the edge's weight closure. Returns [`Direction::infinity`] if
    /// the edge is unreachable from `t` (no matching working day).
    fn weight(attrs: &EdgeCostAttributes, t: Instant) -> Instant;
}

/// Earliest-arrival mode: leave the source at `t0`, minimize arrival time.
pub struct Forward;

impl Direction for Forward {
    const ROOT_IS_EARLIER: bool = true;

    #[inline]
    fn infinity() -> Instant {
        Instant::MAX
    }

    #[inline]
    fn improves(candidate: Instant, current: Instant) -> bool {
        candidate < current
    }

    fn weight(attrs: &EdgeCostAttributes, t: Instant) -> Instant {
        if attrs.transient {
            return t;
        }

        let t1 = t + attrs.loading;
        let day = t1.day();
        let tod = t1.time_of_day();

        let base: i64 = if tod <= attrs.departure { 0 } else { 1 };
        let w = EPOCH_WEEKDAY.add_days(day + base);
        let delta = match attrs.departure_mask.next_forward(w) {
            Some(d) => d as i64,
            None => return Forward::infinity(),
        };

        let idle = Duration(base * 1_440)
            + Duration(delta * 1_440)
            + attrs.departure.diff(tod);

        t + attrs.loading + idle + attrs.duration + attrs.unloading
    }
}

/// Latest-feasible mode: arrive the target by `deadline`, maximize the
/// source departure. Walks the graph with edges flipped and this closure.
pub struct Reverse;

impl Direction for Reverse {
    const ROOT_IS_EARLIER: bool = false;

    #[inline]
    fn infinity() -> Instant {
        Instant::MIN
    }

    #[inline]
    fn improves(candidate: Instant, current: Instant) -> bool {
        candidate > current
    }

    fn weight(attrs: &EdgeCostAttributes, t: Instant) -> Instant {
        if attrs.transient {
            return t;
        }

        let t1 = t - attrs.unloading;
        let day = t1.day();
        let tod = t1.time_of_day();

        let base: i64 = if tod >= attrs.arrival { 0 } else { 1 };
        let w = EPOCH_WEEKDAY.add_days(day - base);
        let delta = match attrs.arrival_mask.next_reverse(w) {
            Some(d) => d as i64,
            None => return Reverse::infinity(),
        };

        let idle = Duration(base * 1_440)
            + Duration(delta * 1_440)
            + tod.diff(attrs.arrival);

        t - attrs.unloading - idle - attrs.duration - attrs.loading
    }
}

/// Smallest instant `>= t` whose time-of-day equals `dep` (spec §4.4, "Path
/// reconstruction" — resolves the departure instant shown for a segment).
pub fn get_next_departure(t: Instant, dep: TimeOfDay) -> Instant {
    let tod = t.time_of_day();
    let diff = dep.diff(tod).as_minutes().rem_euclid(1_440);
    t + Duration(diff)
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// A route (graph edge): identifier, vehicle/movement kind, and the cost
/// model. Endpoints are `NodeId`s resolved by the graph store at insertion.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub code: String,
    pub name: String,
    pub vehicle: Vehicle,
    pub movement: Movement,
    pub cost: EdgeCostAttributes,
}

impl Route {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        vehicle: Vehicle,
        movement: Movement,
        cost: EdgeCostAttributes,
    ) -> Self {
        Route {
            code: code.into(),
            name: name.into(),
            vehicle,
            movement,
            cost,
        }
    }
}
