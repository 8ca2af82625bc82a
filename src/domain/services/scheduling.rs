use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use thiserror::Error;

use crate::domain::models::movie::Movie;
use crate::domain::models::screening::{Screening, ScreeningCandidate};

pub const OPENING_HOUR: u32 = 10;
pub const CLOSING_HOUR: u32 = 23;

const MINUTES_PER_WEEK: i64 = 7 * 24 * 60;

/// Why a candidate screening was refused admission. Every variant is a
/// recoverable domain outcome reported to the caller as a value; the
/// validator never panics on a well-typed candidate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Movie not found")]
    MovieNotFound,
    #[error("Weekly screening cap reached for this movie in this hall")]
    WeeklyCapExceeded,
    #[error("Screening overlaps an existing screening in this hall")]
    HallOverlap,
    #[error("Screening falls outside operating hours (10:00-23:00)")]
    OutsideOperatingHours,
}

/// Decides whether a candidate screening may join the existing schedule.
///
/// Pure function of its three inputs: no I/O, no side effects, identical
/// inputs always produce identical results. Checks run in order and the
/// first failure wins:
///
/// 1. the movie must exist in the snapshot;
/// 2. in the movie's 3rd/4th week after release, at most 3 screenings of
///    it per hall per calendar day; in its 5th week, at most 1. Movies
///    without a release date skip this rule entirely;
/// 3. the candidate's half-open interval must not intersect any existing
///    screening in the same hall (other halls never conflict);
/// 4. the whole interval must sit inside the daily operating window.
pub fn validate(
    candidate: &ScreeningCandidate,
    movies: &[Movie],
    existing: &[Screening],
) -> Result<(), RejectionReason> {
    let movie = movies
        .iter()
        .find(|m| m.id == candidate.movie_id)
        .ok_or(RejectionReason::MovieNotFound)?;

    if let Some(release_date) = movie.release_date {
        let week = week_number(candidate.starts_at, release_date);
        let same_day = screenings_for_day(existing, candidate);

        let over_cap = match week {
            3 | 4 => same_day >= 3,
            5 => same_day >= 1,
            _ => false,
        };
        if over_cap {
            return Err(RejectionReason::WeeklyCapExceeded);
        }
    }

    let duration_min = movie.duration_min.unwrap_or(candidate.duration_min);
    let candidate_end = screening_end(candidate.starts_at, duration_min);

    for s in existing.iter().filter(|s| s.hall_id == candidate.hall_id) {
        let s_end = screening_end(s.starts_at, s.duration_min);
        if overlaps(candidate.starts_at, candidate_end, s.starts_at, s_end) {
            return Err(RejectionReason::HallOverlap);
        }
    }

    if !within_operating_hours(candidate.starts_at, candidate_end) {
        return Err(RejectionReason::OutsideOperatingHours);
    }

    Ok(())
}

/// Ordinal count of 7-day periods elapsed since the release instant
/// (midnight of the release date), rounded up. A screening 14 days and one
/// minute after release is in week 3; exactly 14 days is still week 2.
/// Zero or negative for screenings at or before release.
pub fn week_number(starts_at: NaiveDateTime, release_date: NaiveDate) -> i64 {
    let released = release_date.and_hms_opt(0, 0, 0).unwrap();
    let elapsed = (starts_at - released).num_minutes();

    elapsed.div_euclid(MINUTES_PER_WEEK)
        + if elapsed.rem_euclid(MINUTES_PER_WEEK) > 0 { 1 } else { 0 }
}

pub fn screening_end(starts_at: NaiveDateTime, duration_min: i32) -> NaiveDateTime {
    starts_at + Duration::minutes(duration_min as i64)
}

/// Half-open interval intersection: touching endpoints do not overlap.
pub fn overlaps(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// The interval must fit inside the 10:00-23:00 daily window. An interval
/// that crosses midnight is rejected outright rather than letting its
/// wrapped end time slip past the hour checks.
pub fn within_operating_hours(starts_at: NaiveDateTime, end: NaiveDateTime) -> bool {
    if end.date() != starts_at.date() {
        return false;
    }
    if starts_at.hour() < OPENING_HOUR {
        return false;
    }
    if end.hour() == CLOSING_HOUR && end.minute() > 0 {
        return false;
    }
    true
}

fn screenings_for_day(existing: &[Screening], candidate: &ScreeningCandidate) -> usize {
    existing
        .iter()
        .filter(|s| {
            s.movie_id == candidate.movie_id
                && s.hall_id == candidate.hall_id
                && s.starts_at.date() == candidate.starts_at.date()
        })
        .count()
}
