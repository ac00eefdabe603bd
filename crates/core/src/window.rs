//! Time window resolution.
//!
//! Turns the raw, possibly absent or malformed `from` / `to` / `timezone` /
//! `range_h` query parameters into a validated [`TimeWindow`] plus the
//! display-ready echo strings and the covered span in hours.
//!
//! Malformed dates never fail the request: an invalid `from` or `to` is
//! silently replaced with the default window bound ("today 00:00" and "now"
//! on the configured server clock). An unknown timezone id, by contrast, is
//! a hard [`CoreError::InvalidTimezone`].

use chrono::{Duration, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::CoreError;
use crate::types::{TimeWindow, Timestamp, MINUTE_FORMAT};

/// Raw history query parameters as received from the HTTP layer.
///
/// All fields are optional and untrusted; resolution applies defaults and
/// leniency rules rather than rejecting.
#[derive(Debug, Clone, Default)]
pub struct HistoryParams {
    /// Window start, `YYYY-MM-DD HH:mm` wall-clock in the display timezone.
    pub from: Option<String>,
    /// Window end, same format as `from`.
    pub to: Option<String>,
    /// IANA display timezone id. Defaults to `Etc/UTC`.
    pub timezone: Option<String>,
    /// Relative "last N hours" shorthand. When it parses as an integer it
    /// takes precedence over `from`/`to`; otherwise it is ignored.
    pub range_h: Option<String>,
}

/// A resolved window plus the fields the assembler echoes back.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedWindow {
    pub window: TimeWindow,
    /// `from` as shown to the caller: wall-clock in the display timezone.
    pub from_display: String,
    /// `to` as shown to the caller.
    pub to_display: String,
    /// Span of the window in hours. Negative when `to` precedes `from`
    /// (propagated, not rejected) and exactly the provided integer when
    /// `range_h` was used.
    pub range_hours: f64,
}

/// Resolve raw parameters against an explicit clock.
///
/// `now` is the request instant; `server_tz` is the configured zone in
/// which the default bounds ("today 00:00", "now") are rendered. Both are
/// passed in so resolution is deterministic under test.
pub fn resolve(
    params: &HistoryParams,
    now: Timestamp,
    server_tz: Tz,
) -> Result<ResolvedWindow, CoreError> {
    let tz_name = params.timezone.as_deref().unwrap_or("Etc/UTC");
    let tz: Tz = tz_name
        .parse()
        .map_err(|_| CoreError::InvalidTimezone(tz_name.to_string()))?;

    // An integral range_h short-circuits the explicit bounds entirely.
    // A span too large to represent degrades like an unparsable value and
    // falls through to the explicit bounds.
    if let Some(hours) = parse_range_hours(params.range_h.as_deref()) {
        if let Some(resolved) = resolve_relative(hours, now, tz) {
            return Ok(resolved);
        }
    }

    let server_now = now.with_timezone(&server_tz);
    let default_from = server_now.format("%Y-%m-%d 00:00").to_string();
    let default_to = server_now.format(MINUTE_FORMAT).to_string();

    let (from_utc, from_display) = resolve_bound(params.from.as_deref(), &default_from, tz, now);
    let (to_utc, to_display) = resolve_bound(params.to.as_deref(), &default_to, tz, now);

    let range_hours = (to_utc - from_utc).num_seconds() as f64 / 3600.0;

    Ok(ResolvedWindow {
        window: TimeWindow {
            from_utc,
            to_utc,
            tz,
        },
        from_display,
        to_display,
        range_hours,
    })
}

/// Strict `YYYY-MM-DD HH:mm` validation. Anything else is "malformed" and
/// handled by substitution, never by erroring.
pub fn validate_date(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, MINUTE_FORMAT).ok()
}

/// Absent and unparsable `range_h` are equivalent: "not provided".
fn parse_range_hours(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
}

/// Build the "last N hours" window. `None` when the span overflows what a
/// timestamp can represent; overflow-checked because `hours` is raw caller
/// input with no clamping.
fn resolve_relative(hours: i64, now: Timestamp, tz: Tz) -> Option<ResolvedWindow> {
    let span = Duration::try_hours(hours)?;
    let from_utc = now.checked_sub_signed(span)?;
    Some(ResolvedWindow {
        window: TimeWindow {
            from_utc,
            to_utc: now,
            tz,
        },
        from_display: format_in(from_utc, tz),
        to_display: format_in(now, tz),
        range_hours: hours as f64,
    })
}

/// Resolve one bound: the caller's value if valid, else the default, else
/// `now` itself (only reachable when the default falls in a DST gap of the
/// display timezone). Returns the UTC instant and the echoed string.
fn resolve_bound(raw: Option<&str>, default: &str, tz: Tz, now: Timestamp) -> (Timestamp, String) {
    if let Some(text) = raw {
        if let Some(naive) = validate_date(text) {
            if let Some(utc) = wall_clock_to_utc(naive, tz) {
                return (utc, text.to_string());
            }
        }
    }

    if let Some(naive) = validate_date(default) {
        if let Some(utc) = wall_clock_to_utc(naive, tz) {
            return (utc, default.to_string());
        }
    }

    (now, format_in(now, tz))
}

/// Interpret a naive wall-clock time in `tz` and convert to UTC.
///
/// An ambiguous time (DST fall-back) maps to the earlier of the two
/// instants; a nonexistent time (spring-forward gap) yields `None` and is
/// treated like a malformed date by the caller.
fn wall_clock_to_utc(naive: NaiveDateTime, tz: Tz) -> Option<Timestamp> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, _) => Some(earlier.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}

fn format_in(instant: Timestamp, tz: Tz) -> String {
    instant.with_timezone(&tz).format(MINUTE_FORMAT).to_string()
}
