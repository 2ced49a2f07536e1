//! Timestamp value generators.

use chrono::{DateTime, SecondsFormat, Utc};
use forge_core::{GeneratorError, Params, Value};
use rand::{Rng, RngCore};
use std::fmt::Write;

const DEFAULT_START: &str = "2000-01-01T00:00:00Z";
const DEFAULT_END: &str = "2030-12-31T23:59:59Z";

/// Generate a random timestamp in `start..=end` (whole seconds).
pub fn generate_timestamp_range(
    rng: &mut dyn RngCore,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<DateTime<Utc>, GeneratorError> {
    let start_ts = start.timestamp();
    let end_ts = end.timestamp();

    if start_ts > end_ts {
        return Err(GeneratorError::invalid(
            "start",
            format!("start {start} is after end {end}"),
        ));
    }
    if start_ts == end_ts {
        return Ok(start);
    }

    let random_ts = rng.random_range(start_ts..=end_ts);
    Ok(DateTime::from_timestamp(random_ts, 0).unwrap_or(start))
}

/// Parse a timestamp string in RFC 3339 or `YYYY-MM-DD` form.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

fn timestamp_param(
    params: &Params,
    name: &str,
    default: &str,
) -> Result<DateTime<Utc>, GeneratorError> {
    let raw = params.str_or(name, default)?;
    parse_timestamp(raw)
        .ok_or_else(|| GeneratorError::invalid(name, format!("unrecognized timestamp '{raw}'")))
}

/// `timestamp` generator.
///
/// Parameters: `start`, `end` (RFC 3339 or `YYYY-MM-DD`) and an optional
/// chrono `format` string; RFC 3339 output is used when `format` is absent.
pub fn timestamp(params: &Params, rng: &mut dyn RngCore) -> Result<Value, GeneratorError> {
    let start = timestamp_param(params, "start", DEFAULT_START)?;
    let end = timestamp_param(params, "end", DEFAULT_END)?;
    let dt = generate_timestamp_range(rng, start, end)?;

    if params.get("format").is_none() {
        return Ok(Value::from(dt.to_rfc3339_opts(SecondsFormat::Secs, true)));
    }

    let format = params.required_str("format")?;
    let mut text = String::new();
    write!(text, "{}", dt.format(format))
        .map_err(|_| GeneratorError::invalid("format", format!("bad format string '{format}'")))?;
    Ok(Value::from(text))
}
