use chrono::NaiveDate;

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Resolve a raw statement date cell to a calendar date.
///
/// Fixed precedence, first match wins, no locale-biased fallback:
/// 1. `YYYY-MM-DD` / `YYYY/MM/DD`
/// 2. `D-M-YYYY` / `D/M/YYYY` — always day-first, `01/12/2024` is 1 December
/// 3. after stripping a leading `H:MM am|pm` token:
///    `[Www] D MonthName[,] YYYY` with full English month names
///
/// Anything else is `None`. Callers exclude unresolvable dates from
/// month-keyed grouping but keep the underlying transaction.
pub fn resolve(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Some(date) = parse_year_first(raw) {
        return Some(date);
    }
    if let Some(date) = parse_day_first(raw) {
        return Some(date);
    }
    parse_long_form(strip_time_prefix(raw))
}

/// Zero-padded `"YYYY-MM"` grouping key.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

fn numeric_parts(raw: &str) -> Option<[&str; 3]> {
    let parts: Vec<&str> = raw.split(['-', '/']).collect();
    if parts.len() != 3 {
        return None;
    }
    Some([parts[0], parts[1], parts[2]])
}

fn parse_year_first(raw: &str) -> Option<NaiveDate> {
    let [y, m, d] = numeric_parts(raw)?;
    if y.len() != 4 {
        return None;
    }
    NaiveDate::from_ymd_opt(y.parse().ok()?, m.parse().ok()?, d.parse().ok()?)
}

fn parse_day_first(raw: &str) -> Option<NaiveDate> {
    let [d, m, y] = numeric_parts(raw)?;
    if y.len() != 4 || d.is_empty() || d.len() > 2 || m.is_empty() || m.len() > 2 {
        return None;
    }
    NaiveDate::from_ymd_opt(y.parse().ok()?, m.parse().ok()?, d.parse().ok()?)
}

/// Drop a leading clock token of the form `H:MM am|pm ` (case-insensitive).
fn strip_time_prefix(raw: &str) -> &str {
    let mut tokens = raw.splitn(3, char::is_whitespace);
    let (Some(clock), Some(meridiem), Some(rest)) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return raw;
    };
    let is_meridiem = meridiem.eq_ignore_ascii_case("am") || meridiem.eq_ignore_ascii_case("pm");
    if is_clock(clock) && is_meridiem {
        rest.trim_start()
    } else {
        raw
    }
}

fn is_clock(token: &str) -> bool {
    let Some((hours, minutes)) = token.split_once(':') else {
        return false;
    };
    (1..=2).contains(&hours.len())
        && hours.chars().all(|c| c.is_ascii_digit())
        && minutes.len() == 2
        && minutes.chars().all(|c| c.is_ascii_digit())
}

fn parse_long_form(raw: &str) -> Option<NaiveDate> {
    let mut tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() == 4 {
        // Leading 3-letter weekday is ignored, not validated against the date.
        let first = tokens[0].trim_end_matches(',');
        if first.len() == 3 && first.chars().all(|c| c.is_ascii_alphabetic()) {
            tokens.remove(0);
        }
    }
    if tokens.len() != 3 {
        return None;
    }
    let day: u32 = tokens[0].parse().ok()?;
    let month_name = tokens[1].trim_end_matches(',');
    let month = MONTHS.iter().position(|m| month_name.eq_ignore_ascii_case(m))? as u32 + 1;
    if tokens[2].len() != 4 {
        return None;
    }
    let year: i32 = tokens[2].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
