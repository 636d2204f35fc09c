use serde_json::Value;

/// Parse a `"<systolic>/<diastolic>"` reading.
///
/// All-or-nothing: the value must be a string with exactly one `/` and both
/// halves must parse as numbers after trimming. Anything else is `None`.
pub fn parse_blood_pressure(raw: Option<&Value>) -> Option<(f64, f64)> {
    let text = raw?.as_str()?;
    let (systolic, diastolic) = text.split_once('/')?;
    if diastolic.contains('/') {
        return None;
    }
    Some((parse_number_str(systolic)?, parse_number_str(diastolic)?))
}

/// Numeric interpretation of a loosely-typed field.
///
/// Accepts JSON numbers, booleans (`true` = 1, `false` = 0) and numeric
/// strings. Strings may carry surrounding whitespace and single underscores
/// between digits (`"1_000"`). Arrays, objects and absent values are `None`.
pub fn parse_numeric(raw: Option<&Value>) -> Option<f64> {
    match raw? {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => parse_number_str(s),
        _ => None,
    }
}

fn parse_number_str(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if !trimmed.contains('_') {
        return trimmed.parse::<f64>().ok();
    }

    // Underscores are only digit-group separators.
    let bytes = trimmed.as_bytes();
    let grouped = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if !grouped {
        return None;
    }
    trimmed.replace('_', "").parse::<f64>().ok()
}
