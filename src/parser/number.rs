/// Parse an integer written as a numeric literal
///
/// Accepts an optional sign, `0x`/`0o`/`0b` prefixes in either case, single
/// underscores between digits, and surrounding whitespace. Decimal literals
/// may only start with `0` when their value is zero.
pub fn parse_int_literal(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, body) = match text.as_bytes().first().copied()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let prefix = body.get(..2).map(str::to_ascii_lowercase);
    let (radix, digits) = match prefix.as_deref() {
        Some("0x") => (16, body[2..].strip_prefix('_').unwrap_or(&body[2..])),
        Some("0o") => (8, body[2..].strip_prefix('_').unwrap_or(&body[2..])),
        Some("0b") => (2, body[2..].strip_prefix('_').unwrap_or(&body[2..])),
        _ => (10, body),
    };

    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    if !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    if radix == 10 && digits.len() > 1 && digits.starts_with('0') && digits.chars().any(|c| c != '0') {
        return None;
    }

    let magnitude = i64::from_str_radix(&digits, radix).ok()?;
    if negative {
        magnitude.checked_neg()
    } else {
        Some(magnitude)
    }
}
