/// Parses a post id from a path segment the lenient way clients of this API rely on:
/// leading whitespace and a sign are accepted, and parsing stops at the first non-digit
/// (`"12abc"` is 12). Returns `None` when no digits lead the segment or the value cannot be
/// a post id (negative or out of range); such ids match no post.
pub fn parse_id(raw: &str) -> Option<u64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<u64>().ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}
