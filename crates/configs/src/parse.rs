//! Line grammar of a properties file.

const TRIM: &[char] = &[' ', '\n', '\r'];

/// Parse one raw line into a `(key, value)` pair.
///
/// Returns `None` for blank lines, lines whose first byte is `#`, and lines
/// whose key is empty after trimming. The line is split on every `=`; only
/// the first two segments are used, so `k=a=b` yields `("k", "a")`.
pub fn parse_line(line: &[u8]) -> Option<(String, String)> {
    if line.first().map_or(true, |b| *b == b'#') {
        return None;
    }

    let text = String::from_utf8_lossy(line);
    let mut segments = text.split('=');
    let key = segments.next().unwrap_or_default().trim_matches(TRIM);
    if key.is_empty() {
        return None;
    }
    let value = segments.next().map(|v| v.trim_matches(TRIM)).unwrap_or_default();

    Some((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(k: &str, v: &str) -> Option<(String, String)> {
        Some((k.to_string(), v.to_string()))
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(parse_line(b""), None);
        assert_eq!(parse_line(b"# port=80"), None);
        assert_eq!(parse_line(b"#"), None);
    }

    #[test]
    fn trims_key_and_value() {
        assert_eq!(parse_line(b"  host =  example.org \r"), pair("host", "example.org"));
        assert_eq!(parse_line(b"name=value\n"), pair("name", "value"));
    }

    #[test]
    fn tabs_are_not_trimmed() {
        assert_eq!(parse_line(b"\tkey=\tv"), pair("\tkey", "\tv"));
    }

    #[test]
    fn value_is_truncated_at_second_equals() {
        assert_eq!(parse_line(b"k=a=b"), pair("k", "a"));
        assert_eq!(parse_line(b"url = http://x/?a=1"), pair("url", "http://x/?a"));
    }

    #[test]
    fn missing_value_is_empty() {
        assert_eq!(parse_line(b"flag"), pair("flag", ""));
        assert_eq!(parse_line(b"flag ="), pair("flag", ""));
    }

    #[test]
    fn empty_key_drops_the_line() {
        assert_eq!(parse_line(b"   =v"), None);
        assert_eq!(parse_line(b"=v"), None);
        assert_eq!(parse_line(b"\r"), None);
    }

    #[test]
    fn hash_after_leading_space_is_a_key() {
        assert_eq!(parse_line(b" #x=1"), pair("#x", "1"));
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let (key, value) = parse_line(b"k=\xffv").unwrap();
        assert_eq!(key, "k");
        assert_eq!(value, "\u{fffd}v");
    }
}
