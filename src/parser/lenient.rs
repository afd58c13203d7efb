//! Best-effort scanner for records that are not valid JSON, typically lines
//! cut off part way through. Every complete `"key": value` pair seen before
//! the damage is kept; anything after it is dropped.

/// Extracts complete key/value pairs in the order they appear.
pub(crate) fn scan_pairs(line: &str) -> Vec<(String, String)> {
    let bytes = line.as_bytes();
    let mut pairs = Vec::new();
    let mut pos = 0;

    while let Some(offset) = line[pos..].find('"') {
        let key_start = pos + offset;
        let Some((key, after_key)) = read_string(line, key_start) else {
            break;
        };

        let colon = skip_whitespace(bytes, after_key);
        if bytes.get(colon) != Some(&b':') {
            pos = after_key;
            continue;
        }

        let value_start = skip_whitespace(bytes, colon + 1);
        match bytes.get(value_start) {
            Some(b'"') => match read_string(line, value_start) {
                Some((value, after_value)) => {
                    pairs.push((key, value));
                    pos = after_value;
                }
                None => break,
            },
            Some(_) => match read_scalar(line, value_start) {
                Some((value, after_value)) => {
                    pairs.push((key, value));
                    pos = after_value;
                }
                None => break,
            },
            None => break,
        }
    }

    pairs
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(|b| b.is_ascii_whitespace()) {
        pos += 1;
    }
    pos
}

/// Reads a quoted string starting at `start` (which must be a `"`).
/// Returns the unescaped text and the index just past the closing quote.
fn read_string(line: &str, start: usize) -> Option<(String, usize)> {
    let mut out = String::new();
    let mut chars = line[start + 1..].char_indices();

    while let Some((idx, c)) = chars.next() {
        match c {
            '"' => return Some((out, start + 1 + idx + 1)),
            '\\' => {
                let (_, escaped) = chars.next()?;
                match escaped {
                    'n' => out.push('\n'),
                    't' => out.push('\t'),
                    'r' => out.push('\r'),
                    'b' => out.push('\u{8}'),
                    'f' => out.push('\u{c}'),
                    'u' => {
                        let hex: String = (0..4)
                            .filter_map(|_| chars.next().map(|(_, h)| h))
                            .collect();
                        let code = u32::from_str_radix(&hex, 16).ok()?;
                        out.push(char::from_u32(code).unwrap_or('\u{fffd}'));
                    }
                    other => out.push(other),
                }
            }
            _ => out.push(c),
        }
    }

    None
}

/// Reads an unquoted scalar (number, bool) up to the next `,` or `}`.
/// A scalar running into the end of the line is treated as truncated.
fn read_scalar(line: &str, start: usize) -> Option<(String, usize)> {
    let end = start + line[start..].find([',', '}'])?;
    let raw = line[start..end].trim();
    if raw.is_empty() || raw == "null" {
        return Some((String::new(), end));
    }
    Some((raw.to_string(), end))
}
