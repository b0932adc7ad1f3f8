//! Struct tag parsing.
//!
//! A tag is a space separated list of `key:"value"` pairs where the value is
//! a double-quoted string with backslash escapes, e.g.
//! `json:"id,omitempty" db:"user_id"`.

/// Value stored under `key`, if the tag is well-formed up to that entry.
///
/// Scanning stops at the first malformed entry, so anything after it is
/// invisible. A repeated key returns the first occurrence.
pub fn lookup(tag: &str, key: &str) -> Option<String> {
    let mut rest = tag;
    loop {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            return None;
        }

        let name_len = rest
            .bytes()
            .take_while(|&b| b > b' ' && b != b':' && b != b'"' && b != 0x7f)
            .count();
        let bytes = rest.as_bytes();
        if name_len == 0
            || name_len + 1 >= bytes.len()
            || bytes[name_len] != b':'
            || bytes[name_len + 1] != b'"'
        {
            return None;
        }
        let name = &rest[..name_len];
        rest = &rest[name_len + 1..];

        let quoted_len = quoted_len(rest)?;
        let quoted = &rest[..quoted_len];
        rest = &rest[quoted_len..];

        if name == key {
            return unquote(quoted);
        }
    }
}

/// Property name a tag assigns under `key`.
///
/// Options after the first comma are ignored. A missing entry and the bare
/// `-` marker both yield an empty name; `-,` names the property `-`.
pub fn field_name_from_tag(tag: &str, key: &str) -> String {
    match lookup(tag, key) {
        Some(value) if value != "-" => value.split(',').next().unwrap_or_default().to_owned(),
        _ => String::new(),
    }
}

/// Byte length of the quoted string at the start of `text`, quotes included.
fn quoted_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = 1;
    while i < bytes.len() && bytes[i] != b'"' {
        if bytes[i] == b'\\' {
            i += 1;
        }
        i += 1;
    }
    (i < bytes.len()).then_some(i + 1)
}

/// Decode a double-quoted Go string literal, quotes included.
///
/// Accepts the escapes Go allows in interpreted strings: the single-letter
/// ones, `\xHH`, three-digit octal, `\uHHHH` and `\UHHHHHHHH`. Byte escapes
/// that do not form valid UTF-8 are replaced with U+FFFD.
pub fn unquote(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    let mut out: Vec<u8> = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {}
            '"' | '\n' => return None,
            c => {
                push_char(&mut out, c);
                continue;
            }
        }
        match chars.next()? {
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0c),
            'n' => out.push(b'\n'),
            'r' => out.push(b'\r'),
            't' => out.push(b'\t'),
            'v' => out.push(0x0b),
            '\\' => out.push(b'\\'),
            '"' => out.push(b'"'),
            'x' => out.push(u8::try_from(hex_digits(&mut chars, 2)?).ok()?),
            'u' => push_char(&mut out, char::from_u32(hex_digits(&mut chars, 4)?)?),
            'U' => push_char(&mut out, char::from_u32(hex_digits(&mut chars, 8)?)?),
            first @ '0'..='7' => {
                let mut value = first.to_digit(8)?;
                for _ in 0..2 {
                    value = value * 8 + chars.next()?.to_digit(8)?;
                }
                out.push(u8::try_from(value).ok()?);
            }
            _ => return None,
        }
    }
    Some(String::from_utf8_lossy(&out).into_owned())
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

fn hex_digits(chars: &mut std::str::Chars<'_>, count: usize) -> Option<u32> {
    let mut value = 0;
    for _ in 0..count {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    Some(value)
}
