//! Balanced `{...}` block extraction.

/// Return the first balanced brace group at or after `start`.
///
/// The result runs from the first `{` through the `}` that brings the
/// depth back to zero, inclusive. Braces inside single- or double-quoted
/// strings are not counted. Input without an opening brace, or whose
/// braces never balance, yields an empty string.
pub fn extract_balanced_block(text: &str, start: usize) -> &str {
    let Some(tail) = text.get(start..) else {
        return "";
    };

    let mut depth = 0usize;
    let mut open: Option<usize> = None;
    let mut quote: Option<u8> = None;
    let mut escaped = false;

    for (offset, byte) in tail.bytes().enumerate() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == q {
                quote = None;
            }
            continue;
        }

        match byte {
            b'"' | b'\'' if open.is_some() => quote = Some(byte),
            b'{' => {
                if open.is_none() {
                    open = Some(offset);
                }
                depth += 1;
            }
            b'}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    if let Some(begin) = open {
                        return &tail[begin..=offset];
                    }
                }
            }
            _ => {}
        }
    }

    ""
}
