//! String windowing utilities for the domain layer.
//!
//! Prompts embed bounded windows of the shared transcript and reference
//! documents. These helpers slice at UTF-8 character boundaries so a window
//! never splits a multi-byte character.

/// Return the leading window of `s`, at most `max_bytes` long.
///
/// If a boundary would fall inside a multi-byte character, the window
/// shrinks to the previous character boundary.
pub fn head(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Return the trailing window of `s`, at most `max_bytes` long.
///
/// The counterpart of [`head`]: if the boundary falls inside a multi-byte
/// character, the window shrinks forward to the next character boundary.
pub fn tail(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut start = s.len() - max_bytes;
    while start < s.len() && !s.is_char_boundary(start) {
        start += 1;
    }
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_ascii() {
        assert_eq!(head("hello world", 5), "hello");
    }

    #[test]
    fn head_no_op_when_short() {
        assert_eq!(head("hi", 10), "hi");
    }

    #[test]
    fn head_multibyte_boundary() {
        // 'の' is 3 bytes; cutting at byte 4 must back up to 3
        let s = "あのね";
        assert_eq!(head(s, 4), "あ");
        assert_eq!(head(s, 6), "あの");
    }

    #[test]
    fn tail_ascii() {
        assert_eq!(tail("hello world", 5), "world");
    }

    #[test]
    fn tail_no_op_when_short() {
        assert_eq!(tail("hi", 10), "hi");
    }

    #[test]
    fn tail_multibyte_boundary() {
        // Cutting 4 bytes from the end of 9 lands inside 'の'; the window
        // moves forward to the start of 'ね'
        let s = "あのね";
        assert_eq!(tail(s, 4), "ね");
        assert_eq!(tail(s, 6), "のね");
    }

    #[test]
    fn empty_input() {
        assert_eq!(head("", 10), "");
        assert_eq!(tail("", 10), "");
    }
}
