use super::layout;

/// Extract the string table that starts at `start`.
///
/// Returns the strings in order and the offset of the next structure. Two
/// NUL bytes right at `start` are an empty table; otherwise each string ends
/// with a NUL and one more NUL closes the table. Running off the end of
/// `buf` is tolerated: whatever was collected is returned with the offset
/// clamped to `buf.len()`.
///
/// # Examples
/// ```
/// use dmiscope_core::scan_strings;
///
/// let (strings, next) = scan_strings(b"Acme\0v1\0\0", 0);
/// assert_eq!(strings, vec!["Acme".to_string(), "v1".to_string()]);
/// assert_eq!(next, 9);
///
/// let (strings, next) = scan_strings(b"\0\0", 0);
/// assert!(strings.is_empty());
/// assert_eq!(next, 2);
/// ```
pub fn scan_strings(buf: &[u8], start: usize) -> (Vec<String>, usize) {
    let mut strings = Vec::new();
    let mut pos = start;

    loop {
        let Some(&byte) = buf.get(pos) else {
            return (strings, buf.len());
        };

        if byte == layout::STRING_TERMINATOR {
            let consumed = if strings.is_empty() {
                layout::EMPTY_STRING_TABLE_LEN
            } else {
                1
            };
            return (strings, (pos + consumed).min(buf.len()));
        }

        let end = buf[pos..]
            .iter()
            .position(|b| *b == layout::STRING_TERMINATOR)
            .map_or(buf.len(), |len| pos + len);
        let text = String::from_utf8_lossy(&buf[pos..end]);
        if !text.is_empty() {
            strings.push(text.into_owned());
        }
        pos = end + 1;
    }
}
