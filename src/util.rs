/// Bounded substring by byte offsets.
///
/// Clamps `end` to the string length and returns `""` when `start` is out of
/// range or the slice would not fall on a char boundary.
pub fn slice_bounded(s: &str, start: usize, end: usize) -> &str {
    if start >= s.len() {
        return "";
    }
    let end = end.min(s.len());
    s.get(start..end).unwrap_or("")
}
