//! App key segment formatting.

use std::num::NonZeroUsize;

/// Join `chars` into dash-separated groups of `segment_length`.
///
/// Characters keep their order; the last group is shorter only if
/// `chars.len()` is not a multiple of `segment_length`.
#[must_use]
pub fn join_segments(chars: &[u8], segment_length: NonZeroUsize) -> String {
    let segment_length = segment_length.get();
    let groups = chars.len().div_ceil(segment_length);
    let mut out = String::with_capacity(chars.len() + groups.saturating_sub(1));

    for (i, group) in chars.chunks(segment_length).enumerate() {
        if i > 0 {
            out.push('-');
        }
        out.extend(group.iter().copied().map(char::from));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_join_segments() {
        assert_eq!(join_segments(b"ABCDEFGHIJKL", len(4)), "ABCD-EFGH-IJKL");
        assert_eq!(join_segments(b"abcdef", len(1)), "a-b-c-d-e-f");
        assert_eq!(join_segments(b"abcdef", len(6)), "abcdef");
    }

    #[test]
    fn test_join_segments_keeps_order() {
        let chars = b"0123456789abcde";
        let joined = join_segments(chars, len(5));
        assert_eq!(joined, "01234-56789-abcde");
        assert_eq!(joined.replace('-', "").as_bytes(), chars);
    }

    #[test]
    fn test_join_segments_edge_cases() {
        assert_eq!(join_segments(b"", len(4)), "");
        assert_eq!(join_segments(b"abcde", len(2)), "ab-cd-e");
    }
}
