//! Property-based tests for the path codec.

use super::{decode_path, join_segments, quote_segment, PathCodec};
use proptest::prelude::*;

// Segments that survive normalization untouched: non-empty, not "." or "..".
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.%/@~\u{e9}\u{4e2d}-]{1,12}".prop_filter("dot segments are normalized away", |s| {
        s != "." && s != ".."
    })
}

fn normalized_tuple_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // decode(join(S)) == S for any normalized tuple S
    #[test]
    fn join_then_decode_is_identity(segments in normalized_tuple_strategy()) {
        let joined = join_segments(&segments);
        prop_assert_eq!(decode_path(&joined).unwrap(), segments);
    }

    // The absolute form decodes to the same segments as the relative one
    #[test]
    fn leading_empty_segment_only_adds_slash(segments in normalized_tuple_strategy()) {
        let mut absolute = vec![String::new()];
        absolute.extend(segments.iter().cloned());
        let joined = join_segments(&absolute);
        prop_assert!(joined.starts_with('/'));
        prop_assert_eq!(decode_path(&joined).unwrap(), segments);
    }

    // Decoding is idempotent on already-normalized paths
    #[test]
    fn decode_idempotent(segments in normalized_tuple_strategy()) {
        let once = decode_path(&join_segments(&segments)).unwrap();
        let twice = decode_path(&join_segments(&once)).unwrap();
        prop_assert_eq!(once, twice);
    }

    // Quoted segments never contain a separator
    #[test]
    fn quoted_segment_has_no_slash(segment in segment_strategy()) {
        prop_assert!(!quote_segment(&segment).contains('/'));
    }

    // The cached codec agrees with the pure functions
    #[test]
    fn cached_codec_agrees_with_pure(segments in normalized_tuple_strategy()) {
        let codec = PathCodec::new();
        let joined = codec.join_segments(&segments);
        prop_assert_eq!(&joined, &join_segments(&segments));
        prop_assert_eq!(&codec.decode_path(&joined).unwrap()[..], &segments[..]);
    }
}
