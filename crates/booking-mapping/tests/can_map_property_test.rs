//! Property tests for tag matching

use booking_mapping::{
    InternalToPartnerTranscoder, PartnerToInternalTranscoder, SchemaTag, TagPair, Transcoder,
};
use proptest::prelude::*;

/// Re-case each character of `text` according to `mask`
fn recase(text: &str, mask: &[bool]) -> String {
    text.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

fn whitespace() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n')], 1..4)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn case_variants_always_match(
        source_mask in prop::collection::vec(any::<bool>(), 1..32),
        target_mask in prop::collection::vec(any::<bool>(), 1..32),
    ) {
        let transcoder = InternalToPartnerTranscoder::new();
        let source = recase(SchemaTag::INTERNAL_RESERVATION.as_str(), &source_mask);
        let target = recase(SchemaTag::PARTNER_RESERVATION.as_str(), &target_mask);

        prop_assert!(transcoder.can_map(&source, &target));
        prop_assert!(!transcoder.can_map(&target, &source));
    }

    #[test]
    fn surrounding_whitespace_never_matches(
        mask in prop::collection::vec(any::<bool>(), 1..32),
        padding in whitespace(),
        leading in any::<bool>(),
    ) {
        let transcoder = PartnerToInternalTranscoder::new();
        let tag = recase(SchemaTag::PARTNER_RESERVATION.as_str(), &mask);
        let padded = if leading { format!("{padding}{tag}") } else { format!("{tag}{padding}") };

        prop_assert!(transcoder.can_map(&tag, "model.reservation"));
        prop_assert!(!transcoder.can_map(&padded, "model.reservation"));
        let padded_target = format!("{padding}Model.Reservation");
        prop_assert!(!transcoder.can_map(&tag, &padded_target));
    }

    #[test]
    fn arbitrary_pairs_match_iff_equal_ignoring_case(
        own_source in "[A-Za-z.]{1,12}",
        own_target in "[A-Za-z.]{1,12}",
        asked_source in "[A-Za-z.]{1,12}",
        asked_target in "[A-Za-z.]{1,12}",
    ) {
        let pair = TagPair::new(own_source.clone(), own_target.clone());
        let expected = own_source.eq_ignore_ascii_case(&asked_source)
            && own_target.eq_ignore_ascii_case(&asked_target);

        prop_assert_eq!(pair.matches(&asked_source, &asked_target), expected);
        prop_assert!(pair.matches(&own_source.to_uppercase(), &own_target.to_lowercase()));
    }
}
