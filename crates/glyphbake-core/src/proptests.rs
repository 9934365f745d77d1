use crate::codepoints::parse_codepoints;
use proptest::prelude::*;

/// Bare hex is only a codepoint when it has a decimal digit in it
fn bare(text: String, cp: u32) -> (String, Option<u32>) {
    let accepted = text.bytes().any(|b| b.is_ascii_digit()).then_some(cp);
    (text, accepted)
}

fn token() -> impl Strategy<Value = (String, Option<u32>)> {
    prop_oneof![
        any::<u32>().prop_map(|cp| bare(format!("{:X}", cp), cp)),
        any::<u32>().prop_map(|cp| bare(format!("{:x}", cp), cp)),
        any::<u32>().prop_map(|cp| (format!(" 0x{:x}\t", cp), Some(cp))),
        any::<u32>().prop_map(|cp| (format!("U+{:X}", cp), Some(cp))),
        "[g-zG-Z]{1,6}".prop_map(|s| (s, None)),
        "[a-fA-F]{1,6}".prop_map(|s| (s, None)),
    ]
}

// Property: accepted count equals token count minus malformed count, in order
proptest! {
    #[test]
    fn prop_valid_tokens_survive_in_order(tokens in prop::collection::vec(token(), 1..24)) {
        let list = tokens.iter().map(|(t, _)| t.as_str()).collect::<Vec<_>>().join(",");
        let expected: Vec<u32> = tokens.iter().filter_map(|(_, cp)| *cp).collect();
        let malformed = tokens.iter().filter(|(_, cp)| cp.is_none()).count();

        let parsed = parse_codepoints(&list);

        prop_assert_eq!(parsed.codepoints.len(), tokens.len() - malformed);
        prop_assert_eq!(parsed.codepoints, expected);
        prop_assert_eq!(parsed.rejected.len(), malformed);
    }
}

// Property: the parser never panics, whatever it is fed
proptest! {
    #[test]
    fn prop_parser_total(s in "\\PC*") {
        let parsed = parse_codepoints(&s);
        prop_assert_eq!(
            parsed.codepoints.len() + parsed.rejected.len(),
            s.split(',').count()
        );
    }
}
