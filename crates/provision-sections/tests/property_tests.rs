use proptest::prelude::*;
use provision_sections::{Tag, content};

proptest! {
    #[test]
    fn add_then_remove_restores_content(
        original in "[a-z =#\n]{0,64}",
        raw_tag in "[a-zA-Z0-9 ._-]{1,16}",
        body in "[a-z0-9 \n]{0,64}",
    ) {
        let tag = Tag::new(&raw_tag).unwrap();
        let markers = tag.markers();
        prop_assume!(!markers.occurs_in(original.as_bytes()));

        let added = content::insert_section(original.as_bytes(), &tag, &body).unwrap();

        // The original bytes are an untouched prefix
        prop_assert!(added.starts_with(original.as_bytes()));

        let removed = content::remove_section(&added, &tag).unwrap();
        let expected_separator = !original.is_empty() && !original.ends_with('\n');
        let mut expected = original.clone().into_bytes();
        if expected_separator {
            expected.push(b'\n');
        }
        prop_assert_eq!(removed, expected);
    }

    #[test]
    fn normalized_tags_are_marker_safe(raw in "\\PC{1,32}") {
        let tag = Tag::new(&raw).unwrap();
        prop_assert!(!tag.as_str().is_empty());
        prop_assert!(tag
            .as_str()
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_'));
        prop_assert_eq!(provision_sections::normalize(tag.as_str()), tag.as_str());
    }
}
