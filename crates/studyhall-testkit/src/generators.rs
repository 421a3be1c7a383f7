//! Proptest generators for property-based testing.
//!
//! Every strategy here produces values the corresponding constructor accepts.

use proptest::prelude::*;

use studyhall_core::{Oid, Xid};
use studyhall_perms::Operation;
use studyhall_types::{AccessLevel, Markdown, NodeType};

/// Generate a valid username.
pub fn username() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,10}(-[a-zA-Z0-9]{1,9}){0,2}".prop_map(String::from)
}

/// Generate a valid single-word name.
pub fn word_name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9-]{1,39}".prop_map(String::from)
}

/// Generate a valid multi-word name.
pub fn words_name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,39}".prop_map(String::from)
}

/// Generate a hex color, with or without the leading `#`.
pub fn color() -> impl Strategy<Value = String> {
    "#?[0-9a-fA-F]{3,8}".prop_map(String::from)
}

/// Generate a plausible email address.
pub fn email() -> impl Strategy<Value = String> {
    "[a-z0-9._%+-]{1,16}@[a-z0-9]{1,10}\\.[a-z]{2,6}".prop_map(String::from)
}

/// Generate an object type name in any casing.
pub fn object_kind() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,15}".prop_map(String::from)
}

/// Generate an arbitrary XID.
pub fn xid() -> impl Strategy<Value = Xid> {
    any::<[u8; 12]>().prop_map(Xid::from_bytes)
}

/// Generate an OID for an arbitrary kind and short id.
pub fn oid() -> impl Strategy<Value = Oid> {
    (object_kind(), xid()).prop_map(|(kind, short)| {
        Oid::from_parts(&kind, &short.encode()).expect("generated kind is non-empty")
    })
}

/// Pick one member of a closed label set.
pub fn label<T>(all: &'static [T]) -> impl Strategy<Value = T>
where
    T: Clone + std::fmt::Debug + 'static,
{
    prop::sample::select(all)
}

/// Generate a permission operation.
pub fn operation() -> impl Strategy<Value = Operation> {
    (label(AccessLevel::ALL), label(NodeType::ALL)).prop_map(|(a, n)| Operation::new(a, n))
}

/// Generate text for a compressed body, including multi-byte characters and newlines.
pub fn body_text(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..=max_len).prop_map(|chars| chars.into_iter().collect())
}

/// References to embed in a generated markdown document.
#[derive(Debug, Clone)]
pub struct ReferenceParams {
    pub mentions: Vec<String>,
    pub numbers: Vec<i32>,
    pub cross_study: Vec<(String, String, i32)>,
}

impl Arbitrary for ReferenceParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let name = || "[a-z][a-z0-9]{0,8}";
        (
            prop::collection::vec(name(), 0..4),
            prop::collection::vec(0i32..100_000, 0..4),
            prop::collection::vec((name(), "[a-z0-9_-]{1,8}", 0i32..100_000), 0..3),
        )
            .prop_map(|(mentions, numbers, cross_study)| ReferenceParams {
                mentions,
                numbers,
                cross_study,
            })
            .boxed()
    }
}

/// Build a markdown document containing exactly the given references.
pub fn markdown_from_params(params: &ReferenceParams) -> Markdown {
    let mut words = vec!["Notes:".to_string()];
    words.extend(params.mentions.iter().map(|m| format!("@{}", m)));
    words.extend(params.numbers.iter().map(|n| format!("#{}", n)));
    words.extend(
        params
            .cross_study
            .iter()
            .map(|(owner, name, n)| format!("{}/{}#{}", owner, name, n)),
    );
    Markdown::new(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyhall_types::{Color, Email, Username, WordName, WordsName};

    proptest! {
        #[test]
        fn test_generated_names_are_accepted(
            u in username(),
            w in word_name(),
            ws in words_name(),
            c in color(),
            e in email(),
        ) {
            prop_assert!(Username::new(&u).is_ok(), "username {:?}", u);
            prop_assert!(WordName::new(&w).is_ok(), "word name {:?}", w);
            prop_assert!(WordsName::new(&ws).is_ok(), "words name {:?}", ws);
            prop_assert!(Color::new(&c).is_ok(), "color {:?}", c);
            prop_assert!(Email::new(&e).is_ok(), "email {:?}", e);
        }

        #[test]
        fn test_references_are_extracted(params: ReferenceParams) {
            let md = markdown_from_params(&params);

            prop_assert_eq!(md.at_refs(), params.mentions.clone());
            prop_assert_eq!(md.number_refs().unwrap(), params.numbers.clone());

            let cross: Vec<_> = md
                .cross_study_refs()
                .unwrap()
                .into_iter()
                .map(|r| (r.owner, r.name, r.number))
                .collect();
            prop_assert_eq!(cross, params.cross_study.clone());
        }

        #[test]
        fn test_oid_parse_roundtrip(id in oid()) {
            let parsed = Oid::parse(id.as_str()).unwrap();
            prop_assert_eq!(parsed.kind(), id.kind());
            prop_assert_eq!(parsed.short(), id.short());
        }

        #[test]
        fn test_operation_text_roundtrip(op in operation()) {
            prop_assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }
}
