//! Golden wire encodings.
//!
//! These bytes are what existing databases hold. Any change here breaks
//! reading stored rows.

use studyhall::types::{EventAction, NotificationReason};
use studyhall::{AccessLevel, Markdown, NodeType, Oid, Operation, Password, Serializable, Status};
use studyhall_testkit::{oid_vectors, password_vectors, verify_all_vectors};

#[test]
fn golden_vectors_match() {
    let results = verify_all_vectors();
    assert!(!results.is_empty());
    for (name, ok, got) in results {
        assert!(ok, "vector '{}' produced {}", name, got);
    }
}

#[test]
fn oid_vectors_parse_to_normalized_kind() -> anyhow::Result<()> {
    for v in oid_vectors() {
        let oid: Oid = v.encoded.parse()?;
        assert_eq!(oid.kind(), v.expected_kind, "{}", v.name);
        assert_eq!(oid.short(), v.short, "{}", v.name);
        assert!(oid.is_kind(v.kind), "{}", v.name);
    }
    Ok(())
}

#[test]
fn password_text_and_binary_differ() -> anyhow::Result<()> {
    for v in password_vectors() {
        let status = Status::Present(Password::from_hash(v.hash.as_bytes()));

        let text = status.encode_text(Vec::new())?.expect("present");
        let binary = status.encode_binary(Vec::new())?.expect("present");
        assert_eq!(text, v.text.as_bytes());
        assert_eq!(binary, v.hash.as_bytes());

        assert_eq!(Status::<Password>::from_text(Some(&text[..]))?, status);
        assert_eq!(Status::<Password>::from_binary(Some(&binary[..]))?, status);
    }
    Ok(())
}

#[test]
fn enum_labels_are_bare_strings() {
    fn text<T: Serializable>(v: &T) -> Vec<u8> {
        let mut buf = Vec::new();
        v.encode_text(&mut buf).unwrap();
        buf
    }

    assert_eq!(text(&AccessLevel::Disconnect), b"Disconnect");
    assert_eq!(text(&NodeType::CourseLesson), b"CourseLesson");
    assert_eq!(text(&EventAction::RemovedFromCourse), b"RemovedFromCourse");
    assert_eq!(text(&NotificationReason::Mention), b"Mention");
    assert_eq!(
        text(&Operation::new(AccessLevel::Read, NodeType::User)),
        b"Read User"
    );
}

#[test]
fn markdown_reference_examples() -> anyhow::Result<()> {
    assert_eq!(Markdown::new("hi @bob and @sue").at_refs(), vec!["bob", "sue"]);

    let refs = Markdown::new("see owner/repo#42").cross_study_refs()?;
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].owner, "owner");
    assert_eq!(refs[0].name, "repo");
    assert_eq!(refs[0].number, 42);
    Ok(())
}
