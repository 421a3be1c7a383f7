//! Round-trips through every wire path, and through SQLite.

use std::fmt::Debug;

use proptest::prelude::*;
use studyhall::types::{CourseStatus, EmailType, EventAction};
use studyhall::{
    AccessLevel, Body, CodecConfig, Color, DriverValue, Email, Filename, Markdown, NodeType, Oid,
    Operation, PasswordHasher, Serializable, Status, UrlSafeName, Username, WordName, WordsName,
};
use studyhall_testkit::fixtures::ValueTable;
use studyhall_testkit::generators;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Check that text, binary and driver paths all return the value unchanged.
fn assert_roundtrips<T>(value: Status<T>)
where
    T: Serializable + Clone + PartialEq + Debug,
{
    let text = value.encode_text(Vec::new()).unwrap();
    assert_eq!(Status::<T>::from_text(text.as_deref()).unwrap(), value);

    let binary = value.encode_binary(Vec::new()).unwrap();
    assert_eq!(Status::<T>::from_binary(binary.as_deref()).unwrap(), value);

    let mut scanned = Status::<T>::default();
    scanned.scan(&value.value().unwrap()).unwrap();
    assert_eq!(scanned, value);
}

/// `set(None)` is NULL for every type, and NULL encodes to nothing.
fn assert_null_totality<T>()
where
    T: Serializable + Debug,
{
    let mut v = Status::<T>::default();
    v.set(None::<&str>).unwrap();
    assert!(v.is_null());
    assert!(v.encode_text(Vec::new()).unwrap().is_none());
    assert!(v.encode_binary(Vec::new()).unwrap().is_none());
    assert_eq!(v.value().unwrap(), DriverValue::Null);
}

#[test]
fn null_is_total_for_every_type() {
    assert_null_totality::<Oid>();
    assert_null_totality::<AccessLevel>();
    assert_null_totality::<NodeType>();
    assert_null_totality::<EventAction>();
    assert_null_totality::<Email>();
    assert_null_totality::<Username>();
    assert_null_totality::<WordName>();
    assert_null_totality::<WordsName>();
    assert_null_totality::<UrlSafeName>();
    assert_null_totality::<Filename>();
    assert_null_totality::<Color>();
    assert_null_totality::<Markdown>();
    assert_null_totality::<Body>();
    assert_null_totality::<studyhall::Password>();
    assert_null_totality::<Operation>();
}

#[test]
fn undefined_never_encodes() {
    let v = Status::<Email>::default();
    assert!(v.encode_text(Vec::new()).is_err());
    assert!(v.encode_binary(Vec::new()).is_err());
    assert!(v.value().is_err());
    let mut out = String::new();
    assert!(v.assign_to(&mut out).is_err());
}

#[test]
fn fixed_values_roundtrip() {
    assert_roundtrips(Status::Present(CourseStatus::Completed));
    assert_roundtrips(Status::Present(EmailType::Backup));
    assert_roundtrips(Status::Present(Filename::new("notes v2.md")));
    assert_roundtrips(Status::Present(UrlSafeName::new("Intro to Rust")));
    assert_roundtrips(Status::Present(Markdown::new("# Hi\n\n@bob see #1")));
    assert_roundtrips(Status::<Markdown>::Null);
    assert_roundtrips(Status::Present(WordName::new("chapter-one").unwrap()));
    assert_roundtrips(Status::Present(WordsName::new("study_notes-2024").unwrap()));
    assert_roundtrips(Status::<WordsName>::Null);
}

#[test]
fn set_from_driver_values_validates() {
    let mut name = Status::<WordName>::default();
    name.set(&DriverValue::Text("algebra".into())).unwrap();
    assert_eq!(name.present().map(|n| n.as_str()), Some("algebra"));

    name.set(&DriverValue::Blob(b"geometry".to_vec())).unwrap();
    assert_eq!(name.present().map(|n| n.as_str()), Some("geometry"));

    assert!(name.set(&DriverValue::Text("not a word".into())).is_err());
    assert_eq!(name.present().map(|n| n.as_str()), Some("geometry"));

    let mut words = Status::<WordsName>::default();
    words.set(&DriverValue::Blob(b"linear_algebra".to_vec())).unwrap();
    assert!(words.is_present());
}

#[test]
fn sqlite_rows_roundtrip() -> anyhow::Result<()> {
    init_tracing();
    let table = ValueTable::on_disk()?;

    let id = Status::Present(Oid::new("lesson")?);
    let owner = Status::Present(Username::new("ada-lovelace")?);
    let body = Status::Present(Body::new("Chapter one.\n".repeat(20)));
    let op = Status::Present(Operation::new(AccessLevel::Update, NodeType::Lesson));
    let accent = Status::<Color>::Null;

    table.put("id", &id)?;
    table.put("owner", &owner)?;
    table.put("body", &body)?;
    table.put("op", &op)?;
    table.put("accent", &accent)?;

    assert_eq!(table.get::<Oid>("id")?, id);
    assert_eq!(table.get::<Username>("owner")?, owner);
    assert_eq!(table.get::<Body>("body")?, body);
    assert_eq!(table.get::<Operation>("op")?, op);
    assert_eq!(table.get::<Color>("accent")?, accent);

    assert_eq!(table.storage_class("body")?.as_deref(), Some("blob"));
    assert_eq!(table.storage_class("op")?.as_deref(), Some("text"));
    Ok(())
}

#[test]
fn sqlite_rejects_wrong_storage_class() -> anyhow::Result<()> {
    init_tracing();
    let table = ValueTable::in_memory()?;
    table.put_raw("n", 3.5f64)?;
    assert!(table.get::<Oid>("n").is_err());
    Ok(())
}

#[tokio::test]
async fn stored_password_verifies_after_reload() -> anyhow::Result<()> {
    init_tracing();
    let hasher = PasswordHasher::new(CodecConfig {
        bcrypt_cost: 4,
        ..Default::default()
    })?;
    let password = hasher
        .hash_new("correct horse battery staple", &["ada"])
        .await?;

    let table = ValueTable::in_memory()?;
    table.put("pw", &Status::Present(password))?;

    let stored = table
        .get::<studyhall::Password>("pw")?
        .into_present()
        .expect("stored password");
    assert!(!stored.has_plaintext());
    hasher.verify(&stored, "correct horse battery staple").await?;
    assert!(hasher.verify(&stored, "wrong horse").await.is_err());
    Ok(())
}

proptest! {
    #[test]
    fn generated_values_roundtrip(
        oid in generators::oid(),
        user in generators::username(),
        color in generators::color(),
        email in generators::email(),
        op in generators::operation(),
        action in generators::label(EventAction::ALL),
        text in generators::body_text(256),
    ) {
        assert_roundtrips(Status::Present(oid));
        assert_roundtrips(Status::Present(Username::new(&user).unwrap()));
        assert_roundtrips(Status::Present(Color::new(&color).unwrap()));
        assert_roundtrips(Status::Present(Email::new(&email).unwrap()));
        assert_roundtrips(Status::Present(op));
        assert_roundtrips(Status::Present(action));
        assert_roundtrips(Status::Present(Body::new(text.clone())));
        assert_roundtrips(Status::Present(Markdown::new(text)));
    }

    #[test]
    fn oid_parse_never_panics(s in "\\PC{0,64}") {
        let _ = Oid::parse(&s);
    }
}
