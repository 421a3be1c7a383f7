//! Golden wire vectors.
//!
//! Stored rows depend on these encodings staying byte-for-byte identical.
//! A failing vector means existing data would no longer read back.

use studyhall_core::{Oid, Serializable, Xid};
use studyhall_types::Password;

/// A known XID and its string form.
#[derive(Debug, Clone)]
pub struct XidVector {
    pub name: &'static str,
    /// Raw 12 bytes (hex).
    pub bytes: &'static str,
    pub encoded: &'static str,
    pub time: u32,
    pub pid: u16,
    pub counter: u32,
}

/// A known OID composition.
#[derive(Debug, Clone)]
pub struct OidVector {
    pub name: &'static str,
    /// Object type as passed by the caller.
    pub kind: &'static str,
    /// Object type after normalization.
    pub expected_kind: &'static str,
    pub short: &'static str,
    pub encoded: &'static str,
}

/// A known password hash and its text wire form.
#[derive(Debug, Clone)]
pub struct PasswordVector {
    pub name: &'static str,
    pub hash: &'static str,
    pub text: &'static str,
    /// Plaintext the hash was made from, when published alongside it.
    pub plaintext: Option<&'static str>,
}

/// Get all XID vectors.
pub fn xid_vectors() -> Vec<XidVector> {
    vec![
        XidVector {
            name: "reference id",
            bytes: "4d88e15b60f486e428412dc9",
            encoded: "9m4e2mr0ui3e8a215n4g",
            time: 1300816219,
            pid: 0xe428,
            counter: 4271561,
        },
        XidVector {
            name: "all zero",
            bytes: "000000000000000000000000",
            encoded: "00000000000000000000",
            time: 0,
            pid: 0,
            counter: 0,
        },
    ]
}

/// Get all OID vectors.
pub fn oid_vectors() -> Vec<OidVector> {
    vec![
        OidVector {
            name: "user",
            kind: "User",
            expected_kind: "User",
            short: "9m4e2mr0ui3e8a215n4g",
            encoded: "MDA0VXNlcjltNGUybXIwdWkzZThhMjE1bjRn",
        },
        OidVector {
            name: "lesson from lowercase",
            kind: "lesson",
            expected_kind: "Lesson",
            short: "9m4e2mr0ui3e8a215n4g",
            encoded: "MDA2TGVzc29uOW00ZTJtcjB1aTNlOGEyMTVuNGc=",
        },
        OidVector {
            name: "camel case is flattened",
            kind: "userAsset",
            expected_kind: "Userasset",
            short: "c0lm2mdnd7s7ke5bbm2g",
            encoded: "MDA5VXNlcmFzc2V0YzBsbTJtZG5kN3M3a2U1YmJtMmc=",
        },
        OidVector {
            name: "zero short id",
            kind: "STUDY",
            expected_kind: "Study",
            short: "00000000000000000000",
            encoded: "MDA1U3R1ZHkwMDAwMDAwMDAwMDAwMDAwMDAwMA==",
        },
    ]
}

/// Get all password vectors.
pub fn password_vectors() -> Vec<PasswordVector> {
    vec![PasswordVector {
        name: "crypt_blowfish U*U",
        hash: "$2a$05$CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW",
        text: "\\x243261243035244343434343434343434343434343434343434343432e453559504f396b6d79755247796830586f7551596234594d4a4b76794f6557",
        plaintext: Some("U*U"),
    }]
}

fn check_xid(v: &XidVector) -> (bool, String) {
    let Ok(raw) = hex::decode(v.bytes) else {
        return (false, "bad hex".into());
    };
    let Ok(raw) = <[u8; 12]>::try_from(raw) else {
        return (false, "wrong length".into());
    };
    let xid = Xid::from_bytes(raw);
    let got = xid.encode();
    let ok = got == v.encoded
        && xid.time() == v.time
        && xid.pid() == v.pid
        && xid.counter() == v.counter
        && Xid::decode(v.encoded).ok() == Some(xid);
    (ok, got)
}

fn check_oid(v: &OidVector) -> (bool, String) {
    let built = match Oid::from_parts(v.kind, v.short) {
        Ok(oid) => oid,
        Err(e) => return (false, e.to_string()),
    };
    let got = built.as_str().to_string();
    let ok = got == v.encoded
        && built.kind() == v.expected_kind
        && Oid::parse(v.encoded).ok() == Some(built);
    (ok, got)
}

fn check_password(v: &PasswordVector) -> (bool, String) {
    let pw = Password::from_hash(v.hash.as_bytes());
    let mut text = Vec::new();
    if let Err(e) = pw.encode_text(&mut text) {
        return (false, e.to_string());
    }
    let got = String::from_utf8_lossy(&text).into_owned();
    let ok = got == v.text && Password::decode_text(v.text.as_bytes()).ok() == Some(pw);
    (ok, got)
}

/// Check every vector against the current encoders.
///
/// Returns `(name, matches, actual encoding)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let xids = xid_vectors()
        .into_iter()
        .map(|v| (v.name, check_xid(&v)));
    let oids = oid_vectors()
        .into_iter()
        .map(|v| (v.name, check_oid(&v)));
    let passwords = password_vectors()
        .into_iter()
        .map(|v| (v.name, check_password(&v)));

    xids.chain(oids)
        .chain(passwords)
        .map(|(name, (ok, got))| (name.to_string(), ok, got))
        .collect()
}
