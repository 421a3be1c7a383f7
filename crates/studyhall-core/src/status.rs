//! Tri-state nullability for codec values.
//!
//! A column can be never set, explicitly NULL, or hold a payload. Keeping the
//! three apart is what lets "forgot to initialize" fail loudly instead of
//! being written as NULL.

use std::borrow::Cow;

use crate::codec::{AssignTarget, DriverValue, Serializable};
use crate::error::CodecError;

/// A codec value: a payload tagged with its nullability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status<T> {
    /// Never set. Encoding it is an error.
    Undefined,
    /// Deliberately absent. Encodes as wire NULL.
    Null,
    /// Has a payload.
    Present(T),
}

impl<T> Default for Status<T> {
    fn default() -> Self {
        Status::Undefined
    }
}

impl<T> From<T> for Status<T> {
    fn from(value: T) -> Self {
        Status::Present(value)
    }
}

impl<T> Status<T> {
    /// `None` becomes `Null`, `Some(v)` becomes `Present(v)`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Status::Present(v),
            None => Status::Null,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Status::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Status::Null)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Status::Present(_))
    }

    /// The payload, if present.
    pub fn present(&self) -> Option<&T> {
        match self {
            Status::Present(v) => Some(v),
            _ => None,
        }
    }

    /// Consume into the payload, if present.
    pub fn into_present(self) -> Option<T> {
        match self {
            Status::Present(v) => Some(v),
            _ => None,
        }
    }

    /// Borrowing view with the same status.
    pub fn as_ref(&self) -> Status<&T> {
        match self {
            Status::Undefined => Status::Undefined,
            Status::Null => Status::Null,
            Status::Present(v) => Status::Present(v),
        }
    }

    /// Generic read access. Never validates.
    ///
    /// `Undefined` is returned as-is so driver code can tell it apart from NULL.
    pub fn get(&self) -> Status<&T> {
        self.as_ref()
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Status<U> {
        match self {
            Status::Undefined => Status::Undefined,
            Status::Null => Status::Null,
            Status::Present(v) => Status::Present(f(v)),
        }
    }
}

impl<T: Serializable> Status<T> {
    /// Replace this value from application input.
    ///
    /// Raw text and bytes go through the payload's validation. On error the
    /// current value is left untouched.
    pub fn set<'a>(&mut self, src: impl Into<Source<'a, T>>) -> Result<(), T::Error> {
        let next = match src.into() {
            Source::Null => Status::Null,
            Source::Value(v) => Status::Present(v),
            Source::Text(s) => Status::Present(T::from_input(&s)?),
            Source::Bytes(b) => Status::Present(T::from_input_bytes(&b)?),
            Source::Driver(value) => match value {
                DriverValue::Null => Status::Null,
                DriverValue::Text(s) => Status::Present(T::from_input(s)?),
                DriverValue::Blob(b) => Status::Present(T::from_input_bytes(b)?),
                other => return Err(cannot_convert::<T>(other).into()),
            },
        };
        *self = next;
        Ok(())
    }

    /// Copy the payload into a plain slot.
    pub fn assign_to(&self, dst: &mut dyn AssignTarget) -> Result<(), T::Error> {
        match self {
            Status::Present(v) => dst.assign(v.assignable(), T::TYPE_NAME)?,
            Status::Null => dst.assign_null(T::TYPE_NAME)?,
            Status::Undefined => return Err(undefined::<T>().into()),
        }
        Ok(())
    }

    /// Replace this value from wire text. `None` is NULL.
    pub fn decode_text(&mut self, src: Option<&[u8]>) -> Result<(), T::Error> {
        *self = Self::from_text(src)?;
        Ok(())
    }

    /// Replace this value from wire binary. `None` is NULL.
    pub fn decode_binary(&mut self, src: Option<&[u8]>) -> Result<(), T::Error> {
        *self = Self::from_binary(src)?;
        Ok(())
    }

    /// Construct from wire text. `None` is NULL.
    pub fn from_text(src: Option<&[u8]>) -> Result<Self, T::Error> {
        match src {
            None => Ok(Status::Null),
            Some(bytes) => Ok(Status::Present(T::decode_text(bytes)?)),
        }
    }

    /// Construct from wire binary. `None` is NULL.
    pub fn from_binary(src: Option<&[u8]>) -> Result<Self, T::Error> {
        match src {
            None => Ok(Status::Null),
            Some(bytes) => Ok(Status::Present(T::decode_binary(bytes)?)),
        }
    }

    /// Append the wire text to `buf`. Returns `None` for NULL.
    pub fn encode_text(&self, mut buf: Vec<u8>) -> Result<Option<Vec<u8>>, T::Error> {
        match self {
            Status::Present(v) => {
                v.encode_text(&mut buf)?;
                Ok(Some(buf))
            }
            Status::Null => Ok(None),
            Status::Undefined => Err(undefined::<T>().into()),
        }
    }

    /// Append the wire binary to `buf`. Returns `None` for NULL.
    pub fn encode_binary(&self, mut buf: Vec<u8>) -> Result<Option<Vec<u8>>, T::Error> {
        match self {
            Status::Present(v) => {
                v.encode_binary(&mut buf)?;
                Ok(Some(buf))
            }
            Status::Null => Ok(None),
            Status::Undefined => Err(undefined::<T>().into()),
        }
    }

    /// Fill from a generic driver value. Only text and blobs are accepted.
    pub fn scan(&mut self, src: &DriverValue) -> Result<(), T::Error> {
        match src {
            DriverValue::Null => self.decode_text(None),
            DriverValue::Text(s) => self.decode_text(Some(s.as_bytes())),
            DriverValue::Blob(b) => self.decode_text(Some(b.as_slice())),
            other => Err(cannot_convert::<T>(other).into()),
        }
    }

    /// The value handed to a generic driver.
    pub fn value(&self) -> Result<DriverValue, T::Error> {
        match self {
            Status::Present(v) => v.to_driver(),
            Status::Null => Ok(DriverValue::Null),
            Status::Undefined => Err(undefined::<T>().into()),
        }
    }
}

fn undefined<T: Serializable>() -> CodecError {
    CodecError::Undefined {
        type_name: T::TYPE_NAME,
    }
}

fn cannot_convert<T: Serializable>(value: &DriverValue) -> CodecError {
    CodecError::CannotConvert {
        value: value.to_string(),
        type_name: T::TYPE_NAME,
    }
}

/// Input accepted by [`Status::set`].
#[derive(Debug, Clone)]
pub enum Source<'a, T> {
    Null,
    Value(T),
    Text(Cow<'a, str>),
    Bytes(Cow<'a, [u8]>),
    Driver(&'a DriverValue),
}

impl<'a, T> From<&'a str> for Source<'a, T> {
    fn from(s: &'a str) -> Self {
        Source::Text(Cow::Borrowed(s))
    }
}

impl<'a, T> From<&'a String> for Source<'a, T> {
    fn from(s: &'a String) -> Self {
        Source::Text(Cow::Borrowed(s.as_str()))
    }
}

impl<'a, T> From<String> for Source<'a, T> {
    fn from(s: String) -> Self {
        Source::Text(Cow::Owned(s))
    }
}

impl<'a, T> From<&'a [u8]> for Source<'a, T> {
    fn from(b: &'a [u8]) -> Self {
        Source::Bytes(Cow::Borrowed(b))
    }
}

impl<'a, T, const N: usize> From<&'a [u8; N]> for Source<'a, T> {
    fn from(b: &'a [u8; N]) -> Self {
        Source::Bytes(Cow::Borrowed(b.as_slice()))
    }
}

impl<'a, T> From<&'a Vec<u8>> for Source<'a, T> {
    fn from(b: &'a Vec<u8>) -> Self {
        Source::Bytes(Cow::Borrowed(b.as_slice()))
    }
}

impl<'a, T> From<Vec<u8>> for Source<'a, T> {
    fn from(b: Vec<u8>) -> Self {
        Source::Bytes(Cow::Owned(b))
    }
}

impl<'a, T> From<&'a DriverValue> for Source<'a, T> {
    fn from(v: &'a DriverValue) -> Self {
        Source::Driver(v)
    }
}

impl<'a, T, S: Into<Source<'a, T>>> From<Option<S>> for Source<'a, T> {
    fn from(v: Option<S>) -> Self {
        match v {
            Some(s) => s.into(),
            None => Source::Null,
        }
    }
}

/// Let a payload type be passed to [`Status::set`] directly, by value or by reference.
#[macro_export]
macro_rules! impl_source_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> From<$ty> for $crate::Source<'a, $ty> {
                fn from(v: $ty) -> Self {
                    $crate::Source::Value(v)
                }
            }

            impl<'a> From<&'a $ty> for $crate::Source<'a, $ty> {
                fn from(v: &'a $ty) -> Self {
                    $crate::Source::Value(v.clone())
                }
            }
        )*
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Assignable;

    /// Upper-case ASCII word, for exercising the wrapper in isolation.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Shout(String);

    impl Serializable for Shout {
        const TYPE_NAME: &'static str = "Shout";
        type Error = CodecError;

        fn from_input(raw: &str) -> Result<Self, CodecError> {
            if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(CodecError::CannotConvert {
                    value: raw.to_string(),
                    type_name: Self::TYPE_NAME,
                });
            }
            Ok(Shout(raw.to_string()))
        }

        fn decode_text(src: &[u8]) -> Result<Self, CodecError> {
            Ok(Shout(crate::codec::decode_utf8(src, Self::TYPE_NAME)?.to_string()))
        }

        fn encode_text(&self, buf: &mut Vec<u8>) -> Result<(), CodecError> {
            buf.extend_from_slice(self.0.as_bytes());
            Ok(())
        }

        fn assignable(&self) -> Assignable<'_> {
            Assignable::Text(&self.0)
        }
    }

    crate::impl_source_value!(Shout);

    #[test]
    fn test_default_is_undefined() {
        let v: Status<Shout> = Status::default();
        assert!(v.is_undefined());
        assert_eq!(v.get(), Status::Undefined);
    }

    #[test]
    fn test_set_null_short_circuits() {
        let mut v: Status<Shout> = Status::Present(Shout("A".into()));
        v.set(None::<&str>).unwrap();
        assert!(v.is_null());
        assert_eq!(v.encode_text(Vec::new()).unwrap(), None);
        assert_eq!(v.value().unwrap(), DriverValue::Null);
    }

    #[test]
    fn test_set_validates_text() {
        let mut v: Status<Shout> = Status::default();
        v.set("HELLO").unwrap();
        assert_eq!(v.present(), Some(&Shout("HELLO".into())));

        v.set(b"BYTES").unwrap();
        assert_eq!(v.present(), Some(&Shout("BYTES".into())));

        v.set(Shout("DIRECT".into())).unwrap();
        assert_eq!(v.present(), Some(&Shout("DIRECT".into())));
    }

    #[test]
    fn test_set_failure_leaves_value_unchanged() {
        let mut v: Status<Shout> = Status::Present(Shout("KEEP".into()));
        assert!(v.set("lower").is_err());
        assert_eq!(v.present(), Some(&Shout("KEEP".into())));
    }

    #[test]
    fn test_set_from_driver_values() {
        let mut v: Status<Shout> = Status::default();
        v.set(&DriverValue::Text("TEXT".into())).unwrap();
        assert_eq!(v.present(), Some(&Shout("TEXT".into())));

        v.set(&DriverValue::Blob(b"BLOB".to_vec())).unwrap();
        assert_eq!(v.present(), Some(&Shout("BLOB".into())));

        // Driver input is validated like any other input.
        assert!(v.set(&DriverValue::Text("lower".into())).is_err());
        assert!(v.set(&DriverValue::Blob(vec![0xff])).is_err());
        assert_eq!(v.present(), Some(&Shout("BLOB".into())));

        v.set(&DriverValue::Null).unwrap();
        assert!(v.is_null());
    }

    #[test]
    fn test_set_rejects_non_text_driver_values() {
        let mut v: Status<Shout> = Status::default();
        let err = v.set(&DriverValue::Integer(42)).unwrap_err();
        assert_eq!(
            err,
            CodecError::CannotConvert {
                value: "42".into(),
                type_name: "Shout"
            }
        );
        assert!(v.is_undefined());
    }

    #[test]
    fn test_encode_undefined_fails() {
        let v: Status<Shout> = Status::Undefined;
        assert_eq!(
            v.encode_text(Vec::new()).unwrap_err(),
            CodecError::Undefined { type_name: "Shout" }
        );
        assert!(v.encode_binary(Vec::new()).is_err());
        assert!(v.value().is_err());
    }

    #[test]
    fn test_encode_appends_to_buffer() {
        let v = Status::Present(Shout("AB".into()));
        let out = v.encode_text(b"xx".to_vec()).unwrap().unwrap();
        assert_eq!(out, b"xxAB");
    }

    #[test]
    fn test_decode_none_is_null() {
        let mut v = Status::Present(Shout("A".into()));
        v.decode_text(None).unwrap();
        assert!(v.is_null());

        v.decode_binary(Some(&b"Z"[..])).unwrap();
        assert_eq!(v.present(), Some(&Shout("Z".into())));
    }

    #[test]
    fn test_scan_value_roundtrip() {
        let v = Status::Present(Shout("ROUND".into()));
        let driver = v.value().unwrap();

        let mut back: Status<Shout> = Status::default();
        back.scan(&driver).unwrap();
        assert_eq!(back, v);

        assert!(back.scan(&DriverValue::Real(1.5)).is_err());
        back.scan(&DriverValue::Null).unwrap();
        assert!(back.is_null());
    }

    #[test]
    fn test_assign_to() {
        let v = Status::Present(Shout("OUT".into()));
        let mut s = String::new();
        v.assign_to(&mut s).unwrap();
        assert_eq!(s, "OUT");

        let null: Status<Shout> = Status::Null;
        let mut slot: Option<String> = Some("old".into());
        null.assign_to(&mut slot).unwrap();
        assert_eq!(slot, None);
        assert!(null.assign_to(&mut s).is_err());

        let undefined: Status<Shout> = Status::Undefined;
        assert!(undefined.assign_to(&mut slot).is_err());
    }

    #[test]
    fn test_map_and_option() {
        assert_eq!(Status::from_option(Some(1)).map(|v| v + 1), Status::Present(2));
        assert_eq!(Status::<i32>::from_option(None), Status::Null);
        assert_eq!(Status::Present(3).into_present(), Some(3));
    }
}
