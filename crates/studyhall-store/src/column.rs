//! rusqlite bindings for `Status<T>`.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};
use rusqlite::{Row, RowIndex};
use studyhall_core::{DriverValue, Serializable, Status};

/// A codec value as a SQLite column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column<T>(pub Status<T>);

impl<T> Column<T> {
    pub fn into_inner(self) -> Status<T> {
        self.0
    }
}

impl<T> Default for Column<T> {
    fn default() -> Self {
        Column(Status::Undefined)
    }
}

impl<T> From<Status<T>> for Column<T> {
    fn from(status: Status<T>) -> Self {
        Column(status)
    }
}

impl<T> From<Column<T>> for Status<T> {
    fn from(column: Column<T>) -> Self {
        column.0
    }
}

impl<T> ToSql for Column<T>
where
    T: Serializable,
    T::Error: Send + Sync + 'static,
{
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let value = self
            .0
            .value()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
        Ok(ToSqlOutput::Owned(to_sqlite(value)))
    }
}

impl<T> FromSql for Column<T>
where
    T: Serializable,
    T::Error: Send + Sync + 'static,
{
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let driver = from_sqlite(value);
        let mut status = Status::Undefined;
        match status.scan(&driver) {
            Ok(()) => Ok(Column(status)),
            Err(e) => {
                tracing::warn!(
                    type_name = T::TYPE_NAME,
                    storage = driver.kind(),
                    error = %e,
                    "failed to scan column"
                );
                Err(FromSqlError::Other(Box::new(e)))
            }
        }
    }
}

/// Read codec values straight off a row.
pub trait RowExt {
    fn get_status<I, T>(&self, idx: I) -> rusqlite::Result<Status<T>>
    where
        I: RowIndex,
        T: Serializable,
        T::Error: Send + Sync + 'static;
}

impl RowExt for Row<'_> {
    fn get_status<I, T>(&self, idx: I) -> rusqlite::Result<Status<T>>
    where
        I: RowIndex,
        T: Serializable,
        T::Error: Send + Sync + 'static,
    {
        self.get::<_, Column<T>>(idx).map(Column::into_inner)
    }
}

fn to_sqlite(value: DriverValue) -> Value {
    match value {
        DriverValue::Null => Value::Null,
        DriverValue::Integer(v) => Value::Integer(v),
        DriverValue::Real(v) => Value::Real(v),
        DriverValue::Text(s) => Value::Text(s),
        DriverValue::Blob(b) => Value::Blob(b),
    }
}

fn from_sqlite(value: ValueRef<'_>) -> DriverValue {
    match value {
        ValueRef::Null => DriverValue::Null,
        ValueRef::Integer(v) => DriverValue::Integer(v),
        ValueRef::Real(v) => DriverValue::Real(v),
        // SQLite does not enforce UTF-8 in TEXT; hand invalid text over as bytes.
        ValueRef::Text(b) => match std::str::from_utf8(b) {
            Ok(s) => DriverValue::Text(s.to_string()),
            Err(_) => DriverValue::Blob(b.to_vec()),
        },
        ValueRef::Blob(b) => DriverValue::Blob(b.to_vec()),
    }
}
