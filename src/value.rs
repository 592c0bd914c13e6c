//! Kind-tagged runtime values.
//!
//! [`Witness::structural`](crate::Witness::structural) converts between two
//! types with equal shapes by going through a [`Value`]: the source writes
//! itself out, the target reads itself back. Records are keyed by label
//! name and union members by kind, so neither field order nor member order
//! matters.

/// A structural value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Unit,
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    StaticStr(&'static str),
    String(String),
    Record(Vec<(&'static str, Value)>),
}

impl Value {
    /// The field called `name`, if this is a record that has one.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Record(fields) => fields.iter().find(|(n, _)| *n == name).map(|(_, v)| v),
            _ => None,
        }
    }
}
