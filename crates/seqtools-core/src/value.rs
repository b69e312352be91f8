//! Dynamic element values for genuinely heterogeneous input.
//!
//! The engine is generic over its element type; `Value` exists only for the
//! case where a caller holds one of several typed collections and does not
//! know which until runtime. `DynamicList` classifies such a collection into
//! a uniform `Vec<Value>` and reports the error sentinel for its kind.

use serde::{Deserialize, Serialize};

use crate::element::Sentinel;

#[derive(Debug, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Value {
    Null,
    U8(u8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Str(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Null,
    U8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Str,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::U8(_) => ValueKind::U8,
            Value::I16(_) => ValueKind::I16,
            Value::I32(_) => ValueKind::I32,
            Value::I64(_) => ValueKind::I64,
            Value::F32(_) => ValueKind::F32,
            Value::F64(_) => ValueKind::F64,
            Value::Str(_) => ValueKind::Str,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Widen any numeric variant to `i64`. Floats are truncated.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::U8(v) => Some(v as i64),
            Value::I16(v) => Some(v as i64),
            Value::I32(v) => Some(v as i64),
            Value::I64(v) => Some(v),
            Value::F32(v) => Some(v as i64),
            Value::F64(v) => Some(v as i64),
            Value::Null | Value::Str(_) => None,
        }
    }

    /// Widen any numeric variant to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::U8(v) => Some(v as f64),
            Value::I16(v) => Some(v as f64),
            Value::I32(v) => Some(v as f64),
            Value::I64(v) => Some(v as f64),
            Value::F32(v) => Some(v as f64),
            Value::F64(v) => Some(v),
            Value::Null | Value::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl ValueKind {
    /// Error sentinel handed out for exhausted filtering over this kind.
    pub fn sentinel(self) -> Value {
        match self {
            ValueKind::Null => Value::Null,
            ValueKind::U8 => Value::U8(u8::MIN),
            ValueKind::I16 => Value::I16(i16::MIN),
            ValueKind::I32 => Value::I32(i32::MIN),
            ValueKind::I64 => Value::I64(i64::MIN),
            ValueKind::F32 => Value::F32(f32::MIN),
            ValueKind::F64 => Value::F64(f64::MIN),
            ValueKind::Str => Value::Str(String::new()),
        }
    }
}

impl Sentinel for Value {
    fn sentinel() -> Self {
        Value::Null
    }
}

macro_rules! value_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

value_from!(u8 => U8, i16 => I16, i32 => I32, i64 => I64, f32 => F32, f64 => F64, String => Str);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

/// One of the typed collections accepted by dynamic construction.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicList {
    U8(Vec<u8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
    Str(Vec<String>),
    /// Already-dynamic values are taken as-is; their sentinel is `Null`.
    Values(Vec<Value>),
}

impl DynamicList {
    pub fn kind(&self) -> ValueKind {
        match self {
            DynamicList::U8(_) => ValueKind::U8,
            DynamicList::I16(_) => ValueKind::I16,
            DynamicList::I32(_) => ValueKind::I32,
            DynamicList::I64(_) => ValueKind::I64,
            DynamicList::F32(_) => ValueKind::F32,
            DynamicList::F64(_) => ValueKind::F64,
            DynamicList::Str(_) => ValueKind::Str,
            DynamicList::Values(_) => ValueKind::Null,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            DynamicList::U8(v) => v.len(),
            DynamicList::I16(v) => v.len(),
            DynamicList::I32(v) => v.len(),
            DynamicList::I64(v) => v.len(),
            DynamicList::F32(v) => v.len(),
            DynamicList::F64(v) => v.len(),
            DynamicList::Str(v) => v.len(),
            DynamicList::Values(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Classify into a uniform value vector plus the kind's error sentinel.
    pub fn into_values(self) -> (Vec<Value>, Value) {
        let sentinel = self.kind().sentinel();
        let values = match self {
            DynamicList::U8(v) => v.into_iter().map(Value::U8).collect(),
            DynamicList::I16(v) => v.into_iter().map(Value::I16).collect(),
            DynamicList::I32(v) => v.into_iter().map(Value::I32).collect(),
            DynamicList::I64(v) => v.into_iter().map(Value::I64).collect(),
            DynamicList::F32(v) => v.into_iter().map(Value::F32).collect(),
            DynamicList::F64(v) => v.into_iter().map(Value::F64).collect(),
            DynamicList::Str(v) => v.into_iter().map(Value::Str).collect(),
            DynamicList::Values(v) => v,
        };
        (values, sentinel)
    }
}
