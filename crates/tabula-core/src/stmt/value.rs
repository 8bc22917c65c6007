use super::Type;
use crate::{Error, Result};

/// A single column value. Records store one of these per column.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit floating point number
    F64(f64),

    /// String value
    String(String),

    /// Raw bytes
    Bytes(Vec<u8>),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the type of the value, or `None` for `Null`.
    pub const fn infer_ty(&self) -> Option<Type> {
        Some(match self {
            Self::Bool(_) => Type::Bool,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::F64(_) => Type::F64,
            Self::String(_) => Type::String,
            Self::Bytes(_) => Type::Bytes,
            Self::Null => return None,
        })
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn to_bool(&self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(*v),
            _ => Err(Error::type_conversion(self.clone(), Type::Bool.name())),
        }
    }

    pub fn to_i32(&self) -> Result<i32> {
        match self {
            Self::I32(v) => Ok(*v),
            Self::I64(v) => {
                i32::try_from(*v)
                    .map_err(|_| Error::type_conversion(self.clone(), Type::I32.name()))
            }
            _ => Err(Error::type_conversion(self.clone(), Type::I32.name())),
        }
    }

    pub fn to_i64(&self) -> Result<i64> {
        match self {
            Self::I32(v) => Ok(i64::from(*v)),
            Self::I64(v) => Ok(*v),
            _ => Err(Error::type_conversion(self.clone(), Type::I64.name())),
        }
    }

    pub fn to_f64(&self) -> Result<f64> {
        match self {
            Self::F64(v) => Ok(*v),
            Self::I32(v) => Ok(f64::from(*v)),
            _ => Err(Error::type_conversion(self.clone(), Type::F64.name())),
        }
    }

    pub fn to_string_value(&self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v.clone()),
            _ => Err(Error::type_conversion(self.clone(), Type::String.name())),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Self::Bytes(v) => Ok(v.clone()),
            _ => Err(Error::type_conversion(self.clone(), Type::Bytes.name())),
        }
    }

    /// Converts the value into the given column type, failing rather than
    /// truncating. `Null` is returned unchanged.
    pub fn cast(self, ty: Type) -> Result<Value> {
        if self.is_null() || self.infer_ty() == Some(ty) {
            return Ok(self);
        }

        Ok(match ty {
            Type::Bool => Value::Bool(self.to_bool()?),
            Type::I32 => Value::I32(self.to_i32()?),
            Type::I64 => Value::I64(self.to_i64()?),
            Type::F64 => Value::F64(self.to_f64()?),
            Type::String => Value::String(self.to_string_value()?),
            Type::Bytes => Value::Bytes(self.to_bytes()?),
        })
    }
}

impl core::fmt::Display for Value {
    /// Renders the value as it would appear in SQL text, without quoting.
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::I32(v) => write!(f, "{}", v),
            Self::I64(v) => write!(f, "{}", v),
            Self::F64(v) => write!(f, "{}", v),
            Self::String(v) => f.write_str(v),
            Self::Bytes(v) => {
                for byte in v {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}
