/// Runtime value type of a column, as reported by the driver during
/// introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// 64-bit floating point number
    F64,

    /// String type
    String,

    /// Raw bytes
    Bytes,
}

impl Type {
    /// Returns `true` for types whose values render as bare SQL literals
    /// (booleans and numbers). Every other type renders quoted.
    pub const fn is_primitive(self) -> bool {
        matches!(self, Self::Bool | Self::I32 | Self::I64 | Self::F64)
    }

    /// Rust type name, as shown in conversion errors.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F64 => "f64",
            Self::String => "String",
            Self::Bytes => "Vec<u8>",
        }
    }
}
