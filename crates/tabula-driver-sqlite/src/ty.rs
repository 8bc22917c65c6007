use tabula_core::Type;

/// Maps a declared SQLite column type to a runtime type, following SQLite's
/// column affinity rules. Columns without a declared type have BLOB affinity.
pub(crate) fn from_decl_type(decl: Option<&str>) -> Type {
    let Some(decl) = decl else {
        return Type::Bytes;
    };

    let decl = decl.to_ascii_uppercase();

    if decl.contains("BOOL") {
        Type::Bool
    } else if decl.contains("INT") {
        Type::I64
    } else if decl.contains("CHAR") || decl.contains("CLOB") || decl.contains("TEXT") {
        Type::String
    } else if decl.is_empty() || decl.contains("BLOB") {
        Type::Bytes
    } else if decl.contains("DATE") || decl.contains("TIME") {
        Type::String
    } else {
        Type::F64
    }
}
