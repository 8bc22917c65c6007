use tabula_core::{Type, Value};

use std::fmt;

/// Renders `column in (v1,v2,...)` with the values inlined as literals.
///
/// `ty` is the column's declared type and decides the rendering for every
/// value: primitive types (bool, integers, floats) are written bare, all
/// others are wrapped in single quotes. Values are **not** escaped and are
/// **not** bound as parameters. Never pass externally sourced strings here;
/// sanitize them first or use a parameterized query instead.
pub fn in_clause<'a, I>(column: &str, ty: Type, values: I) -> String
where
    I: IntoIterator<Item = &'a Value>,
{
    let quoted = !ty.is_primitive();

    let list = values
        .into_iter()
        .map(|value| Literal { value, quoted }.to_string())
        .collect::<Vec<_>>()
        .join(",");

    format!("{} in ({})", column, list)
}

struct Literal<'a> {
    value: &'a Value,
    quoted: bool,
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "'{}'", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}
