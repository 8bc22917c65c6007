/// Derives a table name from a model's simple type name.
///
/// An underscore is inserted before every uppercase letter and the result is
/// lowercased; a leading underscore produced by the first letter is dropped.
/// Acronyms are not collapsed: `HTTPLog` becomes `h_t_t_p_log`.
pub fn table_name_for(model: &str) -> String {
    // Only the last path segment is used, so `app::UserAccount` and
    // `UserAccount` agree.
    let simple = model.rsplit("::").next().unwrap_or(model);

    let mut name = String::with_capacity(simple.len() + 4);
    for ch in simple.chars() {
        if ch.is_ascii_uppercase() {
            name.push('_');
            name.push(ch.to_ascii_lowercase());
        } else {
            name.push(ch);
        }
    }

    match name.strip_prefix('_') {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}
