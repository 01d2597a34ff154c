use heck::ToSnakeCase;

/// Resolves the property a field binds to.
///
/// A tag of the form `name` or `name,<options>` wins when its first segment
/// is not empty. Otherwise the declared field name is converted to
/// snake_case.
pub(crate) fn property_name(field: &str, tag: Option<&str>) -> String {
    match tag.and_then(|tag| tag.split(',').next()) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => field.to_snake_case(),
    }
}
