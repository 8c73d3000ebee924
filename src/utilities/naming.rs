// Member Naming
// String helpers for qualifying member names with a project base name

/// Remove a leading project base name and any underscores that follow it.
///
/// Names not starting with `base` are returned unchanged. An empty base
/// matches every name, so only the leading underscores go.
pub fn strip_project_prefix<'a>(name: &'a str, base: &str) -> &'a str {
    match name.strip_prefix(base) {
        Some(rest) => rest.trim_start_matches('_'),
        None => name,
    }
}

/// Remove one trailing file extension, if present
pub fn strip_extension<'a>(name: &'a str, extension: &str) -> &'a str {
    name.strip_suffix(extension).unwrap_or(name)
}

/// Append `extension` unless the name already ends with it
pub fn with_extension(name: &str, extension: &str) -> String {
    if name.ends_with(extension) {
        name.to_string()
    } else {
        format!("{}{}", name, extension)
    }
}

/// Build `<base>_<plain><extension>`.
///
/// The underscore is left out when `plain` is empty.
pub fn qualify(base: &str, plain: &str, extension: &str) -> String {
    let mut qualified = base.to_string();
    if !plain.is_empty() {
        qualified.push('_');
        qualified.push_str(plain);
    }
    with_extension(&qualified, extension)
}
