use std::path::Path;

/// Drops control characters and `<`/`>` then trims. Running it twice is a no-op.
pub fn sanitize_input(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() && *c != '<' && *c != '>')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Sanitizes an optional field; blank results collapse to `None`.
pub fn sanitize_optional(text: Option<&str>) -> Option<String> {
    text.map(sanitize_input).filter(|s| !s.is_empty())
}

/// Case-insensitive extension check. Names without a real extension
/// (`".png"`, `"file."`, `"README"`) never pass.
pub fn is_valid_file_type(filename: &str, allowed: &[&str]) -> bool {
    let Some(ext) = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
    else {
        return false;
    };

    allowed.iter().any(|a| a.eq_ignore_ascii_case(ext))
}

/// URL-safe slug: lowercase ASCII alphanumerics separated by single hyphens.
pub fn generate_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '_' || c == '-' {
            pending_separator = true;
        }
    }

    slug
}
