use email_address::EmailAddress;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").expect("phone pattern"));

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b[-a-zA-Z0-9()@:%_+.~#?&/=]*$",
    )
    .expect("url pattern")
});

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("hex pattern"));

static ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("id pattern")
});

static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?linkedin\.com/in/[A-Za-z0-9_-]+/?$").expect("linkedin pattern")
});

static GITHUB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?github\.com/[A-Za-z0-9_-]+/?$").expect("github pattern")
});

const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// `local@domain.tld` with no whitespace; must also pass RFC parsing.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_RE.is_match(input) && EmailAddress::is_valid(input)
}

pub fn is_valid_phone(input: &str) -> bool {
    PHONE_RE.is_match(input)
}

pub fn is_valid_url(input: &str) -> bool {
    URL_RE.is_match(input)
}

/// At least 8 characters drawn from letters, digits and `@$!%*?&`, with one of each class.
pub fn is_strong_password(input: &str) -> bool {
    let allowed = input
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c));

    allowed
        && input.chars().count() >= 8
        && input.chars().any(|c| c.is_ascii_lowercase())
        && input.chars().any(|c| c.is_ascii_uppercase())
        && input.chars().any(|c| c.is_ascii_digit())
        && input.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

pub fn is_valid_hex_color(input: &str) -> bool {
    HEX_COLOR_RE.is_match(input)
}

/// Canonical hyphenated UUID form, the only id shape the store hands out.
pub fn is_valid_id(input: &str) -> bool {
    ID_RE.is_match(input)
}

pub fn is_valid_linkedin_url(input: &str) -> bool {
    LINKEDIN_RE.is_match(input)
}

pub fn is_valid_github_url(input: &str) -> bool {
    GITHUB_RE.is_match(input)
}
