//! Violation message templates shared by the schema layer and handlers.

pub fn required(field: &str) -> String {
    format!("{field} is required")
}

pub fn max_length(field: &str, max: usize) -> String {
    format!("{field} cannot be more than {max} characters")
}

pub fn min_length(field: &str, min: usize) -> String {
    format!("{field} must be at least {min} characters")
}

pub fn out_of_range(field: &str, min: i64, max: i64) -> String {
    format!("{field} must be between {min} and {max}")
}

pub fn min_value(field: &str, min: i64) -> String {
    format!("{field} must be at least {min}")
}

pub fn not_a_number(field: &str) -> String {
    format!("{field} must be a number")
}

pub fn not_a_string(field: &str) -> String {
    format!("{field} must be a string")
}

pub fn not_a_boolean(field: &str) -> String {
    format!("{field} must be true or false")
}

pub fn not_an_array(field: &str) -> String {
    format!("{field} must be a list")
}

pub fn invalid_format(field: &str) -> String {
    format!("Please provide a valid {}", field.to_lowercase())
}

pub fn duplicate(field: &str) -> String {
    format!("{field} already exists")
}

pub fn not_found(resource: &str) -> String {
    format!("{resource} not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_embed_their_parameters() {
        assert_eq!(required("Name"), "Name is required");
        assert_eq!(max_length("Bio", 1000), "Bio cannot be more than 1000 characters");
        assert_eq!(min_length("Password", 8), "Password must be at least 8 characters");
        assert_eq!(
            out_of_range("Years of experience", 0, 50),
            "Years of experience must be between 0 and 50"
        );
        assert_eq!(min_value("Order", 0), "Order must be at least 0");
        assert_eq!(not_a_number("Order"), "Order must be a number");
        assert_eq!(not_a_string("Name"), "Name must be a string");
        assert_eq!(not_a_boolean("isRead"), "isRead must be true or false");
        assert_eq!(not_an_array("Tags"), "Tags must be a list");
        assert_eq!(invalid_format("Email"), "Please provide a valid email");
        assert_eq!(duplicate("Email"), "Email already exists");
        assert_eq!(not_found("Hero"), "Hero not found");
    }
}
