//! Case transforms for export names and namespace keys.
//!
//! File stems arrive in whatever convention a codebase uses (`user-service`,
//! `user_service`, `UserService`, `HTTPClient`), so word splitting handles
//! separators, case boundaries, acronym runs, and letter/digit transitions.

/// Split a raw name into words.
fn words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let acronym_end = prev.is_ascii_uppercase()
                && c.is_ascii_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_ascii_lowercase());
            let boundary = (prev.is_ascii_lowercase() && c.is_ascii_uppercase())
                || (prev.is_ascii_digit() != c.is_ascii_digit())
                || acronym_end;
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Convert a string to camelCase (e.g., "user-service" -> "userService")
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    for (i, word) in words(s).iter().enumerate() {
        let lower = word.to_ascii_lowercase();
        if i == 0 {
            result.push_str(&lower);
        } else {
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                result.push(first.to_ascii_uppercase());
                result.extend(chars);
            }
        }
    }
    result
}

/// Convert a string to PascalCase (e.g., "user-service" -> "UserService")
pub fn to_pascal_case(s: &str) -> String {
    let camel = to_camel_case(s);
    let mut chars = camel.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => std::iter::once(first.to_ascii_uppercase())
            .chain(chars)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("hello"), "hello");
        assert_eq!(to_camel_case("hello_world"), "helloWorld");
        assert_eq!(to_camel_case("hello-world"), "helloWorld");
        assert_eq!(to_camel_case("hello.world"), "helloWorld");
        assert_eq!(to_camel_case("HelloWorld"), "helloWorld");
        assert_eq!(to_camel_case("userService"), "userService");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_camel_case_acronyms() {
        assert_eq!(to_camel_case("HTTPServer"), "httpServer");
        assert_eq!(to_camel_case("XMLHttpRequest"), "xmlHttpRequest");
        assert_eq!(to_camel_case("API"), "api");
    }

    #[test]
    fn test_to_camel_case_digits() {
        assert_eq!(to_camel_case("foo2bar"), "foo2Bar");
        assert_eq!(to_camel_case("v2"), "v2");
        assert_eq!(to_camel_case("base64url"), "base64Url");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("user-service"), "UserService");
        assert_eq!(to_pascal_case("user_service"), "UserService");
        assert_eq!(to_pascal_case("userService"), "UserService");
        assert_eq!(to_pascal_case("HTTPServer"), "HttpServer");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_pascal_case_single_letter_words() {
        assert_eq!(to_pascal_case("a"), "A");
        assert_eq!(to_pascal_case("a-b-c"), "ABC");
    }
}
