/// Turns a collection name into a type identifier.
///
/// Splits on spaces, underscores and hyphens and upper-cases the first
/// character of each segment. The rest of a segment keeps its case, so
/// `my_URL_list` becomes `MyURLList`.
pub fn pascal_case(name: &str) -> String {
    name.split([' ', '_', '-'])
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Member names with a hyphen are not valid identifiers and get quoted.
pub fn member_name(field: &str) -> String {
    if field.contains('-') {
        format!("\"{field}\"")
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("articles"), "Articles");
        assert_eq!(pascal_case("blog_posts"), "BlogPosts");
        assert_eq!(pascal_case("blog-posts"), "BlogPosts");
        assert_eq!(pascal_case("blog posts"), "BlogPosts");
        assert_eq!(pascal_case("directus_users"), "DirectusUsers");
    }

    #[test]
    fn test_pascal_case_keeps_inner_case() {
        assert_eq!(pascal_case("my_URL_list"), "MyURLList");
        assert_eq!(pascal_case("camelCase_name"), "CamelCaseName");
    }

    #[test]
    fn test_pascal_case_collapses_repeated_separators() {
        assert_eq!(pascal_case("a__b"), "AB");
        assert_eq!(pascal_case("_leading"), "Leading");
        assert_eq!(pascal_case(""), "");
    }

    #[test]
    fn test_member_name_quoting() {
        assert_eq!(member_name("related-item"), "\"related-item\"");
        assert_eq!(member_name("related_item"), "related_item");
    }
}
