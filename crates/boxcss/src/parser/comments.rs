//! Comment stripping.
//!
//! `/* ... */` comments are removed before any parsing happens. Quoted
//! strings are copied untouched so `content: "/*"` survives.

pub fn strip_comments(source: &str) -> String {
    let mut clean = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            clean.push(c);
            if c == q {
                quote = None;
            }
            continue;
        }
        if c == '"' || c == '\'' {
            quote = Some(c);
            clean.push(c);
            continue;
        }
        if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            while let Some(inner) = chars.next() {
                if inner == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    break;
                }
            }
            // Keep tokens on either side of the comment apart
            clean.push(' ');
            continue;
        }
        clean.push(c);
    }

    clean
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_block_comment() {
        assert_eq!(strip_comments("a/* x */b").trim(), "a b");
    }

    #[test]
    fn test_keeps_comment_markers_in_strings() {
        let src = r#"p { content: "/* no */"; }"#;
        assert_eq!(strip_comments(src), src);
    }

    #[test]
    fn test_unterminated_comment_runs_to_end() {
        assert_eq!(strip_comments("a /* never closed").trim(), "a");
    }
}
