use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use rocket::request::FromParam;

const MAX_NAME_LEN: usize = 255;

/// A validated document filename. The store joins names onto the content
/// directory, so anything that could escape it (separators, dot-files,
/// `..`) is rejected at parse time. The accepted alphabet also keeps
/// derived URLs free of characters that would need percent-encoding.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DocumentName(String);

impl FromStr for DocumentName {
    type Err = DocumentNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.len() > MAX_NAME_LEN {
            return Err(DocumentNameError);
        }
        if s.starts_with('.') {
            return Err(DocumentNameError);
        }
        let allowed = s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !allowed {
            return Err(DocumentNameError);
        }
        Ok(DocumentName(s.to_string()))
    }
}

impl Deref for DocumentName {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0[..]
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'a> FromParam<'a> for DocumentName {
    type Error = DocumentNameError;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        param.parse()
    }
}

#[derive(Debug)]
pub struct DocumentNameError;

impl fmt::Display for DocumentNameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("invalid document name")
    }
}

impl std::error::Error for DocumentNameError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<DocumentName, DocumentNameError> {
        s.parse()
    }

    #[test]
    fn ordinary_filenames_parse() {
        for name in ["about.md", "changes.txt", "a", "2024-01-notes", "A_B-c.9"] {
            let parsed = parse(name).expect(name);
            assert_eq!(&*parsed, name);
        }
    }

    #[test]
    fn separators_are_rejected() {
        for name in ["a/b.txt", "/etc/passwd", "..\\up", "a\\b", "dir/../../x"] {
            assert!(parse(name).is_err(), "accepted {name:?}");
        }
    }

    #[test]
    fn dot_names_are_rejected() {
        for name in [".", "..", ".hidden", ".a.txt.tmp"] {
            assert!(parse(name).is_err(), "accepted {name:?}");
        }
    }

    #[test]
    fn empty_and_oversized_names_are_rejected() {
        assert!(parse("").is_err());
        assert!(parse(&"x".repeat(MAX_NAME_LEN)).is_ok());
        assert!(parse(&"x".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn whitespace_and_specials_are_rejected() {
        for name in ["a b.txt", "a\tb", "na%me", "q?x", "a#b", "ü.txt"] {
            assert!(parse(name).is_err(), "accepted {name:?}");
        }
    }
}
