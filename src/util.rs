pub trait StrExt: AsRef<str> {
    fn nonblank_to_some(&self) -> Option<String> {
        Some(self.as_ref().trim())
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    }
}

impl<T: AsRef<str>> StrExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_become_none() {
        assert_eq!("".nonblank_to_some(), None);
        assert_eq!("   ".nonblank_to_some(), None);
        assert_eq!("\t\n".nonblank_to_some(), None);
    }

    #[test]
    fn nonblank_strings_are_trimmed() {
        assert_eq!(" a.txt ".nonblank_to_some(), Some("a.txt".to_owned()));
        assert_eq!("a".nonblank_to_some(), Some("a".to_owned()));
    }
}
