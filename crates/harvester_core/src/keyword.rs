/// Case-insensitive substring test.
///
/// Both sides are folded with Unicode case mapping and nothing else:
/// whitespace, punctuation and hyphenation are compared verbatim. An empty
/// keyword matches every text.
pub fn matches(text: &str, keyword: &str) -> bool {
    fold(text).contains(&fold(keyword))
}

/// Upper-cases before lower-casing so that `ı`/`i` and `ß`/`SS` fold to the
/// same string as their upper-case forms.
fn fold(s: &str) -> String {
    s.to_uppercase().to_lowercase()
}

/// Keyword matcher with the folded keyword computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatcher {
    keyword: String,
    folded: String,
}

impl KeywordMatcher {
    pub fn new(keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        let folded = fold(&keyword);
        Self { keyword, folded }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn matches(&self, text: &str) -> bool {
        fold(text).contains(&self.folded)
    }
}
