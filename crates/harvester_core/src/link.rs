use std::fmt;

/// Location of one document as it appeared on the listing.
///
/// Opaque: the harvester never normalizes or de-duplicates links, so two
/// rows pointing at the same document yield two equal `Link`s.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Link(String);

impl Link {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Link {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl From<&str> for Link {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}

impl AsRef<str> for Link {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
