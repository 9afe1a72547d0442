use crate::Link;

/// Matched links in the order the pipeline discovered them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchSet {
    links: Vec<Link>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, link: Link) {
        self.links.push(link);
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Link> {
        self.links.iter()
    }

    pub fn as_slice(&self) -> &[Link] {
        &self.links
    }

    pub fn into_vec(self) -> Vec<Link> {
        self.links
    }

    pub fn contains(&self, link: &Link) -> bool {
        self.links.contains(link)
    }

    /// True when every matched link also occurs in `harvested`.
    pub fn is_subset_of(&self, harvested: &[Link]) -> bool {
        self.links.iter().all(|link| harvested.contains(link))
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Link;
    type IntoIter = std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

impl FromIterator<Link> for MatchSet {
    fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Self {
        Self {
            links: iter.into_iter().collect(),
        }
    }
}
