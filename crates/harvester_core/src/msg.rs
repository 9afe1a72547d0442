use crate::Link;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The current listing page was rendered and parsed.
    PageParsed {
        row_links: Vec<Link>,
        has_next_page: bool,
    },
}
