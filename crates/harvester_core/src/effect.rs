#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Click the next-page control and parse the page it leads to.
    AdvancePage,
    /// Pagination is exhausted; the accumulated links are final.
    Finish,
    /// The configured page cap was hit while another page still exists.
    PageLimitReached { max_pages: usize },
}
