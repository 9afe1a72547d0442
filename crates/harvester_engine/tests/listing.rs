use harvester_core::Link;
use harvester_engine::{HarvestError, ListingParser, ListingConfig, SelectorListingParser};
use pretty_assertions::assert_eq;

const PAGE_WITH_NEXT: &str = r#"
<html><body>
<table class="usa-table">
  <thead><tr><th>Respondents</th></tr></thead>
  <tbody>
    <tr class="pr-list-page-row"><td><a href="/files/litigation/admin/2024/ia-6601.pdf">Acme</a></td></tr>
    <tr class="pr-list-page-row"><td><a href="https://www.sec.gov/files/ia-6602.pdf">Beta</a><a href="/other">x</a></td></tr>
    <tr class="other-row"><td><a href="/ignored.pdf">ignored</a></td></tr>
  </tbody>
</table>
<nav><a aria-label="Next page" href="?page=1">Next</a></nav>
</body></html>
"#;

const LAST_PAGE: &str = r#"
<html><body>
<table class="usa-table"><tbody>
  <tr class="pr-list-page-row"><td><a href="/files/last.pdf">Last</a></td></tr>
</tbody></table>
<nav><a aria-label="Previous page" href="?page=0">Previous</a></nav>
</body></html>
"#;

fn default_parser() -> SelectorListingParser {
    ListingConfig::default().parser().expect("default selectors parse")
}

#[test]
fn extracts_row_links_and_next_control() {
    let page = default_parser().parse(PAGE_WITH_NEXT).unwrap();

    assert_eq!(
        page.row_links,
        vec![
            Link::from("https://www.sec.gov/files/litigation/admin/2024/ia-6601.pdf"),
            Link::from("https://www.sec.gov/files/ia-6602.pdf"),
        ]
    );
    assert!(page.has_next_page);
}

#[test]
fn missing_next_control_marks_last_page() {
    let page = default_parser().parse(LAST_PAGE).unwrap();
    assert_eq!(page.row_links, vec![Link::from("https://www.sec.gov/files/last.pdf")]);
    assert!(!page.has_next_page);
}

#[test]
fn empty_table_with_next_control() {
    let html = r#"<table class="usa-table"><tbody></tbody></table><a aria-label="Next page">Next</a>"#;
    let page = default_parser().parse(html).unwrap();
    assert!(page.row_links.is_empty());
    assert!(page.has_next_page);
}

#[test]
fn row_without_href_is_a_parse_error() {
    let html = r#"<table class="usa-table"><tbody>
        <tr class="pr-list-page-row"><td>no link here</td></tr>
    </tbody></table>"#;
    let err = default_parser().parse(html).unwrap_err();
    assert!(matches!(err, HarvestError::Parse(_)));
}

#[test]
fn parser_without_base_keeps_hrefs_verbatim() {
    let parser = SelectorListingParser::new("tr", "a", "a.next").unwrap();
    let page = parser
        .parse(r#"<table><tr><td><a href="/x.pdf">x</a></td></tr></table>"#)
        .unwrap();
    assert_eq!(page.row_links, vec![Link::from("/x.pdf")]);
}

#[test]
fn invalid_selector_is_rejected() {
    assert!(SelectorListingParser::new("tr[", "a", "a").is_err());
}
