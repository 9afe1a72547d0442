use harvester_core::{update, Effect, HarvestPhase, HarvestState, HarvestView, Link, Msg};
use pretty_assertions::assert_eq;

fn page(links: &[&str], has_next_page: bool) -> Msg {
    Msg::PageParsed {
        row_links: links.iter().map(|l| Link::from(*l)).collect(),
        has_next_page,
    }
}

/// Feeds pages until the state machine stops asking for more.
fn drive(mut state: HarvestState, pages: Vec<Msg>) -> (HarvestState, Vec<Effect>) {
    let mut all_effects = Vec::new();
    for msg in pages {
        let (next, effects) = update(state, msg);
        state = next;
        all_effects.extend(effects);
        if !state.is_running() {
            break;
        }
    }
    (state, all_effects)
}

#[test]
fn single_terminal_page_finishes_immediately() {
    engine_logging::initialize_for_tests();
    let (state, effects) = update(HarvestState::new(), page(&["a", "b"], false));

    assert_eq!(effects, vec![Effect::Finish]);
    assert_eq!(state.phase(), HarvestPhase::Finished);
    assert_eq!(state.links(), &[Link::from("a"), Link::from("b")]);
}

#[test]
fn three_pages_accumulate_in_discovery_order() {
    let pages = vec![
        page(&["a", "b"], true),
        page(&["c"], true),
        page(&["d", "e"], false),
    ];
    let (state, effects) = drive(HarvestState::new(), pages);

    assert_eq!(
        effects,
        vec![Effect::AdvancePage, Effect::AdvancePage, Effect::Finish]
    );
    assert_eq!(state.pages_visited(), 3);
    let links: Vec<&str> = state.links().iter().map(Link::as_str).collect();
    assert_eq!(links, vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn empty_page_with_next_control_keeps_going() {
    let pages = vec![page(&[], true), page(&[], true), page(&["x"], false)];
    let (state, effects) = drive(HarvestState::new(), pages);

    assert_eq!(
        effects,
        vec![Effect::AdvancePage, Effect::AdvancePage, Effect::Finish]
    );
    assert_eq!(state.into_links(), vec![Link::from("x")]);
}

#[test]
fn duplicate_links_are_kept() {
    let pages = vec![page(&["a"], true), page(&["a"], false)];
    let (state, _) = drive(HarvestState::new(), pages);
    assert_eq!(state.into_links(), vec![Link::from("a"), Link::from("a")]);
}

#[test]
fn page_limit_aborts_instead_of_truncating() {
    let pages = vec![page(&["a"], true), page(&["b"], true), page(&["c"], true)];
    let (state, effects) = drive(HarvestState::with_page_limit(Some(2)), pages);

    assert_eq!(
        effects,
        vec![
            Effect::AdvancePage,
            Effect::PageLimitReached { max_pages: 2 }
        ]
    );
    assert_eq!(state.phase(), HarvestPhase::Aborted);
}

#[test]
fn page_limit_is_not_hit_by_a_terminal_page() {
    let pages = vec![page(&["a"], true), page(&["b"], false)];
    let (state, effects) = drive(HarvestState::with_page_limit(Some(2)), pages);

    assert_eq!(effects.last(), Some(&Effect::Finish));
    assert_eq!(state.phase(), HarvestPhase::Finished);
}

#[test]
fn view_reports_progress() {
    let (state, _) = update(HarvestState::new(), page(&["a", "b"], true));
    assert_eq!(
        state.view(),
        HarvestView {
            phase: HarvestPhase::Running,
            pages_visited: 1,
            link_count: 2,
        }
    );
}
