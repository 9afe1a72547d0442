use crate::{Effect, HarvestState, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// While running, every parsed page yields exactly one effect. Messages that
/// arrive after the harvest has stopped are ignored.
pub fn update(mut state: HarvestState, msg: Msg) -> (HarvestState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageParsed {
            row_links,
            has_next_page,
        } => {
            if !state.is_running() {
                return (state, Vec::new());
            }

            // An empty page with a next control is a transient render, not the end.
            state.record_page(row_links);
            if !has_next_page {
                state.finish();
                vec![Effect::Finish]
            } else if state.limit_reached() {
                state.abort();
                vec![Effect::PageLimitReached {
                    max_pages: state.pages_visited(),
                }]
            } else {
                vec![Effect::AdvancePage]
            }
        }
    };

    (state, effects)
}
