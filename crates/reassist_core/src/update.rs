use reassist_logging::{ra_debug, ra_warn};

use crate::{AppState, Effect, Msg, Page, BACK_PATH};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SortKeySelected(key) => {
            ra_debug!("sort key selected: {}", key.option_value());
            state.set_sort_key(key);
            Vec::new()
        }
        Msg::YearFilterSelected(filter) => {
            ra_debug!("year filter selected: {}", filter.option_value());
            state.set_year_filter(filter);
            Vec::new()
        }
        Msg::TabSelected(tab) => {
            state.set_tab(tab);
            Vec::new()
        }
        Msg::StarToggled { index } => {
            if state.page() != Page::Profile {
                return (state, Vec::new());
            }
            match state.toggle_star(index) {
                Ok(notice) => vec![Effect::Notify {
                    message: notice.to_string(),
                }],
                Err(err) => {
                    ra_warn!("Star toggle ignored: {}", err);
                    Vec::new()
                }
            }
        }
        Msg::BackClicked => {
            if state.page() == Page::Profile {
                vec![Effect::Navigate {
                    path: BACK_PATH.to_string(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::NavTabClicked(tab) => vec![Effect::Navigate {
            path: tab.path().to_string(),
        }],
        Msg::LocationChanged(path) => {
            ra_debug!("location changed: {}", path);
            state.set_location(path);
            Vec::new()
        }
        Msg::CtaClicked(button) => {
            if state.page() != Page::Landing {
                return (state, Vec::new());
            }
            button
                .section_target()
                .map(|target| Effect::SectionNav {
                    target: target.to_string(),
                })
                .into_iter()
                .collect()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
