//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::{Action, SearchReply};
use crate::config;
use crate::effect::Effect;
use crate::i18n;
use crate::state::{AppState, SearchState};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Defaults =====
        // Init action only: the fan-out runs once per session.
        Action::DefaultsFetch => {
            if !state.defaults.is_empty() {
                return DispatchResult::unchanged();
            }
            state.defaults = DataResource::Loading;
            DispatchResult::changed_with(Effect::FetchDefaults {
                cities: state.cities.clone(),
            })
        }

        Action::DefaultsDidLoad(reports) => {
            state.defaults = DataResource::Loaded(reports);
            DispatchResult::changed()
        }

        // ===== Search =====
        Action::SearchFocus => {
            if state.input_focused {
                return DispatchResult::unchanged();
            }
            state.input_focused = true;
            DispatchResult::changed()
        }

        Action::SearchBlur => {
            if !state.input_focused {
                return DispatchResult::unchanged();
            }
            state.input_focused = false;
            DispatchResult::changed()
        }

        Action::SearchInputChange(text) => {
            state.search_input = text;
            DispatchResult::changed()
        }

        Action::SearchSubmit(text) => start_search(state, text),

        Action::SearchDidComplete(SearchReply { seq, report }) => {
            if seq != state.search_seq {
                return DispatchResult::unchanged();
            }
            state.search = match report {
                Some(report) => SearchState::Showing(report),
                None => SearchState::Failed(i18n::NOT_FOUND.to_string()),
            };
            DispatchResult::changed()
        }

        Action::SearchDismissError => {
            if !state.banner_open() {
                return DispatchResult::unchanged();
            }
            state.search = SearchState::Idle;
            DispatchResult::changed()
        }

        // ===== Panel =====
        Action::PanelOpen => {
            state.panel_open = true;
            state.input_focused = false;
            state.panel_selected = 0;
            DispatchResult::changed()
        }

        Action::PanelClose => {
            if !state.panel_open {
                return DispatchResult::unchanged();
            }
            state.panel_open = false;
            DispatchResult::changed()
        }

        Action::PanelHighlight(index) => {
            if index < state.cities.len() && index != state.panel_selected {
                state.panel_selected = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::PanelPick(city) => {
            state.background = config::background_for(&city);
            state.panel_open = false;
            let mut result = start_search(state, city.clone());
            state.search_input = city;
            result.changed = true;
            result
        }

        // ===== Global =====
        Action::Render => DispatchResult::changed(),

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Shared by Enter in the input and by a panel pick. Empty input is ignored;
/// anything else goes to the provider as typed.
fn start_search(state: &mut AppState, city: String) -> DispatchResult<Effect> {
    if city.is_empty() {
        return DispatchResult::unchanged();
    }
    state.search_seq = state.search_seq.wrapping_add(1);
    state.search = SearchState::Searching;
    state.input_focused = false;
    DispatchResult::changed_with(Effect::FetchCity {
        seq: state.search_seq,
        city,
    })
}
