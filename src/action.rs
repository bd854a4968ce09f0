//! Actions: user intents and async results, categories inferred from prefixes

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherReport;

/// Reply to one on-demand search, tagged with the search it answers
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchReply {
    pub seq: u64,
    pub report: Option<WeatherReport>,
}

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Defaults category =====
    /// Intent: load every configured city (fan-out)
    DefaultsFetch,

    /// Result: surviving reports, in configured order
    DefaultsDidLoad(Vec<WeatherReport>),

    // ===== Search category =====
    /// Focus the search input
    SearchFocus,

    /// Leave the search input (text is kept)
    SearchBlur,

    /// Search input text changed
    SearchInputChange(String),

    /// Submit the given text as a city search
    SearchSubmit(String),

    /// Result: a search finished (report is `None` when not found)
    SearchDidComplete(SearchReply),

    /// Dismiss the "not found" banner
    SearchDismissError,

    // ===== Panel category =====
    PanelOpen,

    PanelClose,

    /// Highlight a city in the panel (by index)
    PanelHighlight(usize),

    /// Pick a city: fill the input, swap the backdrop, search, close
    PanelPick(String),

    // ===== Uncategorized (global) =====
    /// Force a re-render (cursor movement etc.)
    Render,

    Quit,
}
