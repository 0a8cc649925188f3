use crate::ui::{SearchContextProvider, MAIN_CSS};
use dioxus::prelude::*;
use tracing::debug;

use super::results_panel::ResultsPanel;
use super::search_form::SearchForm;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SearchContextProvider {
            div { class: "page",
                div { class: "layout",
                    SearchForm {}
                    ResultsPanel {}
                }
            }
        }
    }
}
