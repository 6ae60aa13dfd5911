use dioxus::prelude::*;
use grammar_quiz_engine::{
    index::{scan_library, IndexEntry},
    resource::DataLayout,
};

use crate::{http::HttpResources, Route};

#[component]
pub fn Home() -> Element {
    let library =
        use_resource(|| async move { scan_library(&HttpResources, &DataLayout::default()).await });
    let entries = (*library.read()).clone();

    let grid = match entries {
        None => rsx! {
            div { class: "grid-message", "Scanning library..." }
        },
        Some(entries) if entries.is_empty() => rsx! {
            div { class: "grid-message", "No config.json files found in /data" }
        },
        Some(entries) => rsx! {
            for entry in entries {
                TopicCard { entry }
            }
            div { class: "version-card placeholder",
                h3 { "More Coming Soon..." }
            }
        },
    };

    rsx! {
        div { class: "home",
            h1 { class: "home-title", "Grammar Hub" }
            p { class: "home-subtitle", "Pick a topic and a level to start practising" }
            div { class: "card-grid", {grid} }
        }
    }
}

#[component]
fn TopicCard(entry: IndexEntry) -> Element {
    let route = Route::quiz(entry.config.engine, &entry.params());
    let order = entry.order_label();
    let icon = entry.config.icon.glyph();
    let title = entry.config.title;
    let description = entry.config.description;

    rsx! {
        Link { to: route, class: "version-card",
            div { class: "card-order", "{order}" }
            div { class: "icon-box", "{icon}" }
            h3 { "{title}" }
            p { "{description}" }
        }
    }
}
