use dioxus::prelude::*;
use grammar_quiz_engine::{config::Engine, params::QuizParams, ui_state::UiState};

mod cards;
mod effects;
mod home;
mod http;
mod quiz_page;

use home::Home;
use quiz_page::QuizPage;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFETTI_JS: &str =
    "https://cdn.jsdelivr.net/npm/canvas-confetti@1.9.3/dist/confetti.browser.min.js";

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home,
    #[route("/engine/mcq?:subject&:level&:set")]
    McqEngine {
        subject: String,
        level: String,
        set: String,
    },
    #[route("/engine/fill?:subject&:level&:set")]
    FillEngine {
        subject: String,
        level: String,
        set: String,
    },
}

impl Route {
    pub fn quiz(engine: Engine, params: &QuizParams) -> Self {
        let subject = params.subject.clone();
        let level = params.level.clone();
        let set = params.set.to_string();
        match engine {
            Engine::Mcq => Route::McqEngine { subject, level, set },
            Engine::Fill => Route::FillEngine { subject, level, set },
        }
    }
}

fn main() {
    dioxus::launch(App);
}

const ESCAPE_LISTENER: &str = r#"
document.addEventListener("keydown", (event) => {
    if (event.key === "Escape") {
        dioxus.send(event.key);
    }
});
"#;

#[component]
fn App() -> Element {
    let mut ui = use_context_provider(|| Signal::new(UiState::default()));
    // Escape closes the tools panel wherever the focus is
    use_future(move || async move {
        let mut keys = document::eval(ESCAPE_LISTENER);
        while keys.recv::<String>().await.is_ok() {
            ui.write().close_menu();
        }
    });
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: CONFETTI_JS }
        Router::<Route> {}
    }
}

#[component]
fn McqEngine(subject: String, level: String, set: String) -> Element {
    let params = QuizParams::from_query(&subject, &level, &set);
    rsx! {
        EnginePage { engine: Engine::Mcq, params }
    }
}

#[component]
fn FillEngine(subject: String, level: String, set: String) -> Element {
    let params = QuizParams::from_query(&subject, &level, &set);
    rsx! {
        EnginePage { engine: Engine::Fill, params }
    }
}

/// Mounts a fresh quiz page per topic/level/set, so switching sets starts
/// from a clean page instead of patching the old one.
#[component]
fn EnginePage(engine: Engine, params: QuizParams) -> Element {
    let key = format!("{}/{}/{}", params.subject, params.level, params.set);
    rsx! {
        QuizPage { key: "{key}", engine, params }
    }
}
