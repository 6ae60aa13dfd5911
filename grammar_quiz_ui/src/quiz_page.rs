use dioxus::prelude::*;
use grammar_quiz_engine::{
    card::Card,
    config::{Engine, Header},
    menu::{MenuAction, SetMenu},
    params::QuizParams,
    resource::DataLayout,
    selection::Parity,
    session::QuizSession,
    ui_state::UiState,
};
use rand::SeedableRng;

use crate::{
    cards::{FillCard, McqCard},
    http::HttpResources,
    Route,
};

#[component]
pub fn QuizPage(engine: Engine, params: QuizParams) -> Element {
    // it's in a signal to prevent regenerating a new rng.
    let mut rng = use_signal(|| rand_pcg::Pcg64::from_os_rng());
    let mut session = use_signal(|| None::<QuizSession>);
    let mut cards = use_signal(Vec::<Card>::new);
    let mut ui = use_context::<Signal<UiState>>();
    let nav = navigator();

    let load_params = params.clone();
    use_future(move || {
        let params = load_params.clone();
        async move {
            let opened = QuizSession::open(&HttpResources, &DataLayout::default(), params).await;
            if let Ok(store) = opened.content() {
                cards.set(store.deal(engine.into(), &mut *rng.write()));
            }
            session.set(Some(opened));
        }
    });

    let on_action = move |action: MenuAction| {
        ui.write().close_menu();
        let mut current = session.write();
        let Some(current) = current.as_mut() else {
            return;
        };
        if let Some(next) = current.apply(action, &mut *rng.write()) {
            nav.push(Route::quiz(engine, &next));
            return;
        }
        if let Ok(store) = current.content() {
            cards.set(store.deal(engine.into(), &mut *rng.write()));
            document::eval(r#"window.scrollTo(0, 0);"#);
        }
    };

    let Some(current) = session.read().clone() else {
        let header = Header::new(None, &params);
        return rsx! {
            AppHeader { header }
            div { class: "quiz-container",
                div { class: "grid-message", "Loading..." }
            }
        };
    };

    let body = match current.content() {
        Err(failure) => {
            let title = failure.to_string();
            let message = failure.message.clone();
            rsx! {
                div { class: "load-failure",
                    "{title}"
                    br {}
                    "{message}"
                }
            }
        }
        Ok(store) => {
            let generation = store.generation();
            let count = cards.read().len();
            if count == 0 {
                rsx! {
                    div { class: "grid-message", "No questions found." }
                }
            } else {
                rsx! {
                    for index in 0..count {
                        {
                            let key = format!("{generation}-{index}");
                            match engine {
                                Engine::Mcq => rsx! {
                                    McqCard { key: "{key}", cards, index }
                                },
                                Engine::Fill => rsx! {
                                    FillCard { key: "{key}", cards, index }
                                },
                            }
                        }
                    }
                }
            }
        }
    };

    let engine_class = engine.as_str();

    rsx! {
        div { class: "quiz-page",
            AppHeader { header: current.header().clone() }
            TeacherMenu { menu: current.menu().clone(), on_action }
            if ui.read().menu_open() {
                div {
                    class: "menu-overlay",
                    onclick: move |_| ui.write().close_menu(),
                }
            }
            div { class: "quiz-container {engine_class}", {body} }
        }
    }
}

#[component]
fn AppHeader(header: Header) -> Element {
    let mut ui = use_context::<Signal<UiState>>();
    let state = ui();
    let sound_class = if state.sound() { "" } else { "effect-disabled" };
    let confetti_class = if state.confetti() { "" } else { "effect-disabled" };
    let tools_class = if state.menu_open() { "tools-btn open" } else { "tools-btn" };
    let title = header.title;
    let subtitle = header.subtitle;

    rsx! {
        header { class: "app-header",
            div { class: "branding",
                h1 {
                    "{title} "
                    span { class: "accent", "PRACTICE" }
                }
                p { class: "subtitle", "{subtitle}" }
            }
            div { class: "controls",
                button {
                    class: "effect-btn {sound_class}",
                    onclick: move |_| ui.write().toggle_sound(),
                    "🔊"
                }
                button {
                    class: "effect-btn {confetti_class}",
                    onclick: move |_| ui.write().toggle_confetti(),
                    "🎉"
                }
                Link { to: Route::Home, class: "effect-btn", "⌂" }
                button {
                    class: "{tools_class}",
                    onclick: move |_| ui.write().toggle_menu(),
                    "TOOLS"
                }
            }
        }
    }
}

#[component]
fn TeacherMenu(menu: SetMenu, on_action: EventHandler<MenuAction>) -> Element {
    let ui = use_context::<Signal<UiState>>();
    let mut random_count = use_signal(|| "10".to_string());
    let menu_class = if ui.read().menu_open() {
        "teacher-menu open"
    } else {
        "teacher-menu"
    };
    let available = menu.available_label();

    rsx! {
        nav { class: "{menu_class}",
            div { class: "menu-section",
                h3 { class: "menu-heading sets",
                    span { "Select Set" }
                    span { class: "muted", "{available}" }
                }
                div { class: "set-grid",
                    for (set , active) in menu.buttons() {
                        {
                            let class = if active { "btn-set active" } else { "btn-set" };
                            rsx! {
                                button {
                                    class: "{class}",
                                    onclick: move |_| on_action.call(MenuAction::SwitchSet(set)),
                                    "Set {set}"
                                }
                            }
                        }
                    }
                }
            }
            div { class: "menu-section",
                h3 { class: "menu-heading filter", "Filter" }
                div { class: "filter-row",
                    button {
                        class: "btn-filter",
                        onclick: move |_| on_action.call(MenuAction::Filter(Parity::Odd)),
                        "O"
                    }
                    button {
                        class: "btn-filter",
                        onclick: move |_| on_action.call(MenuAction::Filter(Parity::Even)),
                        "E"
                    }
                }
            }
            div { class: "menu-section",
                h3 { class: "menu-heading random", "Random" }
                div { class: "random-row",
                    input {
                        r#type: "number",
                        placeholder: "10",
                        value: random_count,
                        oninput: move |e| random_count.set(e.value()),
                    }
                    button {
                        class: "btn-random",
                        onclick: move |_| on_action.call(MenuAction::Random(random_count())),
                        "GENERATE"
                    }
                }
                p { class: "muted",
                    "Generates a unique test from the entire pool of questions. Options are automatically shuffled."
                }
            }
        }
    }
}
