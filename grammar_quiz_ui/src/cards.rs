use dioxus::prelude::*;
use grammar_quiz_engine::{
    blanks::{normalize_mcq_blanks, split_blanks, Segment},
    card::{option_letter, Card, OptionMark},
    ui_state::UiState,
};

use crate::effects::play;

fn mark_class(mark: OptionMark) -> &'static str {
    match mark {
        OptionMark::Untouched => "",
        OptionMark::Correct => "correct",
        OptionMark::Wrong => "wrong",
        OptionMark::Disabled => "disabled",
    }
}

/// Click option `position` of card `index` and play whatever it earned.
fn answer(mut cards: Signal<Vec<Card>>, ui: Signal<UiState>, index: usize, position: usize) {
    let feedback = match cards.write().get_mut(index) {
        Some(card) => card.click(position),
        None => return,
    };
    play(ui.read().effects_for(feedback));
}

#[component]
pub fn McqCard(cards: Signal<Vec<Card>>, index: usize) -> Element {
    let ui = use_context::<Signal<UiState>>();
    let Some(card) = cards.read().get(index).cloned() else {
        return rsx! {};
    };
    let question = normalize_mcq_blanks(&card.question().text).into_owned();
    let number = index + 1;

    rsx! {
        div { class: "card mcq-card",
            div { class: "card-header",
                span { class: "question-num", "Q{number}" }
                p { class: "question", "{question}" }
            }
            div { class: "mcq-options",
                for (position , option) in card.options().iter().enumerate() {
                    {
                        let letter = option_letter(position);
                        let mark = mark_class(option.mark);
                        let text = option.text.clone();
                        rsx! {
                            button {
                                class: "option-btn {mark}",
                                onclick: move |_| answer(cards, ui, index, position),
                                span { class: "badge", "{letter}" }
                                span { class: "option-text", "{text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn FillCard(cards: Signal<Vec<Card>>, index: usize) -> Element {
    let ui = use_context::<Signal<UiState>>();
    let Some(card) = cards.read().get(index).cloned() else {
        return rsx! {};
    };
    let number = index + 1;
    let filled = card
        .is_answered()
        .then(|| card.question().correct_option().unwrap_or_default().to_string());

    rsx! {
        div { class: "card fill-card",
            div { class: "fill-body",
                span { class: "question-num", "{number}." }
                div { class: "fill-text",
                    for segment in split_blanks(&card.question().text) {
                        {
                            match segment {
                                Segment::Text(text) => rsx! {
                                    span { "{text}" }
                                },
                                Segment::Blank => match &filled {
                                    Some(filled) => rsx! {
                                        span { class: "blank filled", "{filled}" }
                                    },
                                    None => rsx! {
                                        span { class: "blank", "_______" }
                                    },
                                },
                            }
                        }
                    }
                    span { class: "fill-options",
                        for (position , option) in card.options().iter().enumerate() {
                            {
                                let mark = mark_class(option.mark);
                                let disabled = option.mark != OptionMark::Untouched
                                    && option.mark != OptionMark::Correct;
                                let text = option.text.clone();
                                rsx! {
                                    button {
                                        class: "chip {mark}",
                                        disabled,
                                        onclick: move |_| answer(cards, ui, index, position),
                                        "{text}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
