use rand::thread_rng;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew::TargetCast;

use crate::data::VOCABULARY;
use crate::flashcards::FlashcardSession;
use crate::speech;

#[function_component(FlashcardsView)]
pub fn flashcards_view() -> Html {
    let session = use_state(FlashcardSession::default);
    let current = *session.current_card();

    let on_deck_change = {
        let session = session.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*session).clone();
            next.select_deck(&select.value());
            session.set(next);
        })
    };

    let on_random = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            next.jump_random(&mut thread_rng());
            session.set(next);
        })
    };

    let on_flip = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            next.toggle();
            session.set(next);
        })
    };

    let on_next = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            next.advance();
            session.set(next);
        })
    };

    let speak_en = {
        let text = current.en;
        Callback::from(move |_: MouseEvent| speech::speak(text, "en-US"))
    };
    let speak_es = {
        let text = current.es;
        Callback::from(move |_: MouseEvent| speech::speak(text, "es-ES"))
    };

    html! {
        <div class="section-card">
            <div class="section-card-header">
                <h3 class="section-card-title">{ "Flashcards de vocabulario (toca para ver la traducción)" }</h3>
                <div class="section-card-actions">
                    if speech::supports_speech() {
                        <button class="button-secondary" onclick={speak_en}>{ "🔊 Escuchar" }</button>
                    }
                </div>
            </div>

            <div class="flex-row card-controls">
                <label>{ "Lista:" }</label>
                <select class="select" onchange={on_deck_change}>
                    { for VOCABULARY.iter().map(|deck| html! {
                        <option
                            key={deck.id}
                            value={deck.id}
                            selected={deck.id == session.deck().id}
                        >
                            { deck.name }
                        </option>
                    }) }
                </select>
                <button class="button-secondary" onclick={on_random}>{ "Aleatorio" }</button>
                <span class="card-position">
                    { format!("{}/{}", session.index() + 1, session.deck().pairs.len()) }
                </span>
            </div>

            <div class="flashcard-container">
                <div
                    class={classes!("flashcard-box", session.is_flipped().then_some("flipped"))}
                    onclick={on_flip}
                >
                    if session.is_flipped() {
                        <div class="card back">{ current.es }</div>
                    } else {
                        <div class="card">{ current.en }</div>
                    }
                </div>
                <div class="flashcard-actions">
                    <button class="button-primary" onclick={on_next}>{ "Siguiente" }</button>
                    if speech::supports_speech() && session.is_flipped() {
                        <button class="button-secondary" onclick={speak_es}>{ "🔊 Escuchar ES" }</button>
                    }
                </div>
            </div>
        </div>
    }
}
