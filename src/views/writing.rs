use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew::TargetCast;

use crate::data::{WritingPrompt, WRITING_PROMPTS};

#[function_component(WritingView)]
pub fn writing_view() -> Html {
    let prompt: UseStateHandle<&'static WritingPrompt> = use_state(|| &WRITING_PROMPTS[0]);
    let text = use_state(String::new);
    let word_count = text.split_whitespace().count();

    let on_prompt_change = {
        let prompt = prompt.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let Ok(id) = select.value().parse::<u32>() else {
                return;
            };
            if let Some(next) = WRITING_PROMPTS.iter().find(|p| p.id == id) {
                prompt.set(next);
            }
        })
    };

    let on_text_input = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            text.set(area.value());
        })
    };

    let on_print = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    });

    html! {
        <div class="section-card">
            <div class="section-card-header">
                <h3 class="section-card-title">{ "Escritura guiada (OA13–OA16)" }</h3>
                <div class="section-card-actions">
                    <button class="button-secondary" onclick={on_print}>{ "⎙ Imprimir hoja" }</button>
                </div>
            </div>

            <div class="flex-row prompt-picker">
                <label>{ "Indicación:" }</label>
                <select class="select" onchange={on_prompt_change}>
                    { for WRITING_PROMPTS.iter().map(|p| html! {
                        <option
                            key={p.id.to_string()}
                            value={p.id.to_string()}
                            selected={p.id == prompt.id}
                        >
                            { format!("{}…", p.text.chars().take(50).collect::<String>()) }
                        </option>
                    }) }
                </select>
                <span class="prompt-tag">{ format!("Alineación: {}", prompt.oa) }</span>
            </div>

            <div class="prompt-text">{ prompt.text }</div>

            <textarea
                class="textarea"
                placeholder="Escribe tu texto aquí…"
                value={(*text).clone()}
                oninput={on_text_input}
            />
            <div class="word-count">{ format!("Palabras: {word_count}") }</div>
        </div>
    }
}
