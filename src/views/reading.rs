use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew::TargetCast;

use crate::data::READING_PASSAGES;
use crate::reading::ReadingSession;

#[function_component(ReadingView)]
pub fn reading_view() -> Html {
    let session = use_state(ReadingSession::default);
    let passage = session.passage();
    let submitted = session.is_submitted();

    let on_passage_change = {
        let session = session.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let Ok(id) = select.value().parse::<u32>() else {
                return;
            };
            let mut next = (*session).clone();
            next.select_passage(id);
            session.set(next);
        })
    };

    let on_submit = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            next.submit();
            session.set(next);
        })
    };

    html! {
        <div class="section-card">
            <div class="section-card-header">
                <h3 class="section-card-title">{ "Comprensión lectora (OA9–OA10)" }</h3>
            </div>

            <div class="flex-row passage-picker">
                <label>{ "Texto:" }</label>
                <select class="select" onchange={on_passage_change}>
                    { for READING_PASSAGES.iter().map(|p| html! {
                        <option
                            key={p.id.to_string()}
                            value={p.id.to_string()}
                            selected={p.id == passage.id}
                        >
                            { p.title }
                        </option>
                    }) }
                </select>
            </div>

            <article class="passage-text">{ passage.text }</article>

            <ol class="quiz-list">
                {
                    for passage.questions.iter().enumerate().map(|(i, q)| {
                        let selected = session.answer(i);
                        html! {
                            <li class="quiz-card" key={i}>
                                <p class="quiz-hint">
                                    <span class="quiz-number">{ format!("P{}.", i + 1) }</span>
                                    { " " }{ q.prompt }
                                </p>
                                <div class="option-grid">
                                    {
                                        for q.options.iter().enumerate().map(|(j, opt)| {
                                            let is_selected = selected == Some(j);
                                            let is_correct = submitted && j == q.answer;
                                            let is_wrong = submitted && is_selected && j != q.answer;
                                            let onclick = {
                                                let session = session.clone();
                                                Callback::from(move |_: MouseEvent| {
                                                    let mut next = (*session).clone();
                                                    next.record_answer(i, j);
                                                    session.set(next);
                                                })
                                            };
                                            html! {
                                                <button
                                                    key={j}
                                                    class={classes!(
                                                        "option-button",
                                                        is_selected.then_some("selected"),
                                                        is_correct.then_some("correct"),
                                                        is_wrong.then_some("wrong"),
                                                    )}
                                                    {onclick}
                                                >
                                                    { *opt }
                                                </button>
                                            }
                                        })
                                    }
                                </div>
                            </li>
                        }
                    })
                }
            </ol>

            <div class="quiz-footer">
                if !submitted {
                    <button class="button-primary" onclick={on_submit}>{ "Enviar" }</button>
                } else {
                    <div class="quiz-score">
                        { format!("✔ Puntaje: {}/{}", session.score(), passage.questions.len()) }
                    </div>
                }
            </div>
        </div>
    }
}
