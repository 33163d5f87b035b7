use rand::thread_rng;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew::TargetCast;

use crate::data::all_pairs;
use crate::progress::ProgressPatch;
use crate::quiz::{Direction, QuizSession, QUIZ_LENGTH};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Fired once per submission with the finished quiz result.
    pub on_progress: Callback<ProgressPatch>,
}

#[function_component(VocabQuizView)]
pub fn vocab_quiz_view(props: &Props) -> Html {
    let session = use_state(|| {
        QuizSession::new(&all_pairs(), QUIZ_LENGTH, Direction::EnToEs, &mut thread_rng())
    });

    let on_direction_change = {
        let session = session.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let direction = match select.value().as_str() {
                "ES-EN" => Direction::EsToEn,
                _ => Direction::EnToEs,
            };
            let mut next = (*session).clone();
            next.set_direction(direction, &all_pairs(), &mut thread_rng());
            session.set(next);
        })
    };

    let on_new_set = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            next.regenerate(&all_pairs(), &mut thread_rng());
            session.set(next);
        })
    };

    let on_submit = {
        let session = session.clone();
        let on_progress = props.on_progress.clone();
        Callback::from(move |_: MouseEvent| {
            if session.is_submitted() {
                return;
            }
            let mut next = (*session).clone();
            next.submit();
            on_progress.emit(ProgressPatch::quiz_result(
                next.score(),
                next.questions().len(),
            ));
            session.set(next);
        })
    };

    let submitted = session.is_submitted();

    html! {
        <div class="section-card">
            <div class="section-card-header">
                <h3 class="section-card-title">
                    { format!("Quiz de vocabulario ({} preguntas)", session.questions().len()) }
                </h3>
                <div class="section-card-actions">
                    <select class="select" onchange={on_direction_change} title="Dirección del quiz">
                        { for [Direction::EnToEs, Direction::EsToEn].iter().map(|d| html! {
                            <option
                                value={d.label()}
                                selected={*d == session.direction()}
                            >
                                { d.label() }
                            </option>
                        }) }
                    </select>
                    <button class="button-secondary" onclick={on_new_set.clone()}>{ "↺ Nuevo" }</button>
                </div>
            </div>

            <ol class="quiz-list">
                {
                    for session.questions().iter().enumerate().map(|(i, q)| {
                        let selected = session.answer(i);
                        html! {
                            <li class="quiz-card" key={i}>
                                <p class="quiz-hint">
                                    <span class="quiz-number">{ format!("P{}.", i + 1) }</span>
                                    { " " }{ q.hint.clone() }
                                </p>
                                <div class="option-grid">
                                    {
                                        for q.options.iter().enumerate().map(|(j, opt)| {
                                            let is_selected = selected == Some(j);
                                            let is_correct = submitted && j == q.correct;
                                            let is_wrong = submitted && is_selected && j != q.correct;
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
                                if submitted {
                                    <div class="quiz-answer-note">
                                        { "Correcta: " }
                                        <strong>{ session.direction().answer_of(&q.pair) }</strong>
                                        { format!(" ({} — {})", q.pair.en, q.pair.es) }
                                    </div>
                                }
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
                        { format!("✔ Puntaje: {}/{}", session.score(), session.questions().len()) }
                    </div>
                    <button class="button-secondary" onclick={on_new_set}>{ "Repetir" }</button>
                }
            </div>
        </div>
    }
}
