use yew::prelude::*;

use crate::progress::ProgressRecord;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub record: ProgressRecord,
}

#[function_component(ProgressView)]
pub fn progress_view(props: &Props) -> Html {
    let record = &props.record;
    let last_score = record.last_score_display();

    html! {
        <div class="section-card">
            <div class="section-card-header">
                <h3 class="section-card-title">{ "Progreso" }</h3>
            </div>
            <div class="progress-grid">
                <div class="progress-card">
                    <div class="value">{ record.sessions }</div>
                    <div class="label">{ "Sesiones completadas" }</div>
                </div>
                <div class="progress-card">
                    <div class="value">{ record.best_vocab }</div>
                    <div class="label">{ "Mejor puntaje vocab" }</div>
                </div>
                <div class="progress-card">
                    <div class="value">{ last_score }</div>
                    <div class="label">{ "Último puntaje vocab" }</div>
                </div>
            </div>
        </div>
    }
}
