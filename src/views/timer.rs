use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::progress::ProgressPatch;
use crate::timer::{Countdown, PRESETS};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Fired once when the countdown reaches zero.
    pub on_progress: Callback<ProgressPatch>,
}

#[function_component(SessionTimerView)]
pub fn session_timer_view(props: &Props) -> Html {
    let timer = use_state(Countdown::default);

    // One pending one-second tick at a time. Re-armed on every state
    // change while running; pausing or resetting drops the pending tick,
    // so nothing fires after the timer leaves the running state.
    {
        let handle = timer.clone();
        let on_progress = props.on_progress.clone();
        use_effect_with((*timer).clone(), move |current: &Countdown| {
            let pending = current.is_running().then(|| {
                let mut next = current.clone();
                Timeout::new(1_000, move || {
                    let finished = next.tick();
                    handle.set(next);
                    if finished {
                        on_progress.emit(ProgressPatch::session_completed());
                    }
                })
            });
            move || drop(pending)
        });
    }

    let on_start = {
        let timer = timer.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*timer).clone();
            next.start();
            timer.set(next);
        })
    };

    let on_pause = {
        let timer = timer.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*timer).clone();
            next.pause();
            timer.set(next);
        })
    };

    let on_reset = {
        let timer = timer.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*timer).clone();
            next.reset();
            timer.set(next);
        })
    };

    html! {
        <div class="section-card">
            <div class="section-card-header">
                <h3 class="section-card-title">{ "Sesión de estudio (Pomodoro)" }</h3>
            </div>

            <div class="flex-row preset-row">
                {
                    for PRESETS.iter().map(|preset| {
                        let timer = timer.clone();
                        let minutes = preset.minutes;
                        let onclick = Callback::from(move |_: MouseEvent| {
                            let mut next = (*timer).clone();
                            next.apply_preset(minutes);
                            timer.set(next);
                        });
                        html! {
                            <button class="button-secondary" key={preset.label} {onclick}>
                                { preset.label }
                            </button>
                        }
                    })
                }
            </div>

            <div class="timer-display">{ timer.display() }</div>

            <div class="timer-controls">
                if !timer.is_running() {
                    <button class="button-primary" onclick={on_start}>{ "Iniciar" }</button>
                } else {
                    <button class="button-primary button-danger" onclick={on_pause}>{ "Pausar" }</button>
                }
                <button class="button-secondary" onclick={on_reset}>{ "Reiniciar" }</button>
            </div>
        </div>
    }
}
