//! Root component: tab navigation, theme preference, and the persisted
//! progress record that the quiz and timer report into.

use yew::prelude::*;

use crate::progress::{load_progress, save_progress, ProgressPatch};
use crate::storage::{BrowserStorage, KeyValueStore, THEME_KEY};
use crate::views::flashcards::FlashcardsView;
use crate::views::progress::ProgressView;
use crate::views::quiz::VocabQuizView;
use crate::views::reading::ReadingView;
use crate::views::syllabus::SyllabusView;
use crate::views::timer::SessionTimerView;
use crate::views::writing::WritingView;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Syllabus,
    Practice,
    Sessions,
    Progress,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Syllabus, Tab::Practice, Tab::Sessions, Tab::Progress];

    fn label(self) -> &'static str {
        match self {
            Tab::Syllabus => "Temario",
            Tab::Practice => "Práctica",
            Tab::Sessions => "Sesiones",
            Tab::Progress => "Progreso",
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let tab = use_state(|| Tab::Syllabus);
    let progress = use_state(|| load_progress(&BrowserStorage));
    let dark_mode =
        use_state(|| BrowserStorage.get(THEME_KEY).as_deref() == Some("dark"));

    // Mirror the theme into a `dark` class on <html> and persist it.
    use_effect_with(*dark_mode, |dark| {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = root.class_list();
            let _ = if *dark {
                class_list.add_1("dark")
            } else {
                class_list.remove_1("dark")
            };
        }
        BrowserStorage.set(THEME_KEY, if *dark { "dark" } else { "light" });
    });

    let on_toggle_theme = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_: MouseEvent| dark_mode.set(!*dark_mode))
    };

    let on_progress = {
        let progress = progress.clone();
        Callback::from(move |patch: ProgressPatch| {
            let next = progress.apply(&patch);
            save_progress(&BrowserStorage, &next);
            progress.set(next);
        })
    };

    html! {
        <div class="app-container">
            <header class="header">
                <div class="header-top">
                    <div>
                        <h1 class="header-title">{ "English Study – 7° Básico" }</h1>
                        <p class="header-subtitle">
                            { "Bilingüe EN–ES. Practica vocabulario, lectura y escritura. Guarda tu avance." }
                        </p>
                        <p class="protip">{ "Tip: puedes “Imprimir” para obtener fichas o guías." }</p>
                    </div>
                    <button class="theme-toggle" onclick={on_toggle_theme} aria-label="Cambiar tema">
                        { if *dark_mode { "☀" } else { "☾" } }
                    </button>
                </div>
            </header>

            <div class="tabs">
                {
                    for Tab::ALL.iter().map(|&t| {
                        let is_active = *tab == t;
                        let onclick = {
                            let tab = tab.clone();
                            Callback::from(move |_: MouseEvent| tab.set(t))
                        };
                        html! {
                            <button
                                key={t.label()}
                                class={classes!("tab-button", is_active.then_some("active"))}
                                {onclick}
                            >
                                { t.label() }
                            </button>
                        }
                    })
                }
            </div>

            {
                match *tab {
                    Tab::Syllabus => html! { <SyllabusView /> },
                    Tab::Practice => html! {
                        <div class="section-grid grid-2">
                            <FlashcardsView />
                            <VocabQuizView on_progress={on_progress.clone()} />
                            <ReadingView />
                            <WritingView />
                        </div>
                    },
                    Tab::Sessions => html! {
                        <div class="section-grid">
                            <SessionTimerView on_progress={on_progress.clone()} />
                        </div>
                    },
                    Tab::Progress => html! {
                        <div class="section-grid">
                            <ProgressView record={(*progress).clone()} />
                        </div>
                    },
                }
            }

            <footer class="footer">
                { "Hecho para estudiar desde el temario de 7° básico. Guarda en el navegador; no requiere internet." }
            </footer>
        </div>
    }
}
