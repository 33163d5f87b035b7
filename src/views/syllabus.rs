use yew::prelude::*;

use crate::data::{OBJECTIVES, VOCABULARY};

#[function_component(SyllabusView)]
pub fn syllabus_view() -> Html {
    html! {
        <div class="section-grid grid-2">
            {
                for OBJECTIVES.iter().map(|oa| html! {
                    <div class="section-card" key={oa.id}>
                        <div class="section-card-header">
                            <h3 class="section-card-title">{ oa.title }</h3>
                        </div>
                        <div class="section-content">
                            <p>{ oa.desc }</p>
                            <div class="flex-row">
                                { for oa.indicators.iter().map(|ind| html! {
                                    <span class="pill">{ *ind }</span>
                                }) }
                            </div>
                        </div>
                    </div>
                })
            }
            <div class="section-card">
                <div class="section-card-header">
                    <h3 class="section-card-title">{ "Vocabulario sugerido (EN — ES)" }</h3>
                </div>
                <div class="section-grid grid-3">
                    {
                        for VOCABULARY.iter().map(|cat| html! {
                            <div class="section-card vocab-category" key={cat.id}>
                                <h4 class="vocab-category-title">{ cat.name }</h4>
                                <div class="flex-row">
                                    { for cat.pairs.iter().map(|w| html! {
                                        <span class="pill" key={format!("{}-{}", w.en, w.es)}>
                                            { format!("{} — {}", w.en, w.es) }
                                        </span>
                                    }) }
                                </div>
                            </div>
                        })
                    }
                </div>
            </div>
        </div>
    }
}
