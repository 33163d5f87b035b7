//! Best-effort text-to-speech. When the browser exposes no speech
//! synthesis the views simply hide their audio buttons.

use web_sys::SpeechSynthesisUtterance;

/// Equivalent of `"speechSynthesis" in window && "SpeechSynthesisUtterance"
/// in window`. The web-sys getter alone is not a capability check: it only
/// fails when the property access throws, not when the property is absent.
pub fn supports_speech() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let has = |name: &str| {
        js_sys::Reflect::has(window.as_ref(), &name.into()).unwrap_or(false)
    };
    has("speechSynthesis") && has("SpeechSynthesisUtterance")
}

/// Queues `text` for the given BCP-47 language tag ("en-US", "es-ES").
/// Failures are ignored; audio is a side channel, never load-bearing.
pub fn speak(text: &str, lang: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(synth) = window.speech_synthesis() else {
        return;
    };
    if let Ok(utterance) = SpeechSynthesisUtterance::new_with_text(text) {
        utterance.set_lang(lang);
        synth.speak(&utterance);
    }
}
