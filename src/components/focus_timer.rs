//! Focus Timer Section

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn FocusTimerSection() -> impl IntoView {
    let timer = use_app_context().timer;

    view! {
        <section id="timer" class="section">
            <div class="section-header">
                <h2>"Focus Timer"</h2>
            </div>

            <div class="timer-card">
                <div id="timer-display" class="timer-display">{move || timer.display()}</div>
                <div class="timer-controls">
                    <button id="start-timer" class="primary-btn" on:click=move |_| timer.toggle()>
                        {move || if timer.is_running() { "Pause" } else { "Start" }}
                    </button>
                    <button id="reset-timer" class="secondary-btn" on:click=move |_| timer.reset()>
                        "Reset"
                    </button>
                </div>
            </div>
        </section>
    }
}
