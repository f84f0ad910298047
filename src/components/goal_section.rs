//! Main Goal Section

use leptos::prelude::*;

use crate::components::{Modal, ModalActions, TextAreaField};
use crate::store::{store_main_goal, store_set_main_goal, use_app_store};

#[component]
pub fn GoalSection() -> impl IntoView {
    let store = use_app_store();
    let modal_open = RwSignal::new(false);
    let goal_text = RwSignal::new(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_set_main_goal(&store, goal_text.get_untracked());
        goal_text.set(String::new());
        modal_open.set(false);
    };

    view! {
        <section id="goal" class="section">
            <div class="section-header">
                <h2>"Main Goal"</h2>
                <button class="icon-button edit-goal-btn" aria-label="Edit goal" on:click=move |_| modal_open.set(true)>
                    "✎"
                </button>
            </div>

            <div id="main-goal-content" class="main-goal">
                <p>{move || store_main_goal(&store)}</p>
            </div>

            <Modal id="goal-modal" title="Set Main Goal" open=modal_open>
                <form id="goal-form" on:submit=submit>
                    <TextAreaField id="goal-text" label="Goal" value=goal_text />
                    <ModalActions open=modal_open submit_label="Save Goal" />
                </form>
            </Modal>
        </section>
    }
}
