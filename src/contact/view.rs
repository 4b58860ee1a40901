use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::client::send_contact;
use super::controller::{run_submission, ContactAction, ContactForm, Lifecycle};
use super::form::FormField;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_else(config::contact_endpoint)]
    pub endpoint: String,
}

#[function_component(ContactFormView)]
pub fn contact_form_view(props: &ContactFormProps) -> Html {
    let form = use_reducer(ContactForm::default);
    let lifecycle = use_mut_ref(Lifecycle::default);

    // Release a pending auto-reset when the form goes away
    {
        let lifecycle = lifecycle.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    lifecycle.borrow_mut().teardown();
                }
            },
            (),
        );
    }

    let on_edit = |field: FormField| {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                FormField::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            dispatcher.dispatch(ContactAction::Edit(field, value));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let lifecycle = lifecycle.clone();
        let endpoint = props.endpoint.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.status.accepts_submit() {
                return;
            }

            let dispatcher = form.dispatcher();
            let dispatch = move |action: ContactAction| dispatcher.dispatch(action);
            let endpoint = endpoint.clone();
            let delivery = run_submission(
                lifecycle.clone(),
                form.fields.clone(),
                dispatch,
                move |fields| async move { send_contact(&endpoint, &fields).await },
            );

            spawn_local(async move {
                // The outcome is already on the form; the error was logged.
                let _ = delivery.await;
            });
        })
    };

    let status = form.status;
    let fields = &form.fields;

    html! {
        <div class="contact-card">
            {
                if let Some(banner) = status.banner() {
                    html! {
                        <div class={banner.class()}>
                            <span>{banner.message()}</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <form class="contact-form" {onsubmit}>
                <div class="contact-field">
                    <label for={FormField::Name.name()}>{FormField::Name.label()}</label>
                    <input
                        type="text"
                        id={FormField::Name.name()}
                        name={FormField::Name.name()}
                        value={fields.get(FormField::Name).to_string()}
                        oninput={on_edit(FormField::Name)}
                        required=true
                    />
                </div>
                <div class="contact-field">
                    <label for={FormField::Email.name()}>{FormField::Email.label()}</label>
                    <input
                        type="email"
                        id={FormField::Email.name()}
                        name={FormField::Email.name()}
                        value={fields.get(FormField::Email).to_string()}
                        oninput={on_edit(FormField::Email)}
                        required=true
                    />
                </div>
                <div class="contact-field">
                    <label for={FormField::Message.name()}>{FormField::Message.label()}</label>
                    <textarea
                        id={FormField::Message.name()}
                        name={FormField::Message.name()}
                        rows="6"
                        value={fields.get(FormField::Message).to_string()}
                        oninput={on_edit(FormField::Message)}
                        required=true
                    />
                </div>
                <button
                    type="submit"
                    class="contact-submit"
                    disabled={!status.accepts_submit()}
                >
                    {status.submit_label()}
                </button>
            </form>
        </div>
    }
}
