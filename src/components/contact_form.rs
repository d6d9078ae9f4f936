use leptos::prelude::*;

use crate::contact::browser::{AlertNotifier, BrowserMailClient, SignalForm};
use crate::contact::{ContactField, EmailJsClient, SubmissionCoordinator, CONTACT_ADDRESS};

#[component]
fn FormInput(
    field: ContactField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = true)] required: bool,
    placeholder: &'static str,
    form: SignalForm,
) -> impl IntoView {
    let name = field.input_name();
    let label = if required {
        format!("{label} *")
    } else {
        label.to_string()
    };

    view! {
        <div class="form-group">
            <label for=name>{label}</label>
            <input
                type=input_type
                id=name
                name=name
                required=required
                placeholder=placeholder
                prop:value=move || form.field(field)
                on:input=move |ev| form.update_field(field, event_target_value(&ev))
            />
        </div>
    }
}

/// Contact form. Required fields and the email shape are checked by the
/// browser before `submit` fires.
#[component]
pub fn ContactForm() -> impl IntoView {
    let form = SignalForm::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.in_flight.get_untracked() {
            return;
        }

        leptos::task::spawn_local(async move {
            let coordinator = SubmissionCoordinator::new(
                EmailJsClient::from_build_env(),
                BrowserMailClient,
                AlertNotifier,
                CONTACT_ADDRESS,
            );

            match coordinator.submit(&form).await {
                Ok(outcome) => tracing::debug!(?outcome, "contact submission finished"),
                Err(e) => tracing::debug!(error = %e, "contact submission ignored"),
            }
        });
    };

    view! {
        <div class="contact-form">
            <h3>"Send Me a Message"</h3>
            <form on:submit=on_submit>
                <div class="form-row">
                    <FormInput field=ContactField::FirstName label="First Name" placeholder="John" form=form />
                    <FormInput field=ContactField::LastName label="Last Name" placeholder="Doe" form=form />
                </div>
                <FormInput
                    field=ContactField::Email
                    label="Email Address"
                    input_type="email"
                    placeholder="john@example.com"
                    form=form
                />
                <FormInput
                    field=ContactField::Phone
                    label="Contact Number"
                    input_type="tel"
                    required=false
                    placeholder="+1 (123) 456-7890"
                    form=form
                />
                <div class="form-group">
                    <label for="message">"Message *"</label>
                    <textarea
                        id="message"
                        name=ContactField::Message.input_name()
                        required=true
                        rows="5"
                        placeholder="Your message..."
                        prop:value=move || form.field(ContactField::Message)
                        on:input=move |ev| form.update_field(ContactField::Message, event_target_value(&ev))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="btn btn-primary btn-full"
                    disabled=move || form.in_flight.get()
                >
                    {move || if form.in_flight.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}
