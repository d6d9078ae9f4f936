use leptos::prelude::*;

use crate::components::ContactForm;
use crate::contact::CONTACT_ADDRESS;

#[component]
pub fn ContactPage() -> impl IntoView {
    let mailto = format!("mailto:{CONTACT_ADDRESS}");

    view! {
        <section class="contact-section">
            <h2 class="section-title">"Get In Touch"</h2>
            <p class="section-subtitle">
                "I'd love to hear from you! Let's discuss your project or just connect."
            </p>
            <div class="contact-container">
                <div class="contact-info">
                    <h3>"Contact Information"</h3>
                    <div class="contact-item">
                        <strong>"Email"</strong>
                        <p><a href=mailto>{CONTACT_ADDRESS}</a></p>
                    </div>
                    <div class="contact-item">
                        <strong>"Location"</strong>
                        <p>"Toronto, Ontario, Canada"</p>
                    </div>
                    <div class="contact-item">
                        <strong>"Connect"</strong>
                        <p>
                            <a href="https://www.linkedin.com/" target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                            " | "
                            <a href="https://github.com/" target="_blank" rel="noopener noreferrer">"GitHub"</a>
                        </p>
                    </div>
                </div>
                <ContactForm />
            </div>
        </section>
    }
}
