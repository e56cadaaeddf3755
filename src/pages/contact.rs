use yew::prelude::*;
use log::info;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::config::CONTACT_RECIPIENT;
use crate::mail::{ContactField, ContactForm, MailtoComposer, SUBJECT_OPTIONS};
use crate::section::Section;
use crate::visibility::use_visibility;

const CONTACT_INFO: &[(&str, &str, &[&str])] = &[
    ("✉", "Email", &["info@clifepharma.com", "support@clifepharma.com"]),
    ("📍", "Headquarters", &["123 Pharma Plaza", "Medical District, HC 12345"]),
];

/// Opens the visitor's mail client. Nothing comes back from it.
fn hand_off(uri: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(uri);
        let _ = window.alert_with_message(&format!(
            "Opening your email client to send the message to {}",
            CONTACT_RECIPIENT
        ));
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let node = use_node_ref();
    let visibility = use_visibility(node.clone());
    let form = use_state(ContactForm::default);

    let on_input = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                ContactField::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let on_subject = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.set(ContactField::Subject, e.target_unchecked_into::<HtmlSelectElement>().value());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut submitted = (*form).clone();
            let uri = submitted.submit(&MailtoComposer, CONTACT_RECIPIENT);
            info!("Handing contact form to mail client");
            hand_off(&uri);
            form.set(submitted);
        })
    };

    html! {
        <section id={Section::Contact.id()} ref={node} class={classes!("contact", "reveal", visibility.class())} aria-label="Contact Us">
            <div class="section-header">
                <div class="badge">{"Get In Touch"}</div>
                <h2>{"We'd Love to "}<span class="accent">{"Hear From You"}</span></h2>
                <p>
                    {"Have questions about our products or services? Reach out to our team and we'll get back to you as soon as possible."}
                </p>
            </div>

            <div class="contact-info">
                { for CONTACT_INFO.iter().map(|(icon, title, details)| html! {
                    <div class="info-card">
                        <div class="info-icon">{*icon}</div>
                        <h4>{*title}</h4>
                        { for details.iter().map(|detail| html! { <p>{*detail}</p> }) }
                    </div>
                }) }
            </div>

            <form class="contact-form" {onsubmit}>
                <div class="form-row">
                    <div class="form-field">
                        <label for="name">{"Full Name *"}</label>
                        <input type="text" id="name" name="name" required=true placeholder="John Doe"
                            value={form.name.clone()} oninput={on_input(ContactField::Name)} />
                    </div>
                    <div class="form-field">
                        <label for="email">{"Email Address *"}</label>
                        <input type="email" id="email" name="email" required=true placeholder="john@example.com"
                            value={form.email.clone()} oninput={on_input(ContactField::Email)} />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-field">
                        <label for="phone">{"Phone Number"}</label>
                        <input type="tel" id="phone" name="phone" placeholder="+1 (555) 123-4567"
                            value={form.phone.clone()} oninput={on_input(ContactField::Phone)} />
                    </div>
                    <div class="form-field">
                        <label for="subject">{"Subject *"}</label>
                        <select id="subject" name="subject" required=true onchange={on_subject}>
                            <option value="" selected={form.subject.is_empty()}>{"Select a subject"}</option>
                            { for SUBJECT_OPTIONS.iter().map(|(value, label)| html! {
                                <option value={*value} selected={form.subject == *value}>{*label}</option>
                            }) }
                        </select>
                    </div>
                </div>
                <div class="form-field">
                    <label for="message">{"Message *"}</label>
                    <textarea id="message" name="message" required=true rows="6"
                        placeholder="Tell us more about your inquiry..."
                        value={form.message.clone()} oninput={on_input(ContactField::Message)} />
                </div>
                <button type="submit" class="submit-button">
                    <span>{"Send Message"}</span>{" ➤"}
                </button>
            </form>
        </section>
    }
}
