use dioxus::prelude::*;
use studio_blocks_engine::rendering::{ContactFormView, ContactView};

#[component]
pub fn ContactSection(view: ContactView) -> Element {
    rsx! {
        div {
            class: "contact",
            h2 { class: "contact-heading", "{view.heading}" }
            if let Some(intro) = &view.intro {
                p { class: "contact-intro", "{intro}" }
            }
            div {
                class: "contact-details",
                if let Some(name) = &view.business_name {
                    strong { "{name}" }
                }
                if let Some(email) = &view.email {
                    a { class: "contact-email", href: "{email.link.href}", "{email.text}" }
                }
                if let Some(phone) = &view.phone {
                    a { class: "contact-phone", href: "{phone.link.href}", "{phone.text}" }
                }
                if !view.address.is_empty() {
                    address {
                        for line in view.address.iter() {
                            span { "{line}" }
                            br {}
                        }
                    }
                }
                if !view.opening_hours.is_empty() {
                    ul {
                        class: "opening-hours",
                        for hours in view.opening_hours.iter() {
                            li { "{hours}" }
                        }
                    }
                }
            }
            if let Some(form) = &view.form {
                ContactForm { form: form.clone() }
            }
        }
    }
}

/// Contact form markup. Submission is not wired to a backend; the preview
/// only swaps in the success message.
#[component]
pub fn ContactForm(form: ContactFormView) -> Element {
    let mut sent = use_signal(|| false);

    if *sent.read() {
        return rsx! {
            p { class: "contact-success", "role": "status", "{form.success_message}" }
        };
    }

    rsx! {
        form {
            class: "contact-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                sent.set(true);
            },
            label { "Name" input { name: "name", required: true } }
            label { "Email" input { name: "email", r#type: "email", required: true } }
            if form.show_phone_field {
                label { "Phone" input { name: "phone", r#type: "tel" } }
            }
            if !form.subject_options.is_empty() {
                label {
                    "Subject"
                    select {
                        name: "subject",
                        for option in form.subject_options.iter() {
                            option { value: "{option}", "{option}" }
                        }
                    }
                }
            }
            label { "Message" textarea { name: "message", rows: "5", required: true } }
            button { r#type: "submit", class: "button button-primary", "{form.submit_label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use studio_blocks_engine::rendering::{ContactLine, LinkView};

    fn contact(form: Option<ContactFormView>) -> ContactView {
        ContactView {
            heading: "Get in touch".to_string(),
            intro: None,
            business_name: Some("Harbour Studio".to_string()),
            email: Some(ContactLine {
                text: "hello@harbour.test".to_string(),
                link: LinkView {
                    href: "mailto:hello@harbour.test".to_string(),
                    new_tab: false,
                },
            }),
            phone: None,
            address: vec!["1 Harbour Row".to_string(), "Bristol".to_string()],
            opening_hours: Vec::new(),
            form,
        }
    }

    #[test]
    fn test_contact_details() {
        let mut dom = VirtualDom::new_with_props(
            ContactSection,
            ContactSectionProps {
                view: contact(None),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains(r#"href="mailto:hello@harbour.test""#));
        assert!(html.contains("1 Harbour Row"));
        assert!(!html.contains("contact-phone"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_form_fields_follow_config() {
        let mut dom = VirtualDom::new_with_props(
            ContactSection,
            ContactSectionProps {
                view: contact(Some(ContactFormView {
                    submit_label: "Send message".to_string(),
                    success_message: "Thanks".to_string(),
                    show_phone_field: false,
                    subject_options: vec!["Websites".to_string(), "Branding".to_string()],
                })),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("<form"));
        assert!(!html.contains(r#"name="phone""#));
        assert_eq!(html.matches("<option").count(), 2);
        assert!(html.contains("Send message"));
    }
}
