use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::fa_solid_icons::{FaClock, FaEnvelope, FaLocationDot, FaPhone};

use crate::components::button::Button;

const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

/// Local state of the contact form. Nothing is sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

const FAQ: [(&str, &str); 4] = [
    (
        "Do you offer delivery?",
        "Yes, we offer delivery within a 10-mile radius of our store. Orders must be placed at least 24 hours in advance.",
    ),
    (
        "Can I place custom orders?",
        "Absolutely! We love creating custom cookie designs. Please contact us at least one week in advance for custom orders.",
    ),
    (
        "What about allergies?",
        "We clearly label all allergens and can accommodate some dietary restrictions. Please ask about our options.",
    ),
    (
        "How long do cookies stay fresh?",
        "Our cookies stay fresh for up to 5 days when stored in an airtight container at room temperature.",
    ),
];

#[component]
pub fn Contact() -> Element {
    let mut form = use_signal(ContactForm::default);

    rsx! {
        document::Link { rel: "stylesheet", href: PAGES_CSS }

        section { class: "contact-header",
            h1 { class: "playfair", "Contact Us" }
            p {
                "Have questions about our products or services? We'd love to hear from you. "
                "Get in touch with us!"
            }
        }

        section { class: "page-section contact-grid",
            div { class: "contact-card",
                h2 { "Send us a Message" }
                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        let submitted = form.read();
                        tracing::info!(
                            name = %submitted.name,
                            email = %submitted.email,
                            subject = %submitted.subject,
                            complete = submitted.is_complete(),
                            "contact form submitted"
                        );
                    },
                    label { r#for: "name", "Name" }
                    input {
                        id: "name",
                        name: "name",
                        required: true,
                        value: "{form.read().name}",
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        name: "email",
                        r#type: "email",
                        required: true,
                        value: "{form.read().email}",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                    label { r#for: "subject", "Subject" }
                    input {
                        id: "subject",
                        name: "subject",
                        required: true,
                        value: "{form.read().subject}",
                        oninput: move |evt| form.write().subject = evt.value(),
                    }
                    label { r#for: "message", "Message" }
                    textarea {
                        id: "message",
                        name: "message",
                        rows: 5,
                        required: true,
                        value: "{form.read().message}",
                        oninput: move |evt| form.write().message = evt.value(),
                    }
                    Button { button_type: "submit", class: "luxury-button full-width", "Send Message" }
                }
            }

            div { class: "contact-info",
                h2 { "Get in Touch" }
                div { class: "contact-item",
                    Icon { width: 24, height: 24, icon: FaLocationDot }
                    div {
                        h3 { "Visit Us" }
                        p {
                            "123 Cookie Lane"
                            br {}
                            "Sweet City, SC 12345"
                        }
                    }
                }
                div { class: "contact-item",
                    Icon { width: 24, height: 24, icon: FaPhone }
                    div {
                        h3 { "Call Us" }
                        p { "(555) 123-4567" }
                    }
                }
                div { class: "contact-item",
                    Icon { width: 24, height: 24, icon: FaEnvelope }
                    div {
                        h3 { "Email Us" }
                        p { "info@chocobites.com" }
                    }
                }
                div { class: "contact-item",
                    Icon { width: 24, height: 24, icon: FaClock }
                    div {
                        h3 { "Opening Hours" }
                        p {
                            "Monday - Friday: 9:00 AM - 8:00 PM"
                            br {}
                            "Saturday - Sunday: 10:00 AM - 6:00 PM"
                        }
                    }
                }
                div { class: "map-placeholder",
                    p { "Map coming soon" }
                }
            }
        }

        section { class: "page-section accent",
            h2 { "Frequently Asked Questions" }
            div { class: "faq-grid",
                for (question, answer) in FAQ {
                    div { key: "{question}", class: "faq-item",
                        h3 { "{question}" }
                        p { "{answer}" }
                    }
                }
            }
        }
    }
}
