//! Contact details and the local-only inquiry form.

use agency::AGENCY;
use agency::content::Icon;
use leptos::prelude::*;

use crate::components::icon::SvgIcon;
use crate::components::reveal::use_section_visible;
use crate::components::section_heading::SectionHeading;
use crate::components::whatsapp_button::WhatsAppButton;
use crate::state::contact_form::{ContactForm, Field};
use crate::state::visibility::{Reveal, reveal_class};
use crate::util::browser;

#[component]
pub fn ContactSection() -> impl IntoView {
    let visible = use_section_visible("contact");
    let form = RwSignal::new(ContactForm::default());

    // Native `required` checks run before this fires; nothing is sent anywhere.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(ack) = form.try_update(ContactForm::submit) {
            browser::alert(ack.message());
        }
    };

    view! {
        <section id="contact" class="section section--brand">
            <div class="container">
                <SectionHeading
                    title="Get In Touch"
                    subtitle="Ready to find your dream property? Contact us today!"
                    visible=visible
                    inverted=true
                />
                <div class="contact">
                    <div class=move || format!("contact__info {}", reveal_class(visible.get(), Reveal::FromLeft))>
                        <h3 class="contact__heading">"Contact Information"</h3>
                        <ul class="contact__list">
                            <li class="contact__item">
                                <SvgIcon icon=Icon::Phone class="contact__icon"/>
                                <span>{AGENCY.phone}</span>
                            </li>
                            <li class="contact__item">
                                <SvgIcon icon=Icon::Mail class="contact__icon"/>
                                <span>{AGENCY.email}</span>
                            </li>
                            <li class="contact__item">
                                <SvgIcon icon=Icon::MapPin class="contact__icon"/>
                                <span>{AGENCY.address}</span>
                            </li>
                        </ul>
                        <WhatsAppButton label="Chat on WhatsApp Now" large=true/>
                    </div>
                    <form
                        class=move || format!("contact-form {}", reveal_class(visible.get(), Reveal::FromRight))
                        on:submit=on_submit
                    >
                        <div class="contact-form__row">
                            <FormInput form=form field=Field::Name placeholder="Your Name" required=true/>
                            <FormInput
                                form=form
                                field=Field::Email
                                placeholder="Your Email"
                                input_type="email"
                                required=true
                            />
                        </div>
                        <FormInput form=form field=Field::Phone placeholder="Phone Number" input_type="tel"/>
                        <textarea
                            class="contact-form__input"
                            rows="5"
                            placeholder="Your Message"
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.set(Field::Message, event_target_value(&ev)))
                        ></textarea>
                        <button class="btn btn--gold btn--block" type="submit">
                            "Send Message"
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

/// Single-line input bound to one form field.
#[component]
fn FormInput(
    form: RwSignal<ContactForm>,
    field: Field,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <input
            class="contact-form__input"
            type=input_type
            placeholder=placeholder
            required=required
            prop:value=move || form.with(|f| f.get(field).to_owned())
            on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
        />
    }
}
