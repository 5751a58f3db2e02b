use log::info;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::context::ContextHandle;
use yew::prelude::*;

use super::toast::Toast;
use crate::config;
use crate::enquiry::client::{submit_enquiry, SubmitError};
use crate::enquiry::draft::{Interest, TextField};
use crate::enquiry::workflow::EnquiryWorkflow;
use crate::i18n::{Lang, LangContext};
use crate::sections::Section;

pub enum Msg {
    Edit(TextField, String),
    SelectInterest(String),
    Submit,
    Settled(Result<(), SubmitError>),
    DismissNotice,
    LangChanged(LangContext),
}

pub struct EnquiryForm {
    workflow: EnquiryWorkflow,
    lang: Lang,
    interest_ref: NodeRef,
    _lang_listener: Option<ContextHandle<LangContext>>,
}

impl EnquiryForm {
    fn text_input(&self, ctx: &Context<Self>, field: TextField, kind: &'static str, label: &'static str, placeholder: &'static str) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Edit(field, input.value())
        });

        html! {
            <div class="form-field">
                <label for={field.name()}>{label}</label>
                <input
                    id={field.name()}
                    name={field.name()}
                    type={kind}
                    value={self.workflow.draft.text(field).to_string()}
                    {oninput}
                    {placeholder}
                    required=true
                />
            </div>
        }
    }
}

impl Component for EnquiryForm {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (lang, listener) = match ctx
            .link()
            .context::<LangContext>(ctx.link().callback(Msg::LangChanged))
        {
            Some((lang_ctx, handle)) => (lang_ctx.lang, Some(handle)),
            None => (Lang::default(), None),
        };

        Self {
            workflow: EnquiryWorkflow::default(),
            lang,
            interest_ref: NodeRef::default(),
            _lang_listener: listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => {
                self.workflow.draft.set_text(field, value);
                true
            }
            Msg::SelectInterest(value) => {
                self.workflow.draft.select_interest(&value);
                true
            }
            Msg::Submit => {
                let draft = match self.workflow.begin_submit() {
                    Some(draft) => draft,
                    None => return false,
                };
                info!("Submitting enquiry for {}", draft.interest_value());
                let endpoint = config::get_intake_url();
                ctx.link().send_future(async move {
                    Msg::Settled(submit_enquiry(endpoint, &draft).await)
                });
                true
            }
            Msg::Settled(result) => {
                self.workflow.settle(result);
                true
            }
            Msg::DismissNotice => {
                self.workflow.dismiss_outcome();
                true
            }
            Msg::LangChanged(lang_ctx) => {
                self.lang = lang_ctx.lang;
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // the select shows whatever the draft holds, including after a reset
        if let Some(select) = self.interest_ref.cast::<HtmlSelectElement>() {
            let value = self.workflow.draft.interest_value();
            if select.value() != value {
                select.set_value(value);
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let strings = self.lang.strings();
        let submitting = self.workflow.is_submitting();

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let on_interest = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::SelectInterest(select.value())
        });
        let on_message = ctx.link().callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::Edit(TextField::Message, area.value())
        });

        html! {
            <section id={Section::Contact.id()} class="enquiry-section">
                <style>
                    {r#"
                    .enquiry-section { position: relative; padding: 6rem 0; overflow: hidden; }
                    .enquiry-blob {
                        position: absolute;
                        width: 24rem;
                        height: 24rem;
                        border-radius: 9999px;
                        filter: blur(64px);
                        opacity: 0.1;
                        animation: blobPulse 8s ease-in-out infinite;
                    }
                    .enquiry-blob.one { top: 25%; left: 25%; background: rgba(124, 58, 237, 0.2); }
                    .enquiry-blob.two { bottom: 25%; right: 25%; background: rgba(236, 72, 153, 0.2); animation-duration: 10s; animation-delay: 2s; }
                    @keyframes blobPulse {
                        0%, 100% { transform: scale(1); opacity: 0.1; }
                        50% { transform: scale(1.25); opacity: 0.2; }
                    }
                    .enquiry-form {
                        position: relative;
                        z-index: 10;
                        max-width: 42rem;
                        margin: 0 auto;
                        padding: 3rem;
                        border-radius: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        opacity: 0;
                        animation: fadeUp 0.8s ease-out 0.2s forwards;
                    }
                    .form-field { display: flex; flex-direction: column; gap: 0.5rem; }
                    .form-field label { font-size: 1rem; font-weight: 500; }
                    .form-field input, .form-field select, .form-field textarea {
                        padding: 0.625rem 0.75rem;
                        border-radius: 0.5rem;
                        border: 1px solid var(--border);
                        background: rgba(255, 255, 255, 0.05);
                        color: inherit;
                        font: inherit;
                        transition: border-color 0.2s;
                    }
                    .form-field input:focus, .form-field select:focus, .form-field textarea:focus {
                        outline: none;
                        border-color: var(--primary);
                    }
                    .form-field textarea { resize: none; }
                    .submit-button {
                        width: 100%;
                        font-size: 1.125rem;
                        padding: 1.25rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(to right, var(--primary), var(--secondary));
                    }
                    .submit-button:disabled { opacity: 0.7; cursor: not-allowed; }
                    .spinner {
                        width: 1.5rem;
                        height: 1.5rem;
                        border: 2px solid #ffffff;
                        border-top-color: transparent;
                        border-radius: 50%;
                        animation: spin 1s linear infinite;
                    }
                    @media (max-width: 768px) {
                        .enquiry-form { padding: 2rem; }
                    }
                    "#}
                </style>
                <div class="enquiry-blob one"></div>
                <div class="enquiry-blob two"></div>

                <div class="container">
                    <div class="section-header fade-up">
                        <h2 class="gradient-text">{strings.enquiry_title}</h2>
                        <p class="muted">{strings.enquiry_subtitle}</p>
                    </div>

                    <form class="enquiry-form glass hover-glow" {onsubmit}>
                        { self.text_input(ctx, TextField::FullName, "text", strings.enquiry_full_name, "John Doe") }
                        { self.text_input(ctx, TextField::Email, "email", strings.enquiry_email, "john@example.com") }
                        { self.text_input(ctx, TextField::Phone, "tel", strings.enquiry_phone, "+1 (555) 123-4567") }

                        <div class="form-field">
                            <label for="interest">{strings.enquiry_interest}</label>
                            <select id="interest" name="interest" ref={self.interest_ref.clone()} onchange={on_interest}>
                                <option value="">{strings.enquiry_interest_placeholder}</option>
                                { for Interest::ALL.iter().map(|interest| html! {
                                    <option value={interest.as_str()}>{strings.interest_label(*interest)}</option>
                                }) }
                            </select>
                        </div>

                        <div class="form-field">
                            <label for={TextField::Message.name()}>{strings.enquiry_message}</label>
                            <textarea
                                id={TextField::Message.name()}
                                name={TextField::Message.name()}
                                rows="5"
                                value={self.workflow.draft.message.clone()}
                                oninput={on_message}
                                placeholder={strings.enquiry_message_placeholder}
                                required=true
                            />
                        </div>

                        <button type="submit" class="btn btn-primary submit-button hover-glow" disabled={submitting}>
                            if submitting {
                                <span class="spinner" aria-label="Submitting"></span>
                            } else {
                                {strings.enquiry_submit}
                            }
                        </button>
                    </form>
                </div>

                if let Some(outcome) = self.workflow.outcome() {
                    <Toast
                        notice={outcome.notice(strings)}
                        on_close={ctx.link().callback(|_| Msg::DismissNotice)}
                    />
                }
            </section>
        }
    }
}
