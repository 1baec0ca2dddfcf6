use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use super::{animation::RevealBox, sections::Starfield, use_site_config};
use crate::{
    config::RelayConfig,
    contact::{
        deliver, ContactAction, ContactPayload, ContactState, EmailJsRequest, EmailRelay, Field,
        Notice, NoticeKind, RelayError, EMAILJS_SEND_URL,
    },
    motion::{Direction, Easing, Reveal},
};

/// Sends contact messages through the EmailJS REST endpoint.
pub struct EmailJsRelay {
    config: Option<RelayConfig>,
}

impl EmailJsRelay {
    pub fn new(config: Option<RelayConfig>) -> Self {
        Self { config }
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(&self, payload: &ContactPayload) -> Result<(), RelayError> {
        let config = self.config.as_ref().ok_or(RelayError::NotConfigured)?;

        let response = Request::post(EMAILJS_SEND_URL)
            .json(&EmailJsRequest::new(config, payload))
            .map_err(|error| RelayError::Network(error.to_string()))?
            .send()
            .await
            .map_err(|error| RelayError::Network(error.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(RelayError::Rejected {
                status: response.status(),
            })
        }
    }
}

#[derive(Clone, Default, PartialEq)]
struct ContactModel(ContactState);

impl Reducible for ContactModel {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let submitting = matches!(action, ContactAction::Submit { .. });
        let mut next = (*self).clone();
        next.0.apply(action);

        if submitting && !next.0.errors.is_empty() {
            log::debug!("contact form rejected: {} invalid field(s)", next.0.errors.len());
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
struct FieldInputProps {
    field: Field,
    label: AttrValue,
    placeholder: AttrValue,
    title: AttrValue,
    value: AttrValue,
    invalid: bool,
    disabled: bool,
    on_edit: Callback<(Field, String)>,
}

#[function_component(FieldInput)]
fn field_input(props: &FieldInputProps) -> Html {
    let field = props.field;
    let id = field.id();

    let control = if field == Field::Message {
        let on_edit = props.on_edit.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            let textarea: HtmlTextAreaElement = event.target_unchecked_into();
            on_edit.emit((field, textarea.value()));
        });

        html! {
            <textarea
                rows="7"
                name={id}
                id={id}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                title={props.title.clone()}
                disabled={props.disabled}
                aria-disabled={props.disabled.to_string()}
                oninput={oninput}
            />
        }
    } else {
        let on_edit = props.on_edit.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_edit.emit((field, input.value()));
        });
        let inputmode = (field == Field::Email).then_some("email");

        html! {
            <input
                type="text"
                inputmode={inputmode}
                name={id}
                id={id}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                title={props.title.clone()}
                disabled={props.disabled}
                aria-disabled={props.disabled.to_string()}
                oninput={oninput}
            />
        }
    };

    html! {
        <label for={id} class="field">
            <span class="field-label">{props.label.clone()}</span>
            {control}
            if props.invalid {
                <span class="field-error" id={format!("{id}-error")}>{field.error_message()}</span>
            }
        </label>
    }
}

#[derive(Properties, PartialEq)]
struct ToasterProps {
    notice: Option<Notice>,
    duration_ms: u32,
    on_dismiss: Callback<()>,
}

/// Shows the latest notice until it times out or is clicked away.
#[function_component(Toaster)]
fn toaster(props: &ToasterProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let duration_ms = props.duration_ms;
        let notice_id = props.notice.as_ref().map(|notice| notice.id);
        use_effect_with(notice_id, move |notice_id| {
            let timer = notice_id.map(|_| Timeout::new(duration_ms, move || on_dismiss.emit(())));
            move || drop(timer)
        });
    }

    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };

    let kind = match notice.kind {
        NoticeKind::Success => "toast-success",
        NoticeKind::Error => "toast-error",
    };
    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    html! {
        <div class="toaster" role="status" aria-live="polite">
            <button type="button" class={classes!("toast", kind)} onclick={onclick}>
                {notice.text}
            </button>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let config = use_site_config();
    let model = use_reducer(ContactModel::default);
    let state = &model.0;

    let on_edit = {
        let model = model.clone();
        Callback::from(move |(field, value): (Field, String)| {
            model.dispatch(ContactAction::Edit(field, value));
        })
    };

    let onsubmit = {
        let model = model.clone();
        let config = config.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            model.dispatch(ContactAction::Submit {
                to_name: config.contact_recipient.clone(),
                to_email: config.relay.as_ref().and_then(|relay| relay.receiver.clone()),
            });
        })
    };

    {
        let model = model.clone();
        let relay_config = config.relay.clone();
        use_effect_with(state.outgoing.clone(), move |outgoing| {
            if let Some(payload) = outgoing.clone() {
                let relay = EmailJsRelay::new(relay_config);
                spawn_local(async move {
                    let finished = deliver(&relay, &payload).await;
                    match &finished {
                        ContactAction::Finished(Err(error)) => log::warn!("contact message failed: {error}"),
                        _ => log::info!("contact message sent"),
                    }
                    model.dispatch(finished);
                });
            }
            || ()
        });
    }

    let on_dismiss = {
        let model = model.clone();
        Callback::from(move |_| model.dispatch(ContactAction::DismissNotice))
    };

    let field = |field: Field, label: &'static str, placeholder: &'static str, title: &'static str| {
        html! {
            <FieldInput
                field={field}
                label={label}
                placeholder={placeholder}
                title={title}
                value={state.form.field(field).to_string()}
                invalid={state.has_error(field)}
                disabled={state.loading}
                on_edit={on_edit.clone()}
            />
        }
    };

    html! {
        <section id="contact" class="contact-section">
            <Starfield />
            <div class="section-inner contact-layout">
                <RevealBox
                    reveal={Reveal::slide_in(Direction::Left, Easing::EaseOut, 0.2, 1.0)}
                    class="contact-card"
                >
                    <p class="section-subtext">{"Get in touch"}</p>
                    <h3 class="section-headtext">{"Contact."}</h3>
                    <form class="contact-form" onsubmit={onsubmit}>
                        {field(Field::Name, "Your Name*", "John Doe", "What's your name?")}
                        {field(Field::Email, "Your Email*", "johndoe@email.com", "What's your email?")}
                        {field(Field::Message, "Your Message*", "Hello there!", "What do you want to say?")}
                        <button
                            type="submit"
                            class="button-primary"
                            title={if state.loading { "Sending..." } else { "Send" }}
                            disabled={state.loading}
                            aria-disabled={state.loading.to_string()}
                        >
                            {if state.loading { "Sending..." } else { "Send" }}
                        </button>
                    </form>
                </RevealBox>
            </div>
            <Toaster
                notice={state.notice.clone()}
                duration_ms={config.toast_duration_ms}
                on_dismiss={on_dismiss}
            />
        </section>
    }
}
