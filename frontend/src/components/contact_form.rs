use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::contact::{self, ContactForm, ContactReason};
use crate::config;

#[function_component(ContactFormSection)]
pub fn contact_form_section() -> Html {
    let form = use_state(ContactForm::default);
    let error = use_state(|| None::<String>);
    let sending = use_state(|| false);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm {
                name: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm {
                phone: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_reason = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(reason) = ContactReason::from_label(&select.value()) {
                form.set(ContactForm {
                    reason,
                    ..(*form).clone()
                });
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let sending = sending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match form.validate() {
                Ok(request) => request,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            error.set(None);
            sending.set(true);
            let sending = sending.clone();
            spawn_local(async move {
                match contact::submit(&request).await {
                    Ok(()) => info!("Contact request stored"),
                    Err(err) => gloo_console::error!(format!("{}", err)),
                }
                sending.set(false);
                // Redirect regardless of the POST outcome
                let link = contact::whatsapp_link(
                    config::WHATSAPP_NUMBER,
                    Some(&request.whatsapp_message()),
                );
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&link);
                }
            });
        })
    };

    html! {
        <form class="contact-form" onsubmit={on_submit}>
            <div class="form-field">
                <label for="contact-name">{"Nome Completo"}</label>
                <input
                    id="contact-name"
                    type="text"
                    placeholder="Seu nome"
                    value={form.name.clone()}
                    oninput={on_name}
                />
            </div>
            <div class="form-field">
                <label for="contact-phone">{"WhatsApp / Telefone"}</label>
                <input
                    id="contact-phone"
                    type="tel"
                    placeholder="(DDD) 99999-9999"
                    value={form.phone.clone()}
                    oninput={on_phone}
                />
            </div>
            <div class="form-field">
                <label for="contact-reason">{"Motivo do Contato"}</label>
                <select id="contact-reason" onchange={on_reason}>
                    { for ContactReason::ALL.iter().map(|reason| html! {
                        <option
                            value={reason.label()}
                            selected={*reason == form.reason}
                        >
                            {reason.label()}
                        </option>
                    }) }
                </select>
            </div>
            {
                if let Some(message) = (*error).clone() {
                    html! { <p class="form-error">{message}</p> }
                } else {
                    html! {}
                }
            }
            <button type="submit" class="btn btn-primary btn-block" disabled={*sending}>
                { if *sending { "Enviando..." } else { "Solicitar Ajuda Agora" } }
            </button>
            <div class="form-privacy">
                <span>{"🛡️ Suas informações são 100% confidenciais. Não julgamos, ajudamos."}</span>
            </div>
        </form>
    }
}
