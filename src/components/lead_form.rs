use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::app::ConfigContext;
use crate::error::ConfiguratorError;
use crate::model::{Cart, LeadForm, Timeline};
use crate::quote::QuotePayload;

const FIELD_STYLE: &str = "padding:10px; border-radius:6px; border:1px solid #3a3a3a; background:#161616; color:inherit;";
// rendered in the layout rather than as type=hidden
const HIDDEN_FIELD_STYLE: &str = "height:1px; padding:0; margin:0; border:0; opacity:0.01; position:absolute;";

#[derive(Properties, PartialEq, Clone)]
pub struct LeadFormPanelProps {
    pub cart: Cart,
}

#[function_component(LeadFormPanel)]
pub fn lead_form_panel(props: &LeadFormPanelProps) -> Html {
    let ctx = use_context::<ConfigContext>();
    let form_action = ctx
        .map(|c| c.config.form_action.clone())
        .unwrap_or_else(|| "/design/form".to_string());
    let form = use_state(LeadForm::default);
    let errors = use_state(Vec::<ConfiguratorError>::new);

    let text_input = |apply: fn(&mut LeadForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };
    let on_timeline = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.timeline = Timeline::from_label(&select.value());
            form.set(next);
        })
    };

    let payload = QuotePayload::from_cart(&props.cart);

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let cart = props.cart.clone();
        Callback::from(move |e: SubmitEvent| {
            let mut problems = form.validate();
            if cart.is_empty() {
                problems.push(ConfiguratorError::EmptyCart);
            }
            if problems.is_empty() {
                let payload = QuotePayload::from_cart(&cart);
                log::info!(target: "lead", "submitting quote: {} / {}", payload.products, payload.total);
                errors.set(Vec::new());
            } else {
                e.prevent_default();
                log::warn!(target: "lead", "quote form blocked: {} problem(s)", problems.len());
                errors.set(problems);
            }
        })
    };

    let timelines = Timeline::ALL.iter().map(|t| {
        html! { <option value={t.label()} selected={form.timeline == Some(*t)}>{ t.label() }</option> }
    });
    let error_list = errors.iter().map(|e| html! { <li>{ e.to_string() }</li> });

    html! {
        <form id="cart-form" method="post" action={form_action} onsubmit={on_submit} novalidate={true}
            style="position:relative; display:flex; flex-direction:column; gap:10px; padding-top:12px; border-top:1px solid #2a2a2a;">
            <h3 style="margin:0; font-size:16px;">{"Primește oferta personalizată"}</h3>
            <input type="text" name="name" data-name="name" placeholder="Nume complet" required={true}
                value={form.name.clone()} oninput={text_input(|f, v| f.name = v)} style={FIELD_STYLE} />
            <input type="email" name="email" data-name="email" placeholder="Email" required={true}
                value={form.email.clone()} oninput={text_input(|f, v| f.email = v)} style={FIELD_STYLE} />
            <input type="tel" name="phone" data-name="phone" placeholder="Telefon" required={true}
                value={form.phone.clone()} oninput={text_input(|f, v| f.phone = v)} style={FIELD_STYLE} />
            <select name="timeline" data-name="timeline" onchange={on_timeline} style={FIELD_STYLE}>
                <option value="" disabled={true} selected={form.timeline.is_none()}>{"Când aveți nevoie?"}</option>
                { for timelines }
            </select>
            <input type="text" id="formProducts" name="products" data-name="products" readonly={true}
                value={payload.products} style={HIDDEN_FIELD_STYLE} />
            <input type="text" id="formTotal" name="total" data-name="total" readonly={true}
                value={payload.total} style={HIDDEN_FIELD_STYLE} />
            if !errors.is_empty() {
                <ul style="margin:0; padding-left:18px; color:#f85149; font-size:12px;">{ for error_list }</ul>
            }
            <input type="submit" id="btn-submit" value="PRIMEȘTE OFERTA"
                style="padding:12px; border-radius:8px; border:none; font-weight:700; background:#ffffff; color:#0e0e0e; cursor:pointer;" />
        </form>
    }
}
