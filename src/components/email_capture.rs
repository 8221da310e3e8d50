use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::model::{ConfigAction, ConfiguratorState};
use crate::util::format_price;

#[derive(Properties, PartialEq, Clone)]
pub struct EmailCaptureProps {
    pub state: UseReducerHandle<ConfiguratorState>,
}

#[function_component(EmailCapture)]
pub fn email_capture(props: &EmailCaptureProps) -> Html {
    let email = use_state(String::new);

    let on_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_submit = {
        let email = email.clone();
        let state = props.state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(ConfigAction::SubmitEmail((*email).clone()));
        })
    };
    let back = {
        let state = props.state.clone();
        Callback::from(move |_| state.dispatch(ConfigAction::Back))
    };

    let error = props
        .state
        .last_error
        .as_ref()
        .map(|e| html! { <div style="font-size:12px; color:#f85149;">{ e.to_string() }</div> })
        .unwrap_or_default();

    html! {
        <section id="screen-email" style="width:100%; max-width:440px; display:flex; flex-direction:column; gap:14px; text-align:center;">
            <h2 style="margin:8px 0 0 0; font-size:20px;">{"Primește oferta pe email"}</h2>
            <p style="margin:0; opacity:0.75;">
                { format!("{} produs(e), total estimativ {}", props.state.cart.total_quantity(), format_price(props.state.cart.total())) }
            </p>
            <form onsubmit={on_submit} style="display:flex; flex-direction:column; gap:10px;">
                <input id="emailInput" type="email" placeholder="adresa@email.ro" value={(*email).clone()} oninput={on_input}
                    style="padding:10px; border-radius:6px; border:1px solid #3a3a3a; background:#161616; color:inherit;" />
                { error }
                <button type="submit" style="padding:12px; font-weight:600;">{"Trimite"}</button>
            </form>
            <button onclick={back} style="background:none; border:none; color:#bdbdbd; text-decoration:underline; cursor:pointer;">{"Înapoi la coș"}</button>
        </section>
    }
}
