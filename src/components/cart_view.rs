use yew::prelude::*;

use super::app::ConfigContext;
use super::lead_form::LeadFormPanel;
use crate::model::{ConfigAction, ConfiguratorState, Incentive, Screen};
use crate::quote::{quote_url, redirect};
use crate::util::format_price;

#[derive(Properties, PartialEq, Clone)]
pub struct CartViewProps {
    pub state: UseReducerHandle<ConfiguratorState>,
}

#[function_component(CartView)]
pub fn cart_view(props: &CartViewProps) -> Html {
    let ctx = use_context::<ConfigContext>();
    let config = ctx.map(|c| c.config).unwrap_or_default();
    let state = &props.state;
    let total = state.cart.total();

    let items = if state.cart.is_empty() {
        html! { <div class="cart-empty" style="padding:24px; text-align:center; opacity:0.7;">{"Coșul este gol"}</div> }
    } else {
        let rows = state.cart.items().iter().enumerate().map(|(i, item)| {
            let edit = {
                let state = state.clone();
                Callback::from(move |_| state.dispatch(ConfigAction::EditItem(i)))
            };
            let remove = {
                let state = state.clone();
                Callback::from(move |_| state.dispatch(ConfigAction::RemoveItem(i)))
            };
            html! {
                <div class="cart-item" style="display:flex; gap:12px; align-items:center; padding:12px 0; border-bottom:1px solid #2a2a2a;">
                    <div style="flex:1; display:flex; flex-direction:column; gap:4px;">
                        <div style="font-weight:600;">{ format!("{} × {}", item.frame_name(), item.quantity) }</div>
                        <div style="font-size:13px; opacity:0.75;">{ item.details_line() }</div>
                    </div>
                    <div style="font-weight:600; font-variant-numeric:tabular-nums;">{ format_price(item.price) }</div>
                    <div style="display:flex; gap:6px;">
                        <button onclick={edit}>{"Editează"}</button>
                        <button onclick={remove}>{"Șterge"}</button>
                    </div>
                </div>
            }
        });
        html! { <>{ for rows }</> }
    };

    let total_text = if state.cart.is_empty() {
        "€0".to_string()
    } else {
        format_price(total)
    };

    let incentive = match state.cart.incentive(config.incentive_threshold) {
        Incentive::Remaining(missing) => html! {
            <div id="cartIncentive" style="font-size:13px; padding:8px 10px; border:1px dashed #3a3a3a; border-radius:6px;">
                { format!("Mai adaugă produse de {} pentru transport și montaj gratuit.", format_price(missing)) }
            </div>
        },
        Incentive::Unlocked => html! {
            <div id="cartIncentiveUnlocked" style="font-size:13px; padding:8px 10px; border:1px solid #8bc34a; color:#8bc34a; border-radius:6px;">
                {"Ai deblocat transport și montaj gratuit!"}
            </div>
        },
        Incentive::None => html! {},
    };

    let add_another = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(ConfigAction::AddAnother))
    };
    let request_quote = {
        let state = state.clone();
        let config = config.clone();
        Callback::from(move |_| {
            if config.qualification_flow {
                state.dispatch(ConfigAction::GoTo(Screen::ProjectType));
            } else {
                redirect(&quote_url(&config.form_action, &state.cart, &state.qualification));
            }
        })
    };
    let email_offer = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(ConfigAction::GoTo(Screen::Email)))
    };
    let has_items = !state.cart.is_empty();

    html! {
        <section id="screen-cart" style="width:100%; max-width:720px;">
            <div class="cart-container" style="display:flex; flex-direction:column; gap:16px;">
                <h2 style="margin:0; font-size:22px;">{"Coșul tău"}</h2>
                <div id="cartItems">{ items }</div>
                <div style="display:flex; justify-content:space-between; align-items:baseline;">
                    <span style="opacity:0.7;">{"Total estimativ"}</span>
                    <span id="cartTotal" style="font-size:24px; font-weight:700;">{ total_text }</span>
                </div>
                { incentive }
                <div style="display:flex; gap:8px; flex-wrap:wrap;">
                    <button onclick={add_another} style="flex:1;">{"+ Adaugă alt produs"}</button>
                    <button onclick={request_quote} disabled={!has_items} style="flex:1; font-weight:600;">{"Cere ofertă"}</button>
                </div>
                if has_items {
                    <>
                        <LeadFormPanel cart={state.cart.clone()} />
                        <button onclick={email_offer} style="background:none; border:none; color:#bdbdbd; text-decoration:underline; cursor:pointer;">
                            {"Trimite-mi oferta pe email"}
                        </button>
                    </>
                }
            </div>
        </section>
    }
}
