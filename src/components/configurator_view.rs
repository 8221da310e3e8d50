use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::preview_canvas::PreviewCanvas;
use crate::model::{ColorChoice, ConfigAction, ConfiguratorState, DIMENSION_PRESETS, Opening};
use crate::preview::PreviewSpec;
use crate::util::format_price;

const SECTION_STYLE: &str = "display:flex; flex-direction:column; gap:8px;";
const LABEL_STYLE: &str = "font-size:12px; text-transform:uppercase; letter-spacing:1px; opacity:0.7;";

fn toggle_style(active: bool) -> String {
    let (bg, fg) = if active { ("#ffffff", "#0e0e0e") } else { ("transparent", "#f5f5f5") };
    format!("flex:1; padding:8px 10px; border:1px solid #3a3a3a; border-radius:6px; background:{bg}; color:{fg}; cursor:pointer;")
}

#[derive(Properties, PartialEq, Clone)]
pub struct ConfiguratorViewProps {
    pub state: UseReducerHandle<ConfiguratorState>,
}

#[function_component(ConfiguratorView)]
pub fn configurator_view(props: &ConfiguratorViewProps) -> Html {
    let state = &props.state;
    let Some(frame) = state.frame_type() else {
        let back = {
            let state = state.clone();
            Callback::from(move |_| state.dispatch(ConfigAction::Back))
        };
        return html! {
            <section style="padding:24px; text-align:center;">
                <p>{"Nu ai ales încă un tip de ramă."}</p>
                <button onclick={back}>{"Înapoi"}</button>
            </section>
        };
    };
    let draft = &state.draft;

    let dispatcher = |make: fn() -> ConfigAction| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(make()))
    };

    let on_width = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(ConfigAction::SetWidth(input.value()));
        })
    };
    let on_height = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(ConfigAction::SetHeight(input.value()));
        })
    };
    let on_color = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(c) = ColorChoice::from_label(&select.value()) {
                state.dispatch(ConfigAction::SetColor(c));
            }
        })
    };
    let on_custom_color = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(ConfigAction::SetCustomColor(input.value()));
        })
    };

    let presets = DIMENSION_PRESETS.iter().map(|&(w, h)| {
        let onclick = {
            let state = state.clone();
            Callback::from(move |_| state.dispatch(ConfigAction::ApplyPreset { width: w, height: h }))
        };
        html! {
            <button class="preset-btn" onclick={onclick} style={toggle_style(draft.matches_preset(w, h))}>
                { format!("{w}×{h}") }
            </button>
        }
    });

    let colors = ColorChoice::ALL.iter().map(|c| {
        html! { <option value={c.label()} selected={*c == draft.color}>{ c.label() }</option> }
    });

    let custom_color = if draft.shows_custom_color() {
        html! {
            <input id="inputCustomColor" type="text" placeholder="Ex: RAL 7016"
                value={draft.custom_color.clone()} oninput={on_custom_color}
                style="padding:8px; border-radius:6px; border:1px solid #3a3a3a; background:#161616; color:inherit;" />
        }
    } else {
        html! {}
    };

    let opening = if frame.has_opening {
        let opts = [Opening::Left, Opening::Right].into_iter().map(|o| {
            let onclick = {
                let state = state.clone();
                Callback::from(move |_| state.dispatch(ConfigAction::SetOpening(o)))
            };
            html! { <button data-value={o.label()} onclick={onclick} style={toggle_style(draft.opening == o)}>{ o.label() }</button> }
        });
        html! {
            <div id="openingSection" style={SECTION_STYLE}>
                <span style={LABEL_STYLE}>{"Sens deschidere"}</span>
                <div style="display:flex; gap:8px;">{ for opts }</div>
            </div>
        }
    } else {
        html! {}
    };

    let price = match state.draft_price() {
        Some(p) => html! {
            <div id="priceDisplay" style="display:flex; justify-content:space-between; align-items:baseline; padding:12px 0; border-top:1px solid #2a2a2a;">
                <span style={LABEL_STYLE}>{"Preț estimativ"}</span>
                <span id="priceValue" style="font-size:24px; font-weight:700;">{ format_price(p) }</span>
            </div>
        },
        None => html! {},
    };

    let error = match &state.last_error {
        Some(e) => html! { <div style="font-size:12px; color:#f85149;">{ e.to_string() }</div> },
        None => html! {},
    };

    let add_label = if state.editing.is_some() { "Salvează modificările" } else { "Adaugă în coș" };
    let can_add = state.can_add_to_cart();

    html! {
        <section id="screen-configurator" style="width:100%; max-width:1080px; display:flex; flex-wrap:wrap; gap:20px;">
            <div style="flex:1 1 420px; min-height:360px; display:flex; flex-direction:column; gap:8px;">
                <div id="configHeaderText" style="font-size:18px; font-weight:600;">{ frame.name }</div>
                <div style="position:relative; flex:1; min-height:320px; background:#121212; border:1px solid #2a2a2a; border-radius:10px;">
                    <PreviewCanvas spec={PreviewSpec::from_state(state)} />
                </div>
            </div>
            <div style="flex:1 1 320px; display:flex; flex-direction:column; gap:18px;">
                <div class="control-section" style={SECTION_STYLE}>
                    <span style={LABEL_STYLE}>{"Sticlă"}</span>
                    <div style="display:flex; gap:8px;">
                        <button data-value="with-glass" onclick={dispatcher(|| ConfigAction::SetGlass(true))} style={toggle_style(state.has_glass)}>{"Cu sticlă"}</button>
                        <button data-value="no-glass" onclick={dispatcher(|| ConfigAction::SetGlass(false))} style={toggle_style(!state.has_glass)}>{"Fără sticlă"}</button>
                    </div>
                </div>
                <div style={SECTION_STYLE}>
                    <span style={LABEL_STYLE}>{"Dimensiuni (cm)"}</span>
                    <div style="display:flex; gap:8px;">
                        <input id="inputWidth" type="number" min="1" inputmode="decimal" placeholder="Lățime"
                            value={draft.width_text.clone()} oninput={on_width}
                            style="flex:1; padding:8px; border-radius:6px; border:1px solid #3a3a3a; background:#161616; color:inherit;" />
                        <input id="inputHeight" type="number" min="1" inputmode="decimal" placeholder="Înălțime"
                            value={draft.height_text.clone()} oninput={on_height}
                            style="flex:1; padding:8px; border-radius:6px; border:1px solid #3a3a3a; background:#161616; color:inherit;" />
                    </div>
                    <div style="display:flex; gap:6px; flex-wrap:wrap;">{ for presets }</div>
                </div>
                <div style={SECTION_STYLE}>
                    <span style={LABEL_STYLE}>{"Culoare"}</span>
                    <select id="selectColor" onchange={on_color}
                        style="padding:8px; border-radius:6px; border:1px solid #3a3a3a; background:#161616; color:inherit;">
                        { for colors }
                    </select>
                    { custom_color }
                </div>
                { opening }
                <div style={SECTION_STYLE}>
                    <span style={LABEL_STYLE}>{"Cantitate"}</span>
                    <div style="display:flex; align-items:center; gap:12px;">
                        <button onclick={dispatcher(|| ConfigAction::AdjustQuantity(-1))} style="width:36px; height:36px;">{"−"}</button>
                        <span id="quantityValue" style="min-width:24px; text-align:center; font-variant-numeric:tabular-nums;">{ draft.quantity }</span>
                        <button onclick={dispatcher(|| ConfigAction::AdjustQuantity(1))} style="width:36px; height:36px;">{"+"}</button>
                    </div>
                </div>
                { price }
                { error }
                <button id="addProductBtn" disabled={!can_add} onclick={dispatcher(|| ConfigAction::AddToCart)}
                    style={format!("padding:12px; border-radius:8px; border:none; font-weight:600; background:#ffffff; color:#0e0e0e; opacity:{};", if can_add { "1" } else { "0.4" })}>
                    { add_label }
                </button>
            </div>
        </section>
    }
}
