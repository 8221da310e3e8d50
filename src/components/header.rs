use crate::model::{ConfigAction, ConfiguratorState, Screen, StepStatus};
use yew::prelude::*;

const STEP_LABELS: [&str; 2] = ["Tip ramă", "Configurare"];

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub state: UseReducerHandle<ConfiguratorState>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let wizard = &props.state.wizard;
    let back_cb = {
        let state = props.state.clone();
        Callback::from(move |_| state.dispatch(ConfigAction::Back))
    };
    let cart_cb = {
        let state = props.state.clone();
        Callback::from(move |_| state.dispatch(ConfigAction::GoTo(Screen::Cart)))
    };
    let cart_len = props.state.cart.len();

    let back_btn = if wizard.shows_back_button() {
        html! { <button id="backBtn" onclick={back_cb} style="padding:6px 12px;">{"← Înapoi"}</button> }
    } else {
        html! {}
    };
    let cart_btn = if cart_len > 0 && wizard.current != Screen::Cart {
        html! { <button onclick={cart_cb} style="padding:6px 12px;">{ format!("Coș ({cart_len})") }</button> }
    } else {
        html! {}
    };

    let progress = if wizard.shows_header() {
        let steps = STEP_LABELS.iter().enumerate().map(|(i, label)| {
            let (color, weight) = match wizard.step_status(i) {
                StepStatus::Active => ("#ffffff", 600),
                StepStatus::Completed => ("#8bc34a", 500),
                StepStatus::Pending => ("#6e6e6e", 400),
            };
            html! { <span class="progress-step" style={format!("color:{color}; font-weight:{weight}; font-size:13px;")}>{ *label }</span> }
        });
        html! {
            <div id="mainHeader" style="display:flex; flex-direction:column; gap:8px; width:100%; max-width:720px;">
                <div style="display:flex; justify-content:space-between;">{ for steps }</div>
                <div style="height:4px; background:#2a2a2a; border-radius:2px; overflow:hidden;">
                    <div id="progressFill" style={format!("height:100%; width:{}%; background:#ffffff; transition:width 0.3s;", wizard.progress_percent())}></div>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <header id="top-bar" style="display:flex; flex-direction:column; align-items:center; gap:10px; padding:14px 16px; border-bottom:1px solid #2a2a2a;">
            <div style="display:flex; justify-content:space-between; align-items:center; width:100%; max-width:720px;">
                <div style="min-width:90px;">{ back_btn }</div>
                <div style="font-weight:700; letter-spacing:2px;">{"THERMONORD"}</div>
                <div style="min-width:90px; text-align:right;">{ cart_btn }</div>
            </div>
            { progress }
        </header>
    }
}
