use yew::prelude::*;

use crate::model::{ConfigAction, ConfiguratorState};

#[derive(Properties, PartialEq, Clone)]
pub struct SuccessPanelProps {
    pub state: UseReducerHandle<ConfiguratorState>,
}

#[function_component]
pub fn SuccessPanel(props: &SuccessPanelProps) -> Html {
    let again = {
        let state = props.state.clone();
        Callback::from(move |_| state.dispatch(ConfigAction::AddAnother))
    };
    let address = props.state.captured_email.clone().unwrap_or_default();
    html! {
        <section id="screen-success" style="max-width:440px; text-align:center; display:flex; flex-direction:column; gap:12px; padding-top:32px;">
            <div style="font-size:40px;">{"✓"}</div>
            <h2 style="margin:0; font-size:22px;">{"Mulțumim!"}</h2>
            <p style="margin:0; opacity:0.8;">{ format!("Îți trimitem oferta la {address} în cel mai scurt timp.") }</p>
            <button onclick={again} style="padding:10px;">{"Configurează alt produs"}</button>
        </section>
    }
}
