use crate::model::{ConfigAction, ConfiguratorState, FRAME_TYPES, FrameId};
use crate::util::after_ms;
use yew::prelude::*;

/// Pause between highlighting a card and opening the configurator.
const ADVANCE_DELAY_MS: i32 = 300;

#[derive(Properties, PartialEq, Clone)]
pub struct FrameGridProps {
    pub state: UseReducerHandle<ConfiguratorState>,
}

#[function_component(FrameGrid)]
pub fn frame_grid(props: &FrameGridProps) -> Html {
    let picked = use_state(|| None::<FrameId>);

    let cards = FRAME_TYPES.iter().map(|frame| {
        let onclick = {
            let state = props.state.clone();
            let picked = picked.clone();
            let id = frame.id;
            Callback::from(move |_| {
                if picked.is_some() {
                    return;
                }
                picked.set(Some(id));
                let state = state.clone();
                after_ms(ADVANCE_DELAY_MS, move || state.dispatch(ConfigAction::SelectFrame(id)));
            })
        };
        let selected = *picked == Some(frame.id) || (picked.is_none() && props.state.frame == Some(frame.id));
        let border = if selected { "#ffffff" } else { "#2a2a2a" };
        html! {
            <div class="frame-card" data-frame={frame.id.as_str()} onclick={onclick}
                style={format!("cursor:pointer; background:#161616; border:2px solid {border}; border-radius:10px; overflow:hidden; display:flex; flex-direction:column;")}>
                <div style="aspect-ratio:1/1; background:#1f1f1f; display:flex; align-items:center; justify-content:center;">
                    <img src={frame.image} alt={frame.name} loading="lazy" style="max-width:100%; max-height:100%;" />
                </div>
                <div style="padding:10px 12px; display:flex; flex-direction:column; gap:4px;">
                    <div style="font-weight:600;">{ frame.name }</div>
                    <div style="font-size:13px; color:#bdbdbd;">{ format!("de la €{}/m²", frame.price_no_glass) }</div>
                    <div style="font-size:12px; opacity:0.7;">{ frame.benefit }</div>
                </div>
            </div>
        }
    });

    html! {
        <section id="screen-frame" style="width:100%; max-width:960px; display:flex; flex-direction:column; gap:16px;">
            <h2 style="margin:8px 0 0 0; font-size:22px; text-align:center;">{"Alege tipul de ramă"}</h2>
            <div id="frameGrid" style="display:grid; grid-template-columns:repeat(auto-fill, minmax(170px, 1fr)); gap:12px;">
                { for cards }
            </div>
        </section>
    }
}
