use yew::prelude::*;

use super::app::ConfigContext;
use crate::model::{ConfigAction, ConfiguratorState, ProjectType, Qualification, Scope, Screen, Timeline};
use crate::quote::{quote_url, redirect};
use crate::util::after_ms;

const ADVANCE_DELAY_MS: i32 = 300;

#[derive(Properties, PartialEq, Clone)]
pub struct QualificationViewProps {
    pub state: UseReducerHandle<ConfiguratorState>,
}

#[derive(Properties, PartialEq, Clone)]
struct OptionCardProps {
    label: &'static str,
    selected: bool,
    #[prop_or(false)]
    suggested: bool,
    on_pick: Callback<()>,
}

#[function_component(OptionCard)]
fn option_card(props: &OptionCardProps) -> Html {
    let cb = props.on_pick.clone();
    let onclick = Callback::from(move |_| cb.emit(()));
    let border = if props.selected {
        "#ffffff"
    } else if props.suggested {
        "#8bc34a"
    } else {
        "#2a2a2a"
    };
    html! {
        <div class="option-card" onclick={onclick}
            style={format!("cursor:pointer; padding:16px; border:2px solid {border}; border-radius:10px; background:#161616; display:flex; justify-content:space-between; align-items:center;")}>
            <span>{ props.label }</span>
            if props.suggested && !props.selected {
                <span style="font-size:11px; color:#8bc34a;">{"Sugerat"}</span>
            }
        </div>
    }
}

/// Project type → timeline → scope, then hand off to the quote form.
#[function_component(QualificationView)]
pub fn qualification_view(props: &QualificationViewProps) -> Html {
    let ctx = use_context::<ConfigContext>();
    let config = ctx.map(|c| c.config).unwrap_or_default();
    // card clicked on this screen; later clicks are ignored
    let picked = use_state(|| None::<usize>);
    let state = &props.state;
    let answers = state.qualification;

    let is_selected = |i: usize, answered: bool| match *picked {
        Some(p) => p == i,
        None => answered,
    };

    let (question, cards): (&str, Vec<Html>) = match state.wizard.current {
        Screen::ProjectType => (
            "Ce tip de proiect aveți?",
            ProjectType::ALL
                .iter()
                .enumerate()
                .map(|(i, &p)| {
                    let state = state.clone();
                    let picked = picked.clone();
                    let on_pick = Callback::from(move |_| {
                        let state = state.clone();
                        pick_once(&picked, i, move || state.dispatch(ConfigAction::SelectProjectType(p)));
                    });
                    html! {
                        <OptionCard label={p.label()} selected={is_selected(i, answers.project_type == Some(p))} {on_pick} />
                    }
                })
                .collect(),
        ),
        Screen::Timeline => (
            "Când aveți nevoie de produse?",
            Timeline::ALL
                .iter()
                .enumerate()
                .map(|(i, &t)| {
                    let state = state.clone();
                    let picked = picked.clone();
                    let on_pick = Callback::from(move |_| {
                        let state = state.clone();
                        pick_once(&picked, i, move || state.dispatch(ConfigAction::SelectTimeline(t)));
                    });
                    html! {
                        <OptionCard label={t.label()} selected={is_selected(i, answers.timeline == Some(t))} {on_pick} />
                    }
                })
                .collect(),
        ),
        _ => {
            let suggested = Scope::suggest(state.cart.total_quantity());
            (
                "Care este dimensiunea proiectului?",
                Scope::ALL
                    .iter()
                    .enumerate()
                    .map(|(i, &s)| {
                        let state = state.clone();
                        let picked = picked.clone();
                        let config = config.clone();
                        let on_pick = Callback::from(move |_| {
                            if picked.is_some() {
                                return;
                            }
                            state.dispatch(ConfigAction::SelectScope(s));
                            let url = quote_url(
                                &config.form_action,
                                &state.cart,
                                &Qualification {
                                    scope: Some(s),
                                    ..state.qualification
                                },
                            );
                            pick_once(&picked, i, move || redirect(&url));
                        });
                        html! {
                            <OptionCard label={s.label()} selected={is_selected(i, answers.scope == Some(s))}
                                suggested={s == suggested} {on_pick} />
                        }
                    })
                    .collect(),
            )
        }
    };

    html! {
        <section id={format!("screen-{:?}", state.wizard.current).to_lowercase()}
            style="width:100%; max-width:560px; display:flex; flex-direction:column; gap:12px;">
            <h2 style="margin:8px 0; font-size:20px; text-align:center;">{ question }</h2>
            { for cards }
        </section>
    }
}

/// Marks card `i` as picked and runs `then` after the advance delay. Does
/// nothing once a card has been picked.
fn pick_once(picked: &UseStateHandle<Option<usize>>, i: usize, then: impl FnOnce() + 'static) {
    if picked.is_some() {
        return;
    }
    picked.set(Some(i));
    after_ms(ADVANCE_DELAY_MS, then);
}
