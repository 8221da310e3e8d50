use std::rc::Rc;

use super::{
    cart_view::CartView, configurator_view::ConfiguratorView, email_capture::EmailCapture,
    frame_grid::FrameGrid, header::Header, qualification_view::QualificationView,
    success_panel::SuccessPanel,
};
use crate::config::AppConfig;
use crate::model::{ConfiguratorState, Screen};
use crate::persist;
use yew::prelude::*;

// Page settings for any component that needs them (threshold, form action, ...)
#[derive(Clone, PartialEq)]
pub struct ConfigContext {
    pub config: Rc<AppConfig>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: Rc<AppConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = {
        let config = props.config.clone();
        use_reducer(move || {
            if !config.persist_cart {
                return ConfiguratorState::default();
            }
            match persist::load_cart(&config.storage_key) {
                Ok(Some(cart)) => {
                    log::info!(target: "cart", "restored {} item(s)", cart.len());
                    ConfiguratorState::with_cart(cart)
                }
                Ok(None) => ConfiguratorState::default(),
                Err(e) => {
                    log::warn!(target: "cart", "could not restore cart: {e}");
                    ConfiguratorState::default()
                }
            }
        })
    };

    // Persist cart changes
    {
        let config = props.config.clone();
        use_effect_with(state.cart.clone(), move |cart| {
            if config.persist_cart {
                if let Err(e) = persist::save_cart(&config.storage_key, cart) {
                    log::warn!(target: "cart", "could not save cart: {e}");
                }
            }
            || ()
        });
    }

    // Log screen changes
    use_effect_with(state.wizard.current, move |screen| {
        log::debug!(target: "ui", "screen: {screen:?}");
        || ()
    });

    let content = match state.wizard.current {
        Screen::Frame => html! { <FrameGrid state={state.clone()} /> },
        Screen::Configurator => html! { <ConfiguratorView state={state.clone()} /> },
        Screen::Cart => html! { <CartView state={state.clone()} /> },
        screen @ (Screen::ProjectType | Screen::Timeline | Screen::Scope) => {
            // keyed so each question starts without a picked card
            html! { <QualificationView key={format!("{screen:?}")} state={state.clone()} /> }
        }
        Screen::Email => html! { <EmailCapture state={state.clone()} /> },
        Screen::Success => html! { <SuccessPanel state={state.clone()} /> },
    };

    let ctx = ConfigContext {
        config: props.config.clone(),
    };

    html! {
        <ContextProvider<ConfigContext> context={ctx}>
            <div id="configurator" style="min-height:100vh; background:#0e0e0e; color:#f5f5f5; font-family:Geist, sans-serif; display:flex; flex-direction:column;">
                <Header state={state.clone()} />
                <main style="flex:1; display:flex; flex-direction:column; align-items:center; padding:16px;">{ content }</main>
            </div>
        </ContextProvider<ConfigContext>>
    }
}
