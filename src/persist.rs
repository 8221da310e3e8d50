// Cart snapshot kept in localStorage between visits

use serde::{Deserialize, Serialize};
use web_sys::Storage;

use crate::error::ConfiguratorError;
use crate::model::Cart;

const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct CartSnapshot {
    version: u32,
    cart: Cart,
}

pub fn encode_cart(cart: &Cart) -> Result<String, ConfiguratorError> {
    serde_json::to_string(&CartSnapshot {
        version: SNAPSHOT_VERSION,
        cart: cart.clone(),
    })
    .map_err(|e| ConfiguratorError::Storage(e.to_string()))
}

/// `Ok(None)` for snapshots written by another version; those are dropped.
/// Prices are recomputed and items that no longer make sense are left out.
pub fn decode_cart(raw: &str) -> Result<Option<Cart>, ConfiguratorError> {
    let snap: CartSnapshot =
        serde_json::from_str(raw).map_err(|e| ConfiguratorError::Storage(e.to_string()))?;
    Ok((snap.version == SNAPSHOT_VERSION).then(|| snap.cart.repriced()))
}

fn storage() -> Result<Storage, ConfiguratorError> {
    web_sys::window()
        .ok_or_else(|| ConfiguratorError::Storage("no window".into()))?
        .local_storage()
        .map_err(|e| ConfiguratorError::Storage(format!("{e:?}")))?
        .ok_or_else(|| ConfiguratorError::Storage("localStorage disabled".into()))
}

pub fn load_cart(key: &str) -> Result<Option<Cart>, ConfiguratorError> {
    let Some(raw) = storage()?
        .get_item(key)
        .map_err(|e| ConfiguratorError::Storage(format!("{e:?}")))?
    else {
        return Ok(None);
    };
    decode_cart(&raw)
}

pub fn save_cart(key: &str, cart: &Cart) -> Result<(), ConfiguratorError> {
    let store = storage()?;
    let res = if cart.is_empty() {
        store.remove_item(key)
    } else {
        store.set_item(key, &encode_cart(cart)?)
    };
    res.map_err(|e| ConfiguratorError::Storage(format!("{e:?}")))
}
