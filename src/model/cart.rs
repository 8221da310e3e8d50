//! Cart line items, totals and the quote summary text built from them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::{ColorChoice, FrameId, Opening};
use super::pricing::line_price;
use super::product::{Dimensions, ProductDraft};
use crate::error::ConfiguratorError;
use crate::util::format_amount;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub frame_id: FrameId,
    pub has_glass: bool,
    pub width: Decimal,
    pub height: Decimal,
    pub color: ColorChoice,
    pub custom_color: String,
    /// Only set for frame types that open.
    pub opening: Option<Opening>,
    pub quantity: u32,
    pub price: Decimal,
}

impl CartItem {
    /// Prices the draft. Sizes too large to price are rejected as an invalid area.
    pub fn from_draft(
        frame_id: FrameId,
        has_glass: bool,
        draft: &ProductDraft,
        dims: Dimensions,
    ) -> Result<Self, ConfiguratorError> {
        let frame = frame_id.frame();
        let price = line_price(frame, has_glass, dims.width, dims.height, draft.quantity).ok_or_else(|| {
            ConfiguratorError::InvalidDimension {
                field: "area",
                value: format!("{}x{}", dims.width, dims.height),
            }
        })?;
        Ok(Self {
            frame_id,
            has_glass,
            width: dims.width,
            height: dims.height,
            color: draft.color,
            custom_color: draft.custom_color.clone(),
            opening: frame.has_opening.then_some(draft.opening),
            quantity: draft.quantity,
            price,
        })
    }

    /// Recomputes the price from the current catalog. Fails for items that
    /// could not have been built from a valid draft.
    pub fn repriced(mut self) -> Result<Self, ConfiguratorError> {
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if value <= Decimal::ZERO {
                return Err(ConfiguratorError::InvalidDimension {
                    field,
                    value: value.to_string(),
                });
            }
        }
        if self.quantity == 0 {
            return Err(ConfiguratorError::InvalidDimension {
                field: "quantity",
                value: "0".into(),
            });
        }
        let frame = self.frame_id.frame();
        self.price = line_price(frame, self.has_glass, self.width, self.height, self.quantity)
            .ok_or_else(|| ConfiguratorError::InvalidDimension {
                field: "area",
                value: format!("{}x{}", self.width, self.height),
            })?;
        Ok(self)
    }

    /// Inverse of [`CartItem::from_draft`], used when editing.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            width_text: self.width.normalize().to_string(),
            height_text: self.height.normalize().to_string(),
            color: self.color,
            custom_color: self.custom_color.clone(),
            opening: self.opening.unwrap_or_default(),
            quantity: self.quantity,
        }
    }

    pub fn frame_name(&self) -> &'static str {
        self.frame_id.frame().name
    }

    pub fn glass_label(&self) -> &'static str {
        if self.has_glass { "Cu sticlă" } else { "Fără sticlă" }
    }

    pub fn display_color(&self) -> &str {
        if self.color == ColorChoice::Custom && !self.custom_color.trim().is_empty() {
            self.custom_color.trim()
        } else {
            self.color.label()
        }
    }

    /// `"120×180 cm · Cu sticlă · Antracit · Dreapta"` as shown in the cart list.
    pub fn details_line(&self) -> String {
        let mut s = format!(
            "{}×{} cm · {} · {}",
            self.width.normalize(),
            self.height.normalize(),
            self.glass_label(),
            self.display_color()
        );
        if let Some(o) = self.opening {
            s.push_str(" · ");
            s.push_str(o.label());
        }
        s
    }

    /// `"2x Oscilobatantă - Cu sticlă - Antracit - Dreapta - 120x180cm - €2224.80"`
    pub fn summary_line(&self) -> String {
        let opening = self
            .opening
            .map(|o| format!(" - {}", o.label()))
            .unwrap_or_default();
        format!(
            "{}x {} - {} - {}{} - {}x{}cm - €{}",
            self.quantity,
            self.frame_name(),
            self.glass_label(),
            self.display_color(),
            opening,
            self.width.normalize(),
            self.height.normalize(),
            format_amount(self.price)
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: CartItem) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Result<&CartItem, ConfiguratorError> {
        self.items.get(index).ok_or(ConfiguratorError::ItemOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    pub fn replace(&mut self, index: usize, item: CartItem) -> Result<(), ConfiguratorError> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(ConfiguratorError::ItemOutOfRange { index, len })?;
        *slot = item;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<CartItem, ConfiguratorError> {
        if index >= self.items.len() {
            return Err(ConfiguratorError::ItemOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Keeps the items that still price, at today's prices.
    pub fn repriced(self) -> Cart {
        let items = self
            .items
            .into_iter()
            .enumerate()
            .filter_map(|(i, item)| match item.repriced() {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!(target: "cart", "dropping item {i}: {e}");
                    None
                }
            })
            .collect();
        Cart { items }
    }

    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, i| acc.saturating_add(i.price))
    }

    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// All items as one line each, `" | "`-separated, for the quote form.
    pub fn summary(&self) -> String {
        self.items
            .iter()
            .map(CartItem::summary_line)
            .collect::<Vec<_>>()
            .join(" | ")
    }

    pub fn incentive(&self, threshold: Decimal) -> Incentive {
        let total = self.total();
        if total <= Decimal::ZERO {
            Incentive::None
        } else if total < threshold {
            Incentive::Remaining(threshold - total)
        } else {
            Incentive::Unlocked
        }
    }
}

/// Nudge shown under the cart total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Incentive {
    None,
    /// Amount still missing to reach the threshold.
    Remaining(Decimal),
    Unlocked,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn draft(w: &str, h: &str, qty: u32) -> ProductDraft {
        ProductDraft {
            width_text: w.into(),
            height_text: h.into(),
            quantity: qty,
            ..ProductDraft::default()
        }
    }

    fn item(frame: FrameId, glass: bool, w: &str, h: &str, qty: u32) -> CartItem {
        let dr = draft(w, h, qty);
        let dims = dr.dimensions().unwrap();
        CartItem::from_draft(frame, glass, &dr, dims).unwrap()
    }

    #[test]
    fn summary_line_format() {
        let it = item(FrameId::TiltTurn, true, "120", "180", 2);
        assert_eq!(
            it.summary_line(),
            "2x Oscilobatantă - Cu sticlă - Antracit - Dreapta - 120x180cm - €2224.80"
        );
    }

    #[test]
    fn fixed_frame_drops_opening() {
        let it = item(FrameId::Fixed, false, "60", "60", 1);
        assert_eq!(it.opening, None);
        assert_eq!(
            it.summary_line(),
            "1x Ramă Fixă - Fără sticlă - Antracit - 60x60cm - €52.20"
        );
        assert_eq!(it.details_line(), "60×60 cm · Fără sticlă · Antracit");
    }

    #[test]
    fn custom_color_text_wins_only_when_present() {
        let mut it = item(FrameId::Classic, true, "100", "100", 1);
        it.color = ColorChoice::Custom;
        assert_eq!(it.display_color(), "Altă culoare");
        it.custom_color = " RAL 7016 ".into();
        assert_eq!(it.display_color(), "RAL 7016");
    }

    #[test]
    fn totals_and_joined_summary() {
        let mut cart = Cart::default();
        cart.push(item(FrameId::Classic, true, "100", "100", 1));
        cart.push(item(FrameId::Slide, false, "200", "100", 3));
        assert_eq!(cart.total(), d("485") + d("2970"));
        assert_eq!(cart.total_quantity(), 4);
        assert_eq!(cart.summary().matches(" | ").count(), 1);
    }

    #[test]
    fn remove_and_replace_check_bounds() {
        let mut cart = Cart::default();
        cart.push(item(FrameId::Classic, true, "100", "100", 1));
        assert_eq!(
            cart.remove(3),
            Err(ConfiguratorError::ItemOutOfRange { index: 3, len: 1 })
        );
        let replacement = item(FrameId::DoorSimple, true, "90", "210", 1);
        cart.replace(0, replacement.clone()).unwrap();
        assert_eq!(cart.get(0).unwrap(), &replacement);
        assert!(cart.replace(1, replacement).is_err());
        cart.remove(0).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn incentive_thresholds() {
        let threshold = d("5000");
        let mut cart = Cart::default();
        assert_eq!(cart.incentive(threshold), Incentive::None);
        cart.push(item(FrameId::Classic, true, "100", "100", 1));
        assert_eq!(cart.incentive(threshold), Incentive::Remaining(d("4515")));
        cart.push(item(FrameId::Slide, true, "300", "240", 4));
        assert_eq!(cart.incentive(threshold), Incentive::Unlocked);
    }

    #[test]
    fn incentive_unlocks_at_exact_threshold() {
        let mut cart = Cart::default();
        // 1.3 × 2.1 × 245 = 668.85
        cart.push(item(FrameId::Fixed, true, "130", "210", 1));
        // 2.9 × 2.9 × 515 = 4331.15
        cart.push(item(FrameId::TiltTurn, true, "290", "290", 1));
        assert_eq!(cart.total(), d("5000"));
        assert_eq!(cart.incentive(d("5000")), Incentive::Unlocked);
        assert_eq!(cart.incentive(d("5000.01")), Incentive::Remaining(d("0.01")));
    }

    #[test]
    fn draft_too_large_to_price_is_rejected() {
        let dr = draft("1000000000000000", "1000000000000000", 1);
        let dims = dr.dimensions().unwrap();
        assert!(matches!(
            CartItem::from_draft(FrameId::Classic, true, &dr, dims),
            Err(ConfiguratorError::InvalidDimension { field: "area", .. })
        ));
    }

    #[test]
    fn editing_round_trips_through_draft() {
        let mut it = item(FrameId::Fixed, true, "80.5", "120", 2);
        it.custom_color = "x".into();
        let back = it.to_draft();
        assert_eq!(back.width_text, "80.5");
        assert_eq!(back.opening, Opening::Right);
        assert_eq!(back.quantity, 2);
    }
}
