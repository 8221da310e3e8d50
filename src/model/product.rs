use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::{ColorChoice, Opening};
use super::pricing::parse_dimension;
use crate::error::ConfiguratorError;

/// Validated width/height pair in centimeters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: Decimal,
    pub height: Decimal,
}

/// The product currently open in the configurator. Dimensions are kept as the
/// raw input text so partially typed numbers survive re-renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub width_text: String,
    pub height_text: String,
    pub color: ColorChoice,
    pub custom_color: String,
    pub opening: Opening,
    pub quantity: u32,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            width_text: String::new(),
            height_text: String::new(),
            color: ColorChoice::default(),
            custom_color: String::new(),
            opening: Opening::default(),
            quantity: 1,
        }
    }
}

impl ProductDraft {
    pub fn dimensions(&self) -> Result<Dimensions, ConfiguratorError> {
        Ok(Dimensions {
            width: parse_dimension("width", &self.width_text)?,
            height: parse_dimension("height", &self.height_text)?,
        })
    }

    pub fn set_preset(&mut self, width: u32, height: u32) {
        self.width_text = width.to_string();
        self.height_text = height.to_string();
    }

    /// Preset buttons stay highlighted only while the typed size equals them.
    pub fn matches_preset(&self, width: u32, height: u32) -> bool {
        self.dimensions()
            .is_ok_and(|d| d.width == Decimal::from(width) && d.height == Decimal::from(height))
    }

    pub fn adjust_quantity(&mut self, delta: i32) {
        let next = i64::from(self.quantity) + i64::from(delta);
        self.quantity = u32::try_from(next.max(1)).unwrap_or(u32::MAX);
    }

    pub fn shows_custom_color(&self) -> bool {
        self.color == ColorChoice::Custom
    }
}
