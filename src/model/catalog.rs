//! Static product catalog: frame types, colors, opening directions and
//! dimension presets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfiguratorError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameId {
    Fixed,
    Classic,
    TiltTurn,
    DoorSimple,
    Slide,
}

impl FrameId {
    pub fn as_str(self) -> &'static str {
        match self {
            FrameId::Fixed => "fixed",
            FrameId::Classic => "classic",
            FrameId::TiltTurn => "tilt_turn",
            FrameId::DoorSimple => "door_simple",
            FrameId::Slide => "slide",
        }
    }

    /// Catalog entry for this id. Every id has one.
    pub fn frame(self) -> &'static FrameType {
        // FRAME_TYPES is listed in FrameId declaration order
        &FRAME_TYPES[self as usize]
    }
}

impl FromStr for FrameId {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FRAME_TYPES
            .iter()
            .map(|f| f.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ConfiguratorError::UnknownFrame(s.to_string()))
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A purchasable window/door style priced per square meter.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameType {
    pub id: FrameId,
    pub name: &'static str,
    /// EUR per m², glazed.
    pub price_with_glass: Decimal,
    /// EUR per m², frame only.
    pub price_no_glass: Decimal,
    pub benefit: &'static str,
    pub has_opening: bool,
    pub image: &'static str,
}

impl FrameType {
    pub fn unit_price(&self, has_glass: bool) -> Decimal {
        if has_glass {
            self.price_with_glass
        } else {
            self.price_no_glass
        }
    }
}

pub static FRAME_TYPES: [FrameType; 5] = [
    FrameType {
        id: FrameId::Fixed,
        name: "Ramă Fixă",
        price_with_glass: Decimal::from_parts(245, 0, 0, false, 0),
        price_no_glass: Decimal::from_parts(145, 0, 0, false, 0),
        benefit: "Fără deschidere",
        has_opening: false,
        image: "https://cdn.prod.website-files.com/6911a9ea752f8b71a4122002/6936a01229532b19ecc8c7e3_GEAM%20FIX.avif",
    },
    FrameType {
        id: FrameId::Classic,
        name: "Fereastră Clasică",
        price_with_glass: Decimal::from_parts(485, 0, 0, false, 0),
        price_no_glass: Decimal::from_parts(285, 0, 0, false, 0),
        benefit: "Deschidere laterală",
        has_opening: true,
        image: "https://cdn.prod.website-files.com/6911a9ea752f8b71a4122002/6936a013c2a9c19c34419641_GEAM%20CLASIC.avif",
    },
    FrameType {
        id: FrameId::TiltTurn,
        name: "Oscilobatantă",
        price_with_glass: Decimal::from_parts(515, 0, 0, false, 0),
        price_no_glass: Decimal::from_parts(315, 0, 0, false, 0),
        benefit: "Deschidere + ventilație",
        has_opening: true,
        image: "https://cdn.prod.website-files.com/6911a9ea752f8b71a4122002/6936a013b86458b58644ee1c_GEAM%20OSCILO.avif",
    },
    FrameType {
        id: FrameId::DoorSimple,
        name: "Ușă Intrare",
        price_with_glass: Decimal::from_parts(580, 0, 0, false, 0),
        price_no_glass: Decimal::from_parts(380, 0, 0, false, 0),
        benefit: "Clasică, sigură",
        has_opening: true,
        image: "https://cdn.prod.website-files.com/6911a9ea752f8b71a4122002/6936a0137aaa35d972df7ada_USA%20CLASICA.avif",
    },
    FrameType {
        id: FrameId::Slide,
        name: "Ușă Glisantă",
        price_with_glass: Decimal::from_parts(695, 0, 0, false, 0),
        price_no_glass: Decimal::from_parts(495, 0, 0, false, 0),
        benefit: "Deschidere panoramică",
        has_opening: true,
        image: "https://cdn.prod.website-files.com/6911a9ea752f8b71a4122002/6936a01110b71c03a7f7cfef_GEAM%20SLIDE.avif",
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorChoice {
    Alb,
    #[default]
    Antracit,
    Negru,
    StejarAuriu,
    Nuc,
    /// Free-text color entered by the customer.
    Custom,
}

impl ColorChoice {
    pub const ALL: [ColorChoice; 6] = [
        ColorChoice::Alb,
        ColorChoice::Antracit,
        ColorChoice::Negru,
        ColorChoice::StejarAuriu,
        ColorChoice::Nuc,
        ColorChoice::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColorChoice::Alb => "Alb",
            ColorChoice::Antracit => "Antracit",
            ColorChoice::Negru => "Negru",
            ColorChoice::StejarAuriu => "Stejar Auriu",
            ColorChoice::Nuc => "Nuc",
            ColorChoice::Custom => "Altă culoare",
        }
    }

    pub fn from_label(label: &str) -> Option<ColorChoice> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opening {
    #[default]
    Right,
    Left,
}

impl Opening {
    pub fn label(self) -> &'static str {
        match self {
            Opening::Right => "Dreapta",
            Opening::Left => "Stânga",
        }
    }
}

/// Common sizes offered as one-click presets, in centimeters (width, height).
pub const DIMENSION_PRESETS: [(u32, u32); 4] = [(60, 60), (80, 120), (100, 150), (120, 180)];
