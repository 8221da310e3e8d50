//! Optional qualification questionnaire shown before the quote hand-off.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    NewBuild,
    Renovation,
    Replacement,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [
        ProjectType::NewBuild,
        ProjectType::Renovation,
        ProjectType::Replacement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::NewBuild => "Construcție nouă",
            ProjectType::Renovation => "Renovare",
            ProjectType::Replacement => "Înlocuire ferestre",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeline {
    Urgent,
    OneToTwoMonths,
    ThreeToSixMonths,
    Exploring,
}

impl Timeline {
    pub const ALL: [Timeline; 4] = [
        Timeline::Urgent,
        Timeline::OneToTwoMonths,
        Timeline::ThreeToSixMonths,
        Timeline::Exploring,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Timeline::Urgent => "Urgent (< 2 săptămâni)",
            Timeline::OneToTwoMonths => "1-2 luni",
            Timeline::ThreeToSixMonths => "3-6 luni",
            Timeline::Exploring => "Doar explorez",
        }
    }

    pub fn from_label(label: &str) -> Option<Timeline> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    Small,
    Medium,
    Large,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::Small, Scope::Medium, Scope::Large];

    pub fn label(self) -> &'static str {
        match self {
            Scope::Small => "1-5 produse",
            Scope::Medium => "6-15 produse",
            Scope::Large => "Peste 15 produse",
        }
    }

    /// Scope pre-highlighted from the number of pieces in the cart.
    pub fn suggest(total_quantity: u32) -> Scope {
        if total_quantity > 15 {
            Scope::Large
        } else if total_quantity > 5 {
            Scope::Medium
        } else {
            Scope::Small
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualification {
    pub project_type: Option<ProjectType>,
    pub timeline: Option<Timeline>,
    pub scope: Option<Scope>,
}
