use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Frame,
    Configurator,
    Cart,
    ProjectType,
    Timeline,
    Scope,
    Email,
    Success,
}

/// Screens that make up the progress bar, in order.
pub const PROGRESS_SCREENS: [Screen; 2] = [Screen::Frame, Screen::Configurator];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Active,
    Completed,
}

/// Linear screen stack. `history` holds the screens we can go back to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wizard {
    pub current: Screen,
    pub history: Vec<Screen>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self {
            current: Screen::Frame,
            history: Vec::new(),
        }
    }
}

impl Wizard {
    pub fn go_to(&mut self, screen: Screen) {
        self.history.push(self.current);
        self.current = screen;
    }

    /// Returns false when there is nothing to go back to.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                self.current = prev;
                true
            }
            None => false,
        }
    }

    pub fn shows_back_button(&self) -> bool {
        !self.history.is_empty()
            && !matches!(self.current, Screen::Frame | Screen::Success | Screen::Email)
    }

    pub fn shows_header(&self) -> bool {
        !matches!(
            self.current,
            Screen::Configurator | Screen::Cart | Screen::Email | Screen::Success
        )
    }

    fn progress_index(&self) -> Option<usize> {
        PROGRESS_SCREENS.iter().position(|s| *s == self.current)
    }

    /// Fill of the progress bar, 0..=100.
    pub fn progress_percent(&self) -> f64 {
        match self.progress_index() {
            Some(i) => i as f64 / (PROGRESS_SCREENS.len() - 1) as f64 * 100.0,
            None => 0.0,
        }
    }

    pub fn step_status(&self, step: usize) -> StepStatus {
        match self.progress_index() {
            Some(i) if i == step => StepStatus::Active,
            Some(i) if step < i => StepStatus::Completed,
            _ => StepStatus::Pending,
        }
    }
}
