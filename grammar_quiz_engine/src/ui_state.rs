use crate::card::Feedback;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Correct,
    Wrong,
}

/// What to play after a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Effects {
    pub tone: Option<Tone>,
    pub confetti: bool,
}

/// Page-wide toggles. Created when the app starts and only changed through
/// the methods below, never stored anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    sound: bool,
    confetti: bool,
    menu_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sound: true,
            confetti: true,
            menu_open: false,
        }
    }
}

impl UiState {
    pub fn sound(&self) -> bool {
        self.sound
    }

    pub fn confetti(&self) -> bool {
        self.confetti
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_sound(&mut self) {
        self.sound = !self.sound;
    }

    pub fn toggle_confetti(&mut self) {
        self.confetti = !self.confetti;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn effects_for(&self, feedback: Feedback) -> Effects {
        let tone = match feedback {
            Feedback::Correct => Some(Tone::Correct),
            Feedback::Wrong => Some(Tone::Wrong),
            Feedback::Ignored => None,
        };
        Effects {
            tone: tone.filter(|_| self.sound),
            confetti: self.confetti && feedback == Feedback::Correct,
        }
    }
}
