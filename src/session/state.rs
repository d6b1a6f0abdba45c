//! Session state management
//!
//! Tracks where the session is (landing page, main menu, finished) and
//! turns raw console replies into menu choices.

use tracing::debug;

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Login / register / exit page
    #[default]
    Landing,
    /// Post-login menu loop
    MainMenu,
    /// Terminal state
    Exit,
}

/// Choices offered on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingChoice {
    Login,
    Register,
    Exit,
    Invalid,
}

impl LandingChoice {
    /// Accepts the option number or its name, case-insensitively
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "login" => LandingChoice::Login,
            "2" | "register" => LandingChoice::Register,
            "3" | "exit" => LandingChoice::Exit,
            _ => LandingChoice::Invalid,
        }
    }
}

/// Choices offered in the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    TrackMood,
    Quote,
    Exercise,
    Breathing,
    Exit,
    Stats,
    AddQuote,
    Invalid,
}

impl MenuChoice {
    /// Accepts the option number or a one-word name, case-insensitively
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "mood" => MenuChoice::TrackMood,
            "2" | "quote" => MenuChoice::Quote,
            "3" | "exercise" => MenuChoice::Exercise,
            "4" | "breathing" => MenuChoice::Breathing,
            "5" | "exit" => MenuChoice::Exit,
            "6" | "stats" => MenuChoice::Stats,
            "7" | "add" => MenuChoice::AddQuote,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Session state manager
#[derive(Debug, Default)]
pub struct StateManager {
    current_state: SessionState,
}

impl StateManager {
    /// Create a new state manager starting at the landing page
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_state(&self) -> SessionState {
        self.current_state
    }

    /// Check if the session has finished
    pub fn should_quit(&self) -> bool {
        self.current_state == SessionState::Exit
    }

    /// Move to the terminal state
    pub fn quit(&mut self) {
        self.transition_to(SessionState::Exit);
    }

    /// Transition to a new state. Nothing leaves `Exit`, and the main menu
    /// is only reachable from the landing page.
    pub fn transition_to(&mut self, new_state: SessionState) {
        let allowed = match (self.current_state, new_state) {
            (SessionState::Exit, _) => false,
            (SessionState::MainMenu, SessionState::Landing) => false,
            (from, to) => from != to,
        };
        if allowed {
            debug!(from = ?self.current_state, to = ?new_state, "session transition");
            self.current_state = new_state;
        }
    }
}
