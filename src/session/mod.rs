//! Interactive session
//!
//! The landing page gates entry to the main menu: a successful login opens
//! the menu loop, while registration, a failed login, exit or an invalid
//! choice all end the session. Inside the menu every action returns to the
//! prompt until the user picks exit. End of input anywhere ends the session.

use std::io::{BufRead, Write};

use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::credentials::CredentialStore;
use crate::error::{is_store_error, user_friendly_message};
use crate::exercise::{BreathingTimer, CalmingExercises, Pacer, SleepPacer};
use crate::journal::{MoodHistory, MoodJournal};
use crate::quotes::QuoteProvider;
use crate::store::{FileStore, RecordStore};
use crate::{Result, SereneError};

pub mod console;
pub mod state;
pub mod theme;

pub use console::Console;
pub use state::{LandingChoice, MenuChoice, SessionState, StateManager};
pub use theme::Theme;

/// One run of the program from landing page to exit
pub struct Session<R, W> {
    console: Console<R, W>,
    credentials: CredentialStore<Box<dyn RecordStore>>,
    journal: MoodJournal<Box<dyn RecordStore>>,
    quotes: QuoteProvider,
    exercises: CalmingExercises,
    breathing: BreathingTimer,
    pacer: Box<dyn Pacer>,
    theme: Theme,
    state: StateManager,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Session over the given stores with a default breathing timer, a
    /// blocking pacer and plain output
    pub fn new(
        console: Console<R, W>,
        users: impl RecordStore + 'static,
        moods: impl RecordStore + 'static,
        quotes: QuoteProvider,
    ) -> Self {
        Self {
            console,
            credentials: CredentialStore::new(Box::new(users)),
            journal: MoodJournal::new(Box::new(moods)),
            quotes,
            exercises: CalmingExercises::new(),
            breathing: BreathingTimer::default(),
            pacer: Box::new(SleepPacer::new(false)),
            theme: Theme::plain(),
            state: StateManager::new(),
        }
    }

    /// Session backed by the files and settings in `config`
    pub fn from_config(config: &AppConfig, console: Console<R, W>) -> Result<Self> {
        let session = Self::new(
            console,
            FileStore::new(config.users_path()),
            FileStore::new(config.moods_path()),
            QuoteProvider::from_config(config),
        )
        .with_breathing(BreathingTimer::from_config(config)?)
        .with_pacer(Box::new(SleepPacer::new(config.breathing.show_progress)))
        .with_theme(Theme::new(config.color));
        Ok(session)
    }

    pub fn with_breathing(mut self, breathing: BreathingTimer) -> Self {
        self.breathing = breathing;
        self
    }

    pub fn with_pacer(mut self, pacer: Box<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state.current_state()
    }

    /// Take back the console, e.g. to inspect captured output
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Drive the session until it reaches the terminal state
    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        while !self.state.should_quit() {
            match self.state.current_state() {
                SessionState::Landing => self.landing()?,
                SessionState::MainMenu => self.main_menu()?,
                SessionState::Exit => break,
            }
        }
        info!("session ended");
        Ok(())
    }

    fn landing(&mut self) -> Result<()> {
        self.show_landing_page()?;
        let Some(reply) = self.console.prompt_token("Choose an option: ")? else {
            self.state.quit();
            return Ok(());
        };

        match LandingChoice::parse(&reply) {
            LandingChoice::Login => self.login()?,
            LandingChoice::Register => {
                self.register()?;
                self.state.quit();
            }
            LandingChoice::Exit => {
                self.console.say("👋 Goodbye!")?;
                self.state.quit();
            }
            LandingChoice::Invalid => {
                let msg = self.theme.failure("❌ Invalid choice. Try again.");
                self.console.say(&msg)?;
                self.state.quit();
            }
        }
        Ok(())
    }

    /// A failed login ends the session rather than offering another try
    fn login(&mut self) -> Result<()> {
        let Some((username, password)) = self.read_credentials("Username: ", "Password: ")? else {
            self.state.quit();
            return Ok(());
        };

        match self.credentials.authenticate(&username, &password) {
            Ok(true) => {
                let msg = self.theme.success("✅ Login successful!");
                self.console.say(&msg)?;
                self.state.transition_to(SessionState::MainMenu);
            }
            Ok(false) => {
                let msg = self.theme.failure("❌ Login failed.");
                self.console.say(&msg)?;
                self.state.quit();
            }
            Err(e) => {
                self.report(&e)?;
                self.state.quit();
            }
        }
        Ok(())
    }

    fn register(&mut self) -> Result<()> {
        let Some((username, password)) =
            self.read_credentials("Choose Username: ", "Choose Password: ")?
        else {
            return Ok(());
        };

        match self.credentials.register(&username, &password) {
            Ok(true) => {
                let msg = self
                    .theme
                    .success("✅ Registered successfully. You can login now.");
                self.console.say(&msg)?;
            }
            Ok(false) => {
                let msg = self.theme.warning("⚠️ Username already exists. Try again.");
                self.console.say(&msg)?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn read_credentials(
        &mut self,
        user_prompt: &str,
        pass_prompt: &str,
    ) -> Result<Option<(String, String)>> {
        let Some(username) = self.console.prompt_token(user_prompt)? else {
            return Ok(None);
        };
        let Some(password) = self.console.prompt_token(pass_prompt)? else {
            return Ok(None);
        };
        Ok(Some((username, password)))
    }

    fn main_menu(&mut self) -> Result<()> {
        self.show_main_menu()?;
        let Some(reply) = self.console.prompt_token("Enter your choice: ")? else {
            self.state.quit();
            return Ok(());
        };

        match MenuChoice::parse(&reply) {
            MenuChoice::TrackMood => self.track_mood()?,
            MenuChoice::Quote => self.show_quote()?,
            MenuChoice::Exercise => self.exercises.show(self.console.out())?,
            MenuChoice::Breathing => {
                self.breathing
                    .run(self.console.out(), self.pacer.as_mut())?;
            }
            MenuChoice::Stats => self.show_stats()?,
            MenuChoice::AddQuote => self.add_quote()?,
            MenuChoice::Exit => {
                self.console
                    .say("Goodbye! Take care of your mental health.")?;
                self.state.quit();
            }
            MenuChoice::Invalid => {
                warn!(input = %reply, "invalid menu choice");
                let msg = self.theme.failure("Invalid choice. Please try again.");
                self.console.say(&msg)?;
            }
        }
        Ok(())
    }

    /// Log a mood, then replay the journal
    fn track_mood(&mut self) -> Result<()> {
        let Some(text) = self.console.prompt("How are you feeling today? ")? else {
            self.state.quit();
            return Ok(());
        };

        match self.journal.log_mood(&text) {
            Ok(_) => {
                let msg = self.theme.success("Mood logged successfully!");
                self.console.say(&msg)?;
            }
            Err(e) => self.report(&e)?,
        }

        self.show_history()
    }

    fn show_history(&mut self) -> Result<()> {
        match self.journal.history() {
            Ok(MoodHistory::NoHistory) => {
                let msg = self.theme.warning("No mood history found.");
                self.console.say(&msg)?;
            }
            Ok(MoodHistory::Entries(lines)) => {
                self.console.blank()?;
                let heading = self.theme.heading("Mood History:");
                self.console.say(&heading)?;
                for line in &lines {
                    self.console.say(line)?;
                }
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn show_stats(&mut self) -> Result<()> {
        let stats = match self.journal.history() {
            Ok(history) => history.stats(),
            Err(e) => return self.report(&e),
        };
        let Some((top, top_count)) = stats.most_common() else {
            let msg = self.theme.warning("No mood history found.");
            return self.console.say(&msg);
        };

        self.console.blank()?;
        let heading = self.theme.heading("Mood Statistics:");
        self.console.say(&heading)?;
        self.console
            .say(&format!("Total entries: {}", stats.total))?;
        for (mood, count) in stats.ranked() {
            self.console.say(&format!("  {}: {}", mood, count))?;
        }
        self.console
            .say(&format!("Most common mood: {} ({})", top, top_count))
    }

    fn add_quote(&mut self) -> Result<()> {
        let Some(text) = self.console.prompt("Write your quote: ")? else {
            self.state.quit();
            return Ok(());
        };

        match self.quotes.add_quote(&text) {
            Ok(()) => {
                let msg = self.theme.success("Quote saved!");
                self.console.say(&msg)
            }
            Err(e) => self.report(&e),
        }
    }

    fn show_quote(&mut self) -> Result<()> {
        let quote = self.quotes.random_quote();
        self.console.say("Here's a motivational quote for you:")?;
        self.console.say(&quote)
    }

    /// Tell the user an operation failed; the session carries on
    fn report(&mut self, err: &SereneError) -> Result<()> {
        match err {
            _ if is_store_error(err) => warn!(error = %err, "store unavailable"),
            SereneError::InvalidInput(_) => warn!(error = %err, "input rejected"),
            _ => error!(error = %err, "operation failed"),
        }
        let msg = self.theme.failure(&user_friendly_message(err));
        self.console.say(&msg)
    }

    fn show_landing_page(&mut self) -> Result<()> {
        let title = self.theme.heading("   🌿 Serene 🌿");
        self.console.say("==============================")?;
        self.console.say(&title)?;
        self.console.say("==============================")?;
        self.console.say("  1. Login")?;
        self.console.say("  2. Register")?;
        self.console.say("  3. Exit")?;
        self.console.say("------------------------------")
    }

    fn show_main_menu(&mut self) -> Result<()> {
        self.console.blank()?;
        let heading = self.theme.heading("Menu:");
        self.console.say(&heading)?;
        self.console.say("1. Track Mood")?;
        self.console.say("2. Get a Motivational Quote")?;
        self.console.say("3. Do a Calming Exercise")?;
        self.console.say("4. Guided Breathing Exercise")?;
        self.console.say("5. Exit")?;
        self.console.say("6. Mood Statistics")?;
        self.console.say("7. Add Your Own Quote")
    }
}
