//! Application state and key handling.

use crate::config::Settings;
use crate::input::{digit_cell, move_cursor};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe::{Coord, DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, Game, TurnOutcome};
use tracing::{debug, info, instrument};

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep reading keys.
    Continue,
    /// Leave the application.
    Quit,
}

/// One of the two name fields on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    /// Player one (X).
    One,
    /// Player two (O).
    Two,
}

impl NameField {
    /// Name used when the field is left blank.
    pub fn placeholder(self) -> &'static str {
        match self {
            NameField::One => DEFAULT_PLAYER_ONE,
            NameField::Two => DEFAULT_PLAYER_TWO,
        }
    }

    /// Field label.
    pub fn label(self) -> &'static str {
        match self {
            NameField::One => "Player One:",
            NameField::Two => "Player Two:",
        }
    }

    fn toggle(self) -> Self {
        match self {
            NameField::One => NameField::Two,
            NameField::Two => NameField::One,
        }
    }
}

/// Home-screen form collecting player names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeForm {
    one: String,
    two: String,
    focus: NameField,
}

impl HomeForm {
    fn new(one: String, two: String) -> Self {
        Self {
            one,
            two,
            focus: NameField::One,
        }
    }

    /// Current text of `field`.
    pub fn value(&self, field: NameField) -> &str {
        match field {
            NameField::One => &self.one,
            NameField::Two => &self.two,
        }
    }

    /// Field that receives typed characters.
    pub fn focus(&self) -> NameField {
        self.focus
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            NameField::One => &mut self.one,
            NameField::Two => &mut self.two,
        }
    }

    /// Name to apply for `field`: its text, or the placeholder when blank.
    fn resolved(&self, field: NameField) -> &str {
        let value = self.value(field).trim();
        if value.is_empty() {
            field.placeholder()
        } else {
            value
        }
    }
}

/// Choice in the end-of-game dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndChoice {
    /// Reset and play again with the same names.
    PlayAgain,
    /// Reset and go back to the name form.
    HomeScreen,
}

impl EndChoice {
    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            EndChoice::PlayAgain => "Play Again",
            EndChoice::HomeScreen => "Return to Home Screen",
        }
    }

    fn toggle(self) -> Self {
        match self {
            EndChoice::PlayAgain => EndChoice::HomeScreen,
            EndChoice::HomeScreen => EndChoice::PlayAgain,
        }
    }
}

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Name entry dialog.
    Home(HomeForm),
    /// Board is live.
    Playing,
    /// Result dialog over the final board.
    GameOver {
        /// Winner or tie announcement.
        result: String,
        /// Highlighted button.
        choice: EndChoice,
    },
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    screen: Screen,
    cursor: Coord,
    message: Option<String>,
}

impl App {
    /// Creates the application on the home screen.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        Self {
            game: Game::new(),
            screen: Screen::Home(HomeForm::new(
                settings.player_one().clone(),
                settings.player_two().clone(),
            )),
            cursor: Coord::ALL[4],
            message: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Gets the message line (invalid move notices).
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("Interrupted");
            return Control::Quit;
        }

        match self.screen {
            Screen::Home(_) => self.handle_home_key(key.code),
            Screen::Playing => self.handle_playing_key(key.code),
            Screen::GameOver { .. } => self.handle_game_over_key(key.code),
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Enter => self.start_game(),
            code => {
                if let Screen::Home(form) = &mut self.screen {
                    match code {
                        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                            form.focus = form.focus.toggle();
                        }
                        KeyCode::Backspace => {
                            form.focused_mut().pop();
                        }
                        KeyCode::Char(c) => form.focused_mut().push(c),
                        _ => {}
                    }
                }
            }
        }

        Control::Continue
    }

    fn handle_game_over_key(&mut self, code: KeyCode) -> Control {
        let Screen::GameOver { choice, .. } = &mut self.screen else {
            return Control::Continue;
        };

        match code {
            KeyCode::Esc | KeyCode::Char('q') => return Control::Quit,
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                *choice = choice.toggle();
            }
            KeyCode::Enter => {
                let choice = *choice;
                self.finish_dialog(choice);
            }
            _ => {}
        }

        Control::Continue
    }

    fn handle_playing_key(&mut self, code: KeyCode) -> Control {
        self.message = None;

        match code {
            KeyCode::Esc | KeyCode::Char('q') => return Control::Quit,
            KeyCode::Char('r') => {
                info!("Board reset");
                self.game.reset();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            code => {
                if let Some(coord) = digit_cell(code) {
                    self.cursor = coord;
                    self.play(coord);
                } else {
                    self.cursor = move_cursor(self.cursor, code);
                }
            }
        }

        Control::Continue
    }

    /// Applies the home-screen names and shows the board.
    fn start_game(&mut self) {
        if let Screen::Home(form) = &self.screen {
            let one = form.resolved(NameField::One).to_string();
            let two = form.resolved(NameField::Two).to_string();
            self.game.set_player_names(&one, &two);
            info!(%one, %two, "Game started");
        }
        self.message = None;
        self.screen = Screen::Playing;
    }

    fn play(&mut self, coord: Coord) {
        let outcome = self.game.play_turn(coord);
        debug!(%coord, ?outcome, "Turn played");

        match outcome {
            TurnOutcome::Continue => {}
            TurnOutcome::Invalid | TurnOutcome::Finished => {
                self.message = self.game.announcement(outcome);
            }
            TurnOutcome::Win | TurnOutcome::Tie => {
                self.screen = Screen::GameOver {
                    result: self.game.announcement(outcome).unwrap_or_default(),
                    choice: EndChoice::PlayAgain,
                };
            }
        }
    }

    fn finish_dialog(&mut self, choice: EndChoice) {
        debug!(?choice, "End-of-game choice");
        self.game.reset();
        self.message = None;
        self.screen = match choice {
            EndChoice::PlayAgain => Screen::Playing,
            EndChoice::HomeScreen => {
                let [one, two] = self.game.players();
                Screen::Home(HomeForm::new(one.name().clone(), two.name().clone()))
            }
        };
    }
}
