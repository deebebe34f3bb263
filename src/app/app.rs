#[cfg(test)]
#[path = "app_test.rs"]
mod tests;

use std::io;

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::{Context, Result};
use ratatui::{
    Terminal,
    layout::{Constraint, Direction, Layout},
    prelude::{Backend, CrosstermBackend},
    widgets::{Paragraph, Wrap},
};

use crate::{
    config::{Configuration, constants::*},
    models::{AppError, Event, Goal, MenuAction, Registry},
    storage::ArcStore,
};

use super::services::EventService;
use super::ui::{
    BrowseScreen, Choice, Dim, InputScreen, MenuScreen, MultiSelectScreen, input, utils,
};

pub struct App<'a> {
    events: &'a mut EventService,

    store: ArcStore,
    registry: Registry,

    /// One-shot status line shown above the menu. Set by the most recent
    /// action, consumed when the next action is dispatched.
    feedback: Option<String>,

    menu: MenuScreen,
    input: InputScreen<'a>,
    multi_select: MultiSelectScreen,
    browse: BrowseScreen,

    /// Which menu action is waiting on the multi-select popup.
    pending_selection: Option<MenuAction>,
}

impl<'a> App<'a> {
    pub fn new(store: ArcStore, registry: Registry, events: &'a mut EventService) -> App<'a> {
        let welcome = Configuration::instance()
            .general
            .welcome_message
            .as_deref()
            .unwrap_or(WELCOME_MESSAGE)
            .to_string();

        App {
            events,
            store,
            registry,
            feedback: Some(welcome),
            menu: MenuScreen::new(),
            input: InputScreen::default(),
            multi_select: MultiSelectScreen::default(),
            browse: BrowseScreen::default(),
            pending_selection: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();

        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

        let term_backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(term_backend)?;
        let result = self.start_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        )?;

        terminal.show_cursor()?;
        result
    }

    async fn start_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.render(terminal)?;
            let event = self.events.next().await;
            if self.handle_event(event).await? {
                return Ok(());
            }
        }
    }

    /// Apply one event. Returns true when the user chose to exit.
    async fn handle_event(&mut self, event: Event) -> Result<bool> {
        if let Event::KeyboardCtrlC = event {
            return Err(AppError::PromptCancelled.into());
        }

        if self.input.showing() {
            if let Event::KeyboardEnter = event {
                let text = self.input.close().unwrap_or_default();
                self.submit_add(&text).await?;
            } else {
                self.input.handle_key_event(&event);
            }
            return Ok(false);
        }

        if self.multi_select.showing() {
            if let Some(selected) = self.multi_select.handle_key_event(&event) {
                self.handle_selection(selected).await?;
            }
            return Ok(false);
        }

        if self.browse.showing() {
            self.browse.handle_key_event(&event);
            return Ok(false);
        }

        if let Some(action) = self.menu.handle_key_event(&event) {
            // Dispatching consumes the pending feedback; the handler sets
            // the next one.
            self.feedback = None;
            return Ok(self.dispatch(action));
        }
        Ok(false)
    }

    fn dispatch(&mut self, action: MenuAction) -> bool {
        log::debug!("dispatching menu action {:?}", action);
        match action {
            MenuAction::AddGoal => self.input.open(),
            MenuAction::ListGoals => self.open_toggle_select(),
            MenuAction::CompletedGoals => self.open_completed(),
            MenuAction::PendingGoals => self.open_pending(),
            MenuAction::DeleteGoals => self.open_delete_select(),
            MenuAction::Exit => return true,
        }
        false
    }

    async fn submit_add(&mut self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            self.feedback = Some(MSG_EMPTY_GOAL.to_string());
        } else {
            self.registry.push(Goal::new(text));
            self.feedback = Some(MSG_GOAL_ADDED.to_string());
        }
        // The add action always persists, even when validation rejected
        // the input and the registry is unchanged.
        self.save().await
    }

    fn open_toggle_select(&mut self) {
        if self.registry.is_empty() {
            self.feedback = Some(MSG_NO_GOALS.to_string());
            return;
        }

        let choices = self
            .registry
            .goals()
            .iter()
            .map(|g| Choice::new(g.description()).with_done(g.completed()))
            .collect();
        self.multi_select.open(" Goals ", choices);
        self.pending_selection = Some(MenuAction::ListGoals);
    }

    fn open_delete_select(&mut self) {
        if self.registry.is_empty() {
            self.feedback = Some(MSG_NO_GOALS.to_string());
            return;
        }

        let choices = self
            .registry
            .goals()
            .iter()
            .map(|g| Choice::new(g.description()))
            .collect();
        self.multi_select.open(" Delete Goals ", choices);
        self.pending_selection = Some(MenuAction::DeleteGoals);
    }

    fn open_completed(&mut self) {
        if self.registry.is_empty() {
            self.feedback = Some(MSG_NO_GOALS.to_string());
            return;
        }

        let completed = self
            .registry
            .completed()
            .iter()
            .map(|g| g.description().to_string())
            .collect::<Vec<_>>();
        if completed.is_empty() {
            self.feedback = Some(MSG_NO_COMPLETED.to_string());
            return;
        }

        self.browse
            .open(format!(" Completed Goals ({}) ", completed.len()), completed);
    }

    fn open_pending(&mut self) {
        if self.registry.is_empty() {
            self.feedback = Some(MSG_NO_GOALS.to_string());
            return;
        }

        let pending = self
            .registry
            .pending()
            .iter()
            .map(|g| g.description().to_string())
            .collect::<Vec<_>>();
        if pending.is_empty() {
            self.feedback = Some(MSG_NO_PENDING.to_string());
            return;
        }

        self.browse
            .open(format!(" Pending Goals ({}) ", pending.len()), pending);
    }

    async fn handle_selection(&mut self, selected: Vec<String>) -> Result<()> {
        match self.pending_selection.take() {
            Some(MenuAction::ListGoals) => self.submit_toggle(&selected),
            Some(MenuAction::DeleteGoals) => self.submit_delete(&selected).await?,
            _ => {}
        }
        Ok(())
    }

    fn submit_toggle(&mut self, selected: &[String]) {
        // The reset runs before the empty-selection check; submitting
        // nothing therefore leaves every goal pending.
        self.registry.reset_completions();

        if selected.is_empty() {
            self.feedback = Some(MSG_NONE_SELECTED.to_string());
            return;
        }

        let count = self.registry.complete_matching(selected);
        log::debug!("marked {} goal(s) completed", count);
        // Completion changes stay in memory; the next saving action
        // writes them out.
        self.feedback = Some(MSG_MARKED_COMPLETED.to_string());
    }

    async fn submit_delete(&mut self, selected: &[String]) -> Result<()> {
        if selected.is_empty() {
            self.feedback = Some(MSG_NONE_SELECTED_DELETE.to_string());
            return Ok(());
        }

        let removed = self.registry.remove_matching(selected);
        self.save().await?;
        log::info!("deleted {} goal(s)", removed);
        self.feedback = Some(MSG_GOALS_DELETED.to_string());
        Ok(())
    }

    async fn save(&self) -> Result<()> {
        self.store
            .save(self.registry.goals())
            .await
            .wrap_err("saving goals")
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Length(2), Constraint::Min(1)])
                .split(f.area());

            if let Some(feedback) = &self.feedback {
                f.render_widget(
                    Paragraph::new(feedback.as_str()).wrap(Wrap { trim: true }),
                    layout[0],
                );
            }

            self.menu.render(f, layout[1]);

            if self.input.showing() || self.multi_select.showing() || self.browse.showing() {
                f.dim_bg();
            }

            let input_width = (f.area().width as f32 * 0.6).ceil() as u16;
            self.input.render(f, input::build_area(f.area(), input_width));
            self.multi_select.render(f, utils::popup_area(f.area(), 60, 60));
            self.browse.render(f, utils::popup_area(f.area(), 60, 60));
        })?;
        Ok(())
    }
}
