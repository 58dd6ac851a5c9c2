use anyhow::Result;
use log::{debug, info, warn};

use crate::db::{Session, Store};
use crate::models::EntityKind;

use super::console::{Console, StatusKind};
use super::helpers::surface_error;
use super::input::is_input_closed;
use super::menu::{handler_for, prompt_menu, EntityChoice, MainChoice, ENTITY_MENU, MAIN_MENU};

const BANNER: &str = "Welcome to CLIbrary - Your Command Line Library Manager";
const FAREWELL: &str = "Thank you for using CLIbrary!";

/// Top-level controller: owns the store for the life of the process and the
/// console every prompt goes through.
pub struct App<C> {
    store: Store,
    console: C,
}

impl<C: Console> App<C> {
    pub fn new(store: Store, console: C) -> Self {
        Self { store, console }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Drive the main menu until the operator exits. A closed input stream is
    /// treated the same as choosing Exit.
    pub fn run(&mut self) -> Result<()> {
        match self.main_menu() {
            Err(err) if is_input_closed(&err) => {
                info!("input closed, leaving the main menu");
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> Result<()> {
        self.console.banner(BANNER)?;

        loop {
            match prompt_menu(&mut self.console, "Main Menu", &MAIN_MENU, MainChoice::label)? {
                MainChoice::Manage(kind) => self.entity_menu(kind)?,
                MainChoice::Exit => {
                    self.console.status(StatusKind::Warning, FAREWELL)?;
                    return Ok(());
                }
            }
        }
    }

    /// One visit to an entity menu. The session opened here serves every
    /// operation until the operator returns to the main menu.
    fn entity_menu(&mut self, kind: EntityKind) -> Result<()> {
        let mut session = match self.store.session() {
            Ok(session) => session,
            Err(err) => {
                self.console
                    .status(StatusKind::Error, &format!("Error opening database: {err}"))?;
                return Ok(());
            }
        };

        let result = self.run_operations(kind, &mut session);

        if let Err(err) = session.close() {
            warn!("failed to close {} session: {err}", kind.noun());
        }
        result
    }

    fn run_operations(&mut self, kind: EntityKind, session: &mut Session) -> Result<()> {
        let title = format!("{} Menu", kind.plural_title());

        loop {
            let choice = prompt_menu(&mut self.console, &title, &ENTITY_MENU, |choice| {
                choice.label(kind)
            })?;
            let operation = match choice {
                EntityChoice::Run(operation) => operation,
                EntityChoice::Return => return Ok(()),
            };

            let handler = handler_for(kind, operation);
            match handler(session, &mut self.console) {
                Ok(outcome) => debug!("{operation:?} {kind} finished: {outcome:?}"),
                Err(err) if is_input_closed(&err) => return Err(err),
                Err(err) => {
                    warn!("{operation:?} {kind} failed: {err:#}");
                    self.console
                        .status(StatusKind::Error, &surface_error(&err))?;
                }
            }
        }
    }
}
