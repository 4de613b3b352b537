//! Menu loop: rendering, choice validation, session gating, dispatch.
//!
//! [`MenuController`] is the single catch point for domain errors: anything
//! raised by a dispatched operation is printed as one line and the loop
//! continues. Only IO errors (the input stream closing) escape to `main`.

use std::io::{BufRead, Write};

use crate::config::EnginedeskConfig;
use crate::error::{DeskError, Result};
use crate::fleet::{EngineRegistry, Job};
use crate::prompt::Prompter;
use crate::session::Session;
use crate::users::{User, UserDirectory};

/// The eight menu choices, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    RegisterUser,
    Login,
    AddEngine,
    DeleteEngine,
    UpdateEngineHours,
    AddJob,
    CompleteJob,
    Exit,
}

impl Choice {
    /// Maps a menu number in [1,8] to its choice; `None` when out of range.
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Choice::RegisterUser),
            2 => Some(Choice::Login),
            3 => Some(Choice::AddEngine),
            4 => Some(Choice::DeleteEngine),
            5 => Some(Choice::UpdateEngineHours),
            6 => Some(Choice::AddJob),
            7 => Some(Choice::CompleteJob),
            8 => Some(Choice::Exit),
            _ => None,
        }
    }

    /// Choices 3-7 mutate engine or job state and require a login.
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            Choice::AddEngine
                | Choice::DeleteEngine
                | Choice::UpdateEngineHours
                | Choice::AddJob
                | Choice::CompleteJob
        )
    }
}

/// Whether the loop keeps going after a dispatched choice.
enum Flow {
    Continue,
    Exit,
}

/// Owns the collections, the session, and the interactive prompter.
pub struct MenuController<R, W> {
    prompter: Prompter<R, W>,
    registry: EngineRegistry,
    users: UserDirectory,
    session: Session,
    company_name: String,
    clear_lines: u16,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    pub fn new(prompter: Prompter<R, W>, config: &EnginedeskConfig) -> Self {
        Self {
            prompter,
            registry: EngineRegistry::new(),
            users: UserDirectory::new(),
            session: Session::new(),
            company_name: config.company_name.clone(),
            clear_lines: config.clear_lines,
        }
    }

    pub fn registry(&self) -> &EngineRegistry {
        &self.registry
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the console session to completion: launch screen, then the menu
    /// loop until the exit choice or the input stream closes.
    pub fn run(&mut self) -> Result<()> {
        self.launch_screen()?;

        loop {
            self.render_menu()?;
            let choice = self.read_choice()?;
            match self.dispatch(choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                // The menu boundary: domain errors become one printed line.
                Err(err @ DeskError::Io(_)) => return Err(err),
                Err(err) => {
                    let line = self.prompter.theme().error.apply_to(err.to_string()).to_string();
                    self.prompter.say(&line)?;
                }
            }
        }

        Ok(())
    }

    fn launch_screen(&mut self) -> Result<()> {
        self.clear_screen()?;
        let banner = self
            .prompter
            .theme()
            .banner
            .apply_to(format!("\tWelcome to {} Engine Management", self.company_name))
            .to_string();
        self.prompter.say(&banner)?;
        self.prompter.say("\t\tPress enter to continue")?;
        self.prompter.pause()?;
        self.clear_screen()?;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.prompter.blank_lines(self.clear_lines)
    }

    fn render_menu(&mut self) -> Result<()> {
        const MENU: [&str; 11] = [
            " ______________________________________________",
            "|                  User menu                   |",
            "|  1. Register User                            |",
            "|  2. Login                                    |",
            "|  3. Add Engine                               |",
            "|  4. Delete Engine                            |",
            "|  5. Update Engine Operating Hours            |",
            "|  6. Add Job                                  |",
            "|  7. Complete Job                             |",
            "|  8. Exit                                     |",
            "|______________________________________________|",
        ];
        for line in MENU {
            self.prompter.say(line)?;
        }
        Ok(())
    }

    /// Reads a menu choice, re-prompting indefinitely (re-rendered menu plus
    /// warning) until a number in [1,8] arrives.
    fn read_choice(&mut self) -> Result<Choice> {
        loop {
            let n = self.prompter.number("Enter menu choice (1-8)")?;
            if let Some(choice) = Choice::from_number(n) {
                return Ok(choice);
            }
            self.render_menu()?;
            let warning = self
                .prompter
                .theme()
                .warn
                .apply_to("Sorry that is not a valid menu choice!")
                .to_string();
            self.prompter.say(&warning)?;
        }
    }

    fn dispatch(&mut self, choice: Choice) -> Result<Flow> {
        if choice.requires_login() && !self.session.is_authenticated() {
            // Informational only: gated choices raise nothing.
            self.prompter.say("Please login first.")?;
            return Ok(Flow::Continue);
        }

        match choice {
            Choice::RegisterUser => self.register_user()?,
            Choice::Login => self.login()?,
            Choice::AddEngine => self.add_engine()?,
            Choice::DeleteEngine => self.delete_engine()?,
            Choice::UpdateEngineHours => self.update_engine_hours()?,
            Choice::AddJob => self.add_job()?,
            Choice::CompleteJob => self.complete_job()?,
            Choice::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn register_user(&mut self) -> Result<()> {
        let user_id = self.prompter.token("Enter user id")?;
        let password = self.prompter.password()?;
        let first_name = self.prompter.token("Enter first name")?;
        let last_name = self.prompter.token("Enter last name")?;
        let email = self.prompter.token("Enter email")?;

        self.users.register(User {
            user_id: user_id.clone(),
            password,
            first_name,
            last_name,
            email,
        });
        self.success(&format!("User '{user_id}' registered."))
    }

    fn login(&mut self) -> Result<()> {
        let user_id = self.prompter.token("Enter user id")?;
        let password = self.prompter.token("Enter password")?;

        if self.users.authenticate(&user_id, &password) {
            self.session.login();
            self.success("Welcome!")
        } else {
            let line = self.prompter.theme().warn.apply_to("Login Failed.").to_string();
            self.prompter.say(&line)
        }
    }

    fn add_engine(&mut self) -> Result<()> {
        let engine_id = self.prompter.number("Enter engine id")?;
        let hours = self.prompter.number("Enter engine operating hours")?;
        self.registry.add(engine_id, hours);
        self.success(&format!("Engine id: {engine_id} registered."))
    }

    fn delete_engine(&mut self) -> Result<()> {
        self.ensure_engines_registered()?;
        let engine_id = self.prompter.number("Enter engine id to be deleted")?;
        let removed = self.registry.remove(engine_id)?;
        self.success(&format!("Engine id: {removed} erased!"))
    }

    fn update_engine_hours(&mut self) -> Result<()> {
        self.ensure_engines_registered()?;
        let engine_id = self.prompter.number("Enter engine id to be updated")?;
        let hours = self
            .prompter
            .number(&format!("Enter new engine operating hours for {engine_id}"))?;
        let updated = self.registry.update_hours(engine_id, hours)?;
        self.success(&format!(
            "The new operating time for engine id: {engine_id} is: {updated} hours."
        ))
    }

    fn add_job(&mut self) -> Result<()> {
        self.ensure_engines_registered()?;
        let engine_id = self.prompter.number("Enter engine id")?;
        // Validate existence before collecting job fields, so a bad engine
        // id fails without asking for the rest.
        self.registry.find(engine_id)?;

        let job_id = self.prompter.number("Enter job id")?;
        let description = self.prompter.line("Enter job description")?;
        self.registry.enqueue_job(engine_id, Job::new(job_id, description))?;
        self.success(&format!(
            "Job number: {job_id} scheduled for engine id: {engine_id}"
        ))
    }

    fn complete_job(&mut self) -> Result<()> {
        self.ensure_engines_registered()?;
        let engine_id = self.prompter.number("Enter engine id")?;
        // The completed job is dropped here: no job detail is used after
        // dequeue and no history is retained.
        let _completed = self.registry.dequeue_job(engine_id)?;
        self.success(&format!("Oldest job completed for engine id: {engine_id}"))
    }

    // The empty-registry precondition is checked before prompting, matching
    // the operation contract: an empty registry fails before any id is read.
    fn ensure_engines_registered(&self) -> Result<()> {
        if self.registry.is_empty() {
            return Err(DeskError::EmptyRegistry);
        }
        Ok(())
    }

    fn success(&mut self, message: &str) -> Result<()> {
        let line = self.prompter.theme().success.apply_to(message).to_string();
        self.prompter.say(&line)
    }
}
