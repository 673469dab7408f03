//! The interactive session: an explicit loop over [`State`].

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use tracing::debug;

use crate::error::{Result, TodoError};
use crate::model::{Date, MONTHS, Property, PropertyValue, Task};
use crate::output;
use crate::prompt::Prompter;
use crate::store::files::TaskFile;
use crate::store::repo::TaskList;

/// Label of the entry appended to the edit/complete lists.
pub const CANCEL: &str = "Cancel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    NewTask,
    EditTask,
    CompleteTask,
    Exit,
}

impl MenuItem {
    pub const ALL: [Self; 4] = [Self::NewTask, Self::EditTask, Self::CompleteTask, Self::Exit];

    pub fn label(self) -> &'static str {
        match self {
            Self::NewTask => "New task",
            Self::EditTask => "Edit a task",
            Self::CompleteTask => "Complete a task",
            Self::Exit => "Exit",
        }
    }
}

/// Where the session goes next. Handler states carry the list exactly as
/// it was rendered, so selection positions line up with what the user saw.
enum State {
    MainMenu,
    Adding(TaskList),
    Editing(TaskList),
    Completing(TaskList),
    Exit,
}

pub struct Session<P, W> {
    file: TaskFile,
    prompter: P,
    out: W,
}

impl<P: Prompter, W: Write> Session<P, W> {
    pub fn new(file: TaskFile, prompter: P, out: W) -> Self {
        Self {
            file,
            prompter,
            out,
        }
    }

    /// Run until the user picks Exit. Any error, including a prompt abort,
    /// ends the session without further saves.
    pub fn run(&mut self) -> Result<()> {
        let mut state = State::MainMenu;
        loop {
            state = match state {
                State::MainMenu => self.main_menu()?,
                State::Adding(mut list) => {
                    self.add_task(&mut list)?;
                    State::MainMenu
                }
                State::Editing(mut list) => {
                    self.edit_task(&mut list)?;
                    State::MainMenu
                }
                State::Completing(mut list) => {
                    self.complete_task(&mut list)?;
                    State::MainMenu
                }
                State::Exit => {
                    debug!("session finished");
                    return Ok(());
                }
            };
        }
    }

    pub fn into_parts(self) -> (P, W) {
        (self.prompter, self.out)
    }

    fn main_menu(&mut self) -> Result<State> {
        self.clear()?;
        let list = TaskList::load(self.file.clone())?;
        output::print_task_lines(&mut self.out, list.tasks())?;
        self.out.flush()?;

        let labels: Vec<String> = MenuItem::ALL.iter().map(|i| i.label().to_string()).collect();
        let choice = self.prompter.select("What would you like to do?", &labels)?;
        let item = MenuItem::ALL
            .get(choice)
            .copied()
            .ok_or_else(|| TodoError::Prompt(format!("no menu item at position {choice}")))?;
        debug!(item = item.label(), tasks = list.len(), "main menu choice");

        Ok(match item {
            MenuItem::NewTask => State::Adding(list),
            MenuItem::EditTask => State::Editing(list),
            MenuItem::CompleteTask => State::Completing(list),
            MenuItem::Exit => State::Exit,
        })
    }

    fn add_task(&mut self, list: &mut TaskList) -> Result<()> {
        self.clear()?;
        let category = self.prompter.text("Enter the category")?;
        let due = self.prompt_date()?;
        let important = self.prompter.confirm("Is this an important task")?;
        let title = self.prompter.text("Enter the title")?;
        list.add(Task {
            due,
            category,
            title,
            important,
        })
    }

    fn edit_task(&mut self, list: &mut TaskList) -> Result<()> {
        self.clear()?;
        let Some(index) = self.pick_task(list, "Which task are you editing")? else {
            debug!("edit cancelled");
            return Ok(());
        };
        if let Some(task) = list.get(index) {
            writeln!(self.out, "{}", output::task_line(task))?;
            self.out.flush()?;
        }

        let labels: Vec<String> = Property::ALL.iter().map(|p| p.label().to_string()).collect();
        let choice = self
            .prompter
            .select("Which property would you like to change", &labels)?;
        let property = Property::ALL
            .get(choice)
            .copied()
            .ok_or_else(|| TodoError::Prompt(format!("no property at position {choice}")))?;

        let value = self.prompt_value(property)?;
        list.edit(index, value)
    }

    fn complete_task(&mut self, list: &mut TaskList) -> Result<()> {
        self.clear()?;
        let Some(index) = self.pick_task(list, "Which task are you completing")? else {
            debug!("complete cancelled");
            return Ok(());
        };
        list.complete(index)?;
        Ok(())
    }

    /// Offer every task plus the cancel entry; `None` means cancel.
    fn pick_task(&mut self, list: &TaskList, label: &str) -> Result<Option<usize>> {
        let mut items: Vec<String> = list.tasks().iter().map(output::task_choice).collect();
        items.push(CANCEL.to_string());
        let index = self.prompter.select(label, &items)?;
        Ok((index != list.len()).then_some(index))
    }

    fn prompt_value(&mut self, property: Property) -> Result<PropertyValue> {
        Ok(match property {
            Property::Important => {
                PropertyValue::Important(self.prompter.confirm("Is this an important task")?)
            }
            Property::Category => PropertyValue::Category(self.prompter.text("Enter the category")?),
            Property::DueDate => PropertyValue::DueDate(self.prompt_date()?),
            Property::Title => PropertyValue::Title(self.prompter.text("Enter the title")?),
        })
    }

    fn prompt_date(&mut self) -> Result<Date> {
        let months: Vec<String> = MONTHS.iter().map(|m| m.to_string()).collect();
        let month = self.prompter.select("Select the month", &months)?;
        let day = self.prompter.number("Enter the day")?;
        Ok(Date::from_month_index(month, day))
    }

    fn clear(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()?;
        Ok(())
    }
}
