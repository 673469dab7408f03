use tracing::info;

use crate::error::{Result, TodoError};
use crate::model::{PropertyValue, Task};
use crate::ordering;
use crate::store::files::TaskFile;

/// The task list as loaded for one pass of the menu.
///
/// Positions are only meaningful until the next mutation; callers reload
/// before presenting the list again.
pub struct TaskList {
    file: TaskFile,
    tasks: Vec<Task>,
}

impl TaskList {
    /// Load the file and sort by due date.
    pub fn load(file: TaskFile) -> Result<Self> {
        let mut tasks = file.load()?;
        ordering::sort_by_due_date(&mut tasks);
        Ok(Self { file, tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn add(&mut self, task: Task) -> Result<()> {
        info!(title = %task.title, due = %task.due, "adding task");
        self.tasks.push(task);
        self.persist()
    }

    pub fn edit(&mut self, index: usize, value: PropertyValue) -> Result<()> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(TodoError::TaskIndexOutOfRange { index, len })?;
        info!(index, property = %value.property(), "editing task");
        task.apply(value);
        self.persist()
    }

    pub fn complete(&mut self, index: usize) -> Result<Task> {
        if index >= self.tasks.len() {
            return Err(TodoError::TaskIndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        let task = self.tasks.remove(index);
        info!(title = %task.title, due = %task.due, "completed task");
        self.persist()?;
        Ok(task)
    }

    fn persist(&self) -> Result<()> {
        self.file.save(&self.tasks)
    }
}
