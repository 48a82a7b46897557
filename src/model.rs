use std::fmt;

pub type TaskId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Open,
    InProgress,
    Done,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Open, Status::InProgress, Status::Done];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        }
    }

    /// Open and In Progress tasks show up on the Active tab.
    pub fn is_active(&self) -> bool {
        matches!(self, Status::Open | Status::InProgress)
    }

    pub fn next(self) -> Self {
        match self {
            Status::Open => Status::InProgress,
            Status::InProgress => Status::Done,
            Status::Done => Status::Open,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Status::Open => Status::Done,
            Status::InProgress => Status::Open,
            Status::Done => Status::InProgress,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub due_date: String,
    pub status: Status,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("description cannot be empty")]
    EmptyDescription,
    #[error("due date must be in YYYY-MM-DD format: {0:?}")]
    MalformedDueDate(String),
}

/// Append-only task list. Ids start at 1 and are handed out in creation order.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, description: String, due_date: String, status: Status) -> Task {
        let task = Task {
            id: self.next_id,
            description,
            due_date,
            status,
        };
        self.next_id += 1;
        self.tasks.push(task.clone());
        log::debug!("stored task {} ({} total)", task.id, self.tasks.len());
        task
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
