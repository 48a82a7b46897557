use crate::model::{Status, Task, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskList {
    Active,
    Completed,
}

impl TaskList {
    pub fn label(&self) -> &'static str {
        match self {
            TaskList::Active => "Active",
            TaskList::Completed => "Completed",
        }
    }
}

/// Both display lists, borrowed from the store in creation order.
#[derive(Debug, Default)]
pub struct TaskViews<'a> {
    pub active: Vec<&'a Task>,
    pub completed: Vec<&'a Task>,
}

impl<'a> TaskViews<'a> {
    pub fn list(&self, which: TaskList) -> &[&'a Task] {
        match which {
            TaskList::Active => &self.active,
            TaskList::Completed => &self.completed,
        }
    }
}

pub fn partition(tasks: &[Task]) -> TaskViews<'_> {
    let mut views = TaskViews::default();
    for task in tasks {
        match task.status {
            Status::Open | Status::InProgress => views.active.push(task),
            Status::Done => views.completed.push(task),
        }
    }
    log::trace!(
        "partitioned {} tasks: {} active, {} completed",
        tasks.len(),
        views.active.len(),
        views.completed.len()
    );
    views
}

/// `(id, description, due_date, status)` as shown in a table row.
pub fn row(task: &Task) -> (TaskId, &str, &str, &'static str) {
    (
        task.id,
        task.description.as_str(),
        task.due_date.as_str(),
        task.status.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormOptions, TaskForm};
    use crate::model::TaskStore;

    fn rows<'a>(tasks: &[&'a Task]) -> Vec<(TaskId, &'a str, &'a str, &'static str)> {
        tasks.iter().map(|&t| row(t)).collect()
    }

    #[test]
    fn end_to_end_split() {
        let mut store = TaskStore::new();
        let mut form = TaskForm::new(FormOptions::default());

        form.description.set("Buy milk");
        form.due_date.set("2024-03-15");
        form.submit(&mut store).expect("first task");
        let views = partition(store.all());
        assert_eq!(
            rows(&views.active),
            vec![(1, "Buy milk", "2024-03-15", "Open")]
        );
        assert!(views.completed.is_empty());

        form.description.set("Pay rent");
        form.due_date.set("2024-04-01");
        form.status = Status::Done;
        form.submit(&mut store).expect("second task");
        let views = partition(store.all());
        assert_eq!(
            rows(&views.completed),
            vec![(2, "Pay rent", "2024-04-01", "Done")]
        );
        assert_eq!(
            rows(&views.active),
            vec![(1, "Buy milk", "2024-03-15", "Open")]
        );
    }

    #[test]
    fn every_task_lands_in_exactly_one_list() {
        let mut store = TaskStore::new();
        let statuses = [
            Status::Done,
            Status::Open,
            Status::InProgress,
            Status::Done,
            Status::Open,
            Status::Done,
        ];
        for (i, status) in statuses.iter().enumerate() {
            store.add(format!("t{}", i), String::new(), *status);
        }
        let views = partition(store.all());
        assert_eq!(views.active.len() + views.completed.len(), store.len());
        assert!(views.active.iter().all(|t| t.status.is_active()));
        assert!(views.completed.iter().all(|t| t.status == Status::Done));
        for task in store.all() {
            let hits = views
                .active
                .iter()
                .chain(views.completed.iter())
                .filter(|t| t.id == task.id)
                .count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn partition_is_stable() {
        let mut store = TaskStore::new();
        for status in [Status::InProgress, Status::Done, Status::Open, Status::Done] {
            store.add("x".into(), String::new(), status);
        }
        let views = partition(store.all());
        let active: Vec<TaskId> = views.list(TaskList::Active).iter().map(|t| t.id).collect();
        let done: Vec<TaskId> = views.list(TaskList::Completed).iter().map(|t| t.id).collect();
        assert_eq!(active, vec![1, 3]);
        assert_eq!(done, vec![2, 4]);
    }

    #[test]
    fn empty_store_gives_empty_lists() {
        let views = partition(&[]);
        assert!(views.active.is_empty());
        assert!(views.completed.is_empty());
    }
}
