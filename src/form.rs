use crate::model::{Status, Task, TaskStore, ValidationError};
use chrono::NaiveDate;

pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormOptions {
    pub validate_due_dates: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        FormOptions {
            validate_due_dates: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Description,
    DueDate,
    Status,
}

/// Single-line editable text with a byte-offset cursor.
#[derive(Debug, Clone, Default)]
pub struct FieldValue {
    pub value: String,
    cursor: usize,
}

impl FieldValue {
    pub fn new(value: &str) -> Self {
        FieldValue {
            value: value.to_string(),
            cursor: value.len(),
        }
    }

    pub fn set(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn move_left(&mut self) {
        self.cursor = prev_boundary(self.cursor, &self.value);
    }

    pub fn move_right(&mut self) {
        self.cursor = next_boundary(self.cursor, &self.value);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = prev_boundary(self.cursor, &self.value);
        self.value.drain(prev..self.cursor);
        self.cursor = prev;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }
        let next = next_boundary(self.cursor, &self.value);
        self.value.drain(self.cursor..next);
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            return;
        }
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn with_caret(&self) -> String {
        let mut text = self.value.clone();
        text.insert_str(self.cursor, "▌");
        text
    }
}

/// Input state of the Create tab plus the submit step that feeds the store.
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub description: FieldValue,
    pub due_date: FieldValue,
    pub status: Status,
    pub field: FormField,
    options: FormOptions,
}

impl TaskForm {
    pub fn new(options: FormOptions) -> Self {
        TaskForm {
            description: FieldValue::new(""),
            due_date: FieldValue::new(""),
            status: Status::Open,
            field: FormField::Description,
            options,
        }
    }

    pub fn options(&self) -> FormOptions {
        self.options
    }

    /// Validates the current input and appends a task to `store`.
    ///
    /// On failure nothing is stored and the input is left as typed so the
    /// user can correct it. On success the text fields are cleared and the
    /// status goes back to `Open`.
    pub fn submit(&mut self, store: &mut TaskStore) -> Result<Task, ValidationError> {
        let (description, due_date) =
            validate_submission(&self.description.value, &self.due_date.value, self.options)?;
        let task = store.add(description, due_date, self.status);
        self.reset();
        Ok(task)
    }

    /// Target of the calendar picker.
    pub fn set_due_date(&mut self, text: &str) {
        self.due_date.set(text);
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            FormField::Description => FormField::DueDate,
            FormField::DueDate => FormField::Status,
            FormField::Status => FormField::Description,
        };
    }

    pub fn prev_field(&mut self) {
        self.field = match self.field {
            FormField::Description => FormField::Status,
            FormField::DueDate => FormField::Description,
            FormField::Status => FormField::DueDate,
        };
    }

    pub fn next_status(&mut self) {
        self.status = self.status.next();
    }

    pub fn prev_status(&mut self) {
        self.status = self.status.prev();
    }

    /// The focused text box, or `None` while the status selector has focus.
    pub fn active_text_mut(&mut self) -> Option<&mut FieldValue> {
        match self.field {
            FormField::Description => Some(&mut self.description),
            FormField::DueDate => Some(&mut self.due_date),
            FormField::Status => None,
        }
    }

    fn reset(&mut self) {
        self.description.clear();
        self.due_date.clear();
        self.status = Status::Open;
        self.field = FormField::Description;
    }
}

/// Returns the trimmed description and due date ready to store.
pub fn validate_submission(
    description: &str,
    due_date: &str,
    options: FormOptions,
) -> Result<(String, String), ValidationError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    let due_date = due_date.trim();
    if options.validate_due_dates && !is_calendar_date(due_date) {
        return Err(ValidationError::MalformedDueDate(due_date.to_string()));
    }
    Ok((description.to_string(), due_date.to_string()))
}

/// `%Y` alone would also take a signed year such as `+2024`.
fn is_calendar_date(text: &str) -> bool {
    text.starts_with(|c: char| c.is_ascii_digit())
        && NaiveDate::parse_from_str(text, DUE_DATE_FORMAT).is_ok()
}

fn prev_boundary(cursor: usize, text: &str) -> usize {
    text[..cursor]
        .char_indices()
        .next_back()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

fn next_boundary(cursor: usize, text: &str) -> usize {
    text[cursor..]
        .chars()
        .next()
        .map(|ch| cursor + ch.len_utf8())
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> TaskForm {
        TaskForm::new(FormOptions {
            validate_due_dates: true,
        })
    }

    fn loose() -> TaskForm {
        TaskForm::new(FormOptions {
            validate_due_dates: false,
        })
    }

    fn fill(form: &mut TaskForm, description: &str, due: &str, status: Status) {
        form.description.set(description);
        form.due_date.set(due);
        form.status = status;
    }

    #[test]
    fn successful_submissions_get_sequential_ids() {
        let mut store = TaskStore::new();
        let mut form = strict();
        let mut ids = Vec::new();
        for (desc, due) in [("a", "2024-01-01"), ("b", "2024-02-29"), ("c", "2025-12-31")] {
            fill(&mut form, desc, due, Status::Open);
            ids.push(form.submit(&mut store).expect("valid input").id);
        }
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn blank_description_is_rejected_and_input_kept() {
        let mut store = TaskStore::new();
        let mut form = strict();
        fill(&mut form, "   \t", "2024-03-15", Status::Done);
        assert_eq!(
            form.submit(&mut store),
            Err(ValidationError::EmptyDescription)
        );
        assert!(store.is_empty());
        assert_eq!(form.due_date.value, "2024-03-15");
        assert_eq!(form.status, Status::Done);
    }

    #[test]
    fn strict_mode_rejects_malformed_dates() {
        let mut store = TaskStore::new();
        let mut form = strict();
        for due in [
            "",
            "15.03.2024",
            "2024-13-01",
            "2023-02-29",
            "tomorrow",
            "+2024-03-15",
            "-0001-01-01",
        ] {
            fill(&mut form, "Buy milk", due, Status::Open);
            assert!(matches!(
                form.submit(&mut store),
                Err(ValidationError::MalformedDueDate(_))
            ));
            assert_eq!(form.description.value, "Buy milk");
        }
        assert!(store.is_empty());
    }

    #[test]
    fn strict_mode_keeps_unpadded_dates() {
        let parsed = validate_submission("x", "2024-3-5", FormOptions::default());
        assert_eq!(parsed, Ok(("x".to_string(), "2024-3-5".to_string())));
    }

    #[test]
    fn loose_mode_accepts_free_text_dates() {
        let mut store = TaskStore::new();
        let mut form = loose();
        fill(&mut form, "Call mom", " next week ", Status::InProgress);
        let task = form.submit(&mut store).expect("free text allowed");
        assert_eq!(task.due_date, "next week");
        assert_eq!(task.status, Status::InProgress);
    }

    #[test]
    fn loose_mode_still_requires_description() {
        let mut store = TaskStore::new();
        let mut form = loose();
        fill(&mut form, "", "whenever", Status::Open);
        assert_eq!(
            form.submit(&mut store),
            Err(ValidationError::EmptyDescription)
        );
    }

    #[test]
    fn success_clears_fields_and_resets_status() {
        let mut store = TaskStore::new();
        let mut form = strict();
        fill(&mut form, "  Pay rent ", "2024-04-01", Status::Done);
        form.field = FormField::Status;
        let task = form.submit(&mut store).expect("valid input");
        assert_eq!(task.description, "Pay rent");
        assert!(form.description.value.is_empty());
        assert!(form.due_date.value.is_empty());
        assert_eq!(form.status, Status::Open);
        assert_eq!(form.field, FormField::Description);
    }

    #[test]
    fn field_focus_cycles() {
        let mut form = strict();
        form.next_field();
        assert_eq!(form.field, FormField::DueDate);
        form.next_field();
        assert!(form.active_text_mut().is_none());
        form.next_field();
        assert_eq!(form.field, FormField::Description);
        form.prev_field();
        assert_eq!(form.field, FormField::Status);
    }

    #[test]
    fn field_value_edits_around_multibyte_chars() {
        let mut field = FieldValue::new("día");
        field.move_left();
        field.backspace();
        assert_eq!(field.value, "da");
        field.move_home();
        field.delete();
        assert_eq!(field.value, "a");
        field.insert_char('é');
        field.move_end();
        field.insert_char('!');
        assert_eq!(field.value, "éa!");
        assert_eq!(field.with_caret(), "éa!▌");
    }
}
