//! Per-entry editing for the list steps (education, experience).
//!
//! The editor holds a sub-form and an optional edit index. With no index the
//! sub-form creates a new entry; with an index it replaces that entry.

use crate::models::resume::{EducationEntry, ExperienceEntry};
use crate::validation::Validate;
use crate::wizard::WizardError;

/// An entry type a list step can edit.
pub trait FormEntry: Clone + Validate {
    /// The sub-form contents in create-mode.
    fn blank() -> Self;
}

impl FormEntry for EducationEntry {
    fn blank() -> Self {
        EducationEntry::default()
    }
}

impl FormEntry for ExperienceEntry {
    fn blank() -> Self {
        ExperienceEntry {
            description: vec![String::new()],
            ..ExperienceEntry::default()
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct EntryEditor<T> {
    form: T,
    edit_index: Option<usize>,
}

impl<T: FormEntry> EntryEditor<T> {
    pub(crate) fn new() -> Self {
        Self {
            form: T::blank(),
            edit_index: None,
        }
    }

    /// Back to create-mode with a blank sub-form.
    pub(crate) fn reset(&mut self) {
        self.form = T::blank();
        self.edit_index = None;
    }
}

/// A list step bound to its editor and its slice of the draft.
pub struct EntryStep<'a, T> {
    editor: &'a mut EntryEditor<T>,
    entries: &'a mut Vec<T>,
}

impl<'a, T: FormEntry> EntryStep<'a, T> {
    pub(crate) fn new(editor: &'a mut EntryEditor<T>, entries: &'a mut Vec<T>) -> Self {
        Self { editor, entries }
    }

    /// Committed entries, as stored in the draft.
    pub fn entries(&self) -> &[T] {
        self.entries.as_slice()
    }

    pub fn form(&self) -> &T {
        &self.editor.form
    }

    pub fn form_mut(&mut self) -> &mut T {
        &mut self.editor.form
    }

    /// `None` in create-mode.
    pub fn edit_index(&self) -> Option<usize> {
        self.editor.edit_index
    }

    /// Loads entry `index` into the sub-form and switches to edit-mode.
    pub fn edit(&mut self, index: usize) -> Result<(), WizardError> {
        let entry = self
            .entries
            .get(index)
            .ok_or(WizardError::NoSuchEntry {
                index,
                len: self.entries.len(),
            })?
            .clone();
        self.editor.form = entry;
        self.editor.edit_index = Some(index);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editor.reset();
    }

    /// Validates the sub-form and commits it: appends in create-mode, replaces
    /// in edit-mode. On failure nothing in the draft changes.
    pub fn submit(&mut self) -> Result<(), WizardError> {
        let entry = self.editor.form.clone().validated()?;
        match self.editor.edit_index {
            Some(index) => self.entries[index] = entry,
            None => self.entries.push(entry),
        }
        self.editor.reset();
        Ok(())
    }

    /// Removes entry `index` immediately. An edit in progress keeps pointing at
    /// the same entry; deleting the entry under edit returns to create-mode.
    pub fn delete(&mut self, index: usize) -> Result<(), WizardError> {
        if index >= self.entries.len() {
            return Err(WizardError::NoSuchEntry {
                index,
                len: self.entries.len(),
            });
        }
        self.entries.remove(index);

        match self.editor.edit_index {
            Some(editing) if editing == index => self.editor.reset(),
            Some(editing) if editing > index => self.editor.edit_index = Some(editing - 1),
            _ => {}
        }
        Ok(())
    }
}

impl EntryStep<'_, ExperienceEntry> {
    /// Appends an empty description point to the sub-form.
    pub fn add_point(&mut self) {
        self.editor.form.description.push(String::new());
    }

    /// Removes description point `index`. The first point is permanent.
    pub fn remove_point(&mut self, index: usize) -> Result<(), WizardError> {
        if index == 0 {
            return Err(WizardError::FirstPointRequired);
        }
        let points = &mut self.editor.form.description;
        if index >= points.len() {
            return Err(WizardError::NoSuchPoint(index));
        }
        points.remove(index);
        Ok(())
    }

    /// Replaces the sub-form's points with an AI rewrite. An empty rewrite is
    /// ignored so the sub-form always keeps at least one point.
    pub fn apply_improved_points(&mut self, points: Vec<String>) {
        if !points.is_empty() {
            self.editor.form.description = points;
        }
    }
}
