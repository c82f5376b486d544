mod control;
mod data;

pub use control::{Control, ControlKind};
pub use data::FormData;

use crate::error::FieldError;
use crate::value::FieldValue;

/// An owned, in-memory form: an ordered list of named controls plus the
/// no-validate flag that suppresses native validation bubbles.
///
/// The form is the single owner of all field values and validity messages;
/// the validator never keeps a private copy of either.
#[derive(Debug, Clone, Default)]
pub struct Form {
    pub controls: Vec<Control>,
    pub no_validate: bool,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a control (builder style).
    pub fn control(mut self, control: Control) -> Self {
        self.controls.push(control);
        self
    }

    /// First control with the given name. Radio and checkbox groups share a
    /// name; group-wide answers go through [`Form::checked_value`].
    pub fn find(&self, name: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Control> {
        self.controls.iter_mut().find(|c| c.name == name)
    }

    /// Value of the checked control in the name group, or `""` if none.
    pub fn checked_value(&self, name: &str) -> &str {
        self.controls
            .iter()
            .find(|c| c.name == name && c.checked)
            .map(|c| c.value.as_str())
            .unwrap_or("")
    }

    /// Extract the current value of a field, dispatching on its kind.
    pub fn field_value(&self, name: &str) -> Option<FieldValue> {
        let control = self.find(name)?;
        Some(match control.kind {
            ControlKind::ChoiceSingle | ControlKind::ChoiceMulti => {
                FieldValue::Text(self.checked_value(name).to_string())
            }
            ControlKind::File => FieldValue::Files(control.files.clone()),
            ControlKind::Text | ControlKind::Select => FieldValue::Text(control.value.clone()),
        })
    }

    /// Overwrite the value of the first control named `name`.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(control) = self.find_mut(name) {
            control.value = value.into();
        }
    }

    /// Simulate checking the group member whose value is `value`: for radio
    /// groups the rest of the group is unchecked, for checkbox groups the
    /// member toggles.
    pub fn check(&mut self, name: &str, value: &str) {
        let single = self
            .find(name)
            .map(|c| c.kind == ControlKind::ChoiceSingle)
            .unwrap_or(false);
        for control in self.controls.iter_mut().filter(|c| c.name == name) {
            if single {
                control.checked = control.value == value;
            } else if control.value == value {
                control.checked = !control.checked;
            }
        }
    }

    /// Set the custom validity message on the first control named `name`.
    /// An empty message marks the control valid.
    pub fn set_custom_validity(&mut self, name: &str, message: impl Into<String>) {
        if let Some(control) = self.find_mut(name) {
            control.custom_validity = message.into();
        }
    }

    pub fn custom_validity(&self, name: &str) -> &str {
        self.find(name)
            .map(|c| c.custom_validity.as_str())
            .unwrap_or("")
    }

    /// Aggregate validity: true iff no control carries a validity message.
    pub fn check_validity(&self) -> bool {
        self.controls.iter().all(Control::is_valid)
    }

    /// Surface every current validity message: logs each at warn level and
    /// returns them in document order so the caller can render them.
    pub fn report_validity(&self) -> Vec<FieldError> {
        let errors: Vec<FieldError> = self
            .controls
            .iter()
            .filter(|c| !c.is_valid())
            .map(|c| FieldError::new(&c.name, &c.custom_validity))
            .collect();
        for error in &errors {
            log::warn!("[form] {error}");
        }
        errors
    }

    /// Snapshot of all named values. Choice controls contribute only when
    /// checked; file controls contribute one entry per attached file name.
    pub fn data(&self) -> FormData {
        let mut data = FormData::new();
        for control in &self.controls {
            match control.kind {
                ControlKind::ChoiceSingle | ControlKind::ChoiceMulti => {
                    if control.checked {
                        data.append(&control.name, &control.value);
                    }
                }
                ControlKind::File => {
                    for file in &control.files {
                        data.append(&control.name, &file.name);
                    }
                }
                ControlKind::Text | ControlKind::Select => {
                    data.append(&control.name, &control.value);
                }
            }
        }
        data
    }
}
