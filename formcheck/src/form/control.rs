use serde::{Deserialize, Serialize};

use crate::value::FileHandle;

/// What kind of control a field is. Resolved once when the control is built;
/// value extraction and listener choice dispatch on this instead of
/// re-inspecting tag/type strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlKind {
    /// Text-like inputs and textareas.
    #[default]
    Text,
    /// Radio buttons: at most one checked per name group.
    ChoiceSingle,
    /// Checkboxes: any number checked per name group.
    ChoiceMulti,
    Select,
    File,
}

impl ControlKind {
    /// Choice-style controls validate on change rather than on input.
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            ControlKind::ChoiceSingle | ControlKind::ChoiceMulti | ControlKind::Select
        )
    }
}

/// A named input-bearing control within a form.
///
/// Radio and checkbox groups are multiple controls sharing a name. The custom
/// validity message is the control's only validity state: empty means valid.
#[derive(Debug, Clone, Default)]
pub struct Control {
    pub name: String,
    pub kind: ControlKind,
    pub value: String,
    /// Only meaningful for choice kinds.
    pub checked: bool,
    /// Only meaningful for file controls.
    pub files: Vec<FileHandle>,
    pub custom_validity: String,
}

impl Control {
    fn new(name: impl Into<String>, kind: ControlKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, ControlKind::Text)
    }

    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, ControlKind::ChoiceSingle).value(value)
    }

    pub fn checkbox(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, ControlKind::ChoiceMulti).value(value)
    }

    pub fn select(name: impl Into<String>) -> Self {
        Self::new(name, ControlKind::Select)
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, ControlKind::File)
    }

    /// Set the current value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the checked flag (choice kinds).
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Attach a file (file controls).
    pub fn attach(mut self, file: FileHandle) -> Self {
        self.files.push(file);
        self
    }

    /// True when the custom validity message is empty.
    pub fn is_valid(&self) -> bool {
        self.custom_validity.is_empty()
    }
}
