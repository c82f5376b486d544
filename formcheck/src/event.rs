/// Interaction events the embedding application forwards to the validator.
///
/// `Input` fires as a text-like field's value changes; `Change` fires when a
/// choice control (radio/checkbox/select) settles on a new value. The
/// validator reacts only to the kind its binding listens for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Input { target: String },
    Change { target: String },
}

impl Event {
    pub fn target(&self) -> &str {
        match self {
            Event::Input { target } | Event::Change { target } => target,
        }
    }
}

/// A form submission in flight. The validator always prevents the default
/// action before deciding the outcome.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
