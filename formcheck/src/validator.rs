//! Validator controller: binds a configuration to a form, evaluates rules on
//! interaction and submission, and dispatches the outcome handlers.

use crate::event::{Event, SubmitEvent};
use crate::form::{Form, FormData};
use crate::rule::Rule;

/// Which interaction event a bound field validates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Input,
    Change,
}

/// A configured field resolved against the form at construction time.
#[derive(Debug)]
struct Binding {
    name: String,
    trigger: Trigger,
}

/// Mapping of field name to its ordered rule list, plus options.
///
/// Owned by the caller and read-only to the validator. Field order is
/// preserved so submission re-validation is deterministic.
#[derive(Debug, Default)]
pub struct Config {
    fields: Vec<(String, Vec<Rule>)>,
    no_validate: Option<bool>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an ordered rule list to a field name.
    pub fn field(mut self, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        self.fields.push((name.into(), rules));
        self
    }

    /// Override the default suppression of native validation bubbles.
    pub fn no_validate(mut self, no_validate: bool) -> Self {
        self.no_validate = Some(no_validate);
        self
    }

    fn rules(&self, name: &str) -> &[Rule] {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }
}

type SubmitHandler = Box<dyn FnMut(&SubmitEvent, &FormData)>;

/// The controller. Holds the configuration and the bindings resolved at
/// construction; all field values and validity messages stay on the form.
pub struct Validator {
    config: Config,
    bindings: Vec<Binding>,
    on_valid: SubmitHandler,
    on_invalid: SubmitHandler,
}

impl Validator {
    /// Bind `config` to `form`: suppress the native bubble (unless the config
    /// overrides), and resolve each configured field to a binding. Choice
    /// controls (radio/checkbox/select) validate on change, everything else
    /// on input. A configured name with no matching control is logged and
    /// skipped; that field is never validated.
    pub fn new(config: Config, form: &mut Form) -> Self {
        form.no_validate = config.no_validate.unwrap_or(true);

        let mut bindings = Vec::new();
        for (name, _) in &config.fields {
            match form.find(name) {
                Some(control) => {
                    let trigger = if control.kind.is_choice() {
                        Trigger::Change
                    } else {
                        Trigger::Input
                    };
                    bindings.push(Binding {
                        name: name.clone(),
                        trigger,
                    });
                }
                None => log::error!("[validator] field {name} does not exist in the form"),
            }
        }

        Self {
            config,
            bindings,
            on_valid: Box::new(|_, _| {}),
            on_invalid: Box::new(|_, _| {}),
        }
    }

    /// Replace the success handler. Chainable.
    pub fn on_valid(&mut self, handler: impl FnMut(&SubmitEvent, &FormData) + 'static) -> &mut Self {
        self.on_valid = Box::new(handler);
        self
    }

    /// Replace the failure handler. Chainable.
    pub fn on_invalid(
        &mut self,
        handler: impl FnMut(&SubmitEvent, &FormData) + 'static,
    ) -> &mut Self {
        self.on_invalid = Box::new(handler);
        self
    }

    /// Dispatch an interaction event. Validates the target field when the
    /// event kind matches what its binding listens for; returns the validity
    /// outcome, or `None` when the event is not for a bound field.
    pub fn handle_event(&self, form: &mut Form, event: &Event) -> Option<bool> {
        let binding = self.bindings.iter().find(|b| b.name == event.target())?;
        let matches = match (binding.trigger, event) {
            (Trigger::Input, Event::Input { .. }) => true,
            (Trigger::Change, Event::Change { .. }) => true,
            _ => false,
        };
        if !matches {
            return None;
        }
        Some(self.validate_field(form, event.target()))
    }

    /// Evaluate a field's rules in declared order against its current value.
    ///
    /// The first rule to report invalid supplies the field's custom validity
    /// message and later rules are never evaluated. When no rule fails the
    /// message is cleared. A rule with no predicate is logged and skipped
    /// without affecting the outcome. The field's validity message is the
    /// only state this mutates.
    pub fn validate_field(&self, form: &mut Form, name: &str) -> bool {
        let Some(value) = form.field_value(name) else {
            log::error!("[validator] field {name} does not exist in the form");
            return true;
        };

        let mut failed: Option<&str> = None;
        for rule in self.config.rules(name) {
            match rule.is_invalid(&value) {
                Some(true) => {
                    failed = Some(&rule.message);
                    break;
                }
                Some(false) => {}
                None => log::error!(
                    "[validator] rule \"{}\" on field {name} has no test predicate",
                    rule.message
                ),
            }
        }

        match failed {
            Some(message) => {
                form.set_custom_validity(name, message);
                false
            }
            None => {
                form.set_custom_validity(name, "");
                true
            }
        }
    }

    /// Intercept a submission: always prevent the default action, re-validate
    /// every bound field, snapshot the form data, and dispatch exactly one of
    /// the outcome handlers. On failure the form's validity messages are
    /// surfaced afterwards.
    pub fn handle_submit(&mut self, form: &mut Form, event: &mut SubmitEvent) {
        event.prevent_default();

        let mut form_valid = true;
        let names: Vec<String> = self.bindings.iter().map(|b| b.name.clone()).collect();
        for name in &names {
            if !self.validate_field(form, name) {
                form_valid = false;
            }
        }

        let data = form.data();

        if form_valid && form.check_validity() {
            log::debug!("[validator] form valid, dispatching success handler");
            (self.on_valid)(event, &data);
        } else {
            log::debug!("[validator] form invalid, dispatching failure handler");
            (self.on_invalid)(event, &data);
            form.report_validity();
        }
    }

    /// Tear down the binding for one field and clear its validity message so
    /// a stale message cannot outlive its rules. Returns false if the field
    /// was not bound.
    pub fn unbind(&mut self, form: &mut Form, name: &str) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.name != name);
        if self.bindings.len() == before {
            return false;
        }
        form.set_custom_validity(name, "");
        true
    }

    /// Names currently bound, in configuration order.
    pub fn bound_fields(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|b| b.name.as_str())
    }
}
