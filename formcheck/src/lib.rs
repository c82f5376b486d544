//! Form validation engine
//!
//! Attaches per-field rule lists to a form model, evaluates them on user
//! interaction and on submission, and dispatches success/failure handlers.

pub mod error;
pub mod event;
pub mod form;
pub mod rule;
pub mod validator;
pub mod value;

pub use error::FieldError;
pub use event::{Event, SubmitEvent};
pub use form::{Control, ControlKind, Form, FormData};
pub use rule::Rule;
pub use validator::{Config, Validator};
pub use value::{FieldValue, FileHandle};
