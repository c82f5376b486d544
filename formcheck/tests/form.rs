use formcheck::{rule, Config, Control, ControlKind, FieldValue, FileHandle, Form, Validator};

// ============================================================================
// Lookup and choice groups
// ============================================================================

#[test]
fn test_find_returns_first_match() {
    let form = Form::new()
        .control(Control::radio("plan", "free"))
        .control(Control::radio("plan", "pro"));

    let first = form.find("plan").unwrap();
    assert_eq!(first.value, "free");
    assert_eq!(first.kind, ControlKind::ChoiceSingle);
    assert!(form.find("missing").is_none());
}

#[test]
fn test_checked_value() {
    let mut form = Form::new()
        .control(Control::radio("plan", "free"))
        .control(Control::radio("plan", "pro"));

    assert_eq!(form.checked_value("plan"), "");
    form.check("plan", "pro");
    assert_eq!(form.checked_value("plan"), "pro");

    // Radio semantics: checking one unchecks the rest of the group.
    form.check("plan", "free");
    assert_eq!(form.checked_value("plan"), "free");
    let checked: Vec<_> = form.controls.iter().filter(|c| c.checked).collect();
    assert_eq!(checked.len(), 1);
}

#[test]
fn test_checkbox_check_toggles() {
    let mut form = Form::new().control(Control::checkbox("terms", "accepted"));

    form.check("terms", "accepted");
    assert_eq!(form.checked_value("terms"), "accepted");
    form.check("terms", "accepted");
    assert_eq!(form.checked_value("terms"), "");
}

// ============================================================================
// Value extraction
// ============================================================================

#[test]
fn test_field_value_dispatch() {
    let mut form = Form::new()
        .control(Control::text("name").value("ada"))
        .control(Control::select("country").value("nl"))
        .control(Control::radio("plan", "pro"))
        .control(Control::file("avatar").attach(FileHandle::new("a.png", 42)));

    assert_eq!(form.field_value("name"), Some(FieldValue::Text("ada".into())));
    assert_eq!(
        form.field_value("country"),
        Some(FieldValue::Text("nl".into()))
    );
    // Unchecked choice group extracts as empty text
    assert_eq!(form.field_value("plan"), Some(FieldValue::Text("".into())));
    form.check("plan", "pro");
    assert_eq!(form.field_value("plan"), Some(FieldValue::Text("pro".into())));

    assert_eq!(
        form.field_value("avatar"),
        Some(FieldValue::Files(vec![FileHandle::new("a.png", 42)]))
    );
    assert_eq!(form.field_value("missing"), None);
}

// ============================================================================
// Validity state
// ============================================================================

#[test]
fn test_check_validity_and_report() {
    let mut form = Form::new()
        .control(Control::text("a"))
        .control(Control::text("b"));

    assert!(form.check_validity());
    assert!(form.report_validity().is_empty());

    form.set_custom_validity("b", "broken");
    assert!(!form.check_validity());

    let errors = form.report_validity();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "b");
    assert_eq!(errors[0].message, "broken");
    assert_eq!(errors[0].to_string(), "b: broken");

    form.set_custom_validity("b", "");
    assert!(form.check_validity());
}

// ============================================================================
// Snapshot
// ============================================================================

#[test]
fn test_data_snapshot() {
    let mut form = Form::new()
        .control(Control::text("name").value("ada"))
        .control(Control::checkbox("tags", "rust").checked(true))
        .control(Control::checkbox("tags", "forms").checked(true))
        .control(Control::checkbox("tags", "draft"))
        .control(
            Control::file("docs")
                .attach(FileHandle::new("a.pdf", 1))
                .attach(FileHandle::new("b.pdf", 2)),
        );
    form.set_value("name", "lovelace");

    let data = form.data();
    assert_eq!(data.get("name"), Some("lovelace"));
    assert_eq!(data.get_all("tags"), vec!["rust", "forms"]);
    assert_eq!(data.get_all("docs"), vec!["a.pdf", "b.pdf"]);
    assert_eq!(data.len(), 5);
}

#[test]
fn test_data_snapshot_serializes() {
    let form = Form::new().control(Control::text("name").value("ada"));
    let json = serde_json::to_value(form.data()).unwrap();
    assert_eq!(json["entries"][0][0], "name");
    assert_eq!(json["entries"][0][1], "ada");
}

// ============================================================================
// Binding options and teardown
// ============================================================================

#[test]
fn test_no_validate_defaults_on_and_can_be_overridden() {
    let mut form = Form::new().control(Control::text("a"));
    let _ = Validator::new(Config::new().field("a", vec![rule::not_empty()]), &mut form);
    assert!(form.no_validate);

    let mut form = Form::new().control(Control::text("a"));
    let _ = Validator::new(
        Config::new()
            .field("a", vec![rule::not_empty()])
            .no_validate(false),
        &mut form,
    );
    assert!(!form.no_validate);
}

#[test]
fn test_unbind_drops_field_and_clears_message() {
    let mut form = Form::new().control(Control::text("email"));
    let mut validator = Validator::new(
        Config::new().field("email", vec![rule::not_empty()]),
        &mut form,
    );

    assert!(!validator.validate_field(&mut form, "email"));
    assert!(!form.custom_validity("email").is_empty());

    assert!(validator.unbind(&mut form, "email"));
    assert_eq!(form.custom_validity("email"), "");
    assert_eq!(validator.bound_fields().count(), 0);

    assert!(!validator.unbind(&mut form, "email"));
}
