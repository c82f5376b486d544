use std::fs::File;

use formcheck::{rule, Config, Control, Event, FileHandle, Form, SubmitEvent, Validator};
use regex::Regex;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

fn main() {
    WriteLogger::init(
        LevelFilter::Debug,
        LogConfig::default(),
        File::create("signup.log").unwrap(),
    )
    .unwrap();

    let mut form = Form::new()
        .control(Control::text("email"))
        .control(Control::text("password"))
        .control(Control::radio("plan", "free").checked(true))
        .control(Control::radio("plan", "pro"))
        .control(Control::select("country"))
        .control(Control::file("avatar").attach(FileHandle::new("avatar.png", 512_000)));

    let config = Config::new()
        .field(
            "email",
            vec![
                rule::not_empty(),
                rule::pattern(Regex::new("^.+@.+$").unwrap()),
            ],
        )
        .field(
            "password",
            vec![rule::min_length(8).message("Password needs at least 8 characters.")],
        )
        .field("plan", vec![rule::not_empty().message("Choose a plan.")])
        .field("country", vec![rule::select_not_default()])
        .field("avatar", vec![rule::file_size(1_000_000)]);

    let mut validator = Validator::new(config, &mut form);
    validator
        .on_valid(|_, data| println!("submitted: {:?}", data.entries().collect::<Vec<_>>()))
        .on_invalid(|_, data| println!("rejected: {:?}", data.entries().collect::<Vec<_>>()));

    // First attempt: nothing filled in.
    let mut submit = SubmitEvent::new();
    validator.handle_submit(&mut form, &mut submit);
    for error in form.report_validity() {
        println!("  {error}");
    }

    // The user fills the form in; each edit revalidates the field it touched.
    form.set_value("email", "ada@example.com");
    validator.handle_event(&mut form, &Event::Input { target: "email".into() });

    form.set_value("password", "correct horse");
    validator.handle_event(&mut form, &Event::Input { target: "password".into() });

    form.check("plan", "pro");
    validator.handle_event(&mut form, &Event::Change { target: "plan".into() });

    form.set_value("country", "nl");
    validator.handle_event(&mut form, &Event::Change { target: "country".into() });

    // Second attempt succeeds.
    let mut submit = SubmitEvent::new();
    validator.handle_submit(&mut form, &mut submit);
}
