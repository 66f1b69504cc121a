use std::sync::mpsc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use taplock::bind::bind;
use taplock::form::{Form, TextField};
use taplock::runtime::{AppEvent, FixedTicker, Runner, TestEventSource};
use taplock::settings::{Settings, DEFAULT_MARKER};

// Headless integration using the internal runtime + form/controller flow
// without a TTY. Key events arrive through the Runner; a synthetic clock
// supplies the inter-keystroke intervals so the flow is deterministic.
#[test]
fn headless_typing_flow_derives_a_password() {
    let settings = Settings::new("abcdef", 3, 2, DEFAULT_MARKER).unwrap();

    let mut form = Form::new();
    form.add_field(TextField::new("gen").with_attr(settings.marker(), "pw"));
    form.add_field(TextField::new("pw"));
    let mut controls = bind(&form, &settings);
    assert_eq!(controls.len(), 1);

    // Channel for the test event source
    let (tx, rx) = mpsc::channel();

    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    let runner = Runner::new(es, ticker);

    // Producer: send the keystrokes for a short phrase
    for c in "rhythm".chars() {
        tx.send(AppEvent::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::NONE,
        )))
        .unwrap();
    }

    // Act: drive the event loop; the synthetic clock advances 140ms per key
    let mut clock_ms: u64 = 1_000;
    for _ in 0..100u32 {
        match runner.step() {
            AppEvent::Tick => {
                if !form.value("pw").is_empty() {
                    break;
                }
            }
            AppEvent::Resize => {}
            AppEvent::Key(key) => {
                if let KeyCode::Char(c) = key.code {
                    form.push_char("gen", c);
                    let now: SystemTime = UNIX_EPOCH + Duration::from_millis(clock_ms);
                    for control in controls.iter_mut() {
                        control.on_key_activity(&mut form, &settings, now);
                    }
                    clock_ms += 140;
                }
            }
        }
    }

    // Assert: the bound target carries a derived password
    let password = form.value("pw");
    assert_eq!(password.chars().count(), 3);
    assert!(password.chars().all(|c| "abcdef".contains(c)));
    assert!(controls[0].timings().len() >= 3);
}

#[test]
fn headless_flow_resets_when_field_is_emptied() {
    let settings = Settings::new("abcdef", 3, 2, DEFAULT_MARKER).unwrap();

    let mut form = Form::new();
    form.add_field(TextField::new("gen").with_attr(settings.marker(), "pw"));
    form.add_field(TextField::new("pw"));
    let mut controls = bind(&form, &settings);

    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let runner = Runner::new(es, FixedTicker::new(Duration::from_millis(5)));

    for c in "rhythm".chars() {
        tx.send(AppEvent::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::NONE,
        )))
        .unwrap();
    }
    for _ in 0..6 {
        tx.send(AppEvent::Key(KeyEvent::new(
            KeyCode::Backspace,
            KeyModifiers::NONE,
        )))
        .unwrap();
    }

    let mut clock_ms: u64 = 1_000;
    for _ in 0..100u32 {
        match runner.step() {
            AppEvent::Tick => break,
            AppEvent::Resize => {}
            AppEvent::Key(key) => {
                match key.code {
                    KeyCode::Char(c) => form.push_char("gen", c),
                    KeyCode::Backspace => form.pop_char("gen"),
                    _ => {}
                }
                let now: SystemTime = UNIX_EPOCH + Duration::from_millis(clock_ms);
                for control in controls.iter_mut() {
                    control.on_key_activity(&mut form, &settings, now);
                }
                clock_ms += 140;
            }
        }
    }

    assert_eq!(form.value("gen"), "");
    assert_eq!(form.value("pw"), "");
    assert!(controls[0].timings().is_empty());
}
