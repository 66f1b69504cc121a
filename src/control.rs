use std::time::SystemTime;

use crate::derive::derive_password;
use crate::form::Form;
use crate::settings::Settings;
use crate::util::time_diff_ms;

/// Per-pair controller: accumulates inter-keystroke timings from its source
/// field and writes derived passwords into its target field.
///
/// Key presses and releases feed through the same path; only the interval
/// between consecutive events matters.
#[derive(Debug, Clone)]
pub struct Control {
    source: String,
    target: String,
    timings: Vec<u64>,
    last_event: Option<SystemTime>,
}

impl Control {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            timings: Vec::new(),
            last_event: None,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Millisecond deltas recorded so far.
    pub fn timings(&self) -> &[u64] {
        &self.timings
    }

    /// Handle one key event on the source field at time `now`.
    ///
    /// Returns the derived password when this event produced one. The timing
    /// sequence keeps growing after the first derivation; every further
    /// qualifying event re-derives from the longer sequence. Emptying the
    /// source field below the minimum input length resets the sequence and
    /// clears the target.
    pub fn on_key_activity(
        &mut self,
        form: &mut Form,
        settings: &Settings,
        now: SystemTime,
    ) -> Option<String> {
        if let Some(prev) = self.last_event {
            let delta = time_diff_ms(prev, now);
            if delta > 0 {
                self.timings.push(delta);
            }
        }
        self.last_event = Some(now);

        let source_len = form.field(&self.source).map(|f| f.len()).unwrap_or(0);
        if source_len < settings.min_input_length() {
            if !form.value(&self.target).is_empty() {
                // Source dropped below the threshold: discard collected state
                self.last_event = None;
                self.timings.clear();
                form.set_value(&self.target, "");
            }
            None
        } else if self.timings.len() >= settings.password_length() {
            let password = derive_password(&self.timings, settings);
            form.set_value(&self.target, &password);
            Some(password)
        } else {
            None
        }
    }
}
