use crate::control::Control;
use crate::form::Form;
use crate::settings::Settings;

/// Scan the form once and build a controller for every field whose marker
/// attribute names an existing field.
///
/// Dangling references are skipped without diagnostics; fields added after
/// the scan are not picked up. The caller owns the returned controllers.
pub fn bind(form: &Form, settings: &Settings) -> Vec<Control> {
    form.fields()
        .iter()
        .filter_map(|field| {
            field
                .attr(settings.marker())
                .filter(|target| form.contains(target))
                .map(|target| Control::new(&field.id, target))
        })
        .collect()
}
