use crate::render::RenderedResults;

/// The host surface a [`WeatherRequestClient`](crate::WeatherRequestClient) drives.
///
/// Implementations own layout and styling; the client only reads the input
/// text and toggles these few states.
pub trait UiPort {
    /// Current contents of the city input.
    fn input(&self) -> String;

    /// `true`: hide error banner and results, show the spinner, disable submit.
    /// `false`: hide the spinner, enable submit.
    fn set_loading(&self, loading: bool);

    fn show_error(&self, text: &str);

    /// Replace stats and table contents, then reveal the results section.
    fn show_results(&self, results: &RenderedResults);
}

/// What asked for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Button,
    CtrlEnter,
}

/// Whether a key press in the input should submit the form.
pub fn is_submit_shortcut(ctrl: bool, key: &str) -> bool {
    ctrl && key == "Enter"
}
