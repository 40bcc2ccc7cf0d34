use maud::{html, Markup};

/// In-page error box. The message may span multiple lines; the stylesheet
/// preserves the line breaks.
pub fn error_box(message: &str) -> Markup {
    html! {
        div class="error-box" role="alert" {
            (message)
        }
    }
}
