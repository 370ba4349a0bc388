use maud::{html, Render};

/// A `?` trigger followed by its bubble. The client toggles `aria-expanded` and the
/// bubble's classes, so the markup starts closed.
pub(crate) struct HelpTooltip<'a> {
    pub(crate) id: &'a str,
    pub(crate) text: &'a str,
}

impl<'a> Render for HelpTooltip<'a> {
    fn render(&self) -> maud::Markup {
        let bubble_id = format!("help-{}", self.id);
        html! {
            span class="help" {
                button type="button" class="help-btn" aria-expanded="false" aria-controls=(bubble_id) aria-label="Ajuda" { "?" }
                span class="help-bubble" id=(bubble_id) role="tooltip" { (self.text) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_is_the_next_sibling() {
        let markup = HelpTooltip {
            id: "wacc",
            text: "Custo <de> capital",
        }
        .render()
        .into_string();
        assert_eq!(
            markup,
            r#"<span class="help"><button type="button" class="help-btn" aria-expanded="false" aria-controls="help-wacc" aria-label="Ajuda">?</button><span class="help-bubble" id="help-wacc" role="tooltip">Custo &lt;de&gt; capital</span></span>"#
        );
    }
}
