use maud::{html, Render, DOCTYPE};

pub(crate) struct HtmlHead<'a> {
    pub(crate) title: &'a str,
    pub(crate) description: Option<&'a str>,
}

impl<'a> Render for HtmlHead<'a> {
    fn render(&self) -> maud::Markup {
        html! {
          (DOCTYPE)
          head {
            title { (self.title) " | Valuator" }
            link rel="stylesheet" href="/static/main.css";
            @if let Some(description) = self.description {
                meta name="description" content=(description);
            }
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
          }
        }
    }
}
