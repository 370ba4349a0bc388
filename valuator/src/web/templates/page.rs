use super::{
    components::{client::ClientBootstrap, footer::Footer},
    head::HtmlHead,
};
use axum::response::{Html, IntoResponse};
use maud::{html, Markup, Render};

pub(crate) trait Page {
    fn get_name(&'_ self) -> String;
    fn get_description(&'_ self) -> Option<String> {
        None
    }
    fn draw_body(&self) -> Markup;
}

pub(crate) struct RenderPage<T: Page>(pub(crate) T);

impl<T> IntoResponse for RenderPage<T>
where
    T: Page,
{
    fn into_response(self) -> axum::response::Response {
        Html(self.render().0).into_response()
    }
}

impl<T> Render for RenderPage<T>
where
    T: Page,
{
    fn render(&self) -> Markup {
        let page = &self.0;
        let description = page.get_description();
        let header = HtmlHead {
            title: &page.get_name(),
            description: description.as_deref(),
        };
        html! {
          (header)
          body {
            (self.0.draw_body())
            ((Footer{}))
            ((ClientBootstrap{}))
          }
        }
    }
}
