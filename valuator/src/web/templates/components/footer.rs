use maud::{html, Render};

pub(crate) struct Footer {}

impl Render for Footer {
    fn render(&self) -> maud::Markup {
        html! {
            footer {
                span {
                    "Estimativas ilustrativas de fluxo de caixa descontado. Não é recomendação de investimento."
                }
            }
        }
    }
}
