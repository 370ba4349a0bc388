use maud::{html, Markup, Render};

use crate::web::{
    form::{FieldSpec, DISCOUNT_FIELDS, OPERATING_FIELDS, STRATEGY_FIELDS},
    templates::{components::help_tooltip::HelpTooltip, page::Page},
};

pub(crate) struct HomePage {}

struct FieldGroup<'a> {
    title: &'a str,
    fields: &'a [FieldSpec],
}

impl<'a> Render for FieldGroup<'a> {
    fn render(&self) -> Markup {
        html! {
            fieldset {
                legend { (self.title) }
                @for field in self.fields {
                    div class="field" {
                        label for=(field.name) { (field.label) }
                        ((HelpTooltip { id: field.name, text: field.help }))
                        input type="number" id=(field.name) name=(field.name) step=(field.step) placeholder=(field.placeholder);
                    }
                }
            }
        }
    }
}

impl Page for HomePage {
    fn get_name(&'_ self) -> String {
        "Nova avaliação".to_string()
    }

    fn get_description(&'_ self) -> Option<String> {
        Some("Avaliação por fluxo de caixa descontado com cenários".to_string())
    }

    fn draw_body(&self) -> Markup {
        html! {
            div class="container" {
                h1 class="hero-title" { "Valuator" }
                form method="post" action="/results" {
                    ((FieldGroup { title: "Operação", fields: OPERATING_FIELDS }))
                    ((FieldGroup { title: "Desconto", fields: DISCOUNT_FIELDS }))
                    ((FieldGroup { title: "Estratégia", fields: STRATEGY_FIELDS }))
                    input type="submit" value="Calcular";
                }
            }
        }
    }
}
