use maud::{html, PreEscaped, Render};

/// Loads the wasm client, which draws the charts and wires up the help tooltips.
pub(crate) struct ClientBootstrap {}

impl Render for ClientBootstrap {
    fn render(&self) -> maud::Markup {
        html! {
            script type="module" {
                (PreEscaped("import init, { hydrate } from '/pkg/valuator_client.js';\ninit('/pkg/valuator_client_bg.wasm').then(() => hydrate());"))
            }
        }
    }
}
