//! Browser bindings for the chart bootstrap and the help tooltips.

use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use log::{error, info};
use valuator_charts::{
    svg::{SvgNode, SVG_NS},
    ChartError, ChartSurface,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, KeyboardEvent, Window};

use crate::{
    load_charts,
    tooltip::{BUBBLE_SELECTOR, FLIP_CLASS, TRIGGER_SELECTOR, VISIBLE_CLASS},
    AppError, AppResult, ChartPage, Click, HelpDom, HelpTooltips,
};

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Dom(js_error(value))
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return vec![];
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// A live `<svg>` element.
pub struct WebSurface {
    window: Window,
    document: Document,
    element: Element,
}

impl ChartSurface for WebSurface {
    fn client_size(&self) -> (f64, f64) {
        (
            self.element.client_width() as f64,
            self.element.client_height() as f64,
        )
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ChartError> {
        self.element
            .set_attribute(name, value)
            .map_err(|e| ChartError::Dom(js_error(e)))
    }

    fn clear(&mut self) -> Result<(), ChartError> {
        while let Some(child) = self.element.first_child() {
            self.element
                .remove_child(&child)
                .map_err(|e| ChartError::Dom(js_error(e)))?;
        }
        Ok(())
    }

    fn append(&mut self, node: &SvgNode) -> Result<(), ChartError> {
        let dom = |e: JsValue| ChartError::Dom(js_error(e));
        let child = self
            .document
            .create_element_ns(Some(SVG_NS), node.tag().name())
            .map_err(dom)?;
        for (name, value) in node.attributes() {
            child.set_attribute(name, value).map_err(dom)?;
        }
        if let Some(text) = node.text_content() {
            child.set_text_content(Some(text));
        }
        self.element.append_child(&child).map_err(dom)?;
        Ok(())
    }

    fn theme_value(&self, name: &str) -> Option<String> {
        let root = self.document.document_element()?;
        let style = self.window.get_computed_style(&root).ok().flatten()?;
        style.get_property_value(name).ok()
    }
}

pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    fn surface_of(&self, element: Element) -> WebSurface {
        WebSurface {
            window: self.window.clone(),
            document: self.document.clone(),
            element,
        }
    }
}

impl ChartPage for WebPage {
    type Surface = WebSurface;

    fn chart_data(&self) -> Option<String> {
        let element = self.document.get_element_by_id(crate::charts::CHART_DATA_ID)?;
        Some(element.text_content().unwrap_or_default())
    }

    fn surface(&self, id: &str) -> Option<WebSurface> {
        self.document
            .get_element_by_id(id)
            .map(|element| self.surface_of(element))
    }

    fn all_surfaces(&self) -> Vec<WebSurface> {
        query_all(&self.document, "svg")
            .into_iter()
            .map(|element| self.surface_of(element))
            .collect()
    }
}

pub struct WebHelpDom {
    window: Window,
    document: Document,
}

impl WebHelpDom {
    /// Works out whether a click hit a trigger, a bubble or neither.
    fn classify(&self, event: &Event) -> Click<Element> {
        let target = event.target().and_then(|target| {
            match target.dyn_into::<Element>() {
                Ok(element) => Some(element),
                // text nodes
                Err(target) => target
                    .dyn_into::<web_sys::Node>()
                    .ok()
                    .and_then(|node| node.parent_element()),
            }
        });
        let Some(target) = target else {
            return Click::Outside;
        };
        if let Ok(Some(trigger)) = target.closest(TRIGGER_SELECTOR) {
            Click::Trigger(trigger)
        } else if let Ok(Some(_)) = target.closest(BUBBLE_SELECTOR) {
            Click::Bubble
        } else {
            Click::Outside
        }
    }
}

impl HelpDom for WebHelpDom {
    type Node = Element;

    fn triggers(&self) -> Vec<Element> {
        query_all(&self.document, TRIGGER_SELECTOR)
    }

    fn bubble_of(&self, trigger: &Element) -> Option<Element> {
        trigger
            .next_element_sibling()
            .filter(|sibling| sibling.matches(BUBBLE_SELECTOR).unwrap_or(false))
    }

    fn is_expanded(&self, trigger: &Element) -> bool {
        trigger.get_attribute("aria-expanded").as_deref() == Some("true")
    }

    fn set_expanded(&self, trigger: &Element, expanded: bool) -> AppResult<()> {
        trigger.set_attribute("aria-expanded", if expanded { "true" } else { "false" })?;
        Ok(())
    }

    fn set_visible(&self, bubble: &Element, visible: bool) -> AppResult<()> {
        bubble
            .class_list()
            .toggle_with_force(VISIBLE_CLASS, visible)?;
        Ok(())
    }

    fn set_flipped(&self, bubble: &Element, flipped: bool) -> AppResult<()> {
        bubble.class_list().toggle_with_force(FLIP_CLASS, flipped)?;
        Ok(())
    }

    fn right_edge(&self, bubble: &Element) -> f64 {
        bubble.get_bounding_client_rect().right()
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(f64::INFINITY)
    }
}

/// Draws the charts and binds the tooltip listeners for the lifetime of the page.
pub fn mount() -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Dom("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| AppError::Dom("no document".to_string()))?;

    let page = WebPage {
        window: window.clone(),
        document: document.clone(),
    };
    info!("charts {:?}", load_charts(&page));

    let body = document
        .body()
        .ok_or_else(|| AppError::Dom("no body".to_string()))?;
    let tooltips = Rc::new(HelpTooltips::new(WebHelpDom {
        window: window.clone(),
        document: document.clone(),
    }));

    let click = tooltips.clone();
    EventListener::new_with_options(
        &body,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let hit = click.dom().classify(event);
            match click.on_click(hit) {
                Ok(true) => {
                    event.prevent_default();
                    event.stop_propagation();
                }
                Ok(false) => {}
                Err(e) => error!("help tooltip click failed {e}"),
            }
        },
    )
    .forget();

    let keydown = tooltips.clone();
    EventListener::new(&document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if let Err(e) = keydown.on_keydown(&event.key()) {
            error!("help tooltip keydown failed {e}");
        }
    })
    .forget();

    EventListener::new(&window, "resize", move |_| {
        if let Err(e) = tooltips.on_resize() {
            error!("help tooltip resize failed {e}");
        }
    })
    .forget();

    Ok(())
}
