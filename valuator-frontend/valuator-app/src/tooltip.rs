//! Click-to-toggle help bubbles.
//!
//! A trigger's `aria-expanded` attribute is the only open/closed state. Its bubble (the
//! next sibling) mirrors it with the visible class, and carries the flip class when it
//! has to open towards the left to stay inside the viewport.

use log::debug;

use crate::AppResult;

pub const TRIGGER_SELECTOR: &str = ".help-btn";
pub const BUBBLE_SELECTOR: &str = ".help-bubble";
pub const VISIBLE_CLASS: &str = "visible";
pub const FLIP_CLASS: &str = "left";
/// Space kept between an open bubble and the right edge of the viewport.
pub const EDGE_BUFFER: f64 = 20.0;

/// DOM access the tooltip controller needs.
pub trait HelpDom {
    type Node: Clone + PartialEq;

    fn triggers(&self) -> Vec<Self::Node>;
    fn bubble_of(&self, trigger: &Self::Node) -> Option<Self::Node>;
    fn is_expanded(&self, trigger: &Self::Node) -> bool;
    fn set_expanded(&self, trigger: &Self::Node, expanded: bool) -> AppResult<()>;
    fn set_visible(&self, bubble: &Self::Node, visible: bool) -> AppResult<()>;
    fn set_flipped(&self, bubble: &Self::Node, flipped: bool) -> AppResult<()>;
    /// Right edge of the bubble's bounding box in viewport pixels.
    fn right_edge(&self, bubble: &Self::Node) -> f64;
    fn viewport_width(&self) -> f64;
}

/// What a click landed on.
#[derive(Clone, Debug, PartialEq)]
pub enum Click<N> {
    Trigger(N),
    Bubble,
    Outside,
}

pub struct HelpTooltips<D> {
    dom: D,
}

impl<D: HelpDom> HelpTooltips<D> {
    pub fn new(dom: D) -> Self {
        Self { dom }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Returns `true` when the click toggled a trigger and shouldn't propagate further.
    pub fn on_click(&self, click: Click<D::Node>) -> AppResult<bool> {
        match click {
            Click::Trigger(trigger) => {
                self.toggle(&trigger)?;
                Ok(true)
            }
            Click::Bubble => Ok(false),
            Click::Outside => {
                self.close_all()?;
                Ok(false)
            }
        }
    }

    pub fn on_keydown(&self, key: &str) -> AppResult<()> {
        if key == "Escape" {
            self.close_all()?;
        }
        Ok(())
    }

    /// Re-measures open bubbles. Never closes anything.
    pub fn on_resize(&self) -> AppResult<()> {
        for trigger in self.open_triggers() {
            if let Some(bubble) = self.dom.bubble_of(&trigger) {
                self.position(&bubble)?;
            }
        }
        Ok(())
    }

    /// Closes every other trigger before opening this one, so two are never open at once.
    pub fn toggle(&self, trigger: &D::Node) -> AppResult<()> {
        let open = !self.dom.is_expanded(trigger);
        for other in self.open_triggers() {
            if other != *trigger {
                self.set_open(&other, false)?;
            }
        }
        self.set_open(trigger, open)
    }

    pub fn close_all(&self) -> AppResult<()> {
        for trigger in self.open_triggers() {
            self.set_open(&trigger, false)?;
        }
        Ok(())
    }

    pub fn open_triggers(&self) -> Vec<D::Node> {
        self.dom
            .triggers()
            .into_iter()
            .filter(|trigger| self.dom.is_expanded(trigger))
            .collect()
    }

    fn set_open(&self, trigger: &D::Node, open: bool) -> AppResult<()> {
        self.dom.set_expanded(trigger, open)?;
        let Some(bubble) = self.dom.bubble_of(trigger) else {
            debug!("help trigger without a bubble");
            return Ok(());
        };
        self.dom.set_visible(&bubble, open)?;
        if open {
            self.position(&bubble)?;
        }
        Ok(())
    }

    /// Measures with the default right-hand placement and flips when that overflows.
    fn position(&self, bubble: &D::Node) -> AppResult<()> {
        self.dom.set_flipped(bubble, false)?;
        let overflows = self.dom.right_edge(bubble) + EDGE_BUFFER > self.dom.viewport_width();
        self.dom.set_flipped(bubble, overflows)
    }
}
