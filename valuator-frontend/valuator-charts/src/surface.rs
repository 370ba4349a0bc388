use std::{cell::RefCell, rc::Rc};

use crate::{svg::SvgNode, ChartError};

/// An `<svg>` element a chart can be drawn into.
pub trait ChartSurface {
    /// Rendered size in CSS pixels, zero while hidden.
    fn client_size(&self) -> (f64, f64);
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ChartError>;
    /// Removes every child node.
    fn clear(&mut self) -> Result<(), ChartError>;
    fn append(&mut self, node: &SvgNode) -> Result<(), ChartError>;
    /// Computed value of a theme custom property, if the page defines one.
    fn theme_value(&self, _name: &str) -> Option<String> {
        None
    }
}

impl<S: ChartSurface> ChartSurface for Rc<RefCell<S>> {
    fn client_size(&self) -> (f64, f64) {
        self.borrow().client_size()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.borrow().attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ChartError> {
        self.borrow_mut().set_attribute(name, value)
    }

    fn clear(&mut self) -> Result<(), ChartError> {
        self.borrow_mut().clear()
    }

    fn append(&mut self, node: &SvgNode) -> Result<(), ChartError> {
        self.borrow_mut().append(node)
    }

    fn theme_value(&self, name: &str) -> Option<String> {
        self.borrow().theme_value(name)
    }
}
