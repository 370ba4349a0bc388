use valuator_api_types::SeriesMap;

pub const DEFAULT_WIDTH: f64 = 600.0;
pub const DEFAULT_HEIGHT: f64 = 220.0;
/// Fraction added beyond the extreme values so lines and bars don't touch the edge.
pub const HEADROOM: f64 = 1.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

pub const PADDING: Padding = Padding {
    top: 20.0,
    right: 20.0,
    bottom: 30.0,
    left: 45.0,
};

/// Pixel frame of one chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
    pub pad: Padding,
}

impl Plot {
    /// Uses the rendered size, falling back per dimension when it is zero.
    pub fn resolve((width, height): (f64, f64)) -> Self {
        let or_default = |value: f64, default: f64| if value > 0.0 { value } else { default };
        Self {
            width: or_default(width, DEFAULT_WIDTH),
            height: or_default(height, DEFAULT_HEIGHT),
            pad: PADDING,
        }
    }

    pub fn chart_width(&self) -> f64 {
        self.width - self.pad.left - self.pad.right
    }

    pub fn chart_height(&self) -> f64 {
        self.height - self.pad.top - self.pad.bottom
    }

    pub fn right(&self) -> f64 {
        self.width - self.pad.right
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.pad.bottom
    }

    pub fn view_box(&self) -> String {
        format!(
            "0 0 {} {}",
            crate::format::fmt_number(self.width),
            crate::format::fmt_number(self.height)
        )
    }
}

/// Linear value to y mapping over `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
}

impl ValueScale {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Span of the domain. A flat domain maps as if it were one unit tall.
    pub fn range(&self) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 || range.is_nan() {
            1.0
        } else {
            range
        }
    }

    pub fn y(&self, plot: &Plot, value: f64) -> f64 {
        plot.pad.top + plot.chart_height()
            - ((value - self.min) / self.range()) * plot.chart_height()
    }
}

/// The drawable part of a [`SeriesMap`]: every scenario cut to the label count,
/// missing optional scenarios as empty slices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scenarios<'a> {
    pub base: &'a [f64],
    pub opt: &'a [f64],
    pub pes: &'a [f64],
}

impl<'a> Scenarios<'a> {
    /// `None` when there is nothing to draw: fewer than two periods or no base values.
    pub fn plottable(periods: usize, series: &'a SeriesMap) -> Option<Self> {
        if periods < 2 {
            return None;
        }
        let cut = |values: &'a Option<Vec<f64>>| {
            values
                .as_deref()
                .map(|values| &values[..values.len().min(periods)])
                .unwrap_or_default()
        };
        let base = cut(&series.base);
        if base.is_empty() {
            return None;
        }
        Some(Self {
            base,
            opt: cut(&series.opt),
            pes: cut(&series.pes),
        })
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + 'a {
        let Scenarios { base, opt, pes } = *self;
        base.iter().chain(opt).chain(pes).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_elements_use_default_size() {
        let plot = Plot::resolve((0.0, 0.0));
        assert_eq!((plot.width, plot.height), (600.0, 220.0));
        assert_eq!(plot.chart_width(), 535.0);
        assert_eq!(plot.chart_height(), 170.0);
        let plot = Plot::resolve((800.0, 0.0));
        assert_eq!((plot.width, plot.height), (800.0, 220.0));
        assert_eq!(plot.view_box(), "0 0 800 220");
    }

    #[test]
    fn maps_domain_to_plot() {
        let plot = Plot::resolve((600.0, 220.0));
        let scale = ValueScale::new(0.0, 100.0);
        assert_eq!(scale.y(&plot, 0.0), 190.0);
        assert_eq!(scale.y(&plot, 100.0), 20.0);
        assert_eq!(scale.y(&plot, 50.0), 105.0);
        let flat = ValueScale::new(0.0, 0.0);
        assert_eq!(flat.range(), 1.0);
        assert_eq!(flat.y(&plot, 0.0), 190.0);
    }

    #[test]
    fn plottable_scenarios() {
        let series = SeriesMap::new(vec![1.0, 2.0, 3.0, 4.0]).with_optimistic(vec![5.0]);
        let scenarios = Scenarios::plottable(3, &series).unwrap();
        assert_eq!(scenarios.base, &[1.0, 2.0, 3.0]);
        assert_eq!(scenarios.opt, &[5.0]);
        assert!(scenarios.pes.is_empty());
        assert_eq!(scenarios.values().count(), 4);

        assert!(Scenarios::plottable(1, &series).is_none());
        assert!(Scenarios::plottable(3, &SeriesMap::default()).is_none());
        assert!(Scenarios::plottable(3, &SeriesMap::new(vec![])).is_none());
    }
}
