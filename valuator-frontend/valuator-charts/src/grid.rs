use itertools::Itertools;
use valuator_api_types::Period;

use crate::{
    format::fmt_compact_br,
    palette::Palette,
    scale::{Plot, ValueScale},
    svg::{text_label, Anchor, SvgNode, SvgTag},
};

pub const PERIOD_PREFIX: &str = "Ano ";

/// Dashed reference lines at the bottom, middle and top of the domain plus the solid base axis.
///
/// Coinciding levels are drawn once and levels that fall outside the plot are skipped.
pub fn grid_nodes(plot: &Plot, scale: &ValueScale, palette: &Palette) -> Vec<SvgNode> {
    let mid = (scale.min + scale.max) / 2.0;
    let mut nodes = Vec::new();
    for value in [scale.min, mid, scale.max].into_iter().dedup() {
        let y = scale.y(plot, value);
        if y < plot.pad.top || y > plot.bottom() {
            continue;
        }
        nodes.push(
            SvgNode::new(SvgTag::Line)
                .num("x1", plot.pad.left)
                .num("y1", y)
                .num("x2", plot.right())
                .num("y2", y)
                .attr("stroke", palette.grid)
                .attr("stroke-dasharray", "4,4")
                .attr("shape-rendering", "crispEdges"),
        );
        nodes.push(text_label(
            plot.pad.left - 8.0,
            y + 4.0,
            &fmt_compact_br(value),
            Anchor::End,
            palette.text,
        ));
    }
    nodes.push(
        SvgNode::new(SvgTag::Line)
            .num("x1", plot.pad.left)
            .num("y1", plot.bottom())
            .num("x2", plot.right())
            .num("y2", plot.bottom())
            .attr("stroke", palette.axis),
    );
    nodes
}

/// Only the first, middle and last periods get a label.
pub fn labelled_periods(periods: usize) -> impl Iterator<Item = usize> {
    (0..periods).filter(move |&i| i == 0 || i == periods - 1 || i == periods / 2)
}

pub fn period_label(period: &Period) -> String {
    format!("{PERIOD_PREFIX}{period}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_lines(nodes: &[SvgNode]) -> usize {
        nodes
            .iter()
            .filter(|n| n.tag() == SvgTag::Line && n.attribute("stroke-dasharray").is_some())
            .count()
    }

    #[test]
    fn three_levels_with_labels() {
        let plot = Plot::resolve((600.0, 220.0));
        let nodes = grid_nodes(&plot, &ValueScale::new(0.0, 330.0), &Palette::default());
        assert_eq!(grid_lines(&nodes), 3);
        let labels: Vec<_> = nodes.iter().filter_map(SvgNode::text_content).collect();
        assert_eq!(labels, vec!["0", "165", "330"]);
        let axis = nodes.last().unwrap();
        assert_eq!(axis.attribute("y1"), Some("190"));
        assert_eq!(axis.attribute("stroke"), Some("#D1D5DB"));
        assert_eq!(axis.attribute("stroke-dasharray"), None);
    }

    #[test]
    fn flat_domain_draws_one_level() {
        let plot = Plot::resolve((600.0, 220.0));
        let nodes = grid_nodes(&plot, &ValueScale::new(0.0, 0.0), &Palette::default());
        assert_eq!(grid_lines(&nodes), 1);
        assert_eq!(nodes.len(), 3);
    }

    #[test]
    fn label_positions() {
        assert_eq!(labelled_periods(3).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(labelled_periods(2).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(labelled_periods(6).collect::<Vec<_>>(), vec![0, 3, 5]);
        assert_eq!(period_label(&Period::from("2023")), "Ano 2023");
    }
}
