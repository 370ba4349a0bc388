use std::fmt::Write;

use valuator_api_types::Period;

use crate::{
    format::to_fixed,
    grid::{grid_nodes, labelled_periods, period_label},
    palette::Palette,
    scale::{Plot, Scenarios, ValueScale, HEADROOM},
    svg::{text_label, Anchor, SvgNode, SvgTag},
};

pub const DASH: &str = "4,4";

/// Line chart nodes. The domain always starts at zero; base is drawn last so it sits on top.
/// A series that only goes below zero has nothing to draw inside that domain.
pub fn line_chart(
    plot: &Plot,
    labels: &[Period],
    data: &Scenarios<'_>,
    palette: &Palette,
) -> Option<Vec<SvgNode>> {
    let max = data.values().fold(f64::NEG_INFINITY, f64::max);
    if max <= 0.0 && data.values().any(|v| v < 0.0) {
        return None;
    }
    let scale = ValueScale::new(0.0, max.max(0.0) * HEADROOM);
    let last = (labels.len() - 1) as f64;
    let x = |i: usize| plot.pad.left + (i as f64 / last) * plot.chart_width();

    let mut nodes = grid_nodes(plot, &scale, palette);
    nodes.extend(labelled_periods(labels.len()).map(|i| {
        text_label(
            x(i),
            plot.height - 10.0,
            &period_label(&labels[i]),
            Anchor::Middle,
            palette.text,
        )
    }));

    let lines = [
        (data.pes, &palette.pes, Some(DASH)),
        (data.opt, &palette.opt, Some(DASH)),
        (data.base, &palette.base, None),
    ];
    for (values, color, dash) in lines {
        if values.is_empty() {
            continue;
        }
        let mut d = String::new();
        for (i, value) in values.iter().enumerate() {
            let command = if i == 0 { 'M' } else { 'L' };
            let _ = write!(
                d,
                "{command}{},{}",
                to_fixed(x(i), 1),
                to_fixed(scale.y(plot, *value), 1)
            );
        }
        let mut path = SvgNode::new(SvgTag::Path)
            .attr("d", d)
            .attr("fill", "none")
            .attr("stroke", color.as_str())
            .attr("stroke-width", "2.5")
            .attr("stroke-linecap", "round")
            .attr("stroke-linejoin", "round");
        if let Some(dash) = dash {
            path = path.attr("stroke-dasharray", dash);
        }
        nodes.push(path);
    }
    Some(nodes)
}
