use std::iter::once;

use itertools::Itertools;
use valuator_api_types::Period;

use crate::{
    grid::{grid_nodes, labelled_periods, period_label},
    palette::Palette,
    scale::{Plot, Scenarios, ValueScale, HEADROOM},
    svg::{text_label, Anchor, SvgNode, SvgTag},
};

/// Share of each period's group width left empty around its bars.
const GROUP_PADDING: f64 = 0.2;
/// Bars shorter than this are stretched so they stay visible.
const MIN_BAR_HEIGHT: f64 = 1.0;

/// Grouped bar chart nodes: pessimistic, base and optimistic side by side in every period.
/// The domain always includes zero so signed values hang off the zero line.
pub fn bar_chart(
    plot: &Plot,
    labels: &[Period],
    data: &Scenarios<'_>,
    palette: &Palette,
) -> Option<Vec<SvgNode>> {
    let (min, max) = data
        .values()
        .chain(once(0.0))
        .minmax()
        .into_option()
        .unwrap_or((0.0, 0.0));
    let scale = ValueScale::new(min * HEADROOM, max * HEADROOM);
    let zero_y = scale.y(plot, 0.0);

    let periods = labels.len() as f64;
    let group_width = plot.chart_width() / periods;
    let padding = group_width * GROUP_PADDING;
    let bar_width = (group_width - padding) / 3.0;
    let x = |i: usize| plot.pad.left + (i as f64 / periods) * plot.chart_width();

    let mut nodes = grid_nodes(plot, &scale, palette);
    nodes.extend(labelled_periods(labels.len()).map(|i| {
        text_label(
            x(i) + group_width / 2.0,
            plot.height - 10.0,
            &period_label(&labels[i]),
            Anchor::Middle,
            palette.text,
        )
    }));

    let groups = [
        (data.pes, &palette.pes),
        (data.base, &palette.base),
        (data.opt, &palette.opt),
    ];
    for i in 0..labels.len() {
        for (offset, (values, color)) in groups.iter().enumerate() {
            let Some(&value) = values.get(i) else {
                continue;
            };
            let value_y = scale.y(plot, value);
            let y = if value >= 0.0 { value_y } else { zero_y };
            let height = (value_y - zero_y).abs().max(MIN_BAR_HEIGHT);
            nodes.push(
                SvgNode::new(SvgTag::Rect)
                    .num("x", x(i) + padding / 2.0 + offset as f64 * bar_width)
                    .num("y", y)
                    .num("width", (bar_width - 1.0).max(0.0))
                    .num("height", height)
                    .attr("fill", color.as_str())
                    .attr("rx", "1"),
            );
        }
    }
    Some(nodes)
}
