//! Incremental reconciliation of a bar graph against externally owned data.
//!
//! [`BarGraph`] owns a [`VisualTree`] holding an axis, gridline labels and one vertical line per
//! bar, and keeps it synchronized with a caller-owned slice of [`Bar`] records. The caller mutates
//! bar values, labels, colors and any [`GraphConfig`] field freely (typically by sampling
//! [`Tween`](crate::tween::Tween)s) and calls [`BarGraph::reconcile`] once per frame; each pass
//! reuses existing nodes wherever possible and only creates or detaches nodes when the bar count
//! or the shared scale actually changed.

use crate::color::Rgba;
use crate::scene::{Node, NodeId, Polyline, Text, Vec2, VisualTree};
use log::debug;

/// Minimum scale magnitude. Keeps the gridline math away from division by zero when every bar is
/// at or near zero, and gives an empty graph a sensible axis.
const MAGNITUDE_FLOOR: f32 = 10.0;

/// One data point to visualize. Owned and mutated by the caller; the reconciler only reads it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bar {
    /// Current numeric magnitude, rendered as the bar's vertical extent.
    pub value: f32,
    /// Display name drawn beneath the bar.
    pub label: Option<String>,
    /// Unit string appended to the numeric value drawn above the bar. The value label exists only
    /// while this is `Some`.
    pub value_suffix: Option<String>,
    /// Stroke override; bars without one use the shared axis color.
    pub color: Option<Rgba>,
}

impl Bar {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn labeled(value: f32, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
            ..Self::default()
        }
    }
}

/// Configuration for a [`BarGraph`].
///
/// Every field may be mutated between reconciliation passes (via
/// [`BarGraph::config_mut`]), and most are natural tween targets: a graph can grow, recolor or
/// re-anchor itself over time. The fluent methods mirror the fields for call-site construction.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
    /// Vertical extent of the axis, in scene units.
    pub height: f32,
    /// Font size for every label the graph creates.
    pub font_size: f32,
    /// Width of each bar's stroke.
    pub bar_width: f32,
    /// Horizontal gap before, between and after bars.
    pub bar_separation: f32,
    /// Anchor point the graph is positioned against.
    pub anchor: Vec2,
    /// Stroke color of the axis, and of any bar without its own color.
    pub axis_color: Rgba,
    /// Fill color of gridline, value and name labels.
    pub text_color: Rgba,
    /// Stroke width of the axis polyline.
    pub line_width: f32,
    /// Arrowhead size on both axis ends.
    pub arrow_size: f32,
    /// Value interval between consecutive gridline labels.
    pub label_step: f32,
    /// Whether per-bar value labels are visible.
    pub show_value_labels: bool,
    /// Unit string appended to every gridline label.
    pub axis_suffix: String,
    /// Extra value added above the largest bar so bars never touch the top of the axis.
    pub magnitude_headroom: f32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            height: 600.0,
            font_size: 30.0,
            bar_width: 100.0,
            bar_separation: 50.0,
            anchor: Vec2::ZERO,
            axis_color: Rgba::WHITE,
            text_color: Rgba::WHITE,
            line_width: 10.0,
            arrow_size: 15.0,
            label_step: 10.0,
            show_value_labels: true,
            axis_suffix: String::new(),
            magnitude_headroom: 0.0,
        }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn bar_width(mut self, bar_width: f32) -> Self {
        self.bar_width = bar_width;
        self
    }

    pub fn bar_separation(mut self, bar_separation: f32) -> Self {
        self.bar_separation = bar_separation;
        self
    }

    pub fn anchor(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn axis_color(mut self, axis_color: Rgba) -> Self {
        self.axis_color = axis_color;
        self
    }

    pub fn text_color(mut self, text_color: Rgba) -> Self {
        self.text_color = text_color;
        self
    }

    pub fn line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn arrow_size(mut self, arrow_size: f32) -> Self {
        self.arrow_size = arrow_size;
        self
    }

    pub fn label_step(mut self, label_step: f32) -> Self {
        self.label_step = label_step;
        self
    }

    pub fn show_value_labels(mut self, show_value_labels: bool) -> Self {
        self.show_value_labels = show_value_labels;
        self
    }

    pub fn axis_suffix(mut self, axis_suffix: impl Into<String>) -> Self {
        self.axis_suffix = axis_suffix.into();
        self
    }

    pub fn magnitude_headroom(mut self, magnitude_headroom: f32) -> Self {
        self.magnitude_headroom = magnitude_headroom;
        self
    }
}

/// Handles to the visual nodes backing one bar.
///
/// Label children are tracked by identity, never rediscovered by inspecting node contents, so a
/// name that happens to start with a digit or contain the value suffix cannot be misclassified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarVisual {
    /// The bar's vertical line. Parent of both labels.
    pub line: NodeId,
    /// Numeric label above the bar, present while the bar has a `value_suffix`.
    pub value_label: Option<NodeId>,
    /// Name label beneath the bar, present while the bar has a `label`.
    pub name_label: Option<NodeId>,
}

/// Keeps a bar-graph visual tree consistent with a live, externally mutated list of [`Bar`]s.
#[derive(Clone, Debug)]
pub struct BarGraph {
    tree: VisualTree,
    config: GraphConfig,
    axis: NodeId,
    gridline_labels: Vec<NodeId>,
    bar_visuals: Vec<BarVisual>,
    cached_magnitude: f32,
    cached_bar_count: usize,
}

impl Default for BarGraph {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

impl BarGraph {
    /// Creates a graph containing only its axis. Bars and gridlines appear on the first
    /// [`reconcile`](Self::reconcile) pass.
    pub fn new(config: GraphConfig) -> Self {
        let mut tree = VisualTree::new();
        let root = tree.root();
        let axis = tree.attach(
            root,
            Node::Polyline(Polyline {
                stroke: config.axis_color,
                line_width: config.line_width,
                start_arrow: true,
                end_arrow: true,
                arrow_size: config.arrow_size,
                ..Polyline::default()
            }),
        );
        Self {
            tree,
            config,
            axis,
            gridline_labels: Vec::new(),
            bar_visuals: Vec::new(),
            cached_magnitude: 0.0,
            cached_bar_count: 0,
        }
    }

    /// Runs one reconciliation pass against the current `bars`.
    ///
    /// Always refreshes the axis geometry and the per-bar visuals; regenerates gridline labels
    /// only when the scale magnitude changed since the previous pass. After the pass there is
    /// exactly one visual per bar, stale visuals (including their label children) are detached,
    /// and reconciling again without changing any input is a no-op.
    pub fn reconcile(&mut self, bars: &[Bar]) {
        let count = bars.len();
        let graph_width = count as f32 * self.config.bar_width
            + (count as f32 + 1.0) * self.config.bar_separation;

        // The anchor sits in the graph's lower-right quadrant, not at its center; existing
        // content is positioned against these offsets.
        let origin = Vec2::new(
            self.config.anchor.x - graph_width / 4.0,
            self.config.anchor.y + self.config.height / 4.0,
        );

        let magnitude = bars
            .iter()
            .map(|bar| bar.value)
            .fold(MAGNITUDE_FLOOR, f32::max)
            + self.config.magnitude_headroom;

        self.update_axis(origin, graph_width);
        if magnitude != self.cached_magnitude {
            self.update_gridlines(origin, magnitude);
        }
        if count != self.cached_bar_count {
            debug!("bar count changed: {} -> {count}", self.cached_bar_count);
        }
        self.update_bars(bars, origin, magnitude);

        self.cached_magnitude = magnitude;
        self.cached_bar_count = count;
    }

    /// The root group node, for insertion into a host scene.
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Read-only view of the visual tree, for drawing.
    pub fn tree(&self) -> &VisualTree {
        &self.tree
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Mutable configuration access, the seam through which callers animate the graph itself.
    pub fn config_mut(&mut self) -> &mut GraphConfig {
        &mut self.config
    }

    /// The scale magnitude of the most recent pass: largest bar value (floored at
    /// `MAGNITUDE_FLOOR`) plus the configured headroom.
    pub fn magnitude(&self) -> f32 {
        self.cached_magnitude
    }

    /// Number of bars in the most recent pass.
    pub fn bar_count(&self) -> usize {
        self.cached_bar_count
    }

    /// Visual handles for the bar at `index`.
    pub fn bar_visual(&self, index: usize) -> Option<&BarVisual> {
        self.bar_visuals.get(index)
    }

    /// Gridline label handles, ordered bottom-up from the baseline.
    pub fn gridline_labels(&self) -> &[NodeId] {
        &self.gridline_labels
    }

    fn update_axis(&mut self, origin: Vec2, graph_width: f32) {
        let height = self.config.height;
        let stroke = self.config.axis_color;
        let line_width = self.config.line_width;
        let arrow_size = self.config.arrow_size;
        if let Some(axis) = self.tree.polyline_mut(self.axis) {
            axis.points = vec![
                Vec2::new(origin.x, origin.y - height),
                origin,
                Vec2::new(origin.x + graph_width, origin.y),
            ];
            axis.stroke = stroke;
            axis.line_width = line_width;
            axis.arrow_size = arrow_size;
        }
    }

    fn update_gridlines(&mut self, origin: Vec2, magnitude: f32) {
        let height = self.config.height;
        let label_step = self.config.label_step;
        let font_size = self.config.font_size;
        let fill = self.config.text_color;
        let suffix = self.config.axis_suffix.clone();

        let label_distance = height / (magnitude / label_step);
        let needed = (height / label_distance).floor() as usize + 1;

        if needed < self.gridline_labels.len() {
            for id in self.gridline_labels.drain(needed..) {
                self.tree.detach(id);
            }
        }

        let root = self.tree.root();
        for i in 0..needed {
            let content = format!("{}{suffix}", format_value(i as f32 * label_step));
            let position = Vec2::new(
                origin.x - 2.0 * font_size,
                origin.y - i as f32 * label_distance,
            );
            match self.gridline_labels.get(i).copied() {
                Some(id) => {
                    if let Some(label) = self.tree.text_mut(id) {
                        label.content = content;
                        label.position = position;
                        label.font_size = font_size;
                        label.fill = fill;
                    }
                }
                None => {
                    let id = self.tree.attach(
                        root,
                        Node::Text(Text {
                            content,
                            position,
                            font_size,
                            fill,
                            ..Text::default()
                        }),
                    );
                    self.gridline_labels.push(id);
                }
            }
        }
    }

    fn update_bars(&mut self, bars: &[Bar], origin: Vec2, magnitude: f32) {
        for (index, bar) in bars.iter().enumerate() {
            if index < self.bar_visuals.len() {
                self.update_bar_visual(index, bar, origin, magnitude);
            } else {
                self.create_bar_visual(index, bar, origin, magnitude);
            }
        }
        // Slots past the current count hold visuals for bars that no longer exist.
        if bars.len() < self.bar_visuals.len() {
            for stale in self.bar_visuals.drain(bars.len()..) {
                self.tree.detach(stale.line);
            }
        }
    }

    fn update_bar_visual(&mut self, index: usize, bar: &Bar, origin: Vec2, magnitude: f32) {
        let (bar_x, top) = self.bar_geometry(index, bar.value, origin, magnitude);
        let bar_width = self.config.bar_width;
        let font_size = self.config.font_size;
        let text_color = self.config.text_color;
        let show_value_labels = self.config.show_value_labels;
        let stroke = bar.color.unwrap_or(self.config.axis_color);
        let visual = self.bar_visuals[index];

        if let Some(line) = self.tree.polyline_mut(visual.line) {
            line.points = vec![Vec2::new(bar_x, origin.y), Vec2::new(bar_x, top)];
            line.stroke = stroke;
            line.line_width = bar_width;
            line.opacity = 1.0;
        }

        match (&bar.value_suffix, visual.value_label) {
            (Some(suffix), Some(id)) => {
                if let Some(label) = self.tree.text_mut(id) {
                    label.content = format!("{}{suffix}", format_value(bar.value));
                    label.position = Vec2::new(bar_x, top - font_size);
                    label.font_size = font_size;
                    label.fill = text_color;
                    label.opacity = if show_value_labels { 1.0 } else { 0.0 };
                }
            }
            (Some(suffix), None) => {
                let id = self.tree.attach(
                    visual.line,
                    Node::Text(Text {
                        content: format!("{}{suffix}", format_value(bar.value)),
                        position: Vec2::new(bar_x, top - font_size),
                        font_size,
                        fill: text_color,
                        opacity: if show_value_labels { 1.0 } else { 0.0 },
                    }),
                );
                self.bar_visuals[index].value_label = Some(id);
            }
            (None, Some(id)) => {
                self.tree.detach(id);
                self.bar_visuals[index].value_label = None;
            }
            (None, None) => {}
        }

        match (&bar.label, visual.name_label) {
            (Some(name), Some(id)) => {
                if let Some(label) = self.tree.text_mut(id) {
                    label.content = name.clone();
                    label.position = Vec2::new(bar_x, origin.y + 2.0 * font_size);
                    label.font_size = font_size;
                    label.fill = text_color;
                }
            }
            (Some(name), None) => {
                let id = self.tree.attach(
                    visual.line,
                    Node::Text(Text {
                        content: name.clone(),
                        position: Vec2::new(bar_x, origin.y + 2.0 * font_size),
                        font_size,
                        fill: text_color,
                        ..Text::default()
                    }),
                );
                self.bar_visuals[index].name_label = Some(id);
            }
            (None, Some(id)) => {
                self.tree.detach(id);
                self.bar_visuals[index].name_label = None;
            }
            (None, None) => {}
        }
    }

    fn create_bar_visual(&mut self, index: usize, bar: &Bar, origin: Vec2, magnitude: f32) {
        let (bar_x, top) = self.bar_geometry(index, bar.value, origin, magnitude);
        let bar_width = self.config.bar_width;
        let font_size = self.config.font_size;
        let text_color = self.config.text_color;
        let show_value_labels = self.config.show_value_labels;
        let stroke = bar.color.unwrap_or(self.config.axis_color);

        let root = self.tree.root();
        let line = self.tree.attach(
            root,
            Node::Polyline(Polyline {
                points: vec![Vec2::new(bar_x, origin.y), Vec2::new(bar_x, top)],
                stroke,
                line_width: bar_width,
                z_index: -1,
                ..Polyline::default()
            }),
        );
        let value_label = bar.value_suffix.as_ref().map(|suffix| {
            self.tree.attach(
                line,
                Node::Text(Text {
                    content: format!("{}{suffix}", format_value(bar.value)),
                    position: Vec2::new(bar_x, top - font_size),
                    font_size,
                    fill: text_color,
                    opacity: if show_value_labels { 1.0 } else { 0.0 },
                }),
            )
        });
        let name_label = bar.label.as_ref().map(|name| {
            self.tree.attach(
                line,
                Node::Text(Text {
                    content: name.clone(),
                    position: Vec2::new(bar_x, origin.y + 2.0 * font_size),
                    font_size,
                    fill: text_color,
                    ..Text::default()
                }),
            )
        });
        self.bar_visuals.push(BarVisual {
            line,
            value_label,
            name_label,
        });
    }

    fn bar_geometry(&self, index: usize, value: f32, origin: Vec2, magnitude: f32) -> (f32, f32) {
        let bar_x = origin.x
            + self.config.bar_separation
            + index as f32 * (self.config.bar_width + self.config.bar_separation)
            + self.config.bar_width / 2.0;
        let top = origin.y - value / magnitude * self.config.height;
        (bar_x, top)
    }
}

/// Formats a value for display: whole numbers render without decimals, everything else with one
/// decimal place.
pub fn format_value(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn extent(graph: &BarGraph, index: usize) -> f32 {
        let visual = graph.bar_visual(index).unwrap();
        let line = graph.tree().polyline(visual.line).unwrap();
        line.points[0].y - line.points[1].y
    }

    fn label_text(graph: &BarGraph, id: NodeId) -> String {
        graph.tree().text(id).unwrap().content.clone()
    }

    mod formatting {
        use super::*;

        #[test]
        fn whole_numbers_have_no_decimals() {
            assert_eq!(format_value(24.0), "24");
            assert_eq!(format_value(0.0), "0");
        }

        #[test]
        fn fractional_numbers_have_one_decimal() {
            assert_eq!(format_value(24.5), "24.5");
            assert_eq!(format_value(3.25), "3.2");
        }
    }

    mod magnitude {
        use super::*;

        #[test]
        fn floored_when_all_values_are_small() {
            let mut graph = BarGraph::new(GraphConfig::new());
            graph.reconcile(&[Bar::new(1.0), Bar::new(2.0)]);

            assert_eq!(graph.magnitude(), 10.0);
        }

        #[test]
        fn headroom_is_added_above_the_largest_value() {
            let mut graph = BarGraph::new(GraphConfig::new().magnitude_headroom(10.0));
            graph.reconcile(&[Bar::new(47.0), Bar::new(24.0)]);

            assert_eq!(graph.magnitude(), 57.0);
        }

        #[test]
        fn empty_bar_set_still_has_a_scale() {
            let mut graph = BarGraph::new(GraphConfig::new().magnitude_headroom(10.0));
            graph.reconcile(&[]);

            assert_eq!(graph.magnitude(), 20.0);
            assert!(graph.gridline_labels().len() > 1);
        }
    }

    mod gridlines {
        use super::*;

        #[test]
        fn count_and_values_follow_the_scale() {
            // magnitude = max(10, floor) + 10 = 20, label distance = 600 / (20 / 10) = 300.
            let mut graph = BarGraph::new(GraphConfig::new().magnitude_headroom(10.0));
            graph.reconcile(&[Bar::new(10.0)]);

            let labels = graph.gridline_labels().to_vec();
            assert_eq!(labels.len(), 3);
            assert_eq!(label_text(&graph, labels[0]), "0");
            assert_eq!(label_text(&graph, labels[1]), "10");
            assert_eq!(label_text(&graph, labels[2]), "20");

            let y0 = graph.tree().text(labels[0]).unwrap().position.y;
            let y1 = graph.tree().text(labels[1]).unwrap().position.y;
            assert_relative_eq!(y0 - y1, 300.0, epsilon = 0.001);
        }

        #[test]
        fn suffix_is_appended_to_every_label() {
            let mut graph =
                BarGraph::new(GraphConfig::new().magnitude_headroom(10.0).axis_suffix("%"));
            graph.reconcile(&[Bar::new(10.0)]);

            let labels = graph.gridline_labels().to_vec();
            assert_eq!(label_text(&graph, labels[1]), "10%");
        }

        #[test]
        fn labels_are_reused_while_magnitude_is_unchanged() {
            let mut graph = BarGraph::new(GraphConfig::new().magnitude_headroom(10.0));
            let mut bars = vec![Bar::new(47.0), Bar::new(20.0)];
            graph.reconcile(&bars);
            let before = graph.gridline_labels().to_vec();

            // A value changes but the maximum does not.
            bars[1].value = 30.0;
            graph.reconcile(&bars);

            assert_eq!(graph.gridline_labels(), &before[..]);
        }

        #[test]
        fn shrinking_magnitude_detaches_excess_labels() {
            let mut graph = BarGraph::new(GraphConfig::new().magnitude_headroom(10.0));
            graph.reconcile(&[Bar::new(90.0)]);
            // magnitude 100 => distance 60 => 11 labels
            assert_eq!(graph.gridline_labels().len(), 11);
            let stale = graph.gridline_labels()[3..].to_vec();

            graph.reconcile(&[Bar::new(10.0)]);

            // magnitude 20 => distance 300 => 3 labels
            assert_eq!(graph.gridline_labels().len(), 3);
            for id in stale {
                assert!(!graph.tree().contains(id));
            }
        }
    }

    mod reconcile {
        use super::*;

        #[test]
        fn creates_one_visual_per_bar() {
            let mut graph = BarGraph::new(GraphConfig::new());
            graph.reconcile(&[Bar::new(1.0), Bar::new(2.0), Bar::new(3.0)]);

            assert_eq!(graph.bar_count(), 3);
            for index in 0..3 {
                let visual = graph.bar_visual(index).unwrap();
                assert!(graph.tree().polyline(visual.line).is_some());
            }
            assert!(graph.bar_visual(3).is_none());
        }

        #[test]
        fn shrinking_detaches_stale_visuals_and_their_labels() {
            let mut graph = BarGraph::new(GraphConfig::new());
            let bars = vec![
                Bar::labeled(1.0, "one"),
                Bar::labeled(2.0, "two"),
                Bar::labeled(3.0, "three"),
            ];
            graph.reconcile(&bars);
            let stale = *graph.bar_visual(2).unwrap();

            graph.reconcile(&bars[..1]);

            assert_eq!(graph.bar_count(), 1);
            assert!(graph.bar_visual(1).is_none());
            assert!(!graph.tree().contains(stale.line));
            assert!(!graph.tree().contains(stale.name_label.unwrap()));
        }

        #[test]
        fn regrowing_after_shrink_creates_fresh_attached_visuals() {
            let mut graph = BarGraph::new(GraphConfig::new());
            let bars = vec![Bar::new(1.0), Bar::new(2.0)];
            graph.reconcile(&bars);
            graph.reconcile(&[]);
            assert_eq!(graph.bar_count(), 0);

            graph.reconcile(&bars);

            assert_eq!(graph.bar_count(), 2);
            for index in 0..2 {
                let visual = graph.bar_visual(index).unwrap();
                assert!(graph.tree().contains(visual.line));
            }
        }

        #[test]
        fn reconcile_is_idempotent_without_input_changes() {
            let mut graph = BarGraph::new(GraphConfig::new().magnitude_headroom(10.0));
            let bars = vec![Bar::labeled(24.0, "Observers"), Bar::labeled(26.0, "Control")];
            graph.reconcile(&bars);
            let before = graph.tree().clone();

            graph.reconcile(&bars);

            assert_eq!(*graph.tree(), before);
        }

        #[test]
        fn bar_extent_is_proportional_to_the_shared_scale() {
            // magnitude = 47 + 10 = 57; extent = 47 / 57 * 600.
            let mut graph = BarGraph::new(GraphConfig::new().magnitude_headroom(10.0));
            graph.reconcile(&[Bar::new(47.0)]);

            assert_relative_eq!(extent(&graph, 0), 494.7368, epsilon = 0.01);
        }

        #[test]
        fn bars_grow_upward_from_a_common_baseline() {
            let mut graph = BarGraph::new(GraphConfig::new());
            graph.reconcile(&[Bar::new(5.0), Bar::new(8.0)]);

            let baseline = |index: usize| {
                let visual = graph.bar_visual(index).unwrap();
                graph.tree().polyline(visual.line).unwrap().points[0].y
            };
            assert_eq!(baseline(0), baseline(1));
            assert!(extent(&graph, 1) > extent(&graph, 0));
        }

        #[test]
        fn anchor_offsets_follow_the_quadrant_convention() {
            let config = GraphConfig::new().anchor(Vec2::new(100.0, 50.0));
            let mut graph = BarGraph::new(config);
            graph.reconcile(&[Bar::new(1.0)]);

            // graph width = 1 * 100 + 2 * 50 = 200; origin = (100 - 50, 50 + 150).
            let axis = graph.tree().children(graph.root())[0];
            let points = &graph.tree().polyline(axis).unwrap().points;
            assert_eq!(points[0], Vec2::new(50.0, -400.0));
            assert_eq!(points[1], Vec2::new(50.0, 200.0));
            assert_eq!(points[2], Vec2::new(250.0, 200.0));
        }

        #[test]
        fn bar_color_falls_back_to_the_axis_color() {
            let red = Rgba::rgb(1.0, 0.0, 0.0);
            let mut graph = BarGraph::new(GraphConfig::new());
            let mut bars = vec![Bar::new(5.0)];
            graph.reconcile(&bars);
            let line = graph.bar_visual(0).unwrap().line;
            assert_eq!(graph.tree().polyline(line).unwrap().stroke, Rgba::WHITE);

            bars[0].color = Some(red);
            graph.reconcile(&bars);
            assert_eq!(graph.tree().polyline(line).unwrap().stroke, red);
        }

        #[test]
        fn value_label_visibility_follows_the_config() {
            let mut graph = BarGraph::new(GraphConfig::new().show_value_labels(false));
            let mut bars = vec![Bar::new(24.0)];
            bars[0].value_suffix = Some("%".into());
            graph.reconcile(&bars);

            let label = graph.bar_visual(0).unwrap().value_label.unwrap();
            assert_eq!(graph.tree().text(label).unwrap().opacity, 0.0);
            assert_eq!(graph.tree().text(label).unwrap().content, "24%");

            graph.config_mut().show_value_labels = true;
            graph.reconcile(&bars);
            assert_eq!(graph.tree().text(label).unwrap().opacity, 1.0);
        }

        #[test]
        fn late_arriving_name_label_is_created() {
            let mut graph = BarGraph::new(GraphConfig::new());
            let mut bars = vec![Bar::new(5.0)];
            graph.reconcile(&bars);
            assert!(graph.bar_visual(0).unwrap().name_label.is_none());

            bars[0].label = Some("Targets".into());
            graph.reconcile(&bars);

            let label = graph.bar_visual(0).unwrap().name_label.unwrap();
            assert_eq!(graph.tree().text(label).unwrap().content, "Targets");
        }

        #[test]
        fn removed_name_label_is_detached() {
            let mut graph = BarGraph::new(GraphConfig::new());
            let mut bars = vec![Bar::labeled(5.0, "Targets")];
            graph.reconcile(&bars);
            let label = graph.bar_visual(0).unwrap().name_label.unwrap();

            bars[0].label = None;
            graph.reconcile(&bars);

            assert!(graph.bar_visual(0).unwrap().name_label.is_none());
            assert!(!graph.tree().contains(label));
        }
    }
}
