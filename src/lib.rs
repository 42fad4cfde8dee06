pub mod prelude;

pub use tally_core::{
    bar_graph::{format_value, Bar, BarGraph, BarVisual, GraphConfig},
    color::Rgba,
    easing::{CubicBezierEasing, Easing, EasingFunction},
    interpolation::Lerp,
    scene::{Node, NodeId, Polyline, Text, Vec2, VisualTree},
    tween::{Tween, TweenPosition},
};
