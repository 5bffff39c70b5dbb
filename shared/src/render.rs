//! Scene building for the wheel.
//!
//! A frame is described as an ordered list of [`DrawCommand`]s and replayed
//! onto any [`DrawSurface`]. The browser widget implements the surface for a
//! canvas 2D context; tests record scenes and compare them.

use crate::color::{translucent, EDGE_ALPHA};
use crate::entry::Entry;
use crate::geometry::{
    elide_label, is_drawable, label_font_px, segment_mid_angle, segment_span, wheel_radius,
    LABEL_RADIUS_FRACTION, RIM_GAP, RIM_WIDTH,
};

pub const RIM_OUTER_COLOR: &str = "#1f2937";
pub const RIM_INNER_COLOR: &str = "#f59e0b";
pub const EMPTY_WHEEL_COLOR: &str = "#e5e7eb";
pub const WEDGE_STROKE_COLOR: &str = "rgba(255, 255, 255, 0.85)";
pub const WEDGE_STROKE_WIDTH: f64 = 2.0;
pub const LABEL_COLOR: &str = "#ffffff";
pub const HUB_INNER_COLOR: &str = "#ffffff";
pub const HUB_OUTER_COLOR: &str = "#d1d5db";
pub const HUB_STROKE_COLOR: &str = "#9ca3af";
pub const POINTER_COLOR: &str = "#f59e0b";
pub const POINTER_STROKE_COLOR: &str = "#b45309";
pub const SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.35)";

#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(String),
    /// Radial gradient centred on (`x`, `y`) from `inner` at `r0` to `outer` at `r1`.
    Radial {
        x: f64,
        y: f64,
        r0: f64,
        r1: f64,
        inner: String,
        outer: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub color: String,
    pub blur: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        size: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        fill: Fill,
        stroke: Option<Stroke>,
    },
    /// Pie slice from the centre between `start` and `end`.
    Wedge {
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
        fill: Fill,
        stroke: Option<Stroke>,
    },
    /// Text centred at `distance` from (`cx`, `cy`) along `angle`, rotated
    /// to that angle.
    Text {
        cx: f64,
        cy: f64,
        angle: f64,
        distance: f64,
        text: String,
        font_px: f64,
        color: String,
        shadow: Option<Shadow>,
    },
    Polygon {
        points: Vec<(f64, f64)>,
        fill: Fill,
        stroke: Option<Stroke>,
        shadow: Option<Shadow>,
    },
}

pub trait DrawSurface {
    fn draw(&mut self, command: &DrawCommand);
}

/// Recorded list of draw commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn replay<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            surface.draw(command);
        }
    }
}

impl DrawSurface for Scene {
    fn draw(&mut self, command: &DrawCommand) {
        self.commands.push(command.clone());
    }
}

/// Builds the scene for `entries` at `rotation` on a square of side `size`.
pub fn build_scene(entries: &[Entry], rotation: f64, size: f64) -> Scene {
    let mut scene = Scene::default();
    let radius = wheel_radius(size);
    if !is_drawable(radius) {
        return scene;
    }

    let c = size / 2.0;
    let n = entries.len();

    scene.commands.push(DrawCommand::Clear { size });
    push_rim(&mut scene, c, radius);

    if n == 0 {
        scene.commands.push(DrawCommand::Circle {
            cx: c,
            cy: c,
            radius,
            fill: Fill::Solid(EMPTY_WHEEL_COLOR.to_string()),
            stroke: None,
        });
    }

    for (i, entry) in entries.iter().enumerate() {
        let (start, end) = segment_span(i, n, rotation);
        scene.commands.push(DrawCommand::Wedge {
            cx: c,
            cy: c,
            radius,
            start,
            end,
            fill: Fill::Radial {
                x: c,
                y: c,
                r0: 0.0,
                r1: radius,
                inner: entry.color().to_string(),
                outer: translucent(entry.color(), EDGE_ALPHA),
            },
            stroke: Some(Stroke {
                color: WEDGE_STROKE_COLOR.to_string(),
                width: WEDGE_STROKE_WIDTH,
            }),
        });
    }

    let font_px = label_font_px(radius, n);
    for (i, entry) in entries.iter().enumerate() {
        scene.commands.push(DrawCommand::Text {
            cx: c,
            cy: c,
            angle: segment_mid_angle(i, n, rotation),
            distance: radius * LABEL_RADIUS_FRACTION,
            text: elide_label(entry.label(), n),
            font_px,
            color: LABEL_COLOR.to_string(),
            shadow: Some(Shadow {
                color: SHADOW_COLOR.to_string(),
                blur: 3.0,
                offset_x: 1.0,
                offset_y: 1.0,
            }),
        });
    }

    push_hub(&mut scene, c, radius);
    push_pointer(&mut scene, c, radius);
    scene
}

/// Builds the scene and replays it onto `surface`.
pub fn render_wheel<S: DrawSurface + ?Sized>(surface: &mut S, entries: &[Entry], rotation: f64, size: f64) {
    build_scene(entries, rotation, size).replay(surface);
}

fn push_rim(scene: &mut Scene, c: f64, radius: f64) {
    scene.commands.push(DrawCommand::Circle {
        cx: c,
        cy: c,
        radius: radius + RIM_GAP + RIM_WIDTH,
        fill: Fill::Solid(RIM_OUTER_COLOR.to_string()),
        stroke: None,
    });
    scene.commands.push(DrawCommand::Circle {
        cx: c,
        cy: c,
        radius: radius + RIM_GAP,
        fill: Fill::Solid(RIM_INNER_COLOR.to_string()),
        stroke: None,
    });
}

fn push_hub(scene: &mut Scene, c: f64, radius: f64) {
    let hub_radius = (radius * 0.12).max(6.0);
    scene.commands.push(DrawCommand::Circle {
        cx: c,
        cy: c,
        radius: hub_radius,
        fill: Fill::Radial {
            x: c - hub_radius * 0.3,
            y: c - hub_radius * 0.3,
            r0: 0.0,
            r1: hub_radius,
            inner: HUB_INNER_COLOR.to_string(),
            outer: HUB_OUTER_COLOR.to_string(),
        },
        stroke: Some(Stroke {
            color: HUB_STROKE_COLOR.to_string(),
            width: 2.0,
        }),
    });
}

// Pointer sits over the top of the rim with its tip reaching into the wedges.
fn push_pointer(scene: &mut Scene, c: f64, radius: f64) {
    let size = (radius * 0.1).clamp(8.0, 24.0);
    let half_width = size * 0.75;
    let base_y = c - radius - size * 0.5;
    let tip_y = c - radius + size;
    scene.commands.push(DrawCommand::Polygon {
        points: vec![(c - half_width, base_y), (c + half_width, base_y), (c, tip_y)],
        fill: Fill::Solid(POINTER_COLOR.to_string()),
        stroke: Some(Stroke {
            color: POINTER_STROKE_COLOR.to_string(),
            width: 1.5,
        }),
        shadow: Some(Shadow {
            color: SHADOW_COLOR.to_string(),
            blur: 6.0,
            offset_x: 0.0,
            offset_y: 2.0,
        }),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn abcd() -> Vec<Entry> {
        ["A", "B", "C", "D"]
            .iter()
            .enumerate()
            .map(|(i, l)| Entry::with_id(format!("e{}", i), *l, crate::color::palette_color(i)))
            .collect()
    }

    fn wedges(scene: &Scene) -> Vec<(f64, f64)> {
        scene
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Wedge { start, end, .. } => Some((*start, *end)),
                _ => None,
            })
            .collect()
    }

    fn texts(scene: &Scene) -> Vec<String> {
        scene
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_render_is_idempotent() {
        let entries = abcd();
        let a = build_scene(&entries, 1.234, 400.0);
        let b = build_scene(&entries, 1.234, 400.0);
        assert_eq!(a, b);

        let mut recorded = Scene::default();
        render_wheel(&mut recorded, &entries, 1.234, 400.0);
        assert_eq!(recorded, a);
    }

    #[test]
    fn test_one_wedge_and_label_per_entry() {
        let entries = abcd();
        let scene = build_scene(&entries, 0.0, 400.0);
        assert_eq!(wedges(&scene).len(), 4);
        assert_eq!(texts(&scene), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_first_wedge_starts_at_top() {
        let scene = build_scene(&abcd(), 0.0, 400.0);
        let (start, end) = wedges(&scene)[0];
        assert!((start + PI / 2.0).abs() < 1e-12);
        assert!(end.abs() < 1e-12);
    }

    #[test]
    fn test_draw_order() {
        let scene = build_scene(&abcd(), 0.0, 400.0);
        let commands = scene.commands();
        assert!(matches!(commands[0], DrawCommand::Clear { .. }));
        assert!(matches!(commands[1], DrawCommand::Circle { .. }));
        assert!(matches!(commands[2], DrawCommand::Circle { .. }));
        assert!(matches!(commands[commands.len() - 2], DrawCommand::Circle { .. }));
        assert!(matches!(commands[commands.len() - 1], DrawCommand::Polygon { .. }));
    }

    #[test]
    fn test_wedge_gradient_uses_entry_color() {
        let scene = build_scene(&abcd(), 0.0, 400.0);
        let fill = scene
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Wedge { fill, .. } => Some(fill.clone()),
                _ => None,
            })
            .unwrap();
        match fill {
            Fill::Radial { inner, outer, .. } => {
                assert_eq!(inner, "#f97316");
                assert_eq!(outer, "rgba(249, 115, 22, 0.8)");
            }
            other => panic!("unexpected fill {:?}", other),
        }
    }

    #[test]
    fn test_named_color_wedge_has_translucent_edge() {
        let entries = vec![Entry::with_id("a", "A", "teal"), Entry::with_id("b", "B", "Tomato")];
        let edges: Vec<(String, String)> = build_scene(&entries, 0.0, 400.0)
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Wedge {
                    fill: Fill::Radial { inner, outer, .. },
                    ..
                } => Some((inner.clone(), outer.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(
            edges,
            vec![
                ("teal".to_string(), "rgba(0, 128, 128, 0.8)".to_string()),
                ("Tomato".to_string(), "rgba(255, 99, 71, 0.8)".to_string()),
            ]
        );
    }

    #[test]
    fn test_long_labels_elided() {
        let entries: Vec<Entry> = (0..13)
            .map(|i| Entry::with_id(i.to_string(), format!("Option number {}", i), "#000"))
            .collect();
        let scene = build_scene(&entries, 0.0, 400.0);
        assert!(texts(&scene).iter().all(|t| t.ends_with('…') && t.chars().count() == 9));
    }

    #[test]
    fn test_tiny_surface_draws_nothing() {
        assert!(build_scene(&abcd(), 0.0, 0.0).is_empty());
        assert!(build_scene(&abcd(), 0.0, 30.0).is_empty());
    }

    #[test]
    fn test_empty_wheel_draws_placeholder() {
        let scene = build_scene(&[], 0.0, 400.0);
        assert!(wedges(&scene).is_empty());
        assert!(texts(&scene).is_empty());
        assert!(scene.commands().iter().any(|c| matches!(
            c,
            DrawCommand::Circle { fill: Fill::Solid(color), .. } if color == EMPTY_WHEEL_COLOR
        )));
    }

    #[test]
    fn test_pointer_stays_fixed_while_wheel_turns() {
        let pointer = |rotation: f64| {
            build_scene(&abcd(), rotation, 400.0)
                .commands()
                .last()
                .cloned()
                .unwrap()
        };
        assert_eq!(pointer(0.0), pointer(2.5));
    }

    #[test]
    fn test_pointer_inside_canvas() {
        for size in [60.0, 200.0, 450.0, 1200.0] {
            let scene = build_scene(&abcd(), 0.0, size);
            if let Some(DrawCommand::Polygon { points, .. }) = scene.commands().last() {
                assert!(points.iter().all(|(x, y)| *x >= 0.0 && *y >= 0.0 && *x <= size && *y <= size));
            } else {
                panic!("pointer missing for size {}", size);
            }
        }
    }
}
