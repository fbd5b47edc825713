//! Roulette wheel primitive
//!
//! [`Wheel`] draws the segments with iced's Canvas and [`WheelMotion`]
//! drives the spin towards a chosen segment.
//!
//! # Geometry
//!
//! Segment 0 starts at the top and segments run clockwise. The pointer is
//! fixed at the top; `rotation` turns the whole wheel clockwise.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::time::{Duration, Instant};

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke, Text};
use iced::{Color, Element, Point, Radians, Renderer, Theme, mouse};

use crate::features::{Entry, SpinRequest};

/// Spin length at a duration multiplier of 1.0
pub const BASE_SPIN_DURATION: Duration = Duration::from_secs(10);

/// Whole turns before the wheel settles
const FULL_TURNS: f32 = 5.0;

/// Longest label drawn before truncation
const MAX_LABEL_CHARS: usize = 14;

/// Rotation that puts the centre of `index` under the pointer
fn resting_rotation(index: usize, segment_count: usize) -> f32 {
    let segment = TAU / segment_count as f32;
    (TAU - (index as f32 + 0.5) * segment).rem_euclid(TAU)
}

/// Final rotation for a spin starting at `current`
pub fn target_rotation(current: f32, prize_index: usize, segment_count: usize) -> f32 {
    if segment_count == 0 {
        return current;
    }
    let rest = resting_rotation(prize_index, segment_count);
    let delta = (rest - current.rem_euclid(TAU)).rem_euclid(TAU);
    current + FULL_TURNS * TAU + delta
}

/// Segment currently under the pointer
pub fn segment_at_pointer(rotation: f32, segment_count: usize) -> Option<usize> {
    if segment_count == 0 {
        return None;
    }
    let segment = TAU / segment_count as f32;
    let local = (-rotation).rem_euclid(TAU);
    Some(((local / segment) as usize).min(segment_count - 1))
}

/// Cubic ease-out
fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[derive(Debug, Clone, Copy)]
struct ActiveSpin {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

/// Spin motion state
///
/// `tick` reports the end of a spin exactly once.
#[derive(Debug, Clone, Default)]
pub struct WheelMotion {
    rotation: f32,
    spin: Option<ActiveSpin>,
}

impl WheelMotion {
    /// Begin spinning towards `request.prize_index`
    ///
    /// A spin already in progress is replaced.
    pub fn start(&mut self, request: SpinRequest, duration: Duration, now: Instant) {
        let to = target_rotation(self.rotation, request.prize_index, request.segment_count);
        self.spin = Some(ActiveSpin {
            from: self.rotation,
            to,
            started: now,
            duration,
        });
    }

    /// Advance to `now`; returns `true` on the tick the spin finishes
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(spin) = self.spin else {
            return false;
        };

        let elapsed = now.saturating_duration_since(spin.started);
        if elapsed >= spin.duration {
            self.rotation = spin.to.rem_euclid(TAU);
            self.spin = None;
            return true;
        }

        let t = elapsed.as_secs_f32() / spin.duration.as_secs_f32();
        self.rotation = spin.from + (spin.to - spin.from) * ease_out(t);
        false
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    /// Current rotation in radians, clockwise
    pub fn rotation(&self) -> f32 {
        self.rotation
    }
}

/// Wheel canvas program
#[derive(Debug, Clone, Copy)]
pub struct Wheel<'a> {
    entries: &'a [Entry],
    rotation: f32,
    background_colors: &'a [Color],
    text_colors: &'a [Color],
    highlight: bool,
}

impl<'a> Wheel<'a> {
    pub fn new(entries: &'a [Entry], rotation: f32) -> Self {
        Self {
            entries,
            rotation,
            background_colors: &[],
            text_colors: &[],
            highlight: false,
        }
    }

    pub fn background_colors(mut self, colors: &'a [Color]) -> Self {
        self.background_colors = colors;
        self
    }

    pub fn text_colors(mut self, colors: &'a [Color]) -> Self {
        self.text_colors = colors;
        self
    }

    /// Outline the segment under the pointer
    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }
}

fn cycle(colors: &[Color], index: usize, fallback: Color) -> Color {
    if colors.is_empty() {
        fallback
    } else {
        colors[index % colors.len()]
    }
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        label.to_string()
    } else {
        let mut short: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
        short.push('…');
        short
    }
}

impl<Message> Program<Message> for Wheel<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let pointer_height = 22.0;
        let radius = (bounds.width.min(bounds.height) / 2.0 - pointer_height / 2.0 - 2.0).max(1.0);
        let rim = crate::ui::theme::wheel_rim(theme);
        let count = self.entries.len();

        if count == 0 {
            frame.fill(
                &Path::circle(center, radius),
                crate::ui::theme::surface(theme),
            );
        } else {
            let segment = TAU / count as f32;
            // Canvas angles start at +x; the wheel starts at the top
            let base = -FRAC_PI_2 + self.rotation;

            for (i, entry) in self.entries.iter().enumerate() {
                let start = base + i as f32 * segment;
                let end = start + segment;
                let slice = Path::new(|builder| {
                    builder.move_to(center);
                    builder.arc(iced::widget::canvas::path::Arc {
                        center,
                        radius,
                        start_angle: Radians(start),
                        end_angle: Radians(end),
                    });
                    builder.close();
                });
                frame.fill(
                    &slice,
                    cycle(self.background_colors, i, Color::from_rgb8(0xff, 0x8f, 0x43)),
                );
                frame.stroke(
                    &slice,
                    Stroke::default().with_width(1.0).with_color(rim),
                );

                let mid = start + segment / 2.0;
                let label_radius = radius * 0.62;
                frame.fill_text(Text {
                    content: truncate_label(&entry.label),
                    position: Point::new(
                        center.x + label_radius * mid.cos(),
                        center.y + label_radius * mid.sin(),
                    ),
                    color: cycle(self.text_colors, i, Color::WHITE),
                    size: iced::Pixels(if count > 12 { 11.0 } else { 15.0 }),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    align_y: iced::alignment::Vertical::Center,
                    ..Text::default()
                });
            }

            let highlighted = if self.highlight {
                segment_at_pointer(self.rotation, count)
            } else {
                None
            };
            if let Some(index) = highlighted {
                let start = base + index as f32 * segment;
                let outline = Path::new(|builder| {
                    builder.arc(iced::widget::canvas::path::Arc {
                        center,
                        radius: radius - 3.0,
                        start_angle: Radians(start),
                        end_angle: Radians(start + segment),
                    });
                });
                frame.stroke(
                    &outline,
                    Stroke::default()
                        .with_width(5.0)
                        .with_color(crate::ui::theme::WINNER_GOLD),
                );
            }
        }

        // Rim and hub
        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(4.0).with_color(rim),
        );
        frame.fill(&Path::circle(center, radius * 0.12), rim);
        frame.fill(&Path::circle(center, radius * 0.08), Color::WHITE);

        // Pointer at the top, tip towards the centre
        let tip_y = center.y - radius + pointer_height * 0.6;
        let pointer = Path::new(|builder| {
            builder.move_to(Point::new(center.x - 12.0, tip_y - pointer_height));
            builder.line_to(Point::new(center.x + 12.0, tip_y - pointer_height));
            builder.line_to(Point::new(center.x, tip_y));
            builder.close();
        });
        frame.fill(&pointer, crate::ui::theme::POINTER_RED);
        frame.stroke(
            &pointer,
            Stroke::default().with_width(1.5).with_color(Color::WHITE),
        );

        vec![frame.into_geometry()]
    }
}

/// Create a wheel element of the given size
pub fn view<'a, Message: 'a>(wheel: Wheel<'a>, size: f32) -> Element<'a, Message> {
    Canvas::new(wheel).width(size).height(size).into()
}
