//! Confetti overlay primitive
//!
//! Particles live in normalized coordinates (0..1 on both axes) and are
//! scaled to the canvas bounds when drawn, so the effect does not need to
//! know the window size.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Program};
use iced::{Color, Element, Fill, Point, Renderer, Size, Theme, Vector, mouse};
use rand::Rng;

/// Number of pieces in one burst
const PARTICLE_COUNT: usize = 160;

/// Downward acceleration (normalized units / s²)
const GRAVITY: f32 = 0.35;

/// Maximum fall speed (normalized units / s)
const TERMINAL_VELOCITY: f32 = 0.45;

const COLORS: [Color; 8] = [
    Color::from_rgb(0.96, 0.26, 0.21),
    Color::from_rgb(0.91, 0.12, 0.39),
    Color::from_rgb(0.61, 0.15, 0.69),
    Color::from_rgb(0.25, 0.32, 0.71),
    Color::from_rgb(0.13, 0.59, 0.95),
    Color::from_rgb(0.0, 0.74, 0.83),
    Color::from_rgb(0.55, 0.76, 0.29),
    Color::from_rgb(1.0, 0.76, 0.03),
];

#[derive(Debug, Clone, Copy)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    angle: f32,
    spin: f32,
    wobble: f32,
    width: f32,
    height: f32,
    color: Color,
}

impl Particle {
    fn random<R: Rng>(rng: &mut R, y: f32) -> Self {
        Self {
            x: rng.random_range(0.0..1.0),
            y,
            vx: rng.random_range(-0.05..0.05),
            vy: rng.random_range(0.02..0.15),
            angle: rng.random_range(0.0..std::f32::consts::TAU),
            spin: rng.random_range(-6.0..6.0),
            wobble: rng.random_range(0.0..std::f32::consts::TAU),
            width: rng.random_range(6.0..12.0),
            height: rng.random_range(3.0..6.0),
            color: COLORS[rng.random_range(0..COLORS.len())],
        }
    }
}

/// Falling confetti, recycled from the top while active
#[derive(Debug, Clone, Default)]
pub struct Confetti {
    particles: Vec<Particle>,
}

impl Confetti {
    /// Start a new burst above the top edge
    pub fn burst(&mut self) {
        self.burst_with(&mut rand::rng());
    }

    pub fn burst_with<R: Rng>(&mut self, rng: &mut R) {
        self.particles = (0..PARTICLE_COUNT)
            .map(|_| {
                let y = rng.random_range(-1.0..0.0);
                Particle::random(rng, y)
            })
            .collect();
    }

    /// Remove all particles
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.tick_with(dt, &mut rand::rng());
    }

    pub fn tick_with<R: Rng>(&mut self, dt: f32, rng: &mut R) {
        // Large gaps (e.g. a stalled window) would teleport particles
        let dt = dt.clamp(0.0, 0.1);

        for particle in &mut self.particles {
            particle.vy = (particle.vy + GRAVITY * dt).min(TERMINAL_VELOCITY);
            particle.wobble += 3.0 * dt;
            particle.x += (particle.vx + 0.03 * particle.wobble.sin()) * dt;
            particle.y += particle.vy * dt;
            particle.angle += particle.spin * dt;

            if particle.y > 1.05 || particle.x < -0.05 || particle.x > 1.05 {
                *particle = Particle::random(rng, -0.05);
            }
        }
    }
}

/// Canvas program drawing the current particles
#[derive(Debug, Clone, Copy)]
pub struct ConfettiLayer<'a> {
    confetti: &'a Confetti,
}

impl<Message> Program<Message> for ConfettiLayer<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for particle in &self.confetti.particles {
            if particle.y < -0.02 {
                continue;
            }
            frame.with_save(|frame| {
                frame.translate(Vector::new(
                    particle.x * bounds.width,
                    particle.y * bounds.height,
                ));
                frame.rotate(particle.angle);
                frame.fill_rectangle(
                    Point::new(-particle.width / 2.0, -particle.height / 2.0),
                    Size::new(particle.width, particle.height),
                    particle.color,
                );
            });
        }

        vec![frame.into_geometry()]
    }
}

/// Full-size confetti overlay
pub fn view<'a, Message: 'a>(confetti: &'a Confetti) -> Element<'a, Message> {
    Canvas::new(ConfettiLayer { confetti })
        .width(Fill)
        .height(Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_burst_and_clear() {
        let mut confetti = Confetti::default();
        assert!(!confetti.is_active());

        confetti.burst_with(&mut StdRng::seed_from_u64(1));
        assert!(confetti.is_active());
        assert_eq!(confetti.particles.len(), PARTICLE_COUNT);
        assert!(confetti.particles.iter().all(|p| p.y <= 0.0));

        confetti.clear();
        assert!(!confetti.is_active());
    }

    #[test]
    fn test_particles_fall_and_recycle() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut confetti = Confetti::default();
        confetti.burst_with(&mut rng);

        let start: f32 = confetti.particles.iter().map(|p| p.y).sum();
        confetti.tick_with(0.05, &mut rng);
        let after: f32 = confetti.particles.iter().map(|p| p.y).sum();
        assert!(after > start);

        // Long run: everything stays on or above the bottom edge and the
        // effect keeps going
        for _ in 0..2000 {
            confetti.tick_with(0.05, &mut rng);
        }
        assert_eq!(confetti.particles.len(), PARTICLE_COUNT);
        assert!(confetti.particles.iter().all(|p| p.y <= 1.05));
        assert!(confetti.particles.iter().all(|p| p.vy <= TERMINAL_VELOCITY));
    }
}
