//! Confetti particle effect
//!
//! Burst scheduling and particle simulation for the celebration overlay.
//! A trigger fires one large centered burst and installs a 6 second schedule
//! of paired side bursts every 400ms, tapering off toward the deadline.
//! Particles live in normalized viewport coordinates and are rendered by a
//! `canvas::Program` layered over the whole window.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::time::Duration;

use iced::time::Instant;
use iced::widget::Canvas;
use iced::widget::canvas::{self, Frame, Geometry};
use iced::{Color, Element, Fill, Point, Rectangle, Renderer, Size, Theme, mouse};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ui::theme;

/// Full burst sequence window after a trigger.
pub const SEQUENCE_DURATION: Duration = Duration::from_millis(6000);
/// Interval between paired side bursts.
pub const BURST_INTERVAL: Duration = Duration::from_millis(400);

/// Particle count of the opening centered burst.
const CENTER_BURST_COUNT: usize = 100;
/// Peak particle count of one side burst; tapers linearly to zero.
const SIDE_BURST_MAX: f32 = 40.0;
/// Particle lifetime in simulation ticks (60 ticks per second).
const PARTICLE_TICKS: f32 = 60.0;
/// Simulation ticks per second.
const TICK_RATE: f32 = 60.0;
/// Longest step applied in one frame, so a stalled window does not teleport
/// particles when frames resume.
const MAX_STEP_TICKS: f32 = 3.0;

const CENTER_SPREAD_DEGREES: f32 = 100.0;
const SIDE_SPREAD_DEGREES: f32 = 360.0;
const CENTER_VELOCITY: f32 = 45.0;
const SIDE_VELOCITY: f32 = 30.0;

/// Converts burst velocity units into normalized viewport units per tick.
const VELOCITY_SCALE: f32 = 0.0006;
/// Downward acceleration in normalized units per tick squared.
const GRAVITY: f32 = 0.0012;
/// Per-tick velocity decay.
const DECAY: f32 = 0.92;

/// One discrete emission of particles.
#[derive(Debug, Clone, Copy)]
pub struct BurstSpec {
    pub particle_count: usize,
    pub spread_degrees: f32,
    pub start_velocity: f32,
    /// Normalized viewport origin; y may sit slightly above the viewport.
    pub origin: Point,
}

/// A single confetto.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    color: Color,
    rotation: f32,
    spin: f32,
    size: f32,
    life: f32,
}

impl Particle {
    fn step(&mut self, dt_ticks: f32) {
        let decay = DECAY.powf(dt_ticks);
        self.vx *= decay;
        self.vy = self.vy * decay + GRAVITY * dt_ticks;
        self.x += self.vx * dt_ticks;
        self.y += self.vy * dt_ticks;
        self.rotation = (self.rotation + self.spin * dt_ticks) % TAU;
        self.life -= dt_ticks;
    }

    fn alpha(&self) -> f32 {
        (self.life / PARTICLE_TICKS).clamp(0.0, 1.0)
    }

    /// Spawn position, normalized. Used by tests to assert origin bounds.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// Pending side-burst schedule installed by a trigger.
#[derive(Debug, Clone, Copy)]
struct BurstSchedule {
    deadline: Instant,
}

/// Particle system plus burst scheduler.
///
/// All randomness flows through [`ConfettiSystem::random_in_range`], so a
/// seeded system is fully deterministic.
pub struct ConfettiSystem {
    particles: Vec<Particle>,
    schedule: Option<BurstSchedule>,
    last_step: Option<Instant>,
    rng: StdRng,
}

impl ConfettiSystem {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Deterministic system for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            schedule: None,
            last_step: None,
            rng,
        }
    }

    /// Start a new burst sequence: one large centered burst now, then side
    /// bursts until `now + SEQUENCE_DURATION`. Replaces any schedule already
    /// installed, so exactly one schedule is ever active.
    pub fn trigger(&mut self, now: Instant) {
        self.spawn_burst(&BurstSpec {
            particle_count: CENTER_BURST_COUNT,
            spread_degrees: CENTER_SPREAD_DEGREES,
            start_velocity: CENTER_VELOCITY,
            origin: Point::new(0.5, 0.7),
        });
        self.schedule = Some(BurstSchedule {
            deadline: now + SEQUENCE_DURATION,
        });
        tracing::debug!("confetti sequence started");
    }

    /// Cancel the repeating side bursts. Live particles keep falling until
    /// their lifetime runs out.
    pub fn cancel_schedule(&mut self) {
        if self.schedule.take().is_some() {
            tracing::debug!("confetti schedule cancelled");
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.schedule.is_some()
    }

    pub fn has_particles(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// One scheduler tick, expected every [`BURST_INTERVAL`]: emit a pair of
    /// side bursts whose particle count tapers with the remaining time, or
    /// drop the schedule once the deadline has passed.
    pub fn burst_tick(&mut self, now: Instant) {
        let Some(schedule) = self.schedule else {
            return;
        };
        let time_left = schedule.deadline.saturating_duration_since(now);
        if time_left.is_zero() {
            self.schedule = None;
            tracing::debug!("confetti sequence finished");
            return;
        }

        let fraction = time_left.as_secs_f32() / SEQUENCE_DURATION.as_secs_f32();
        let particle_count = (SIDE_BURST_MAX * fraction) as usize;

        let left = BurstSpec {
            particle_count,
            spread_degrees: SIDE_SPREAD_DEGREES,
            start_velocity: SIDE_VELOCITY,
            origin: Point::new(
                self.random_in_range(0.1, 0.3),
                self.random_in_range(0.0, 1.0) - 0.2,
            ),
        };
        let right = BurstSpec {
            particle_count,
            spread_degrees: SIDE_SPREAD_DEGREES,
            start_velocity: SIDE_VELOCITY,
            origin: Point::new(
                self.random_in_range(0.7, 0.9),
                self.random_in_range(0.0, 1.0) - 0.2,
            ),
        };
        self.spawn_burst(&left);
        self.spawn_burst(&right);
    }

    /// Emit one burst of particles.
    pub fn spawn_burst(&mut self, spec: &BurstSpec) {
        let half_spread = spec.spread_degrees.to_radians() / 2.0;
        for _ in 0..spec.particle_count {
            let angle = -FRAC_PI_2 + self.random_in_range(-half_spread, half_spread);
            let speed =
                spec.start_velocity * VELOCITY_SCALE * self.random_in_range(0.6, 1.0);
            let palette = theme::CONFETTI_PALETTE;
            let color = palette[self.rng.random_range(0..palette.len())];
            let rotation = self.random_in_range(0.0, TAU);
            let spin = self.random_in_range(-0.3, 0.3);
            let size = self.random_in_range(5.0, 9.0);
            let life = PARTICLE_TICKS * self.random_in_range(0.8, 1.2);
            self.particles.push(Particle {
                x: spec.origin.x,
                y: spec.origin.y,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                color,
                rotation,
                spin,
                size,
                life,
            });
        }
    }

    /// Advance the simulation to `now`; called from the frame subscription.
    pub fn step(&mut self, now: Instant) {
        let dt = match self.last_step {
            Some(prev) => now.saturating_duration_since(prev),
            None => Duration::ZERO,
        };
        self.last_step = Some(now);
        let dt_ticks = (dt.as_secs_f32() * TICK_RATE).min(MAX_STEP_TICKS);
        if dt_ticks <= 0.0 {
            return;
        }
        for particle in &mut self.particles {
            particle.step(dt_ticks);
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    /// Single randomness seam: every random quantity in the system flows
    /// through here, so a seeded generator makes bursts reproducible.
    fn random_in_range(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..max)
    }
}

impl Default for ConfettiSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Full-window canvas layer drawing the live particles. Purely visual; it
/// never captures input.
pub struct ConfettiLayer<'a> {
    particles: &'a [Particle],
}

impl<'a> ConfettiLayer<'a> {
    pub fn new(system: &'a ConfettiSystem) -> Self {
        Self {
            particles: system.particles(),
        }
    }
}

impl<'a, Message> canvas::Program<Message> for ConfettiLayer<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for particle in self.particles {
            let alpha = particle.alpha();
            if alpha <= 0.0 {
                continue;
            }
            let (x, y) = particle.position();
            let center_x = x * bounds.width;
            let center_y = y * bounds.height;
            // Tumble: modulate the rectangle's height by the rotation angle
            // instead of rotating geometry.
            let width = particle.size;
            let height = particle.size * (0.35 + 0.65 * particle.rotation.cos().abs());
            frame.fill_rectangle(
                Point::new(center_x - width / 2.0, center_y - height / 2.0),
                Size::new(width, height),
                Color {
                    a: alpha * particle.color.a,
                    ..particle.color
                },
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Build the overlay canvas element for the current particles.
pub fn view<'a, Message: 'a>(system: &'a ConfettiSystem) -> Element<'a, Message> {
    Canvas::new(ConfettiLayer::new(system))
        .width(Fill)
        .height(Fill)
        .into()
}
