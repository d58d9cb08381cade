// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flare: the scale-up/scale-down cue played on a newly selected cell.
//!
//! ## Overview
//!
//! A flare is two sequential scale phases about the cell's center: grow to
//! [`Flare::peak_scale`] over [`Flare::grow`], then settle back to identity over
//! [`Flare::settle`].
//! The default is 1.6× over 300 ms, then back over 100 ms.
//!
//! Animation is presentation only.
//! The control updates its value before the flare starts and never waits for it.
//!
//! ## Host integration
//!
//! [`perform_flare`] hands a [`FlareTimeline`] to an [`Animator`].
//! A host with its own animation primitive implements [`Animator`] and translates
//! [`FlareTimeline::phases`] into two chained animations.
//! A host that only repaints on a clock can use [`Flares`], which samples the
//! timelines itself; [`NoAnimation`] discards flares entirely.
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Rect;
//! use understory_rating::flare::{perform_flare, Flare, Flares};
//!
//! let mut flares = Flares::new();
//! perform_flare(&mut flares, 3, Rect::new(104.0, 0.0, 144.0, 40.0), &Flare::default());
//!
//! // The flare starts on the first frame after the request.
//! let _ = flares.tick(Duration::from_millis(1000));
//! let _ = flares.tick(Duration::from_millis(1300));
//! assert!((flares.scale(3) - 1.6).abs() < 1e-9);
//!
//! assert_eq!(flares.tick(Duration::from_millis(1400)), 0);
//! assert_eq!(flares.scale(3), 1.0);
//! ```

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Affine, Point, Rect};

/// Progress curve applied within each flare phase.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant rate.
    Linear,
    /// Quadratic ease-in-out: slow start, slow end.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` (clamped to `0..=1`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = 2.0 - 2.0 * t;
                    1.0 - u * u / 2.0
                }
            }
        }
    }
}

/// Flare parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flare {
    /// Scale reached at the end of the grow phase.
    pub peak_scale: f64,
    /// Duration of the grow phase.
    pub grow: Duration,
    /// Duration of the settle phase back to identity.
    pub settle: Duration,
    /// Curve used by both phases.
    pub easing: Easing,
}

impl Default for Flare {
    fn default() -> Self {
        Self {
            peak_scale: 1.6,
            grow: Duration::from_millis(300),
            settle: Duration::from_millis(100),
            easing: Easing::EaseInOut,
        }
    }
}

/// One phase of a flare, as a host animation primitive would express it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScalePhase {
    /// Scale at the end of the phase.
    pub to_scale: f64,
    /// Phase duration.
    pub duration: Duration,
    /// Progress curve.
    pub easing: Easing,
}

/// A flare bound to one cell's geometry.
///
/// Pure and cheap to copy; sample it with any elapsed time since the flare started.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlareTimeline {
    flare: Flare,
    center: Point,
}

impl FlareTimeline {
    /// Create a timeline scaling about the center of `bounds`.
    pub fn new(flare: Flare, bounds: Rect) -> Self {
        Self {
            flare,
            center: bounds.center(),
        }
    }

    /// Parameters this timeline was built from.
    pub fn flare(&self) -> &Flare {
        &self.flare
    }

    /// Fixed point of the scale transform.
    pub fn center(&self) -> Point {
        self.center
    }

    /// The grow and settle phases, in order. The second starts when the first completes.
    pub fn phases(&self) -> [ScalePhase; 2] {
        [
            ScalePhase {
                to_scale: self.flare.peak_scale,
                duration: self.flare.grow,
                easing: self.flare.easing,
            },
            ScalePhase {
                to_scale: 1.0,
                duration: self.flare.settle,
                easing: self.flare.easing,
            },
        ]
    }

    /// Total duration of both phases.
    pub fn duration(&self) -> Duration {
        self.flare.grow.saturating_add(self.flare.settle)
    }

    /// Returns true once both phases have completed.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration()
    }

    /// Uniform scale factor at `elapsed` since the flare started.
    pub fn scale_at(&self, elapsed: Duration) -> f64 {
        let Flare {
            peak_scale,
            grow,
            settle,
            easing,
        } = self.flare;
        if elapsed < grow {
            let t = easing.apply(progress(elapsed, grow));
            return 1.0 + (peak_scale - 1.0) * t;
        }
        let settling = elapsed - grow;
        if settling < settle {
            let t = easing.apply(progress(settling, settle));
            return peak_scale + (1.0 - peak_scale) * t;
        }
        1.0
    }

    /// Cell transform at `elapsed` since the flare started.
    pub fn transform_at(&self, elapsed: Duration) -> Affine {
        let s = self.scale_at(elapsed);
        if s == 1.0 {
            return Affine::IDENTITY;
        }
        let c = self.center.to_vec2();
        Affine::translate(c) * Affine::scale(s) * Affine::translate(-c)
    }
}

fn progress(elapsed: Duration, total: Duration) -> f64 {
    elapsed.as_secs_f64() / total.as_secs_f64()
}

/// Receiver for flare requests; the host's animation primitive.
pub trait Animator {
    /// Start a flare on the cell at rating position `index`.
    ///
    /// A flare requested for a cell that is still flaring starts over; it must
    /// not compound with the running one.
    fn animate(&mut self, index: usize, timeline: FlareTimeline);
}

impl<A: Animator + ?Sized> Animator for &mut A {
    fn animate(&mut self, index: usize, timeline: FlareTimeline) {
        (**self).animate(index, timeline);
    }
}

/// Play `flare` on the cell at rating position `index`, occupying `bounds`.
pub fn perform_flare<A: Animator + ?Sized>(
    animator: &mut A,
    index: usize,
    bounds: Rect,
    flare: &Flare,
) {
    tracing::debug!(cell = index, peak = flare.peak_scale, "flare");
    animator.animate(index, FlareTimeline::new(*flare, bounds));
}

/// An [`Animator`] that ignores every request.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoAnimation;

impl Animator for NoAnimation {
    fn animate(&mut self, _index: usize, _timeline: FlareTimeline) {}
}

#[derive(Clone, Debug)]
struct Running {
    index: usize,
    // `None` until the first tick after the request.
    started: Option<Duration>,
    timeline: FlareTimeline,
}

/// An [`Animator`] that keeps flares itself and is sampled on a host clock.
///
/// Time is a [`Duration`] since any epoch the host likes, advanced with [`Flares::tick`].
/// A requested flare starts at the next tick, so a host that stops ticking while
/// idle still shows the whole flare once it resumes.
/// Until then it samples as its first frame.
#[derive(Clone, Debug, Default)]
pub struct Flares {
    now: Duration,
    running: Vec<Running>,
}

impl Flares {
    /// Create an idle set at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Time of the last tick.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Advance the clock to `now`, retire finished flares, and return how many are still running.
    pub fn tick(&mut self, now: Duration) -> usize {
        self.now = now;
        self.running.retain_mut(|r| {
            let started = *r.started.get_or_insert(now);
            !r.timeline.is_finished(now.saturating_sub(started))
        });
        self.running.len()
    }

    /// Returns true if no flare is running.
    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    /// Returns true if the cell at `index` is flaring.
    pub fn is_animating(&self, index: usize) -> bool {
        self.running.iter().any(|r| r.index == index)
    }

    /// Current scale of the cell at `index`; `1.0` when it is not flaring.
    pub fn scale(&self, index: usize) -> f64 {
        self.find(index)
            .map_or(1.0, |r| r.timeline.scale_at(self.elapsed(r)))
    }

    /// Current transform of the cell at `index`; identity when it is not flaring.
    pub fn transform(&self, index: usize) -> Affine {
        self.find(index)
            .map_or(Affine::IDENTITY, |r| r.timeline.transform_at(self.elapsed(r)))
    }

    /// Rating positions of the cells currently flaring.
    pub fn animating(&self) -> impl Iterator<Item = usize> + '_ {
        self.running.iter().map(|r| r.index)
    }

    fn find(&self, index: usize) -> Option<&Running> {
        self.running.iter().find(|r| r.index == index)
    }

    fn elapsed(&self, running: &Running) -> Duration {
        running
            .started
            .map_or(Duration::ZERO, |started| self.now.saturating_sub(started))
    }
}

impl Animator for Flares {
    fn animate(&mut self, index: usize, timeline: FlareTimeline) {
        self.running.retain(|r| r.index != index);
        self.running.push(Running {
            index,
            started: None,
            timeline,
        });
    }
}
