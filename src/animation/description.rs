use kurbo::ParamCurve;

use crate::{
    animation::ease::Ease,
    foundation::core::{Line, Point, Rgba8, require_non_negative},
    foundation::error::{LayerflowError, LayerflowResult},
    scene::primitive::PrimitiveKey,
};

/// Declarative, immutable description of timed visual effects.
///
/// The tree is interpreted by an external playback engine; building one has no side effects.
/// Durations are in abstract time units (seconds for most engines).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AnimationDescription {
    /// Children play one after another in listed order.
    Sequential(Vec<AnimationDescription>),
    /// Children start at fixed offsets from each other.
    Parallel(Parallel),
    /// A single primitive effect.
    Primitive(Effect),
}

/// Parallel composition where child `k` starts at `k * lag`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Parallel {
    /// Offset between successive child starts (0 = simultaneous).
    pub lag: f64,
    /// Child animations.
    pub children: Vec<AnimationDescription>,
}

impl AnimationDescription {
    /// Total play time of the tree.
    ///
    /// Sequential sums its children, parallel takes the latest `offset + duration`.
    /// Empty compositions last zero time units.
    pub fn duration(&self) -> f64 {
        match self {
            Self::Primitive(effect) => effect.run_time(),
            Self::Sequential(children) => children.iter().map(Self::duration).sum(),
            Self::Parallel(p) => p
                .children
                .iter()
                .enumerate()
                .map(|(idx, child)| idx as f64 * p.lag + child.duration())
                .fold(0.0, f64::max),
        }
    }

    /// Direct children of a composition; empty for primitives.
    pub fn children(&self) -> &[AnimationDescription] {
        match self {
            Self::Primitive(_) => &[],
            Self::Sequential(children) => children,
            Self::Parallel(p) => &p.children,
        }
    }

    /// Primitive effects in depth-first, listed order.
    pub fn effects(&self) -> Vec<&Effect> {
        fn walk<'a>(desc: &'a AnimationDescription, out: &mut Vec<&'a Effect>) {
            match desc {
                AnimationDescription::Primitive(effect) => out.push(effect),
                _ => {
                    for child in desc.children() {
                        walk(child, out);
                    }
                }
            }
        }

        let mut out = Vec::new();
        walk(self, &mut out);
        out
    }

    /// Check every run time, lag and flash width in the tree.
    pub fn validate(&self) -> LayerflowResult<()> {
        match self {
            Self::Primitive(effect) => effect.validate(),
            Self::Sequential(children) => children.iter().try_for_each(Self::validate),
            Self::Parallel(p) => {
                require_non_negative("parallel lag", p.lag)?;
                p.children.iter().try_for_each(Self::validate)
            }
        }
    }
}

/// Primitive visual effect understood by the playback engine.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Effect {
    /// Reveal a drawable from a component group.
    Create(Create),
    /// Recolor a set of drawables.
    SetColor(SetColor),
    /// Hold the current state.
    Wait(Wait),
    /// Move a drawable along a straight path.
    MoveAlongPath(MoveAlongPath),
    /// Sweep a transient streak along a path.
    PassingFlash(PassingFlash),
}

impl Effect {
    /// Run time of this effect.
    pub fn run_time(&self) -> f64 {
        match self {
            Self::Create(e) => e.run_time,
            Self::SetColor(e) => e.run_time,
            Self::Wait(e) => e.run_time,
            Self::MoveAlongPath(e) => e.run_time,
            Self::PassingFlash(e) => e.run_time,
        }
    }

    /// Rate curve of this effect; waits are linear.
    pub fn ease(&self) -> Ease {
        match self {
            Self::Create(e) => e.ease,
            Self::SetColor(e) => e.ease,
            Self::Wait(_) => Ease::Linear,
            Self::MoveAlongPath(e) => e.ease,
            Self::PassingFlash(e) => e.ease,
        }
    }

    /// Check the run time and effect-specific parameters.
    pub fn validate(&self) -> LayerflowResult<()> {
        require_non_negative("effect run_time", self.run_time())?;
        if let Self::PassingFlash(flash) = self {
            if !flash.time_width.is_finite() || flash.time_width <= 0.0 || flash.time_width > 1.0
            {
                return Err(LayerflowError::invalid_parameter(format!(
                    "passing flash time_width must be in (0, 1] (got {})",
                    flash.time_width
                )));
            }
            require_non_negative("passing flash stroke_width", flash.stroke_width)?;
        }
        Ok(())
    }
}

/// Reveal the drawable registered under `target`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Create {
    /// Group key of the drawable.
    pub target: PrimitiveKey,
    /// Run time.
    pub run_time: f64,
    /// Rate curve.
    pub ease: Ease,
}

/// Recolor every drawable in `targets` from `from` to `to`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SetColor {
    /// Group keys of the recolored drawables.
    pub targets: Vec<PrimitiveKey>,
    /// Color at the start of the effect.
    pub from: Rgba8,
    /// Color at the end of the effect.
    pub to: Rgba8,
    /// Run time.
    pub run_time: f64,
    /// Rate curve.
    pub ease: Ease,
}

impl SetColor {
    /// Color at normalized time `t` in `[0, 1]`.
    pub fn color_at(&self, t: f64) -> Rgba8 {
        Rgba8::lerp(self.from, self.to, self.ease.apply(t))
    }
}

/// Hold for `run_time`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Wait {
    /// Run time.
    pub run_time: f64,
}

/// Move the drawable under `target` from `path.p0` to `path.p1`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MoveAlongPath {
    /// Group key of the moved drawable.
    pub target: PrimitiveKey,
    /// Straight path followed by the drawable's center.
    pub path: Line,
    /// Run time.
    pub run_time: f64,
    /// Rate curve applied to the distance travelled.
    pub ease: Ease,
}

impl MoveAlongPath {
    /// Center position at normalized time `t` in `[0, 1]`.
    ///
    /// Returns the path endpoints exactly at both ends of the curve.
    pub fn position_at(&self, t: f64) -> Point {
        let progress = self.ease.apply(t);
        if progress <= 0.0 {
            self.path.p0
        } else if progress >= 1.0 {
            self.path.p1
        } else {
            self.path.eval(progress)
        }
    }
}

/// Streak of `color` sweeping over `path`.
///
/// `path` is a duplicate of the underlying edge; nothing is added to any group.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PassingFlash {
    /// Path being swept.
    pub path: Line,
    /// Streak color.
    pub color: Rgba8,
    /// Streak stroke width.
    pub stroke_width: f64,
    /// Visible fraction of the path at any instant.
    pub time_width: f64,
    /// Run time.
    pub run_time: f64,
    /// Rate curve.
    pub ease: Ease,
}

impl PassingFlash {
    /// Visible parameter span `(lower, upper)` of the streak at normalized time `t`.
    ///
    /// The leading end travels from 0 to `1 + time_width`, so the streak enters and leaves the
    /// path completely; `None` when nothing is visible.
    pub fn visible_span(&self, t: f64) -> Option<(f64, f64)> {
        let progress = self.ease.apply(t);
        if progress <= 0.0 || progress >= 1.0 {
            return None;
        }
        let upper = progress * (1.0 + self.time_width);
        let lower = upper - self.time_width;
        let (lower, upper) = (lower.clamp(0.0, 1.0), upper.clamp(0.0, 1.0));
        (upper > lower).then_some((lower, upper))
    }

    /// Visible piece of the path at normalized time `t`.
    pub fn streak_at(&self, t: f64) -> Option<Line> {
        self.visible_span(t)
            .map(|(lower, upper)| self.path.subsegment(lower..upper))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/description.rs"]
mod tests;
