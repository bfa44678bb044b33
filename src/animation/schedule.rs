use crate::animation::description::{AnimationDescription, Effect};

/// A primitive effect placed on an absolute timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScheduledEffect {
    /// Absolute start time.
    pub start: f64,
    /// Absolute end time (`start + run_time`).
    pub end: f64,
    /// The effect itself.
    pub effect: Effect,
}

impl ScheduledEffect {
    /// Linear normalized time of this effect at absolute time `t`, clamped to `[0, 1]`.
    ///
    /// Zero-length effects jump from 0 to 1 at their start.
    pub fn local_time(&self, t: f64) -> f64 {
        let len = self.end - self.start;
        if len <= 0.0 {
            return if t >= self.start { 1.0 } else { 0.0 };
        }
        ((t - self.start) / len).clamp(0.0, 1.0)
    }

    /// Eased progress of this effect at absolute time `t`.
    pub fn progress(&self, t: f64) -> f64 {
        self.effect.ease().apply(self.local_time(t))
    }

    /// True while `t` is inside `[start, end]`.
    pub fn is_active(&self, t: f64) -> bool {
        self.start <= t && t <= self.end
    }
}

/// Flattened timeline of an [`AnimationDescription`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Schedule {
    /// Effects in depth-first order of the description tree.
    pub entries: Vec<ScheduledEffect>,
    /// Total duration, equal to [`AnimationDescription::duration`].
    pub duration: f64,
}

impl Schedule {
    /// Effects active at absolute time `t`.
    pub fn active_at(&self, t: f64) -> impl Iterator<Item = &ScheduledEffect> {
        self.entries.iter().filter(move |e| e.is_active(t))
    }
}

impl AnimationDescription {
    /// Resolve start and end times of every primitive effect.
    #[tracing::instrument(skip(self))]
    pub fn schedule(&self) -> Schedule {
        let mut entries = Vec::new();
        let end = flatten(self, 0.0, &mut entries);
        tracing::debug!(effects = entries.len(), duration = end, "scheduled animation");
        Schedule {
            entries,
            duration: end,
        }
    }
}

fn flatten(desc: &AnimationDescription, start: f64, out: &mut Vec<ScheduledEffect>) -> f64 {
    match desc {
        AnimationDescription::Primitive(effect) => {
            let end = start + effect.run_time();
            out.push(ScheduledEffect {
                start,
                end,
                effect: effect.clone(),
            });
            end
        }
        AnimationDescription::Sequential(children) => children
            .iter()
            .fold(start, |cursor, child| flatten(child, cursor, out)),
        AnimationDescription::Parallel(p) => {
            let mut end = start;
            for (idx, child) in p.children.iter().enumerate() {
                let child_start = start + idx as f64 * p.lag;
                end = end.max(flatten(child, child_start, out));
            }
            end
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/schedule.rs"]
mod tests;
