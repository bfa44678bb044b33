use crate::{
    animation::description::{
        AnimationDescription, Create, Effect, MoveAlongPath, Parallel, PassingFlash, SetColor,
        Wait,
    },
    animation::ease::Ease,
    foundation::core::{Line, Rgba8},
    scene::primitive::PrimitiveKey,
};

/// Play `children` strictly one after another.
pub fn sequence(children: Vec<AnimationDescription>) -> AnimationDescription {
    AnimationDescription::Sequential(children)
}

/// Play `children` simultaneously (lag 0).
pub fn parallel(children: Vec<AnimationDescription>) -> AnimationDescription {
    stagger(children, 0.0)
}

/// Start child `k` at `k * lag`.
pub fn stagger(children: Vec<AnimationDescription>, lag: f64) -> AnimationDescription {
    AnimationDescription::Parallel(Parallel { lag, children })
}

/// Hold for `run_time`.
pub fn wait(run_time: f64) -> AnimationDescription {
    AnimationDescription::Primitive(Effect::Wait(Wait { run_time }))
}

/// Reveal the drawable under `target`.
pub fn create(target: PrimitiveKey, run_time: f64) -> AnimationDescription {
    AnimationDescription::Primitive(Effect::Create(Create {
        target,
        run_time,
        ease: Ease::InOutCubic,
    }))
}

/// Recolor `targets` from `from` to `to`.
pub fn set_color(
    targets: Vec<PrimitiveKey>,
    from: Rgba8,
    to: Rgba8,
    run_time: f64,
) -> AnimationDescription {
    AnimationDescription::Primitive(Effect::SetColor(SetColor {
        targets,
        from,
        to,
        run_time,
        ease: Ease::InOutCubic,
    }))
}

/// Move the drawable under `target` along `path` with the given rate curve.
pub fn move_along_path(
    target: PrimitiveKey,
    path: Line,
    run_time: f64,
    ease: Ease,
) -> AnimationDescription {
    AnimationDescription::Primitive(Effect::MoveAlongPath(MoveAlongPath {
        target,
        path,
        run_time,
        ease,
    }))
}

/// Sweep a `time_width` fraction streak of `color` along a copy of `path`, easing in and out.
pub fn passing_flash(
    path: Line,
    color: Rgba8,
    stroke_width: f64,
    time_width: f64,
    run_time: f64,
) -> AnimationDescription {
    AnimationDescription::Primitive(Effect::PassingFlash(PassingFlash {
        path,
        color,
        stroke_width,
        time_width,
        run_time,
        ease: Ease::InOutCubic,
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
