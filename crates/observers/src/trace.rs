use stepwise_core::Observer;
use stepwise_solvers::{
    linear::gauss_seidel,
    optimization::{golden_section, quadratic},
    root::{muller, secant},
};

/// Logs every solver step as a `tracing` debug event.
///
/// Each event carries the solver name, the iteration number, and the
/// quantities that step produced. It never requests an action, so it can be
/// combined with a stopping rule through [`Chain`](crate::Chain).
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceObserver;

impl Observer<muller::Event<'_>, muller::Action> for TraceObserver {
    fn observe(&mut self, event: &muller::Event<'_>) -> Option<muller::Action> {
        let step = event.step;
        tracing::debug!(
            solver = "muller",
            iter = step.iter,
            x3 = %step.x3,
            residual = step.fx3.norm(),
            ea = ?step.ea,
            held = step.held,
            "step"
        );
        None
    }
}

impl Observer<secant::Event<'_>, secant::Action> for TraceObserver {
    fn observe(&mut self, event: &secant::Event<'_>) -> Option<secant::Action> {
        let step = event.step;
        tracing::debug!(
            solver = "secant",
            iter = step.iter,
            x2 = %step.x2,
            residual = step.fx2.norm(),
            "step"
        );
        None
    }
}

impl Observer<golden_section::Event<'_>, golden_section::Action> for TraceObserver {
    fn observe(&mut self, event: &golden_section::Event<'_>) -> Option<golden_section::Action> {
        let step = event.step;
        let (x, fx) = event.best();
        tracing::debug!(
            solver = "golden_section",
            iter = step.iter,
            xl = step.xl,
            xu = step.xu,
            best_x = x,
            best_f = fx,
            "step"
        );
        None
    }
}

impl Observer<quadratic::Event<'_>, quadratic::Action> for TraceObserver {
    fn observe(&mut self, event: &quadratic::Event<'_>) -> Option<quadratic::Action> {
        let step = event.step;
        tracing::debug!(
            solver = "quadratic",
            iter = step.iter,
            x3 = step.x3,
            f3 = step.f3,
            held = step.held,
            "step"
        );
        None
    }
}

impl Observer<gauss_seidel::Event<'_>, gauss_seidel::Action> for TraceObserver {
    fn observe(&mut self, event: &gauss_seidel::Event<'_>) -> Option<gauss_seidel::Action> {
        let step = event.step;
        tracing::debug!(
            solver = "gauss_seidel",
            iter = step.iter,
            x = ?step.x,
            max_ea = event.max_error(),
            "step"
        );
        None
    }
}
