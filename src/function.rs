//! Function registration types.
//!
//! Every plotted function is stored in one uniform shape: a callable of the
//! sample position `x` and the shared animation parameter `t`. Plain
//! single-variable functions are wrapped once at registration so evaluation
//! never branches on arity.

/// A function sampled by the plotter: `f(x, t) -> y`.
///
/// `x` is the equation-space abscissa, `t` the shared animation parameter.
/// May return NaN or ±∞ for some inputs; such samples are carried through
/// the polyline and suppressed at draw time.
pub type ParametricFn = Box<dyn Fn(f64, f64) -> f64 + Send + 'static>;

/// Lift a single-variable function into the uniform shape by ignoring the
/// animation parameter.
pub fn simple<F>(f: F) -> ParametricFn
where
    F: Fn(f64) -> f64 + Send + 'static,
{
    Box::new(move |x, _t| f(x))
}

/// Box a genuinely two-argument function.
pub fn parametric<F>(f: F) -> ParametricFn
where
    F: Fn(f64, f64) -> f64 + Send + 'static,
{
    Box::new(f)
}
