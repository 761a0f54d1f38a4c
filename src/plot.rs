//! A single plotted function and its materialized polyline.

use egui::Color32;

use crate::color::Palette;
use crate::function::ParametricFn;
use crate::geom::Point;

/// One registered function, its display color and the screen-space polyline
/// currently on display.
///
/// The function never changes after registration; the polyline is replaced
/// wholesale on every recalculation and the color whenever the session's
/// plot count changes.
pub struct FunctionPlot {
    function: ParametricFn,
    color: Color32,
    polyline: Vec<Point>,
}

impl FunctionPlot {
    /// Wrap a registered function. The color is a placeholder until the
    /// session assigns one; the polyline is empty until the first
    /// recalculation.
    pub(crate) fn new(function: ParametricFn) -> Self {
        Self {
            function,
            color: Color32::WHITE,
            polyline: Vec::new(),
        }
    }

    /// Current display color.
    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Screen-space points of the current polyline, in x-ascending order.
    /// May contain non-finite y values; drawing code splits around them.
    pub fn polyline(&self) -> &[Point] {
        &self.polyline
    }

    /// Assign the color for the plot at `index` among `total` shown plots.
    pub(crate) fn set_color(&mut self, index: usize, total: usize, palette: &Palette) {
        self.color = palette.color_for(index, total);
    }

    /// Resample the whole curve.
    ///
    /// Walks x from `xmin` in increments of `step`; the number of samples is
    /// fixed up front as `ceil((xmax - xmin) / step)` intervals, so the last
    /// sample either lands exactly on `xmax` or overshoots it by less than
    /// one step. Each sample evaluates the function at `(x, parameter)` and
    /// maps the equation-space point through `to_screen`. Non-finite y
    /// values are kept as-is.
    pub(crate) fn recalculate(
        &mut self,
        parameter: f64,
        xmin: f64,
        xmax: f64,
        step: f64,
        to_screen: impl Fn(Point) -> Point,
    ) {
        let intervals = ((xmax - xmin) / step).ceil() as usize;
        let mut polyline = Vec::with_capacity(intervals + 1);
        for i in 0..=intervals {
            let x = xmin + i as f64 * step;
            let y = (self.function)(x, parameter);
            polyline.push(to_screen(Point::new(x, y)));
        }
        self.polyline = polyline;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function;

    fn identity(p: Point) -> Point {
        p
    }

    #[test]
    fn sample_count_is_intervals_plus_one() {
        let mut plot = FunctionPlot::new(function::simple(|x| x));
        // exact multiple: (1 - 0) / 0.25 = 4 intervals, 5 points
        plot.recalculate(0.0, 0.0, 1.0, 0.25, identity);
        assert_eq!(plot.polyline().len(), 5);
        // non-multiple: (1 - 0) / 0.3 -> ceil = 4 intervals, 5 points,
        // last sample overshoots xmax
        plot.recalculate(0.0, 0.0, 1.0, 0.3, identity);
        assert_eq!(plot.polyline().len(), 5);
        let last = plot.polyline().last().copied();
        assert!(last.is_some_and(|p| p.x > 1.0), "last sample overshoots");
        assert!(
            last.is_some_and(|p| p.x - 1.0 < 0.3),
            "overshoot stays below one step"
        );
    }

    #[test]
    fn samples_are_x_ascending() {
        let mut plot = FunctionPlot::new(function::simple(|x| x * x));
        plot.recalculate(0.0, -2.0, 2.0, 0.5, identity);
        let xs: Vec<f64> = plot.polyline().iter().map(|p| p.x).collect();
        assert!(
            xs.windows(2).all(|w| w[0] < w[1]),
            "x must increase strictly: {xs:?}"
        );
    }

    #[test]
    fn non_finite_samples_pass_through() {
        let mut plot = FunctionPlot::new(function::simple(|x| 1.0 / x));
        // hits x = 0 exactly, where 1/x is +inf
        plot.recalculate(0.0, -1.0, 1.0, 0.5, identity);
        assert_eq!(plot.polyline().len(), 5);
        assert!(
            plot.polyline().iter().any(|p| p.y.is_infinite()),
            "pole must stay in the polyline"
        );

        let mut nan_plot = FunctionPlot::new(function::simple(f64::sqrt));
        nan_plot.recalculate(0.0, -1.0, 1.0, 0.5, identity);
        assert_eq!(nan_plot.polyline().len(), 5);
        assert!(
            nan_plot.polyline().iter().any(|p| p.y.is_nan()),
            "sqrt of negative x must stay as NaN"
        );
    }

    #[test]
    fn recalculation_is_idempotent() {
        let mut plot = FunctionPlot::new(function::parametric(|x, t| (x * t).sin()));
        plot.recalculate(0.7, -3.0, 3.0, 0.1, identity);
        let first: Vec<Point> = plot.polyline().to_vec();
        plot.recalculate(0.7, -3.0, 3.0, 0.1, identity);
        assert_eq!(plot.polyline(), first.as_slice());
    }

    #[test]
    fn recalculation_replaces_the_previous_polyline() {
        let mut plot = FunctionPlot::new(function::simple(|x| x));
        plot.recalculate(0.0, 0.0, 10.0, 1.0, identity);
        assert_eq!(plot.polyline().len(), 11);
        plot.recalculate(0.0, 0.0, 1.0, 1.0, identity);
        assert_eq!(plot.polyline().len(), 2, "old samples must not linger");
    }
}
