use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use funcplot::{FuncPlotError, InputEvent, PlotSession, Point, SessionConfig, Viewport};

fn session_800x600() -> PlotSession {
    PlotSession::new(Viewport::new(800.0, 600.0), SessionConfig::default()).unwrap()
}

/// Registers a plot that counts its evaluations and returns the counter.
fn show_counting(session: &mut PlotSession) -> Arc<AtomicUsize> {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();
    session.show_parametric(move |x, _t| {
        seen.fetch_add(1, Ordering::Relaxed);
        x
    });
    calls
}

#[test]
fn construction_centers_the_origin_and_quarter_scales() {
    let session = session_800x600();
    let frame = session.frame();
    assert_eq!(frame.origin(), Point::new(400.0, 300.0));
    assert_eq!(frame.scale(), 150.0);
    assert!(session.is_animating());
    assert_eq!(session.animation_parameter(), 0.0);
    assert!(session.plots().is_empty());
}

#[test]
fn construction_rejects_an_empty_viewport() {
    let err = PlotSession::new(Viewport::new(0.0, 600.0), SessionConfig::default());
    assert!(matches!(err, Err(FuncPlotError::EmptyViewport { .. })));
    assert!(PlotSession::new(Viewport::new(800.0, -1.0), SessionConfig::default()).is_err());
}

#[test]
fn axis_lines_follow_the_origin() {
    let mut session = session_800x600();
    let (x_axis, y_axis) = session.axis_lines();
    assert_eq!(x_axis.start, Point::new(0.0, 300.0));
    assert_eq!(x_axis.end, Point::new(800.0, 300.0));
    assert_eq!(y_axis.start, Point::new(400.0, 0.0));
    assert_eq!(y_axis.end, Point::new(400.0, 600.0));

    session.set_origin(Point::new(100.0, 50.0));
    let (x_axis, y_axis) = session.axis_lines();
    assert_eq!(x_axis.start, Point::new(0.0, 50.0));
    assert_eq!(x_axis.end, Point::new(800.0, 50.0));
    assert_eq!(y_axis.start, Point::new(100.0, 0.0));
    assert_eq!(y_axis.end, Point::new(100.0, 600.0));
}

#[test]
fn sample_count_is_exact_for_a_dyadic_view() {
    // 1024x512: scale 128 px/unit, range [-4, 4], step 1/64. Every quantity
    // is a power of two, so the interval count comes out exact.
    let mut session =
        PlotSession::new(Viewport::new(1024.0, 512.0), SessionConfig::default()).unwrap();
    session.show_fn(|x| x);
    let polyline = session.plots()[0].polyline();
    assert_eq!(polyline.len(), 513);
    assert_eq!(polyline.first().map(|p| p.x), Some(0.0));
    assert_eq!(polyline.last().map(|p| p.x), Some(1024.0));
}

#[test]
fn one_sample_every_two_pixels_in_the_default_view() {
    let mut session = session_800x600();
    session.show_fn(f64::sin);
    let len = session.plots()[0].polyline().len();
    assert!((401..=402).contains(&len), "unexpected sample count {len}");
}

#[test]
fn showing_a_second_plot_leaves_the_first_polyline_alone() {
    let mut session = session_800x600();
    let calls_a = show_counting(&mut session);
    let after_first_show = calls_a.load(Ordering::Relaxed);
    assert!(after_first_show > 0, "registration must sample the new plot");
    let recorded: Vec<Point> = session.plots()[0].polyline().to_vec();

    session.show_fn(f64::cos);
    assert_eq!(
        calls_a.load(Ordering::Relaxed),
        after_first_show,
        "showing a new plot must not resample the existing ones"
    );
    assert_eq!(session.plots()[0].polyline(), recorded.as_slice());
    assert!(!session.plots()[1].polyline().is_empty());
}

#[test]
fn parameter_change_resamples_every_plot() {
    let mut session = session_800x600();
    let calls = show_counting(&mut session);
    session.show_fn(|x| x * x);
    let before = calls.load(Ordering::Relaxed);

    session.set_animation_parameter(0.5);
    assert!(calls.load(Ordering::Relaxed) > before);
}

#[test]
fn parameter_change_keeps_a_single_variable_plot_identical() {
    let mut session = session_800x600();
    session.show_fn(|x| x * x);
    let before: Vec<Point> = session.plots()[0].polyline().to_vec();

    session.set_animation_parameter(0.5);
    assert_eq!(
        session.plots()[0].polyline(),
        before.as_slice(),
        "a lifted f(x) ignores the parameter"
    );
}

#[test]
fn parameter_change_moves_a_parametric_plot() {
    let mut session = session_800x600();
    session.show_parametric(|x, t| x + t);
    let before: Vec<Point> = session.plots()[0].polyline().to_vec();

    session.set_animation_parameter(0.5);
    assert_ne!(session.plots()[0].polyline(), before.as_slice());
}

#[test]
fn drag_scrubs_the_parameter_normalized_by_width() {
    let mut session = session_800x600();
    session
        .dispatch(InputEvent::Dragged { delta_x: 200.0 })
        .unwrap();
    assert!((session.animation_parameter() - 0.25).abs() < 1e-12);
    session
        .dispatch(InputEvent::Dragged { delta_x: -80.0 })
        .unwrap();
    assert!((session.animation_parameter() - 0.15).abs() < 1e-12);
}

#[test]
fn press_suspends_the_animation_and_release_resumes_it() {
    let mut session = session_800x600();
    session.dispatch(InputEvent::Pressed).unwrap();
    assert!(!session.is_animating());
    let held = session.animation_parameter();
    session.dispatch(InputEvent::Tick).unwrap();
    assert_eq!(
        session.animation_parameter(),
        held,
        "tick is ignored while held"
    );

    // dragging still scrubs while held
    session
        .dispatch(InputEvent::Dragged { delta_x: 400.0 })
        .unwrap();
    assert!((session.animation_parameter() - (held + 0.5)).abs() < 1e-12);

    session.dispatch(InputEvent::Released).unwrap();
    assert!(session.is_animating());
    let resumed = session.animation_parameter();
    session.dispatch(InputEvent::Tick).unwrap();
    assert!((session.animation_parameter() - (resumed + 0.01)).abs() < 1e-12);
}

#[test]
fn tick_advance_comes_from_the_config() {
    let config = SessionConfig {
        tick_advance: 0.25,
        ..Default::default()
    };
    let mut session = PlotSession::new(Viewport::new(800.0, 600.0), config).unwrap();
    session.dispatch(InputEvent::Tick).unwrap();
    assert!((session.animation_parameter() - 0.25).abs() < 1e-12);
}

#[test]
fn zoom_multiplies_the_scale_and_keeps_the_origin_pixel() {
    let mut session = session_800x600();
    session.show_fn(|x| x * x);
    let origin = session.frame().origin();
    let before: Vec<Point> = session.plots()[0].polyline().to_vec();

    session.dispatch(InputEvent::ZoomIn).unwrap();
    assert_eq!(session.frame().origin(), origin);
    assert!((session.frame().scale() - 225.0).abs() < 1e-9);
    assert!((session.frame().sampling_step() - 2.0 / 225.0).abs() < 1e-15);
    assert_ne!(
        session.plots()[0].polyline(),
        before.as_slice(),
        "zooming must resample the curve"
    );

    session.dispatch(InputEvent::ZoomOut).unwrap();
    assert!((session.frame().scale() - 112.5).abs() < 1e-9);
}

#[test]
fn a_rejected_scale_leaves_everything_untouched() {
    let mut session = session_800x600();
    session.show_fn(|x| x);
    let recorded: Vec<Point> = session.plots()[0].polyline().to_vec();

    assert!(session.set_scale(0.0).is_err());
    assert!(session.set_scale(-3.0).is_err());
    assert_eq!(session.frame().scale(), 150.0);
    assert_eq!(session.plots()[0].polyline(), recorded.as_slice());
}

#[test]
fn resize_preserves_the_frame_and_moves_the_axes() {
    let mut session = session_800x600();
    session.show_fn(|x| x);
    session
        .dispatch(InputEvent::Resized {
            width: 1000.0,
            height: 400.0,
        })
        .unwrap();

    assert_eq!(session.frame().origin(), Point::new(400.0, 300.0));
    assert_eq!(session.frame().scale(), 150.0);
    assert_eq!(session.viewport(), Viewport::new(1000.0, 400.0));
    let (x_axis, y_axis) = session.axis_lines();
    assert_eq!(x_axis.end, Point::new(1000.0, 300.0));
    assert_eq!(y_axis.end, Point::new(400.0, 400.0));
}

#[test]
fn resize_to_an_empty_viewport_is_rejected() {
    let mut session = session_800x600();
    let err = session.dispatch(InputEvent::Resized {
        width: 0.0,
        height: 400.0,
    });
    assert!(matches!(err, Err(FuncPlotError::EmptyViewport { .. })));
    assert_eq!(session.viewport(), Viewport::new(800.0, 600.0));
}

#[test]
fn moving_the_origin_resamples_against_the_new_frame() {
    let mut session = session_800x600();
    session.show_fn(|x| x * x);
    let before: Vec<Point> = session.plots()[0].polyline().to_vec();

    session.set_origin(Point::new(200.0, 300.0));
    assert_ne!(session.plots()[0].polyline(), before.as_slice());
}

#[test]
fn showing_a_plot_reassigns_every_color() {
    let mut session = session_800x600();
    session.show_fn(|x| x);
    session.show_fn(|x| x + 1.0);
    let second = session.plots()[1].color();

    session.show_fn(|x| x + 2.0);
    assert_ne!(
        session.plots()[1].color(),
        second,
        "hue spacing changes when the plot count grows"
    );
    let colors: Vec<_> = session.plots().iter().map(|p| p.color()).collect();
    for (i, a) in colors.iter().enumerate() {
        for b in colors.iter().skip(i + 1) {
            assert_ne!(a, b, "colors must stay pairwise distinct");
        }
    }
}
