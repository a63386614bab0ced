//! Behavior of the simple plot through the public API.

use simplot::color::ColorPalette;
use simplot::views::{share, GridView, Interpolation, SequenceView, ViewId};
use simplot::{Orientation, Origin, Panel, PlotError, SimplePlot, TiledView};
use std::rc::Rc;

#[test]
fn f64_sequence_stores_narrowed_values() {
    let values = [1.0f64, 2.5, 3.0, 0.1];
    let narrowed: Vec<f32> = values.iter().map(|&v| v as f32).collect();

    let mut from_f64 = SimplePlot::new();
    let a = from_f64.add_sequence(&values);
    let mut from_f32 = SimplePlot::new();
    let b = from_f32.add_sequence(&narrowed);

    assert_eq!(a.borrow().values(), b.borrow().values());
    assert_eq!(a.borrow().values(), narrowed.as_slice());
}

#[test]
fn sequence_example_has_one_view_with_index_sampling() {
    let plot = SimplePlot::as_sequence(&[1.0f64, 2.5, 3.0]);
    assert_eq!(plot.origin(), Origin::LowerLeft);
    assert_eq!(plot.plot_panel().orientation(), Orientation::X1RightX2Up);
    assert_eq!(plot.plot_panel().view_count(), 1);
    assert_eq!(plot.plot_panel().h_limits(), (0.0, 2.0));
    assert_eq!(plot.plot_panel().v_limits(), (0.0, 3.0));
}

#[test]
fn pixels_example_uses_upper_left_origin() {
    let plot = SimplePlot::as_pixels(&[[1.0f64, 2.0], [3.0, 4.0]]).unwrap();
    assert_eq!(plot.origin(), Origin::UpperLeft);
    assert_eq!(plot.plot_panel().orientation(), Orientation::X1DownX2Right);
    // x1 runs down, x2 across; both span -0.5..1.5 around two samples
    assert_eq!(plot.plot_panel().v_limits(), (-0.5, 1.5));
    assert_eq!(plot.plot_panel().h_limits(), (-0.5, 1.5));

    let view = plot.plot_panel().views().next().unwrap().borrow();
    let pv = view.as_pixels_view().unwrap();
    assert_eq!(pv.interpolation(), Interpolation::Nearest);
    assert_eq!((pv.n1(), pv.n2()), (2, 2));
    assert_eq!(pv.values(), &ndarray::array![[1.0f32, 2.0], [3.0, 4.0]]);
}

#[test]
fn ragged_pixels_are_rejected() {
    let rows = vec![vec![1.0f64, 2.0], vec![3.0]];
    assert!(matches!(
        SimplePlot::as_pixels(&rows),
        Err(PlotError::ShapeMismatch { row: 1, expected: 2, found: 1 })
    ));
    let mut plot = SimplePlot::new();
    assert!(plot.add_pixels(&rows).is_err());
    assert_eq!(plot.plot_panel().view_count(), 0);
}

#[test]
fn add_and_remove_report_membership() {
    let mut plot = SimplePlot::new();
    let sv = share(SequenceView::from_values(vec![1.0, 2.0]));
    let grid = share(GridView::new());

    assert!(plot.add(&sv));
    assert!(plot.add(&grid));
    assert!(!plot.add(&sv));
    assert_eq!(plot.plot_panel().view_count(), 2);
    let last = plot.plot_panel().views().last().map(ViewId::of);
    assert_eq!(last, Some(ViewId::of(&sv)));

    // a view handed back by the panel can be re-added as well
    let first = plot.plot_panel().views().next().unwrap().clone();
    assert!(!plot.add_shared(&first));
    let last = plot.plot_panel().views().last().map(ViewId::of);
    assert_eq!(last, Some(ViewId::of(&grid)));
    assert_eq!(plot.plot_panel().view_count(), 2);

    assert!(plot.remove(&sv));
    assert!(!plot.remove(&sv));
    assert!(!plot.contains(&sv));
    assert!(plot.contains(&grid));
}

#[test]
fn views_stay_usable_after_adding() {
    let mut plot = SimplePlot::new();
    let pv = plot.add_points(&[0.0f32, 1.0, 2.0], &[1.0, 0.0, 1.0]).unwrap();
    pv.borrow_mut().set_style("r--o").unwrap();
    assert!(pv.borrow_mut().set_style("q").is_err());
    assert!(Rc::strong_count(&pv) >= 2);
}

#[test]
fn color_bar_binds_to_most_recent_pixels_view() {
    let mut plot = SimplePlot::new();
    let first = plot.add_pixels(&[[0.0f32, 1.0]]).unwrap();
    let second = plot.add_pixels(&[[5.0f32, 9.0]]).unwrap();
    let bar = plot.add_color_bar();
    assert!(bar.borrow().is_bound_to(&second));
    assert!(!bar.borrow().is_bound_to(&first));
    assert_eq!(bar.borrow().color_map().min(), 5.0);

    // later pixels views do not rebind the bar
    let third = plot.add_pixels(&[[0.0f32]]).unwrap();
    let again = plot.add_color_bar_labeled("amplitude");
    assert!(Rc::ptr_eq(&bar, &again));
    assert!(!again.borrow().is_bound_to(&third));
    assert_eq!(again.borrow().label(), Some("amplitude"));

    // the first pixels view does not drive the bar
    first.borrow_mut().set_color_palette(ColorPalette::Jet);
    first.borrow_mut().set_clips(-10.0, 10.0).unwrap();
    let map = again.borrow().color_map();
    assert_eq!((map.min(), map.max()), (5.0, 9.0));
    assert_eq!(map.palette(), ColorPalette::Gray);

    second.borrow_mut().set_color_palette(ColorPalette::Viridis);
    assert_eq!(again.borrow().color_map().palette(), ColorPalette::Viridis);
}

#[test]
fn title_is_optional_and_last_write_wins() {
    let mut plot = SimplePlot::as_points(&[1.0f32, 2.0]);
    plot.set_title(Some("first"));
    plot.add_title(Some("second"));
    assert_eq!(plot.title(), Some("second"));
    plot.remove_title();
    assert_eq!(plot.title(), None);
    plot.set_title(Some(""));
    assert_eq!(plot.title(), None);
}

#[test]
fn invalid_limits_keep_previous_limits() {
    let mut plot = SimplePlot::as_sequence(&[1.0f32, 2.0]);
    plot.set_limits(-1.0, -2.0, 5.0, 4.0).unwrap();
    assert!(matches!(
        plot.set_v_limits(3.0, 3.0),
        Err(PlotError::InvalidLimits { .. })
    ));
    assert!(plot.set_h_limits(0.0, f64::INFINITY).is_err());
    assert_eq!(plot.plot_panel().h_limits(), (-1.0, 5.0));
    assert_eq!(plot.plot_panel().v_limits(), (-2.0, 4.0));
    plot.set_limits_default();
    assert_eq!(plot.plot_panel().h_limits(), (0.0, 1.0));
}

#[test]
fn sampled_views_check_counts() {
    use simplot::Sampling;
    let mut plot = SimplePlot::new();
    let s = Sampling::new(3, 0.5, 10.0).unwrap();
    assert!(matches!(
        plot.add_sequence_sampled(s, &[1.0f32, 2.0]),
        Err(PlotError::LengthMismatch { expected: 3, found: 2, .. })
    ));
    assert!(plot.add_points_sampled(&s, &[1.0f64, 2.0, 3.0]).is_ok());
    assert!(plot
        .add_pixels_sampled(s, Sampling::indices(2), &[[0.0f32; 3]; 2])
        .is_ok());
    assert!(plot
        .add_pixels_sampled(s, Sampling::indices(1), &[[0.0f32; 3]; 2])
        .is_err());
    assert_eq!(plot.plot_panel().view_count(), 2);
}

#[test]
fn rendered_text_shows_labels_and_title() {
    let mut plot = SimplePlot::as_sequence(&[1.0f64, 2.5, 3.0]);
    plot.set_title(Some("Samples"));
    plot.set_h_label(Some("index"));
    plot.set_v_label(Some("amp"));
    plot.set_v_format(Some("%.2f"));
    let text = plot.to_text(50, 16);
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len(), 16);
    assert_eq!(lines[0].trim(), "Samples");
    assert!(lines.last().is_some_and(|l| l.contains("index")));
    assert!(text.contains("3.00"));
    assert_eq!(text.matches('o').count(), 3);
}

#[test]
fn far_out_data_renders_when_zoomed_in() {
    let mut plot = SimplePlot::as_sequence(&[1.0f32, 1.0e30, 2.0]);
    plot.set_v_limits(0.0, 3.0).unwrap();
    let text = plot.to_text(40, 12);
    assert_eq!(text.split('\n').count(), 12);
    assert_eq!(text.matches('o').count(), 2);

    let mut plot = SimplePlot::as_points(&[0.0f32, 1.0e12]);
    plot.set_limits(0.0, 0.0, 1.0, 1.0).unwrap();
    assert_eq!(plot.to_text(40, 12).split('\n').count(), 12);
}

#[test]
fn grid_renders_into_tile() {
    let mut plot = SimplePlot::as_points(&[0.0f32, 10.0]);
    let bare = plot.to_text(40, 12).matches('─').count();
    plot.add_grid_with("H-").unwrap();
    let gridded = plot.to_text(40, 12).matches('─').count();
    assert!(gridded > bare);
}
