mod common;

use bar_chart::overlay::{OverlayState, HOVER_TRANSITION};
use bar_chart::style::{AttrValue, StyleAttr};
use bar_chart::surface::DrawingSurface;
use bar_chart::{BarChart, ChartConfig, Color, RecordingSurface, Series};
use common::{assert_close, mixed_series, small_config};
use glam::DVec2;
use std::time::Duration;

const HOVER: Color = Color::rgb(0xff, 0xaa, 0x00);

fn render(config: ChartConfig) -> (bar_chart::RenderedChart, RecordingSurface) {
    let chart = BarChart::new(mixed_series(), config).unwrap();
    let mut surface = RecordingSurface::new(chart.config().width, chart.config().height);
    let rendered = chart.render(&mut surface).unwrap();
    (rendered, surface)
}

fn fill_of(surface: &RecordingSurface, id: bar_chart::ShapeId) -> Option<Color> {
    surface.shape(id)?.attr(&StyleAttr::Fill)?.as_color()
}

#[test]
fn test_readouts_start_hidden() {
    let (rendered, surface) = render(small_config());
    assert_eq!(rendered.overlays().len(), 3);
    for overlay in rendered.overlays() {
        assert_eq!(overlay.state(), OverlayState::Idle);
        for id in [overlay.readout.background, overlay.readout.nib, overlay.readout.text] {
            assert_eq!(surface.shape(id).unwrap().opacity(), 0.0);
        }
        assert_eq!(surface.shape(overlay.hit_area).unwrap().opacity(), 0.0);
    }
}

#[test]
fn test_readout_shows_the_value() {
    let (rendered, surface) = render(small_config());
    let text = rendered.overlays()[1].readout.text;
    match &surface.shape(text).unwrap().kind {
        bar_chart::surface::ShapeKind::Text { content, .. } => assert_eq!(content, "-5"),
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn test_custom_readouts() {
    let series = mixed_series().with_readouts(["ten", "minus five", "twenty"]);
    let chart = BarChart::new(series, small_config()).unwrap();
    let mut surface = RecordingSurface::new(300.0, 200.0);
    let rendered = chart.render(&mut surface).unwrap();
    let text = rendered.overlays()[2].readout.text;
    match &surface.shape(text).unwrap().kind {
        bar_chart::surface::ShapeKind::Text { content, .. } => assert_eq!(content, "twenty"),
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn test_hover_regions_cover_the_whole_slot() {
    let (rendered, _) = render(small_config());
    let area = rendered.layout.transform.area;
    for overlay in rendered.overlays() {
        assert_close(overlay.region.y, area.y);
        assert_close(overlay.region.height, area.height);
    }
    // Above the short first bar, but still inside its slot.
    assert_eq!(rendered.hit_test(DVec2::new(82.5, 25.0)), Some(0));
    assert_eq!(rendered.hit_test(DVec2::new(5.0, 5.0)), None);
}

#[test]
fn test_readout_above_the_canvas_is_moved_down() {
    let (rendered, surface) = render(small_config());
    // The tallest bar reaches the top of the plot area, pushing its readout off-canvas.
    let bg = surface.bbox(rendered.overlays()[2].readout.background).unwrap();
    assert_close(bg.y, 1.0);

    let untouched = surface.bbox(rendered.overlays()[0].readout.background).unwrap();
    assert!(untouched.y > 1.0);
}

#[test]
fn test_readout_is_kept_inside_the_right_edge() {
    let series = Series::new(vec![5.0], ["x"]).with_readouts(["a very long readout"]);
    let chart = BarChart::new(series, small_config().horizontal()).unwrap();
    let mut surface = RecordingSurface::new(300.0, 200.0);
    let rendered = chart.render(&mut surface).unwrap();

    let bg = surface.bbox(rendered.overlays()[0].readout.background).unwrap();
    assert!(bg.right() <= 300.0 + 1e-9, "{bg:?}");
    assert!(bg.x >= 0.0);
    assert!(bg.y >= 0.0);
}

#[test]
fn test_enter_and_leave() {
    let config = ChartConfig {
        hover_color: Some(HOVER),
        ..small_config()
    };
    let (mut rendered, mut surface) = render(config);
    let bar = rendered.bars[2];
    let base = rendered.layout.bars[2].fill;
    let center = rendered.layout.bars[2].bounds().center();

    rendered.pointer_moved(center, &mut surface).unwrap();
    assert_eq!(rendered.hovered(), Some(2));
    assert_eq!(rendered.overlays()[2].state(), OverlayState::Hover);
    assert_eq!(fill_of(&surface, bar), Some(HOVER));
    let anim = surface.animation(bar).unwrap();
    assert_eq!(anim.duration, Duration::from_millis(200));
    assert_eq!(anim.duration, HOVER_TRANSITION);
    let readout = rendered.overlays()[2].readout;
    assert_eq!(surface.shape(readout.text).unwrap().opacity(), 1.0);

    rendered.pointer_moved(DVec2::new(1.0, 1.0), &mut surface).unwrap();
    assert_eq!(rendered.hovered(), None);
    assert_eq!(rendered.overlays()[2].state(), OverlayState::Idle);
    assert_eq!(fill_of(&surface, bar), Some(base));
    assert_eq!(surface.shape(readout.text).unwrap().opacity(), 0.0);
}

#[test]
fn test_moving_within_a_bar_does_not_restart_animations() {
    let (mut rendered, mut surface) = render(small_config());
    let center = rendered.layout.bars[0].bounds().center();
    rendered.pointer_moved(center, &mut surface).unwrap();

    surface.clear_calls();
    rendered.pointer_moved(center + DVec2::new(1.0, 1.0), &mut surface).unwrap();
    assert!(surface.calls().is_empty());
}

#[test]
fn test_moving_between_bars_switches_hover() {
    let (mut rendered, mut surface) = render(small_config());
    let first = rendered.layout.bars[0].bounds().center();
    let second = rendered.layout.bars[1].bounds().center();

    rendered.pointer_moved(first, &mut surface).unwrap();
    rendered.pointer_moved(second, &mut surface).unwrap();
    assert_eq!(rendered.hovered(), Some(1));
    assert_eq!(rendered.overlays()[0].state(), OverlayState::Idle);
    assert_eq!(rendered.overlays()[1].state(), OverlayState::Hover);

    rendered.pointer_exited(&mut surface).unwrap();
    assert!(rendered.overlays().iter().all(|o| o.state() == OverlayState::Idle));
}

#[test]
fn test_hover_without_color_keeps_the_fill() {
    let (mut rendered, mut surface) = render(small_config());
    let bar = rendered.bars[0];
    let before = fill_of(&surface, bar);
    rendered
        .pointer_moved(rendered.layout.bars[0].bounds().center(), &mut surface)
        .unwrap();
    let anim = surface.animation(bar).unwrap();
    assert_eq!(anim.target.get(&StyleAttr::Fill).and_then(AttrValue::as_color), before);
}

#[test]
fn test_no_overlays_without_data_labels() {
    let config = ChartConfig {
        data_labels: false,
        ..small_config()
    };
    let (mut rendered, mut surface) = render(config);
    assert!(rendered.overlays().is_empty());
    rendered.pointer_moved(DVec2::new(82.5, 100.0), &mut surface).unwrap();
    assert_eq!(rendered.hovered(), None);
}
