mod common;

use bar_chart::rendering::{bar_fill, paint_bars};
use bar_chart::style::{AttrValue, StyleAttr};
use bar_chart::surface::{DrawCall, ShapeKind};
use bar_chart::{plot_types, BarChart, ChartConfig, ChartError, Color, DrawingSurface, RecordingSurface, Series};
use common::{assert_close, mixed_series, small_config};

const LAST: Color = Color::rgb(0x00, 0x99, 0x00);
const NEGATIVE: Color = Color::rgb(0xcc, 0x00, 0x00);

#[test]
fn test_fill_policy() {
    let config = ChartConfig {
        last_color: Some(LAST),
        negative_color: Some(NEGATIVE),
        ..small_config()
    };
    assert_eq!(bar_fill(0, 10.0, 3, &config), config.theme.bar);
    assert_eq!(bar_fill(1, -5.0, 3, &config), NEGATIVE);
    // The last-bar override beats the negative color.
    assert_eq!(bar_fill(2, -1.0, 3, &config), LAST);

    let plain = small_config();
    assert_eq!(bar_fill(1, -5.0, 3, &plain), plain.theme.bar);
}

#[test]
fn test_one_rect_per_bar_with_translation_for_negatives() {
    let config = ChartConfig {
        negative_color: Some(NEGATIVE),
        ..small_config()
    };
    let layout = plot_types::layout(&mixed_series(), &config).unwrap();
    let mut surface = RecordingSurface::new(300.0, 200.0);
    let bars = paint_bars(&mut surface, &layout, &config).unwrap();

    assert_eq!(bars.len(), 3);
    for (id, geometry) in bars.iter().zip(&layout.bars) {
        let shape = surface.shape(*id).unwrap();
        let ShapeKind::Rect { rect, radius } = &shape.kind else {
            panic!("bar should be a rect");
        };
        assert_eq!(*radius, 0.0);
        assert!(rect.width >= 0.0 && rect.height >= 0.0);
        assert_eq!(*rect, geometry.anchor);
        assert_eq!(shape.translation, geometry.translation);
        assert_eq!(shape.attr(&StyleAttr::Fill).and_then(AttrValue::as_color), Some(geometry.fill));
        assert_eq!(shape.attr(&StyleAttr::StrokeWidth).and_then(AttrValue::as_number), Some(0.0));
    }

    let translations: Vec<_> = surface
        .calls()
        .iter()
        .filter_map(|c| match c {
            DrawCall::Translate(id, delta) => Some((*id, *delta)),
            _ => None,
        })
        .collect();
    assert_eq!(translations.len(), 1);
    assert_eq!(translations[0].0, bars[1]);
    assert_close(translations[0].1.y, 30.0);
}

#[test]
fn test_overlay_follows_its_bar() {
    let chart = BarChart::new(mixed_series(), small_config()).unwrap();
    let mut surface = RecordingSurface::new(300.0, 200.0);
    let rendered = chart.render(&mut surface).unwrap();

    let created: Vec<_> = surface
        .calls()
        .iter()
        .filter_map(|c| match c {
            DrawCall::Create(id) => Some(*id),
            _ => None,
        })
        .collect();
    let pos = |id| created.iter().position(|c| *c == id).unwrap();

    for (i, overlay) in rendered.overlays().iter().enumerate() {
        assert!(pos(overlay.hit_area) > pos(rendered.bars[i]));
        if let Some(next) = rendered.bars.get(i + 1) {
            assert!(pos(overlay.hit_area) < pos(*next));
        }
    }

    // Readouts end up above every bar.
    let order = surface.paint_order();
    let last_bar = order.iter().position(|id| *id == rendered.bars[2]).unwrap();
    for overlay in rendered.overlays() {
        let text = order.iter().position(|id| *id == overlay.readout.text).unwrap();
        assert!(text > last_bar);
    }
}

#[test]
fn test_render_is_idempotent() {
    let chart = BarChart::new(mixed_series(), small_config()).unwrap();
    let mut first = RecordingSurface::new(300.0, 200.0);
    let mut second = RecordingSurface::new(300.0, 200.0);
    let a = chart.render(&mut first).unwrap();
    let b = chart.render(&mut second).unwrap();

    assert_eq!(a.layout.bars, b.layout.bars);
    assert_eq!(first.shapes(), second.shapes());
    assert_eq!(first.to_svg(), second.to_svg());
}

#[test]
fn test_layout_errors_draw_nothing() {
    let values = vec![1.0; 100];
    let labels: Vec<String> = (0..100).map(|i| i.to_string()).collect();
    let chart = BarChart::new(Series::new(values, labels), small_config()).unwrap();
    let mut surface = RecordingSurface::new(300.0, 200.0);

    let err = chart.render(&mut surface).unwrap_err();
    assert!(matches!(err, ChartError::Configuration(_)));
    assert!(surface.shapes().is_empty());
}

#[test]
fn test_unknown_bar_attributes_are_skipped() {
    let mut config = small_config();
    config.bar_attributes.insert("stroke-dasharray".into(), serde_json::json!("-"));
    config.bar_attributes.insert("glow".into(), serde_json::json!(3));

    let chart = BarChart::new(mixed_series(), config).unwrap();
    let mut surface = RecordingSurface::new(300.0, 200.0);
    let rendered = chart.render(&mut surface).unwrap();

    for id in &rendered.bars {
        let shape = surface.shape(*id).unwrap();
        assert_eq!(
            shape.attr(&StyleAttr::Raw("stroke-dasharray".into())),
            Some(&AttrValue::Text("-".into()))
        );
        assert!(shape.attrs.iter().all(|(k, _)| k.name() != "glow"));
    }
}

#[test]
fn test_rounded_horizontal_bars() {
    let config = ChartConfig {
        rounded: true,
        ..small_config().horizontal()
    };
    let chart = BarChart::new(mixed_series(), config).unwrap();
    let mut surface = RecordingSurface::new(300.0, 200.0);
    let rendered = chart.render(&mut surface).unwrap();

    for (id, geometry) in rendered.bars.iter().zip(&rendered.layout.bars) {
        let ShapeKind::Group(members) = &surface.shape(*id).unwrap().kind else {
            panic!("rounded bar should be a group");
        };
        assert_eq!(members.len(), 2);
        let bounds = surface.bbox(*id).unwrap();
        assert_close(bounds.x, geometry.bounds().x);
        assert_close(bounds.right(), geometry.bounds().right());
    }
}

#[test]
fn test_config_from_json() {
    let config = ChartConfig::from_json(
        r##"{
            "width": 500,
            "height": 250,
            "orientation": "horizontal",
            "negative_color": "#f00",
            "label_max_size": 3,
            "theme": { "bar": "#336699" }
        }"##,
    )
    .unwrap();

    assert_eq!(config.orientation, bar_chart::Orientation::Horizontal);
    assert_eq!(config.negative_color, Some(Color::rgb(255, 0, 0)));
    assert_eq!(config.theme.bar, Color::rgb(0x33, 0x66, 0x99));
    assert_eq!(config.bar_spacing, 5.0);
    assert!(config.data_labels);
}

#[test]
fn test_config_from_json_rejects_bad_input() {
    assert!(matches!(
        ChartConfig::from_json(r#"{"negative_color": "red"}"#),
        Err(ChartError::Json(_))
    ));
    assert!(matches!(
        ChartConfig::from_json(r#"{"width": -10}"#),
        Err(ChartError::Configuration(_))
    ));
}

#[test]
fn test_svg_output() {
    let chart = BarChart::new(mixed_series(), small_config()).unwrap();
    let mut surface = RecordingSurface::new(300.0, 200.0);
    chart.render(&mut surface).unwrap();

    let svg = surface.to_svg();
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("<path d=\"M"));
    assert!(svg.contains(">b</text>"));
    assert!(svg.contains("transform=\"translate(0 "));
}

#[test]
fn test_render_logged_matches_render() {
    let chart = BarChart::new(mixed_series(), small_config()).unwrap();
    let sink = bar_chart::LogSink::stderr("bar_chart=debug");
    let mut logged = RecordingSurface::new(300.0, 200.0);
    let mut plain = RecordingSurface::new(300.0, 200.0);

    let a = chart.render_logged(&mut logged, &sink).unwrap();
    let b = chart.render(&mut plain).unwrap();
    assert_eq!(a, b);
    assert_eq!(logged.shapes(), plain.shapes());
    sink.close().unwrap();
}
