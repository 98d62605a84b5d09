use quickcheck_macros::quickcheck;
use ticker_forecast_wasm::domain::chart::ChartPoint;
use ticker_forecast_wasm::infrastructure::rendering::ChartLayout;
use ticker_forecast_wasm::infrastructure::rendering::layout::{
    PADDING_BOTTOM, PADDING_LEFT, PADDING_RIGHT, PADDING_TOP, PRICE_MARGIN,
};

const WIDTH: u32 = 860;
const HEIGHT: u32 = 600;

fn point(x: &str, y: [f64; 4]) -> ChartPoint {
    ChartPoint { x: x.to_string(), y }
}

fn sample() -> Vec<ChartPoint> {
    vec![
        point("2024-01-01", [10.0, 12.0, 9.0, 11.0]),
        point("2024-01-02", [11.0, 14.0, 10.0, 13.0]),
        point("2024-01-03", [13.0, 13.5, 8.0, 8.5]),
        point("2024-01-04", [8.5, 10.0, 8.0, 9.5]),
    ]
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn empty_series_has_no_layout() {
    assert!(ChartLayout::compute(WIDTH, HEIGHT, &[]).is_none());
}

#[test]
fn tiny_canvas_has_no_layout() {
    assert!(ChartLayout::compute(50, 50, &sample()).is_none());
}

#[test]
fn price_range_is_padded_around_extremes() {
    let layout = ChartLayout::compute(WIDTH, HEIGHT, &sample()).unwrap();

    // low 8, high 14
    assert!(close(layout.min_price, 8.0 - 6.0 * PRICE_MARGIN));
    assert!(close(layout.max_price, 14.0 + 6.0 * PRICE_MARGIN));
    assert!(close(layout.y_for_price(layout.max_price), PADDING_TOP));
    assert!(close(layout.y_for_price(layout.min_price), HEIGHT as f64 - PADDING_BOTTOM));
    assert!(layout.y_for_price(14.0) > layout.plot_top);
    assert!(layout.y_for_price(8.0) < layout.plot_bottom());
}

#[test]
fn flat_series_still_gets_a_band() {
    let layout = ChartLayout::compute(WIDTH, HEIGHT, &[point("d", [5.0, 5.0, 5.0, 5.0])]).unwrap();
    assert!(layout.price_range() > 0.0);
    assert!(close(layout.y_for_price(5.0), layout.plot_top + layout.plot_height / 2.0));
}

#[test]
fn slots_split_the_plot_evenly() {
    let layout = ChartLayout::compute(WIDTH, HEIGHT, &sample()).unwrap();
    let plot_width = WIDTH as f64 - PADDING_LEFT - PADDING_RIGHT;

    assert!(close(layout.slot_width, plot_width / 4.0));
    assert!(close(layout.x_for_index(0), PADDING_LEFT + plot_width / 8.0));
    for index in 0..4 {
        assert_eq!(layout.index_at_x(layout.x_for_index(index)), Some(index));
    }
    assert_eq!(layout.index_at_x(PADDING_LEFT - 1.0), None);
    assert_eq!(layout.index_at_x(layout.plot_right()), None);
    assert!(layout.body_width() < layout.slot_width);
}

#[test]
fn hit_test_outside_plot_is_none() {
    let layout = ChartLayout::compute(WIDTH, HEIGHT, &sample()).unwrap();
    assert_eq!(layout.hit_test(5.0, 300.0), None);
    assert_eq!(layout.hit_test(400.0, 5.0), None);

    let hit = layout.hit_test(layout.x_for_index(2), layout.y_for_price(10.0)).unwrap();
    assert_eq!(hit.index, Some(2));
    assert!(close(hit.price, 10.0));
}

#[test]
fn label_stride_caps_label_count() {
    let points: Vec<ChartPoint> = (0..100).map(|i| point(&i.to_string(), [1.0, 2.0, 0.5, 1.5])).collect();
    let layout = ChartLayout::compute(WIDTH, HEIGHT, &points).unwrap();

    let stride = layout.label_stride(8);
    assert_eq!(stride, 13);
    assert!((0..100).step_by(stride).count() <= 8);

    let small = ChartLayout::compute(WIDTH, HEIGHT, &sample()).unwrap();
    assert_eq!(small.label_stride(8), 1);
}

#[test]
fn price_levels_run_top_to_bottom() {
    let layout = ChartLayout::compute(WIDTH, HEIGHT, &sample()).unwrap();
    let levels = layout.price_levels(5);

    assert_eq!(levels.len(), 5);
    assert!(close(levels[0], layout.max_price));
    assert!(close(levels[4], layout.min_price));
    assert!(levels.windows(2).all(|w| w[0] > w[1]));
}

#[quickcheck]
fn price_at_y_inverts_y_for_price(offset: u16) -> bool {
    let layout = match ChartLayout::compute(WIDTH, HEIGHT, &sample()) {
        Some(layout) => layout,
        None => return false,
    };
    let y = layout.plot_top + (offset as f64 % layout.plot_height);
    close(layout.y_for_price(layout.price_at_y(y)), y)
}
