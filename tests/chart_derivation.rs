use quickcheck_macros::quickcheck;
use ticker_forecast_wasm::domain::chart::{
    CANDLESTICK_SERIES_NAME, ChartData, ChartDerivationService, ChartOptions, ChartPoint,
};
use ticker_forecast_wasm::domain::market_data::{HistoricalBar, Ohlc};

fn bar(date: &str, ohlc: [f64; 4]) -> HistoricalBar {
    HistoricalBar::new(date, Ohlc::from_array(ohlc))
}

#[test]
fn single_bar_becomes_single_point() {
    let series = ChartDerivationService::derive_series(&[bar("2024-01-01", [10.0, 12.0, 9.0, 11.0])]);

    assert_eq!(series.name, CANDLESTICK_SERIES_NAME);
    assert_eq!(
        series.data,
        vec![ChartPoint {
            x: "2024-01-01".to_string(),
            y: [10.0, 12.0, 9.0, 11.0],
        }]
    );
}

#[test]
fn order_is_kept_even_when_dates_are_not_sorted() {
    let bars = vec![
        bar("2024-01-03", [3.0, 3.5, 2.5, 3.2]),
        bar("2024-01-01", [1.0, 1.5, 0.5, 1.2]),
        bar("2024-01-02", [2.0, 2.5, 1.5, 2.2]),
    ];
    let series = ChartDerivationService::derive_series(&bars);
    let labels: Vec<&str> = series.data.iter().map(|p| p.x.as_str()).collect();
    assert_eq!(labels, ["2024-01-03", "2024-01-01", "2024-01-02"]);
}

#[test]
fn empty_bars_give_empty_series() {
    let series = ChartDerivationService::derive_series(&[]);
    assert!(series.is_empty());
    assert_eq!(series.name, CANDLESTICK_SERIES_NAME);
}

#[test]
fn refresh_replaces_previous_series_and_keeps_options() {
    let options = ChartOptions::default().with_height(420);
    let mut chart = ChartData::new(options.clone());

    ChartDerivationService::refresh(&mut chart, &[bar("a", [1.0, 2.0, 0.5, 1.5]), bar("b", [1.5, 2.5, 1.0, 2.0])]);
    ChartDerivationService::refresh(&mut chart, &[bar("c", [5.0, 6.0, 4.0, 5.5])]);

    assert_eq!(chart.series.len(), 1);
    assert_eq!(chart.points().len(), 1);
    assert_eq!(chart.points()[0].x, "c");
    assert_eq!(chart.options, options);
}

#[test]
fn deriving_twice_gives_the_same_series() {
    let bars = vec![bar("2024-01-01", [10.0, 12.0, 9.0, 11.0]), bar("2024-01-02", [11.0, 11.0, 8.0, 8.5])];
    assert_eq!(
        ChartDerivationService::derive_series(&bars),
        ChartDerivationService::derive_series(&bars)
    );
}

#[quickcheck]
fn one_point_per_bar_in_input_order(rows: Vec<(String, f64, f64, f64, f64)>) -> bool {
    let bars: Vec<HistoricalBar> = rows
        .iter()
        .map(|(date, o, h, l, c)| bar(date, [*o, *h, *l, *c]))
        .collect();
    let series = ChartDerivationService::derive_series(&bars);

    series.len() == rows.len()
        && series.data.iter().zip(&rows).all(|(point, (date, o, h, l, c))| {
            let expected = [*o, *h, *l, *c];
            point.x == *date && point.y.iter().zip(expected.iter()).all(|(a, b)| a.to_bits() == b.to_bits())
        })
}

#[test]
fn chart_options_serialize_to_the_chart_input_shape() {
    insta::assert_json_snapshot!(ChartOptions::default(), @r###"
    {
      "chart": {
        "type": "candlestick",
        "height": 600
      },
      "title": {
        "text": "Stock Price Candlestick Chart",
        "align": "center"
      },
      "xaxis": {
        "type": "category",
        "labels": {
          "format": "localeDate"
        }
      },
      "yaxis": {
        "tooltip": {
          "enabled": true
        }
      }
    }
    "###);
}

#[test]
fn chart_data_serializes_series_as_x_and_y() {
    let mut chart = ChartData::default();
    ChartDerivationService::refresh(&mut chart, &[bar("2024-01-01", [10.0, 12.0, 9.0, 11.0])]);

    let value = serde_json::to_value(&chart).unwrap();
    assert_eq!(
        value["series"],
        serde_json::json!([{
            "name": "Candlestick Data",
            "data": [{ "x": "2024-01-01", "y": [10.0, 12.0, 9.0, 11.0] }]
        }])
    );
}
