use crate::domain::chart::ChartPoint;

/// Space reserved around the plot: price labels left, title top, dates bottom
pub const PADDING_LEFT: f64 = 70.0;
pub const PADDING_RIGHT: f64 = 20.0;
pub const PADDING_TOP: f64 = 50.0;
pub const PADDING_BOTTOM: f64 = 40.0;

/// Fraction of the price range added above and below the extremes
pub const PRICE_MARGIN: f64 = 0.05;
/// Fraction of a slot taken by a candle body
pub const BODY_RATIO: f64 = 0.6;

/// Geometry of one chart frame, computed once per series.
///
/// Pure: no canvas involved, so it doubles as the hit-test model for the
/// hover tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub plot_left: f64,
    pub plot_top: f64,
    pub plot_width: f64,
    pub plot_height: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub slot_width: f64,
    pub count: usize,
}

impl ChartLayout {
    /// `None` for an empty series or a canvas too small to hold a plot.
    pub fn compute(width: u32, height: u32, points: &[ChartPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let width = width as f64;
        let height = height as f64;
        let plot_width = width - PADDING_LEFT - PADDING_RIGHT;
        let plot_height = height - PADDING_TOP - PADDING_BOTTOM;
        if plot_width <= 0.0 || plot_height <= 0.0 {
            return None;
        }

        let (low, high) = points
            .iter()
            .map(|p| p.ohlc().range())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (l, h)| (lo.min(l), hi.max(h)));
        if !low.is_finite() || !high.is_finite() {
            return None;
        }

        let range = high - low;
        let margin = if range > 0.0 {
            range * PRICE_MARGIN
        } else {
            // flat series: open a band around the single price
            high.abs().max(1.0) * PRICE_MARGIN
        };

        Some(Self {
            width,
            height,
            plot_left: PADDING_LEFT,
            plot_top: PADDING_TOP,
            plot_width,
            plot_height,
            min_price: low - margin,
            max_price: high + margin,
            slot_width: plot_width / points.len() as f64,
            count: points.len(),
        })
    }

    pub fn price_range(&self) -> f64 {
        self.max_price - self.min_price
    }

    pub fn plot_bottom(&self) -> f64 {
        self.plot_top + self.plot_height
    }

    pub fn plot_right(&self) -> f64 {
        self.plot_left + self.plot_width
    }

    /// Canvas y grows downwards, prices grow upwards.
    pub fn y_for_price(&self, price: f64) -> f64 {
        self.plot_top + (self.max_price - price) / self.price_range() * self.plot_height
    }

    pub fn price_at_y(&self, y: f64) -> f64 {
        self.max_price - (y - self.plot_top) / self.plot_height * self.price_range()
    }

    /// Center of the slot for candle `index`.
    pub fn x_for_index(&self, index: usize) -> f64 {
        self.plot_left + (index as f64 + 0.5) * self.slot_width
    }

    pub fn index_at_x(&self, x: f64) -> Option<usize> {
        if x < self.plot_left || x >= self.plot_right() {
            return None;
        }
        let index = ((x - self.plot_left) / self.slot_width).floor() as usize;
        (index < self.count).then_some(index)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.plot_left && x <= self.plot_right() && y >= self.plot_top && y <= self.plot_bottom()
    }

    pub fn body_width(&self) -> f64 {
        (self.slot_width * BODY_RATIO).max(1.0)
    }

    /// Draw every `n`-th x label so that at most `max_labels` are shown.
    pub fn label_stride(&self, max_labels: usize) -> usize {
        self.count.div_ceil(max_labels.max(1)).max(1)
    }

    /// `levels` evenly spaced prices from the top of the plot to the bottom.
    pub fn price_levels(&self, levels: usize) -> Vec<f64> {
        match levels {
            0 => Vec::new(),
            1 => vec![self.max_price],
            n => (0..n)
                .map(|i| self.max_price - self.price_range() * i as f64 / (n - 1) as f64)
                .collect(),
        }
    }

    /// Resolve a cursor position to the price under it and the candle slot.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<HoverHit> {
        if !self.contains(x, y) {
            return None;
        }
        Some(HoverHit {
            price: self.price_at_y(y),
            index: self.index_at_x(x),
        })
    }
}

/// Result of resolving a cursor position over the plot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverHit {
    pub price: f64,
    pub index: Option<usize>,
}
