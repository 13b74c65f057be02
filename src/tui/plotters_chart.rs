//! Plotters-powered cash flow bar chart widget for Ratatui.
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// One bar: tier label, monthly cash flow, fill color.
#[derive(Debug, Clone, Copy)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
    pub color: RGBColor,
}

/// A lightweight, render-only chart description.
///
/// All bounds are computed outside the render call (see [`value_bounds`]) so
/// `render()` only draws.
pub struct CashFlowChart<'a> {
    pub bars: &'a [Bar],
    /// Y bounds in dollars; always includes zero.
    pub y_bounds: [f64; 2],
    pub y_label: &'a str,
}

/// Y range covering every bar and the zero baseline, padded by 10%.
pub fn value_bounds(bars: &[Bar]) -> [f64; 2] {
    let mut lo = 0.0_f64;
    let mut hi = 0.0_f64;
    for b in bars {
        if b.value.is_finite() {
            lo = lo.min(b.value);
            hi = hi.max(b.value);
        }
    }
    if hi - lo < 1e-9 {
        return [-1.0, 1.0];
    }
    let pad = (hi - lo) * 0.1;
    [if lo < 0.0 { lo - pad } else { lo }, if hi > 0.0 { hi + pad } else { hi }]
}

impl<'a> Widget for CashFlowChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a chart.
        // In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];
        if !(y0.is_finite() && y1.is_finite()) || y1 <= y0 {
            return;
        }

        let n = self.bars.len() as f64;
        let labels: Vec<&'static str> = self.bars.iter().map(|b| b.label).collect();

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .set_label_area_size(LabelAreaPosition::Left, 8)
                .set_label_area_size(LabelAreaPosition::Bottom, 2)
                .build_cartesian_2d(-0.5..(n - 0.5), y0..y1)?;

            let fmt_x = |v: &f64| {
                let i = v.round();
                if (v - i).abs() < 0.05 && i >= 0.0 {
                    labels.get(i as usize).copied().unwrap_or("").to_string()
                } else {
                    String::new()
                }
            };

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .y_desc(self.y_label)
                .x_labels(self.bars.len().max(2))
                .y_labels(5)
                .x_label_formatter(&fmt_x)
                .y_label_formatter(&|v| format!("{v:.0}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .draw()?;

            chart.draw_series(self.bars.iter().enumerate().map(|(i, b)| {
                let x = i as f64;
                Rectangle::new([(x - 0.3, 0.0), (x + 0.3, b.value)], b.color.filled())
            }))?;

            // Zero baseline.
            chart.draw_series(LineSeries::new(vec![(-0.5, 0.0), (n - 0.5, 0.0)], &WHITE))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(value: f64) -> Bar {
        Bar {
            label: "x",
            value,
            color: RGBColor(0, 0, 0),
        }
    }

    #[test]
    fn bounds_include_zero() {
        let b = value_bounds(&[bar(100.0), bar(300.0)]);
        assert_eq!(b[0], 0.0);
        assert!(b[1] > 300.0);

        let b = value_bounds(&[bar(-50.0), bar(-10.0)]);
        assert!(b[0] < -50.0);
        assert_eq!(b[1], 0.0);
    }

    #[test]
    fn flat_bars_get_unit_range() {
        assert_eq!(value_bounds(&[bar(0.0), bar(0.0)]), [-1.0, 1.0]);
    }
}
