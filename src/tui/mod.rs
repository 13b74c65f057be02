//! Ratatui-based terminal UI.
//!
//! The TUI provides a parameter form on the left and the evaluated report on
//! the right: cost breakdown, rental strategy table, and a cash flow chart.
//! Every edit recomputes the whole report from scratch.

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use plotters::style::RGBColor;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table},
    Terminal,
};

use crate::app::pipeline::{run_evaluation, RunOutput};
use crate::domain::{InputParameters, ParamField, StrategyLabel};
use crate::error::AppError;
use crate::report::{fmt_money, TABLE_HEADERS};

mod plotters_chart;

use plotters_chart::{value_bounds, Bar, CashFlowChart};

const EXPORT_CSV: &str = "real_estate_report.csv";
const EXPORT_XLSX: &str = "real_estate_report.xlsx";
const EXPORT_JSON: &str = "real_estate_report.json";

/// Start the TUI with `params` as the initial form values.
pub fn run(params: InputParameters) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(params);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    initial: InputParameters,
    params: InputParameters,
    selected_field: usize,
    editing: Option<String>,
    status: String,
    run: Result<RunOutput, String>,
}

impl App {
    fn new(params: InputParameters) -> Self {
        let mut app = Self {
            initial: params,
            params,
            selected_field: 0,
            editing: None,
            status: "Ready.".to_string(),
            run: Err(String::new()),
        };
        app.recompute();
        app
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn selected(&self) -> ParamField {
        ParamField::ALL[self.selected_field]
    }

    /// Returns `true` when the user asked to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.editing.is_some() {
            self.handle_edit(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => {
                self.selected_field = self.selected_field.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_field + 1 < ParamField::ALL.len() {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.set_selected(step_value(&self.params, self.selected(), -1.0)),
            KeyCode::Right => self.set_selected(step_value(&self.params, self.selected(), 1.0)),
            KeyCode::Enter => {
                self.editing = Some(String::new());
                self.status = format!(
                    "Editing {}. Enter to apply, Esc to cancel.",
                    self.selected().display_name()
                );
            }
            KeyCode::Char('r') => {
                self.params = self.initial;
                self.recompute();
                self.status = "Reset to starting values.".to_string();
            }
            KeyCode::Char('c') => self.export(ExportKind::Csv),
            KeyCode::Char('x') => self.export(ExportKind::Xlsx),
            KeyCode::Char('j') => self.export(ExportKind::Json),
            _ => {}
        }

        false
    }

    fn handle_edit(&mut self, code: KeyCode) {
        let Some(buf) = self.editing.as_mut() else {
            return;
        };
        match code {
            KeyCode::Esc => {
                self.editing = None;
                self.status = "Edit canceled.".to_string();
            }
            KeyCode::Enter => {
                let text = buf.clone();
                self.editing = None;
                match parse_edit(&text) {
                    Ok(v) => self.set_selected(v),
                    Err(msg) => self.status = msg,
                }
            }
            KeyCode::Backspace => {
                buf.pop();
            }
            KeyCode::Char(c) => {
                if c.is_ascii_digit() || c == '.' || c == '-' {
                    buf.push(c);
                }
            }
            _ => {}
        }
    }

    fn set_selected(&mut self, value: f64) {
        let field = self.selected();
        self.params = field.with(&self.params, value);
        self.recompute();
        if self.run.is_ok() {
            self.status = format!("{}: {}", field.display_name(), fmt_value(value));
        }
    }

    fn recompute(&mut self) {
        self.run = run_evaluation(&self.params).map_err(|e| e.to_string());
        if let Err(msg) = &self.run {
            self.status = msg.clone();
        }
    }

    fn export(&mut self, kind: ExportKind) {
        let run = match &self.run {
            Ok(run) => run,
            Err(msg) => {
                self.status = format!("Nothing to export: {msg}");
                return;
            }
        };

        let (path, res) = match kind {
            ExportKind::Csv => (EXPORT_CSV, crate::io::write_scenario_csv(Path::new(EXPORT_CSV), &run.table)),
            ExportKind::Xlsx => (EXPORT_XLSX, crate::io::write_scenario_xlsx(Path::new(EXPORT_XLSX), &run.table)),
            ExportKind::Json => (EXPORT_JSON, crate::io::write_report_json(Path::new(EXPORT_JSON), &run.report)),
        };

        self.status = match res {
            Ok(()) => format!("Wrote {path}"),
            Err(err) => format!("Export failed: {err}"),
        };
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let summary = match &self.run {
            Ok(run) => format!(
                "payment: {} | total monthly cost: {} | appreciation: {} | flip: {}",
                fmt_money(run.report.mortgage.monthly_payment),
                fmt_money(run.report.mortgage.total_monthly_cost),
                fmt_money(run.report.forecast.appreciation_gain),
                fmt_money(run.report.forecast.flip_profit),
            ),
            Err(_) => "no result".to_string(),
        };

        let line = Line::from(vec![
            Span::styled("rea", Style::default().fg(Color::Cyan)),
            Span::raw(" - real estate investment analyzer | "),
            Span::styled(summary, Style::default().fg(Color::Gray)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(44), Constraint::Min(0)])
            .split(area);

        self.draw_settings(frame, cols[0]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(14), Constraint::Length(7), Constraint::Min(0)])
            .split(cols[1]);

        self.draw_report(frame, rows[0]);
        self.draw_table(frame, rows[1]);
        self.draw_chart(frame, rows[2]);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = ParamField::ALL
            .iter()
            .map(|f| {
                let value = match (&self.editing, *f == self.selected()) {
                    (Some(buf), true) => format!("{buf}_"),
                    _ => fmt_value(f.get(&self.params)),
                };
                ListItem::new(format!("{:<25} {value:>12}", f.display_name()))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Property").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_report(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Report").borders(Borders::ALL);
        let run = match &self.run {
            Ok(run) => run,
            Err(msg) => {
                let p = Paragraph::new(msg.as_str())
                    .style(Style::default().fg(Color::Red))
                    .block(block);
                frame.render_widget(p, area);
                return;
            }
        };

        let r = &run.report;
        let heading = Style::default().add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(Span::styled("Monthly Ownership Cost", heading)),
            Line::from(format!("  Mortgage: {}   Total: {}", fmt_money(r.mortgage.monthly_payment), fmt_money(r.mortgage.total_monthly_cost))),
            Line::from(Span::styled("Appreciation Forecast", heading)),
            Line::from(format!(
                "  Future value after {} years: {}   Gain: {}",
                fmt_value(r.forecast.hold_years),
                fmt_money(r.forecast.future_value),
                fmt_money(r.forecast.appreciation_gain)
            )),
            Line::from(Span::styled("Flip Profit", heading)),
            Line::from(format!("  Resale - purchase - rehab: {}", fmt_money(r.forecast.flip_profit))),
            Line::from(Span::styled("Sq Ft Comps", heading)),
            Line::from(format!(
                "  Market value: {}   Purchase: {}   Difference: {}",
                fmt_money(r.comps.market_value_by_sqft),
                fmt_money(r.inputs.purchase_price),
                fmt_money(r.comps.price_difference)
            )),
            Line::from(format!("  Estimated rent: {}", fmt_money(r.comps.rent_estimate_by_sqft))),
        ];

        let p = Paragraph::new(Text::from(lines)).block(block);
        frame.render_widget(p, area);
    }

    fn draw_table(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Rental Strategy Comparison").borders(Borders::ALL);
        let Ok(run) = &self.run else {
            frame.render_widget(block, area);
            return;
        };

        let header = Row::new(TABLE_HEADERS.iter().map(|h| Cell::from(*h)))
            .style(Style::default().add_modifier(Modifier::BOLD));
        let rows = run.table.iter().zip(run.report.scenarios.iter()).map(|(row, s)| {
            Row::new(vec![
                Cell::from(fmt_money(row.rent)),
                Cell::from(fmt_money(row.monthly_cash_flow)),
                Cell::from(fmt_money(row.annual_profit)),
                Cell::from(format!("{:.2}", row.roi_percent)),
                Cell::from(row.strategy.clone()).style(
                    Style::default()
                        .fg(label_color(s.strategy))
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        });

        let widths = [
            Constraint::Length(12),
            Constraint::Length(18),
            Constraint::Length(14),
            Constraint::Length(9),
            Constraint::Min(16),
        ];
        let table = Table::new(rows, widths).header(header).block(block);
        frame.render_widget(table, area);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Monthly Cash Flow by Rent Tier").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Ok(run) = &self.run else {
            let msg = Paragraph::new("No result to chart.").style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        };

        let bars = chart_bars(run);
        let widget = CashFlowChart {
            bars: &bars,
            y_bounds: value_bounds(&bars),
            y_label: "cash flow ($)",
        };
        frame.render_widget(widget, inner);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  Enter type value  r reset  c csv  x xlsx  j json  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

#[derive(Debug, Clone, Copy)]
enum ExportKind {
    Csv,
    Xlsx,
    Json,
}

/// Move `field` by `direction` steps, never below zero.
fn step_value(params: &InputParameters, field: ParamField, direction: f64) -> f64 {
    let next = field.get(params) + direction * field.step();
    // Snap away float noise from repeated fractional steps (0.25, 0.05).
    let snapped = (next * 1e6).round() / 1e6;
    if field.allows_negative() { snapped } else { snapped.max(0.0) }
}

fn parse_edit(text: &str) -> Result<f64, String> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("Invalid number '{trimmed}'")),
    }
}

fn fmt_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        let s = format!("{v:.4}");
        s.trim_end_matches('0').to_string()
    }
}

/// Table color; same palette as the chart bars.
fn label_color(label: StrategyLabel) -> Color {
    let RGBColor(r, g, b) = label_rgb(label);
    Color::Rgb(r, g, b)
}

fn label_rgb(label: StrategyLabel) -> RGBColor {
    match label {
        StrategyLabel::GoodRental => RGBColor(0, 200, 0),
        StrategyLabel::BetterAsFlip => RGBColor(0, 120, 255),
        StrategyLabel::BadBuy => RGBColor(255, 0, 0),
        StrategyLabel::DependsOnGoals => RGBColor(255, 165, 0),
    }
}

fn chart_bars(run: &RunOutput) -> Vec<Bar> {
    run.report
        .scenarios
        .iter()
        .map(|s| Bar {
            label: s.tier.display_name(),
            value: s.monthly_cash_flow,
            color: label_rgb(s.strategy),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_clamps_at_zero() {
        let p = InputParameters {
            rehab_cost: 2_000.0,
            ..InputParameters::default()
        };
        assert_eq!(step_value(&p, ParamField::RehabCost, -1.0), 0.0);
        assert_eq!(step_value(&p, ParamField::RehabCost, 1.0), 7_000.0);
    }

    #[test]
    fn appreciation_steps_below_zero() {
        let p = InputParameters {
            appreciation_rate: 0.0,
            ..InputParameters::default()
        };
        assert_eq!(step_value(&p, ParamField::AppreciationRate, -1.0), -0.25);
    }

    #[test]
    fn table_and_chart_share_label_colors() {
        for label in [
            StrategyLabel::GoodRental,
            StrategyLabel::BetterAsFlip,
            StrategyLabel::BadBuy,
            StrategyLabel::DependsOnGoals,
        ] {
            let RGBColor(r, g, b) = label_rgb(label);
            assert_eq!(label_color(label), Color::Rgb(r, g, b));
        }
    }

    #[test]
    fn fractional_steps_stay_clean() {
        let mut p = InputParameters::default();
        for _ in 0..3 {
            let v = step_value(&p, ParamField::AvgRentPerSqft, 1.0);
            p = ParamField::AvgRentPerSqft.with(&p, v);
        }
        assert_eq!(p.avg_rent_per_sqft, 1.35);
    }

    #[test]
    fn parse_edit_rejects_garbage() {
        assert_eq!(parse_edit(" 1500.5 "), Ok(1500.5));
        assert!(parse_edit("").is_err());
        assert!(parse_edit("1.2.3").is_err());
    }

    #[test]
    fn app_reports_errors_instead_of_panicking() {
        let mut app = App::new(InputParameters::default());
        assert!(app.run.is_ok());

        app.selected_field = ParamField::ALL
            .iter()
            .position(|f| *f == ParamField::HoldYears)
            .unwrap();
        app.set_selected(0.0);
        assert!(app.run.is_err());
        assert!(app.status.contains("hold_years"));

        app.handle_key(KeyCode::Char('r'));
        assert!(app.run.is_ok());
    }

    #[test]
    fn editing_applies_typed_value() {
        let mut app = App::new(InputParameters::default());
        app.handle_key(KeyCode::Enter);
        for c in "250000".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.params.purchase_price, 250_000.0);
        assert!(app.editing.is_none());
    }

    #[test]
    fn chart_bars_follow_scenario_order() {
        let run = run_evaluation(&InputParameters::default()).unwrap();
        let bars = chart_bars(&run);
        assert_eq!(bars.iter().map(|b| b.label).collect::<Vec<_>>(), ["Low", "Mid", "High"]);
    }

    #[test]
    fn fmt_value_trims() {
        assert_eq!(fmt_value(200_000.0), "200000");
        assert_eq!(fmt_value(6.5), "6.5");
        assert_eq!(fmt_value(1.2), "1.2");
    }
}
