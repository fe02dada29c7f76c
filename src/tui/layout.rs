//! Form layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, Paragraph};

use crate::config::BudgetMode;
use crate::currency::CurrencyFormatter;
use crate::engine::NetBalance;
use crate::engine::seasonal::MONTH_LABELS;

use super::runtime::App;
use super::style;

/// Renders the full form frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // form + results
            Constraint::Length(1), // status
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(46), Constraint::Min(30)])
        .split(chunks[1]);

    render_form(frame, app, body[0]);
    render_results(frame, app, body[1]);
    render_status(frame, app, chunks[2]);
    render_footer(frame, chunks[3]);
}

/// Header bar: title and site label.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " SOLAR-SIM ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            &app.session.scenario().site.city,
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Input panel: editable fields plus the mode/connection/preview lines.
fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let money = CurrencyFormatter::from_env();
    let scenario = app.session.scenario();
    let fields = app.fields();

    let mut lines = Vec::with_capacity(fields.len() + 6);

    let demand_mode = if scenario.demand.monthly_consumption_kwh.is_some() {
        "utility bill"
    } else {
        "appliance estimate"
    };
    lines.push(Line::from(format!(" Demand input: {demand_mode}")));

    for (i, field) in fields.iter().enumerate() {
        let focused = i == app.focus;
        let value = if focused {
            format!("{}_", app.edit)
        } else {
            app.field_value(*field)
        };
        let text = format!(" {} {:<28} {}", if focused { "▶" } else { " " }, field.label(), value);
        let styled = if focused {
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(style::FOCUS_FG)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(text)
        };
        lines.push(styled);
    }

    lines.push(Line::from(format!(
        " Tariff total: {} /kWh",
        money.format(app.session.tariff_total())
    )));
    lines.push(Line::from(format!(
        " Connection: {} ({:.0} kWh minimum)",
        scenario.billing.connection_type,
        scenario.billing.connection_type.min_billable_kwh()
    )));

    let budget_line = match scenario.budget.mode {
        BudgetMode::SiteEstimate => format!(
            " Budget: site estimate ({})",
            money.format(app.session.preview().total_cost)
        ),
        BudgetMode::Custom => " Budget: custom amount".to_string(),
    };
    lines.push(Line::from(budget_line));
    lines.push(Line::from(format!(
        " Estimated consumption: {:.0} kWh/month",
        app.session.effective_consumption_kwh()
    )));

    let block = Block::default().title(" Your Data ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Results panel: committed report summary plus the monthly chart.
fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(11), Constraint::Min(8)])
        .split(area);

    render_summary(frame, app, chunks[0]);
    render_chart(frame, app, chunks[1]);
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let money = CurrencyFormatter::from_env();
    let lines = if let Some(report) = app.session.last_report() {
        let s = &report.sizing;
        let balance_line = match report.billing.balance {
            NetBalance::Deficit { grid_energy_kwh } => Line::from(Span::styled(
                format!(
                    "  New bill: {}  ({grid_energy_kwh:.0} kWh from the grid)",
                    money.format(report.billing.estimated_new_bill)
                ),
                Style::default().fg(style::DEFICIT_FG),
            )),
            NetBalance::Surplus { credited_kwh } => Line::from(Span::styled(
                format!(
                    "  New bill (minimum): {}  credits {credited_kwh:.0} kWh/month",
                    money.format(report.billing.estimated_new_bill)
                ),
                Style::default().fg(style::SURPLUS_FG),
            )),
        };
        vec![
            Line::from(format!(
                "  Investment: {}",
                money.format(s.total_cost)
            )),
            Line::from(format!(
                "  System: {:.2} kWp — {} panels, {:.2} m²",
                s.system_power_kwp, s.panel_count, s.array_area_m2
            )),
            Line::from(format!(
                "  Inverter: ~{:.2} kW AC   Generation: {:.2} kWh/month",
                s.inverter_power_kw, s.monthly_generation_kwh
            )),
            Line::from(format!(
                "  Gross savings: {} /month",
                money.format(s.monthly_savings)
            )),
            balance_line,
            Line::from(format!(
                "  CO2 avoided: {:.2} kg/year (~{:.0} trees)",
                s.annual_co2_avoided_kg,
                report.equivalent_trees()
            )),
            Line::from(format!("  Payback: {}", report.payback)),
        ]
    } else {
        vec![
            Line::from("  No simulation committed yet."),
            Line::from("  Fill in the form and press Enter."),
        ]
    };

    let block = Block::default().title(" Results ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Monthly consumption-vs-generation chart for the committed report.
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let Some(report) = app.session.last_report() else {
        let block = Block::default()
            .title(" Consumption x Generation ")
            .borders(Borders::ALL);
        frame.render_widget(block, area);
        return;
    };

    let consumption_data: Vec<(f64, f64)> = (0..12)
        .map(|m| (m as f64, report.monthly_consumption_kwh))
        .collect();
    let generation_data: Vec<(f64, f64)> = report
        .monthly_generation_profile
        .iter()
        .enumerate()
        .map(|(m, &kwh)| (m as f64, kwh))
        .collect();

    let y_bounds = style::auto_bounds_y(&consumption_data, &generation_data);
    let y_label_lo = format!("{:.0}", y_bounds[0]);
    let y_label_hi = format!("{:.0}", y_bounds[1]);

    let datasets = vec![
        Dataset::default()
            .name("Consumption (kWh)")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(style::CONSUMPTION_COLOR))
            .data(&consumption_data),
        Dataset::default()
            .name("Generation (kWh)")
            .marker(symbols::Marker::Dot)
            .style(Style::default().fg(style::GENERATION_COLOR))
            .data(&generation_data),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Consumption x Generation ")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("month")
                .bounds([0.0, 11.0])
                .labels(vec![MONTH_LABELS[0].to_string(), MONTH_LABELS[11].to_string()]),
        )
        .y_axis(
            Axis::default()
                .title("kWh")
                .bounds(y_bounds)
                .labels(vec![y_label_lo, y_label_hi]),
        );

    frame.render_widget(chart, area);
}

/// Status line: validation feedback or commit confirmation.
fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let text = app.status.as_deref().unwrap_or("");
    frame.render_widget(Paragraph::new(format!(" {text}")), area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  Tab/↑↓:Field  Enter:Simulate  a:Add tariff  m:Demand mode  c:Connection  b:Budget",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
