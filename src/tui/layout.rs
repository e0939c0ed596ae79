//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::runtime::{App, CONTROLS, Control};
use super::style;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(16),   // canvases
            Constraint::Length(3), // controls
            Constraint::Length(6), // summary
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_layout_canvas(frame, app, panes[0]);
    render_wake_canvas(frame, app, panes[1]);

    render_controls(frame, app, chunks[2]);
    render_summary(frame, app, chunks[3]);
    render_footer(frame, chunks[4]);
}

/// Header bar: preset name, turbine count, selected control.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let control = app.selected_control();
    let header = Line::from(vec![
        Span::styled(
            " WAKEVIEW ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " │ {} turbines │ editing {} = {} ",
            app.result.turbines.len(),
            control.label(),
            format_value(app, control),
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Farm layout canvas: boundary, mooring lines, turbine markers.
fn render_layout_canvas(frame: &mut Frame, app: &App, area: Rect) {
    let result = &app.result;

    let turbine_points: Vec<(f64, f64)> = result
        .turbines
        .iter()
        .map(|t| (f64::from(t.x_m), f64::from(t.y_m)))
        .collect();

    let boundary_points = result
        .boundary
        .iter()
        .map(|&(x, y)| (f64::from(x), f64::from(y)));
    let (x_bounds, y_bounds) =
        style::canvas_bounds(turbine_points.iter().copied().chain(boundary_points));

    let canvas = Canvas::default()
        .block(Block::default().title(" Layout ").borders(Borders::ALL))
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            // Boundary polygon
            for pair in result.boundary.windows(2) {
                ctx.draw(&CanvasLine {
                    x1: f64::from(pair[0].0),
                    y1: f64::from(pair[0].1),
                    x2: f64::from(pair[1].0),
                    y2: f64::from(pair[1].1),
                    color: style::BOUNDARY_COLOR,
                });
            }
            // Mooring lines
            for t in result.turbines.iter() {
                for &(ax, ay) in &t.anchors {
                    ctx.draw(&CanvasLine {
                        x1: f64::from(t.x_m),
                        y1: f64::from(t.y_m),
                        x2: f64::from(ax),
                        y2: f64::from(ay),
                        color: style::MOORING_COLOR,
                    });
                }
            }
            // Turbines on top
            ctx.draw(&Points {
                coords: &turbine_points,
                color: style::TURBINE_COLOR,
            });
        });
    frame.render_widget(canvas, area);
}

/// Wake map canvas: flow-map grid colored by speed deficit.
fn render_wake_canvas(frame: &mut Frame, app: &App, area: Rect) {
    let result = &app.result;
    let map = &result.flow_map;

    // Bucket grid points by color so each bucket is one Points draw.
    let mut buckets: [Vec<(f64, f64)>; 4] = Default::default();
    if map.free_stream_ms > 0.0 {
        for (yi, row) in map.speeds_ms.iter().enumerate() {
            for (xi, &speed) in row.iter().enumerate() {
                let ratio = speed / map.free_stream_ms;
                let idx = if ratio >= 0.97 {
                    0
                } else if ratio >= 0.90 {
                    1
                } else if ratio >= 0.80 {
                    2
                } else {
                    3
                };
                buckets[idx].push((f64::from(map.xs_m[xi]), f64::from(map.ys_m[yi])));
            }
        }
    }
    let colors = [
        style::speed_ratio_color(1.0),
        style::speed_ratio_color(0.93),
        style::speed_ratio_color(0.85),
        style::speed_ratio_color(0.5),
    ];

    let turbine_points: Vec<(f64, f64)> = result
        .turbines
        .iter()
        .map(|t| (f64::from(t.x_m), f64::from(t.y_m)))
        .collect();

    let grid_points = buckets.iter().flatten().copied();
    let (x_bounds, y_bounds) =
        style::canvas_bounds(turbine_points.iter().copied().chain(grid_points));

    let title = format!(
        " Wake map — {:.0}° / {:.1} m/s ",
        app.adjustments.wind_direction_deg, app.adjustments.wind_speed_ms
    );

    let canvas = Canvas::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for (bucket, &color) in buckets.iter().zip(colors.iter()) {
                if !bucket.is_empty() {
                    ctx.draw(&Points {
                        coords: bucket,
                        color,
                    });
                }
            }
            ctx.draw(&Points {
                coords: &turbine_points,
                color: style::TURBINE_COLOR,
            });
        });
    frame.render_widget(canvas, area);
}

/// Controls panel: every adjustable value, selected one highlighted.
fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = Vec::with_capacity(CONTROLS.len() * 2);
    for (i, &control) in CONTROLS.iter().enumerate() {
        let text = format!(" {}={} ", control.label(), format_value(app, control));
        let style = if i == app.selected {
            Style::default()
                .fg(style::SELECTED_FG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw("│"));
    }
    spans.pop();

    let block = Block::default().title(" Controls ").borders(Borders::ALL);
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

/// Summary panel with the metrics of the latest pass.
fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let s = &app.result.summary;
    let local = match s.local_wake_loss_pct {
        Some(pct) => format!("{pct:.2}%"),
        None => "n/a (off axes)".to_string(),
    };
    let lines = vec![
        Line::from(format!(
            "  turbines={}  capacity={:.0} MW",
            s.turbine_count, s.capacity_mw
        )),
        Line::from(format!("  AEP (with wake) = {:.2} GWh", s.aep_gwh)),
        Line::from(format!("  total wake loss = {:.2}%", s.wake_loss_pct)),
        Line::from(format!("  local wake loss = {local}")),
    ];

    let block = Block::default().title(" Summary ").borders(Borders::ALL);
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  Tab/↑↓:Select  +/-:Adjust  1/2/3:Preset  r:Reset",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}

/// Formats a control value with a unit-appropriate precision.
fn format_value(app: &App, control: Control) -> String {
    let value = app.value_of(control);
    match control {
        Control::DeltaX | Control::DeltaY => format!("{value:.2}"),
        Control::SpacingX | Control::SpacingY | Control::WindSpeed => format!("{value:.1}"),
        _ => format!("{value:.0}"),
    }
}
