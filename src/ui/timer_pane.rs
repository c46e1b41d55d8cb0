use crate::app::AppState;
use crate::domain::format_clock;
use crate::ui::layout::centered_rect;
use crate::ui::styles::{
    border_style, clock_style, default_style, hint_style, mode_color, title_style, track_color,
};
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Gauge, Paragraph,
    },
    Frame,
};

/// Points per full turn of the progress ring
const RING_STEPS: usize = 360;
const RING_RADIUS: f64 = 1.0;
const MIN_RING_WIDTH: u16 = 4;
const MIN_RING_HEIGHT: u16 = 2;

/// Sample points along a circular arc.
///
/// Angles are in degrees, counter-clockwise from 3 o'clock; a negative
/// `sweep_deg` runs clockwise. The number of samples scales with the sweep.
pub fn arc_points(start_deg: f64, sweep_deg: f64, radius: f64, steps_per_turn: usize) -> Vec<(f64, f64)> {
    let steps = ((sweep_deg.abs() / 360.0) * steps_per_turn as f64).ceil() as usize;
    if steps == 0 {
        return Vec::new();
    }

    (0..=steps)
        .map(|i| {
            let angle = (start_deg + sweep_deg * i as f64 / steps as f64).to_radians();
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Elapsed and remaining arcs for a progress fraction, starting at 12 o'clock clockwise
pub fn progress_ring(progress: f64) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    let angle = progress.clamp(0.0, 1.0) * 360.0;
    let elapsed = arc_points(90.0, -angle, RING_RADIUS, RING_STEPS);
    let remaining = arc_points(90.0 - angle, -(360.0 - angle), RING_RADIUS, RING_STEPS);
    (elapsed, remaining)
}

/// Format the projected end time as "HH:MM"
fn format_end_time(now: DateTime<Local>, remaining_secs: u32) -> String {
    (now + chrono::Duration::seconds(remaining_secs as i64))
        .format("%H:%M")
        .to_string()
}

/// Draw the progress ring: elapsed arc in the mode color over a dim track
fn render_ring(f: &mut Frame, progress: f64, accent: Color, area: Rect) {
    let (elapsed, remaining) = progress_ring(progress);
    let ring = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.2, 1.2])
        .y_bounds([-1.2, 1.2])
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &remaining,
                color: track_color(),
            });
            ctx.draw(&Points {
                coords: &elapsed,
                color: accent,
            });
        });
    f.render_widget(ring, area);
}

/// Render the timer pane: ring, clock, gauge and counters
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Pomodoro Timer ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Current task
            Constraint::Min(6),    // Ring
            Constraint::Length(1), // Gauge
            Constraint::Length(4), // Counters
        ])
        .split(inner);

    let timer = &app.timer;
    let mode = timer.mode();
    let progress = timer.progress();

    let current = Paragraph::new(app.current_task_label())
        .style(default_style())
        .alignment(Alignment::Center);
    f.render_widget(current, chunks[0]);

    let accent = mode_color(mode);
    if chunks[1].width >= MIN_RING_WIDTH && chunks[1].height >= MIN_RING_HEIGHT {
        render_ring(f, progress, accent, chunks[1]);
    }

    let mut clock_lines = vec![
        Line::styled(format_clock(timer.remaining_seconds()), clock_style(mode)),
        Line::styled(mode.label(), Style::default().fg(accent)),
    ];
    if timer.is_running() {
        clock_lines.push(Line::styled(
            format!("ends {}", format_end_time(Local::now(), timer.remaining_seconds())),
            hint_style(),
        ));
    } else {
        clock_lines.push(Line::styled("paused", hint_style()));
    }
    let clock_area = centered_rect(14, clock_lines.len() as u16, chunks[1]);
    f.render_widget(
        Paragraph::new(clock_lines).alignment(Alignment::Center),
        clock_area,
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(accent).bg(track_color()))
        .ratio(progress)
        .label(format!("{:.0}%", progress * 100.0));
    f.render_widget(gauge, chunks[2]);

    let stats = app.stats();
    let counters = vec![
        Line::raw(format!("Tasks: {}/{} completed", stats.completed, stats.total)),
        Line::raw(format!("Pomodoros completed: {}", timer.completed_work_cycles())),
        Line::raw(format!(
            "Work {}m · Short {}m · Long {}m",
            timer.durations().work() / 60,
            timer.durations().short_break() / 60,
            timer.durations().long_break() / 60
        )),
        Line::styled(
            format!(
                "Break reminders: {}",
                if timer.break_reminders() { "on" } else { "off" }
            ),
            hint_style(),
        ),
    ];
    f.render_widget(
        Paragraph::new(counters)
            .style(default_style())
            .alignment(Alignment::Center),
        chunks[3],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn test_arc_starts_at_twelve_and_runs_clockwise() {
        let points = arc_points(90.0, -90.0, 1.0, 360);
        assert!(close(points[0], (0.0, 1.0)));
        assert!(close(*points.last().unwrap(), (1.0, 0.0)));
        assert_eq!(points.len(), 91);
    }

    #[test]
    fn test_empty_sweep_has_no_points() {
        assert!(arc_points(90.0, 0.0, 1.0, 360).is_empty());
    }

    #[test]
    fn test_progress_ring_splits_circle() {
        let (elapsed, remaining) = progress_ring(0.0);
        assert!(elapsed.is_empty());
        assert_eq!(remaining.len(), 361);

        let (elapsed, remaining) = progress_ring(0.5);
        assert!(close(*elapsed.last().unwrap(), (0.0, -1.0)));
        assert!(close(remaining[0], (0.0, -1.0)));

        let (elapsed, remaining) = progress_ring(1.0);
        assert_eq!(elapsed.len(), 361);
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_progress_ring_clamps() {
        let (elapsed, _) = progress_ring(1.5);
        assert_eq!(elapsed.len(), 361);
    }

    #[test]
    fn test_format_end_time() {
        let now = Local.with_ymd_and_hms(2024, 3, 1, 9, 50, 0).unwrap();
        assert_eq!(format_end_time(now, 25 * 60), "10:15");
    }
}
