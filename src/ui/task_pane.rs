use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::{
    border_style, current_style, done_style, hint_style, pending_style, selected_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Build the display line for one task
fn task_line(task: &Task, is_current: bool, is_selected: bool) -> Line<'static> {
    let marker = if is_current { "▶ " } else { "  " };
    let check = if task.completed { "[x] " } else { "[ ] " };

    if is_selected {
        return Line::from(Span::styled(
            format!("{}{}{}", marker, check, task.text),
            selected_style(),
        ));
    }

    let text_style = if task.completed {
        done_style()
    } else {
        pending_style()
    };

    Line::from(vec![
        Span::styled(marker, current_style()),
        Span::styled(check, text_style),
        Span::styled(task.text.clone(), text_style),
    ])
}

/// First visible row so that `selected` stays inside a window of `height` rows
fn scroll_offset(selected: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    (selected + 1).saturating_sub(height)
}

/// Render the task list pane
pub fn render_task_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let stats = app.stats();
    let available_height = area.height.saturating_sub(2) as usize; // Subtract border
    let offset = scroll_offset(app.selected_index, available_height);

    let title = if offset > 0 {
        format!(
            " Tasks ({}/{} completed) [scrolled +{}] ",
            stats.completed, stats.total, offset
        )
    } else {
        format!(" Tasks ({}/{} completed) ", stats.completed, stats.total)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if app.tasks.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::styled("  No tasks yet. Press 'a' to add one.", hint_style()),
        ])
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let current = app.tasks.current_id();
    let items: Vec<ListItem> = app
        .tasks
        .tasks()
        .iter()
        .enumerate()
        .skip(offset)
        .take(available_height)
        .map(|(i, task)| {
            ListItem::new(task_line(task, current == Some(task.id), i == app.selected_index))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::notifications::Notifier;
    use crate::persistence::AppSettings;
    use ratatui::{backend::TestBackend, Terminal};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_task_line_text() {
        let task = Task::restore("Write tests".to_string(), false);
        assert_eq!(line_text(&task_line(&task, false, false)), "  [ ] Write tests");

        let task = Task::restore("Ship it".to_string(), true);
        assert_eq!(line_text(&task_line(&task, true, false)), "▶ [x] Ship it");
    }

    #[test]
    fn test_task_line_colors() {
        let pending = Task::restore("a".to_string(), false);
        let line = task_line(&pending, false, false);
        assert_eq!(line.spans[2].style, pending_style());

        let done = Task::restore("b".to_string(), true);
        let line = task_line(&done, false, false);
        assert_eq!(line.spans[2].style, done_style());
    }

    #[test]
    fn test_selected_line_highlighted() {
        let task = Task::restore("a".to_string(), false);
        let line = task_line(&task, false, true);
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].style, selected_style());
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(39, 17), 23);
        assert_eq!(scroll_offset(5, 0), 0);
    }

    #[test]
    fn test_selected_task_stays_visible() {
        let mut app = AppState::new(
            crate::domain::TaskList::default(),
            AppSettings::default(),
            Notifier::silent(),
            None,
        );
        for i in 0..40 {
            app.add_task(&format!("task-{:02}", i));
        }
        app.selected_index = 39;

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|f| render_task_pane(f, &app, f.size()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("task-39"));
        assert!(!text.contains("task-00"));
        assert!(text.contains("[scrolled +22]"));

        app.selected_index = 0;
        terminal
            .draw(|f| render_task_pane(f, &app, f.size()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("task-00"));
        assert!(!text.contains("task-39"));
    }
}
