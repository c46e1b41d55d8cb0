use crate::app::AppState;
use crate::domain::PLACEHOLDER_TEXT;
use crate::ui::{
    layout::create_modal_area,
    styles::{border_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the add-task form
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.input_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));
        lines.push(Line::raw("Task:"));

        let input = if form.text.is_empty() {
            Span::styled(PLACEHOLDER_TEXT, border_style())
        } else {
            Span::styled(form.text.as_str(), modal_title_style())
        };
        lines.push(Line::from(vec![
            Span::raw("> "),
            input,
            Span::styled("█", modal_title_style()), // Cursor
        ]));
        lines.push(Line::raw(""));
        lines.push(Line::raw("Enter to add  ·  Esc to cancel"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Add Task ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

/// Render the settings form (durations in minutes)
pub fn render_settings_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.settings_form {
        let modal_area = create_modal_area(area);
        f.render_widget(Clear, modal_area);

        let fields = [
            ("Work", &form.work),
            ("Short Break", &form.short_break),
            ("Long Break", &form.long_break),
        ];

        let mut lines = vec![Line::raw("")];
        for (i, (label, value)) in fields.iter().enumerate() {
            let editing = form.editing_field == i;
            lines.push(Line::from(vec![
                Span::raw(format!("{:<12}", format!("{}:", label))),
                Span::styled(value.as_str(), modal_title_style()),
                if editing {
                    Span::styled("█", modal_title_style())
                } else {
                    Span::raw("")
                },
                Span::raw(" min"),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::raw("Tab/↑/↓ to switch fields  ·  Enter to apply  ·  Esc to cancel"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Settings ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
