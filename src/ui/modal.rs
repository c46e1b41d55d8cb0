use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the front message of the modal queue
pub fn render_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(modal) = app.active_modal() {
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let mut lines = vec![Line::raw("")];
        for text in modal.message.lines() {
            lines.push(Line::raw(format!("  {}", text)));
        }
        lines.push(Line::raw(""));

        let pending = app.modals.len().saturating_sub(1);
        let mut options = vec![
            Span::styled("  [Enter]", modal_title_style()),
            Span::raw(" OK"),
        ];
        if pending > 0 {
            options.push(Span::raw(format!("   ({} more)", pending)));
        }
        lines.push(Line::from(options));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(
                        format!(" {} ", modal.title),
                        modal_title_style(),
                    ))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
