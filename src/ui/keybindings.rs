use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" s start   "),
        Span::raw("p pause   "),
        Span::raw("space toggle   "),
        Span::raw("r reset   "),
        Span::raw("n skip   "),
        Span::raw("a add   "),
        Span::raw("↑/↓ select   "),
        Span::raw("Enter current   "),
        Span::raw("x delete   "),
        Span::raw("v stats   "),
        Span::raw("e settings   "),
        Span::raw("b reminders   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
