use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("Shift+↑/↓ reorder   "),
        Span::raw("t today   "),
        Span::raw("+ / - progress   "),
        Span::raw("p priority   "),
        Span::raw("l energy   "),
        Span::raw("a add   "),
        Span::raw("e edit   "),
        Span::raw("x archive   "),
        Span::raw("v archive-view   "),
        Span::raw("c check-in   "),
        Span::raw("s settings   "),
        Span::raw("o todo   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
