// Title bar component
//
// App name plus where the templates come from.

use crate::tui::app::App;
use crate::util;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let text = format!(
        " ⛉ promptdeck ── {} templates from {}",
        app.cards.len(),
        app.base_url
    );

    let title = Paragraph::new(util::fit_width(&text, area.width as usize))
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::BOTTOM));

    f.render_widget(title, area);
}
