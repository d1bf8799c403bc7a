// Status bar component
//
// Bottom line: load progress, key hints for the focused region, and the
// most recent captured warning (logs have nowhere else to go while the
// TUI owns the screen).

use crate::tui::app::{App, Focus};
use crate::util;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// How long a captured warning stays on the status bar, in seconds
const PROBLEM_WINDOW_SECS: i64 = 5;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let (done, failed, total) = app.progress();

    let progress = if done < total {
        format!("⏳ {done}/{total} loaded")
    } else if failed > 0 {
        format!("⚠ {} of {total} failed", failed)
    } else {
        format!("✓ {total} templates")
    };

    let hints = match app.focus {
        Focus::Deck => "↑↓:select  Enter:view  y:copy  q:quit",
        Focus::CardText => "↑↓:scroll  y:copy  Tab:deck  Esc:collapse",
    };

    let mut spans = vec![
        Span::styled(
            format!(" {progress}"),
            Style::default().fg(app.theme.status_bar),
        ),
        Span::styled(
            format!(" │ {hints}"),
            Style::default().fg(app.theme.muted),
        ),
    ];

    if let Some(problem) = app.log_buffer.latest_problem(PROBLEM_WINDOW_SECS) {
        let budget = (area.width as usize).saturating_sub(
            spans.iter().map(|s| s.content.chars().count()).sum::<usize>() + 5,
        );
        if budget > 4 {
            spans.push(Span::styled(
                format!(" │ ⚠ {}", util::fit_width(&problem.message, budget)),
                Style::default().fg(app.theme.error),
            ));
        }
    }

    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
    f.render_widget(status, area);
}
