//! TUI rendering with ratatui
//!
//! Draws the panel from the board the session keeps up to date.

use super::app::{App, InputMode, MessageStyle};
use crate::config::TILE_GAP;
use crate::core::{Tile, TileKind, TileStatus};
use crate::output::formatters::letters_line;
use crate::reveal::ButtonMode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Panel
            Constraint::Length(4), // Input and buttons
            Constraint::Length(7), // Info
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_panel(f, app, chunks[1]);
    render_input(f, app, chunks[2]);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);

    render_progress(f, app, info_chunks[0]);
    render_messages(f, app, info_chunks[1]);

    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎡 LA RULETA - El Panel")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

/// One tile drawn as a colored block `cells` wide
///
/// Hidden and highlighted tiles never show their character.
#[must_use]
pub fn tile_cell(tile: &Tile, cells: u16) -> Span<'static> {
    let width = usize::from(cells);
    let blank = " ".repeat(width);

    match (tile.kind, tile.status) {
        (TileKind::Space, _) => Span::raw(blank),
        (_, TileStatus::Hidden) => Span::styled(blank, Style::default().bg(Color::White)),
        (_, TileStatus::Pending(_)) => Span::styled(blank, Style::default().bg(Color::Yellow)),
        (_, TileStatus::Revealed) => Span::styled(
            format!("{:^width$}", tile.character),
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

/// A panel row as a line of tiles separated by gaps
fn tile_row(row: &[Tile], cells: u16) -> Line<'static> {
    let gap = " ".repeat(usize::from(TILE_GAP));
    let mut spans = Vec::with_capacity(row.len() * 2);
    for (i, tile) in row.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(gap.clone()));
        }
        spans.push(tile_cell(tile, cells));
    }
    Line::from(spans)
}

fn render_panel(f: &mut Frame, app: &App, area: Rect) {
    let board = app.board();
    let width = app.session.width();

    let content: Vec<Line> = if board.is_empty() {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "The panel is waiting for a phrase",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    } else {
        let mut lines = vec![Line::from("")];
        for row in board.rows() {
            lines.push(tile_row(row, width.tile_cells()));
            lines.push(Line::from(""));
        }
        lines
    };

    let border = if board.is_completed() {
        Color::LightGreen
    } else {
        Color::Green
    };

    let panel = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" El Panel ({width}) "))
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .style(Style::default().fg(border)),
    );

    f.render_widget(panel, area);
}

/// Button labels, the active one highlighted
fn button_line(mode: ButtonMode, enabled: bool) -> Line<'static> {
    let bold = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let (main, solve) = if enabled {
        let main_bg = match mode {
            ButtonMode::Guess => Color::Green,
            ButtonMode::Confirm => Color::Blue,
        };
        (bold.bg(main_bg), bold.bg(Color::Red))
    } else {
        let off = Style::default().fg(Color::DarkGray);
        (off, off)
    };

    Line::from(vec![
        Span::styled(format!(" {} ", mode.label()), main),
        Span::raw(" Enter   "),
        Span::styled(" Resolver ", solve),
        Span::raw(" Ctrl+R"),
    ])
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let mode = app.board().mode();

    let (title, content, color) = match app.input_mode {
        InputMode::Phrase => (
            " Secret phrase | Enter to start, TAB for random, ESC to cancel ".to_string(),
            // Keep the phrase from the guessing player
            "•".repeat(app.phrase_input.chars().count()),
            Color::Cyan,
        ),
        InputMode::Panel => {
            let title = match mode {
                ButtonMode::Guess => " Letter | Enter to guess ",
                ButtonMode::Confirm => " Enter to reveal the next letter ",
            };
            (title.to_string(), app.letter_input.to_uppercase(), Color::Yellow)
        }
        InputMode::Solved => (
            " 🎉 ¡PANEL RESUELTO! 🎉 | Enter for a new phrase, ESC to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
    };

    let lines = vec![
        Line::from(Span::styled(
            content,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        button_line(mode, app.input_mode == InputMode::Panel),
    ];

    let input = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(input, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(2)])
        .split(area);

    let (revealed, total) = app.board().letter_progress();
    let percent = if total == 0 {
        0
    } else {
        u16::try_from(revealed * 100 / total).unwrap_or(100)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Revealed ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{revealed}/{total} letters"));

    f.render_widget(gauge, chunks[0]);

    let tried = app
        .session
        .round()
        .map(|round| letters_line(&round.tried_letters()))
        .unwrap_or_default();

    let tried = Paragraph::new(tried)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Tried ").borders(Borders::ALL));

    f.render_widget(tried, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Phrase => "Ctrl+Q: Quit | Enter: Start | TAB: Random phrase",
        InputMode::Panel => "Ctrl+Q: Quit | Enter: Button | Ctrl+R: Solve | Ctrl+N: New phrase",
        InputMode::Solved => "Ctrl+Q: Quit | Enter: New phrase | TAB: Random phrase",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanelWidth;
    use crate::core::{TileId, TilePosition};
    use crate::phrases::PhrasePool;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn tile(character: char, status: TileStatus) -> Tile {
        let mut tile = Tile::new(TileId(0), character, TilePosition { row: 0, column: 0 });
        tile.status = status;
        tile
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn hidden_and_pending_tiles_show_no_character() {
        let hidden = tile_cell(&tile('A', TileStatus::Hidden), 3);
        assert_eq!(hidden.content, "   ");
        assert_eq!(hidden.style.bg, Some(Color::White));

        let pending = tile_cell(&tile('A', TileStatus::Pending('A')), 3);
        assert_eq!(pending.content, "   ");
        assert_eq!(pending.style.bg, Some(Color::Yellow));
    }

    #[test]
    fn revealed_tile_is_centered() {
        let span = tile_cell(&tile('Ñ', TileStatus::Revealed), 3);
        assert_eq!(span.content, " Ñ ");

        let span = tile_cell(&tile('?', TileStatus::Revealed), 4);
        assert_eq!(span.content.chars().count(), 4);
        assert!(span.content.contains('?'));
    }

    #[test]
    fn space_tile_has_no_background() {
        let span = tile_cell(&tile(' ', TileStatus::Revealed), 4);
        assert_eq!(span.content, "    ");
        assert_eq!(span.style.bg, None);
    }

    #[test]
    fn row_puts_gap_between_tiles() {
        let row = [tile('S', TileStatus::Revealed), tile('I', TileStatus::Revealed)];
        let line = tile_row(&row, 3);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " S   I ");
    }

    #[test]
    fn screen_hides_phrase_until_revealed() {
        let mut app = App::new(PhrasePool::new(Vec::new()), Some(PanelWidth::Narrow));
        for c in "zorro".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert!(!screen(&app).contains("zorro"));

        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        let text = screen(&app);
        assert!(text.contains("Adivinar"));
        assert!(!text.contains('Z'));

        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        let text = screen(&app);
        assert!(text.contains('Z'));
        assert!(text.contains("5/5 letters"));
    }
}
