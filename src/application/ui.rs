use std::io;
use std::path;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::SlashCommand;
use crate::domain::models::TextArea;
use crate::domain::services::actions::help_text;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;

fn header_widget(app_state: &AppState) -> Paragraph<'static> {
    let document = match app_state.session() {
        Some(session) => format!("Document: {}", session.filename),
        None => "No document loaded".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            " docchat ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("| "),
        Span::styled(document, Style::default().fg(Color::Gray)),
    ]);

    return Paragraph::new(vec![line]);
}

fn error_widget(error: &str) -> Paragraph<'static> {
    return Paragraph::new(error.to_string())
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red))
                .title("Error (/dismiss or CTRL+E)")
                .padding(Padding::new(1, 1, 0, 0)),
        )
        .wrap(Wrap { trim: false });
}

fn help_widget() -> Paragraph<'static> {
    return Paragraph::new(help_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title("Help (press any key to close)")
                .padding(Padding::new(1, 1, 0, 0)),
        )
        .wrap(Wrap { trim: false });
}

fn handle_slash_command(
    command: &SlashCommand,
    app_state: &mut AppState,
    show_help: &mut bool,
) -> Option<Action> {
    if command.is_upload() {
        let file_path = command.argument();
        if file_path.is_empty() {
            app_state.show_error("Usage: /upload PATH");
            return None;
        }

        return app_state.begin_upload(path::Path::new(&file_path));
    }

    if command.is_new_document() {
        app_state.reset();
    } else if command.is_dismiss() {
        app_state.dismiss_error();
    } else if command.is_help() {
        *show_help = true;
    }

    return None;
}

/// Keeps an edit only when the resulting text may be typed right now,
/// otherwise restores the previous input box.
fn apply_edit<'a>(
    app_state: &mut AppState,
    textarea: &mut tui_textarea::TextArea<'a>,
    previous: tui_textarea::TextArea<'a>,
) {
    let text = textarea.lines().join("\n");
    if app_state.can_edit_input(&text) {
        app_state.set_input(&text);
    } else {
        *textarea = previous;
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut textarea = TextArea::default();
    let mut show_help = false;

    loop {
        terminal.draw(|frame| {
            let error = app_state.error().map(|e| return e.to_string());
            let status = app_state.status_text();

            let mut constraints = vec![Constraint::Length(1)];
            if error.is_some() {
                constraints.push(Constraint::Length(4));
            }
            constraints.push(Constraint::Min(1));
            if status.is_some() {
                constraints.push(Constraint::Length(3));
            }
            constraints.push(Constraint::Max(4));

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(frame.size());

            let mut bubbles_idx = 1;
            if error.is_some() {
                bubbles_idx = 2;
            }
            let bubbles_rect = layout[bubbles_idx];
            let input_rect = layout[layout.len() - 1];

            if bubbles_rect.width != app_state.last_known_width
                || bubbles_rect.height != app_state.last_known_height
            {
                app_state.set_rect(bubbles_rect);
            }

            frame.render_widget(header_widget(app_state), layout[0]);
            if let Some(error_text) = error {
                frame.render_widget(error_widget(&error_text), layout[1]);
            }

            frame.render_widget(
                app_state.bubble_list.widget(app_state.scroll.position),
                bubbles_rect,
            );
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                bubbles_rect.inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut app_state.scroll.scrollbar_state,
            );

            if show_help {
                frame.render_widget(Clear, bubbles_rect);
                frame.render_widget(help_widget(), bubbles_rect);
            }

            if let Some(status_text) = status {
                frame.render_widget(Loading::widget(status_text), layout[bubbles_idx + 1]);
            }

            textarea.set_block(TextArea::block(app_state.input_title()));
            frame.render_widget(textarea.widget(), input_rect);
        })?;

        let event = events.next().await?;
        if show_help {
            match event {
                Event::KeyboardCharInput(_) | Event::KeyboardEnter() => {
                    show_help = false;
                    continue;
                }
                _ => (),
            }
        }

        match event {
            Event::UploadResponse(ticket, result) => {
                app_state.complete_upload(ticket, result);
            }
            Event::ChatResponse(ticket, result) => {
                app_state.complete_chat(ticket, result);
            }
            Event::ServiceHealth(result) => {
                app_state.handle_health(result);
            }
            Event::KeyboardCharInput(input) => {
                let previous = textarea.clone();
                textarea.input(input);
                apply_edit(app_state, &mut textarea, previous);
            }
            Event::KeyboardPaste(text) => {
                let previous = textarea.clone();
                textarea.insert_str(text);
                apply_edit(app_state, &mut textarea, previous);
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardCTRLE() => {
                app_state.dismiss_error();
            }
            Event::KeyboardCTRLN() => {
                app_state.reset();
            }
            Event::KeyboardEnter() => {
                let input_str = textarea.lines().join("\n");

                if let Some(command) = SlashCommand::parse(&input_str) {
                    if command.is_quit() {
                        break;
                    }

                    textarea = TextArea::default();
                    app_state.set_input("");
                    if let Some(action) =
                        handle_slash_command(&command, app_state, &mut show_help)
                    {
                        tx.send(action)?;
                    }

                    continue;
                }

                app_state.set_input(&input_str);
                if let Some(action) = app_state.submit() {
                    textarea = TextArea::default();
                    tx.send(action)?;
                }
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UIResize() | Event::UITick() => (),
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut app_state = AppState::default();

    tx.send(Action::HealthCheck())?;
    let initial_file = Config::get(ConfigKey::File);
    if !initial_file.is_empty() {
        if let Some(action) = app_state.begin_upload(path::Path::new(&initial_file)) {
            tx.send(action)?;
        }
    }

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut app_state, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
