use std::io::{self, BufRead, IsTerminal, Write};
use std::time::{Duration, Instant};

use colored::Colorize;
use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};

use mq_session::{Mode, Session, SessionConfig};

pub fn run(config: SessionConfig) -> Result<(), String> {
    let mut session =
        Session::new(config).map_err(|e| format!("failed to start session: {e}"))?;

    println!("  {} Milliomos", "Starting".bold());
    if session.resumed() {
        println!(
            "  Resuming a saved game at round {}.",
            session.game().round()
        );
    }
    println!("  Type 'help' for commands, 'quit' to save and exit.\n");
    println!("{}\n", session.question_view());

    // A live countdown needs a terminal; piped input plays untimed.
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        timed_loop(&mut session)
    } else {
        plain_loop(&mut session)
    }
}

/// Line-at-a-time loop without a running clock, for piped input.
fn plain_loop(session: &mut Session) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        let naming = matches!(session.mode(), Mode::AwaitingName { .. });
        if input.is_empty() && !naming {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if !naming && is_quit(input) {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}

/// Raw-mode loop: polls for key events and ticks the session clock once
/// per second in between.
fn timed_loop(session: &mut Session) -> Result<(), String> {
    terminal::enable_raw_mode().map_err(|e| e.to_string())?;
    let result = timed_loop_inner(session);
    let _ = terminal::disable_raw_mode();
    result
}

fn timed_loop_inner(session: &mut Session) -> Result<(), String> {
    let mut line = String::new();
    let mut next_tick = Instant::now() + Duration::from_secs(1);

    draw_prompt(session, &line).map_err(|e| e.to_string())?;

    loop {
        let timeout = next_tick.saturating_duration_since(Instant::now());
        let ready = event::poll(timeout).map_err(|e| e.to_string())?;

        if !ready {
            next_tick += Duration::from_secs(1);
            if let Some(message) = session.tick() {
                print_block("");
                print_block(&message);
                print_block("");
                line.clear();
            }
            draw_prompt(session, &line).map_err(|e| e.to_string())?;
            continue;
        }

        let Event::Key(key) = event::read().map_err(|e| e.to_string())? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let farewell = if matches!(session.mode(), Mode::AwaitingName { .. }) {
                    "Goodbye!".to_string()
                } else {
                    session.process("quit").unwrap_or_else(|e| e.to_string())
                };
                print_block("");
                print_block(&farewell);
                return Ok(());
            }
            KeyCode::Char(c) => {
                line.push(c);
                draw_prompt(session, &line).map_err(|e| e.to_string())?;
            }
            KeyCode::Backspace => {
                line.pop();
                draw_prompt(session, &line).map_err(|e| e.to_string())?;
            }
            KeyCode::Enter => {
                let input = line.trim().to_string();
                line.clear();
                print_block("");
                let naming = matches!(session.mode(), Mode::AwaitingName { .. });
                match session.process(&input) {
                    Ok(output) => {
                        if !output.is_empty() {
                            print_block(&output);
                            print_block("");
                        }
                        if !naming && is_quit(&input) {
                            return Ok(());
                        }
                    }
                    Err(e) => {
                        print_block(&e.to_string().yellow().to_string());
                        print_block("");
                    }
                }
                draw_prompt(session, &line).map_err(|e| e.to_string())?;
            }
            _ => {}
        }
    }
}

/// Redraw the prompt line in place, clock included.
fn draw_prompt(session: &Session, line: &str) -> io::Result<()> {
    let mut out = io::stdout();
    execute!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    if session.clock_running() {
        write!(out, "[{:>2}s] > {line}", session.time_left())?;
    } else {
        write!(out, "> {line}")?;
    }
    out.flush()
}

/// Print a block of text with raw-mode-safe line endings.
fn print_block(text: &str) {
    for row in text.split('\n') {
        print!("{row}\r\n");
    }
}

// 'quit' typed as a player name is a name, not a command; callers check
// the mode before calling this.
fn is_quit(input: &str) -> bool {
    input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q")
}
