//! Play tic-tac-toe in the terminal, against a friend or against the computer.

use std::io::{BufRead, Write};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use tictac::{
    core::GameStatus,
    session::{GameMode, Session},
};

/// A Tic-Tac-Toe game for the command line, with a cool AI integrated!
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Which opponent to play. Asked for interactively when left out
    #[arg(long)]
    mode: Option<GameMode>,

    /// The seed for the random number generator (when used)
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before the computer answers, in milliseconds
    #[arg(long, default_value = "200")]
    ai_delay_ms: u64,

    /// Log level for diagnostics on stderr
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

enum Command {
    Play(usize),
    Restart,
    Menu,
    Snapshot,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "r" => Some(Command::Restart),
        "m" => Some(Command::Menu),
        "s" => Some(Command::Snapshot),
        "q" => Some(Command::Quit),
        other => match other.parse::<usize>() {
            Ok(num) if (1..=9).contains(&num) => Some(Command::Play(num - 1)),
            _ => None,
        },
    }
}

fn read_line(input: &mut impl BufRead) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Returns `None` when input ends
fn choose_mode(input: &mut impl BufRead) -> anyhow::Result<Option<GameMode>> {
    loop {
        println!("Choose a mode: friend, easy, medium, hard (q to quit)");
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let choice = line.trim().to_ascii_lowercase();
        if choice == "q" {
            return Ok(None);
        }
        match <GameMode as ValueEnum>::from_str(&choice, true) {
            Ok(mode) => return Ok(Some(mode)),
            Err(e) => eprintln!("{e}"),
        }
    }
}

fn print_status(session: &Session) {
    print!("{}", session.board());
    let score = session.score();
    println!("X {} - {} O", score.first_wins, score.second_wins);
    match session.status() {
        GameStatus::InProgress => println!("{}'s Turn", session.turn()),
        GameStatus::Won(_, line) => {
            let cells: Vec<String> = line.0.iter().map(|i| (i + 1).to_string()).collect();
            println!("{} (line {})", session.status(), cells.join("-"));
            println!("r: play again, m: menu, q: quit");
        }
        GameStatus::Draw => {
            println!("{}", session.status());
            println!("r: play again, m: menu, q: quit");
        }
    }
}

/// Plays rounds until the player leaves. Returns true to go back to the menu.
fn run_session(
    session: &mut Session,
    input: &mut impl BufRead,
    ai_delay: Duration,
) -> anyhow::Result<bool> {
    print_status(session);
    loop {
        if session.awaiting_ai() {
            std::thread::sleep(ai_delay);
            let report = session.play_ai()?;
            println!("Computer plays {}", report.addr.0 + 1);
            print_status(session);
            continue;
        }
        if !session.is_over() {
            println!("Input a number 1-9 to make a move 1 = top left, 9 = bottom right");
        }
        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        match parse_command(&line) {
            Some(Command::Play(index)) => {
                if session.play_human(index)?.is_some() {
                    print_status(session);
                }
            }
            Some(Command::Restart) if session.is_over() => {
                session.new_round();
                print_status(session);
            }
            Some(Command::Restart) => {}
            Some(Command::Menu) => return Ok(true),
            Some(Command::Snapshot) => {
                println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
            }
            Some(Command::Quit) => return Ok(false),
            None => eprintln!("Did not understand {:?}", line.trim()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    SimpleLogger::new().with_level(args.log_level).init()?;
    let ai_delay = Duration::from_millis(args.ai_delay_ms);
    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    let mut preset = args.mode;
    loop {
        let mode = match preset.take() {
            Some(mode) => mode,
            None => match choose_mode(&mut input)? {
                Some(mode) => mode,
                None => break,
            },
        };
        let mut session = Session::new(mode, args.seed);
        if !run_session(&mut session, &mut input, ai_delay)? {
            break;
        }
    }
    println!("Bye.");
    Ok(())
}
