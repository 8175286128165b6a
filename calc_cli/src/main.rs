use calc_core::*;
use clap::Parser;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calc")]
#[command(about = "Interactive calculator with an audit log of every operation", long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not echo audit lines to stderr
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if cli.quiet {
        config.log.echo = false;
    }

    // Initialize logging
    calc_core::logging::init_with_level(&config.log.level);

    let log = config.operation_log();
    let calculator = create_calculator(&log);

    let stdin = io::stdin();
    run(&calculator, stdin.lock(), io::stdout(), |_| log.dump())
}

enum MenuChoice {
    Calculate(Operation),
    ShowLogs,
    Exit,
}

/// Whitespace-separated tokens read lazily across input lines
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading more lines as needed. `None` means input ended.
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// Drive the menu loop until the user exits or input ends.
///
/// `calculator` is only used through the [`Calculator`] contract, so a plain
/// or a wrapped engine behave the same here. `show_logs` handles the
/// "show system logs" choice.
fn run<C, R, W, F>(calculator: &C, input: R, mut out: W, mut show_logs: F) -> Result<()>
where
    C: Calculator,
    R: BufRead,
    W: Write,
    F: FnMut(&mut W) -> Result<()>,
{
    let mut tokens = Tokens::new(input);

    loop {
        print_menu(&mut out)?;

        let Some(token) = tokens.next_token()? else {
            tracing::debug!("Input closed, leaving menu loop");
            return Ok(());
        };

        let choice = match parse_choice(&token) {
            Some(choice) => choice,
            None => {
                writeln!(out, "Invalid option")?;
                continue;
            }
        };

        match choice {
            MenuChoice::Calculate(op) => {
                let Some(a) = prompt_number(&mut tokens, &mut out, "First number: ")? else {
                    return Ok(());
                };
                let Some(b) = prompt_number(&mut tokens, &mut out, "Second number: ")? else {
                    return Ok(());
                };

                match calculator.apply(op, a, b) {
                    Ok(result) => writeln!(out, "{}", format_result(op, a, b, result))?,
                    Err(Error::DivisionByZero) => {
                        writeln!(out, "Error: {}", Error::DivisionByZero)?
                    }
                    Err(e) => return Err(e),
                }
            }
            MenuChoice::ShowLogs => {
                out.flush()?;
                show_logs(&mut out)?;
            }
            MenuChoice::Exit => {
                writeln!(out, "Exiting...")?;
                out.flush()?;
                return Ok(());
            }
        }
    }
}

fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Choose an operation:")?;
    for (i, op) in Operation::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, op.menu_label())?;
    }
    writeln!(out, "5. Show system logs")?;
    writeln!(out, "6. Exit")?;
    write!(out, "Your choice: ")?;
    out.flush()?;
    Ok(())
}

fn parse_choice(token: &str) -> Option<MenuChoice> {
    let choice: u32 = token.parse().ok()?;
    match choice {
        5 => Some(MenuChoice::ShowLogs),
        6 => Some(MenuChoice::Exit),
        n => Operation::from_menu_choice(n).map(MenuChoice::Calculate),
    }
}

/// Prompt until a number is entered. `None` means input ended.
fn prompt_number<R: BufRead, W: Write>(
    tokens: &mut Tokens<R>,
    out: &mut W,
    prompt: &str,
) -> Result<Option<f64>> {
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let Some(token) = tokens.next_token()? else {
            return Ok(None);
        };
        match token.parse::<f64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(out, "Invalid number")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (String, Vec<String>) {
        let log = OperationLog::new().with_echo(false);
        let calculator = create_calculator(&log);
        let mut out = Vec::new();
        run(&calculator, script.as_bytes(), &mut out, |w| log.dump_to(w)).unwrap();
        (String::from_utf8(out).unwrap(), log.all_entries())
    }

    #[test]
    fn test_addition_prints_result() {
        let (out, entries) = run_script("1\n2\n3\n6\n");
        assert!(out.contains("Result of addition 2.0 and 3.0 = 5.0"));
        assert!(out.ends_with("Exiting...\n"));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_division_by_zero_continues_loop() {
        let (out, entries) = run_script("4\n10\n0\n3\n2\n4\n6\n");
        assert!(out.contains("Error: Cannot divide by zero"));
        assert!(out.contains("Result of multiplication 2.0 and 4.0 = 8.0"));
        assert_eq!(entries[0], "Calling: divide(10.0, 0.0)");
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let (out, entries) = run_script("9\nabc\n6\n");
        assert_eq!(out.matches("Invalid option").count(), 2);
        assert_eq!(out.matches("Choose an operation:").count(), 3);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_invalid_number_reprompts_operand() {
        let (out, _) = run_script("2\nten\n10\n4\n6\n");
        assert!(out.contains("Invalid number"));
        assert!(out.contains("Result of subtraction 10.0 and 4.0 = 6.0"));
    }

    #[test]
    fn test_tokens_on_one_line() {
        let (out, entries) = run_script("1 2 3\n6\n");
        assert!(out.contains("Result of addition 2.0 and 3.0 = 5.0"));
        assert_eq!(
            entries,
            vec!["Calling: add(2.0, 3.0)", "Result of addition 2.0 and 3.0 = 5.0"]
        );
    }

    #[test]
    fn test_blank_lines_skipped_between_tokens() {
        let (out, entries) = run_script("\n4\n\n  8   2\n6\n");
        assert!(out.contains("Result of division 8.0 and 2.0 = 4.0"));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_show_logs_dumps_in_order() {
        let (out, _) = run_script("1\n1\n1\n5\n6\n");
        assert!(out.contains(
            "Previous calculation logs:\n\
             Calling: add(1.0, 1.0)\n\
             Result of addition 1.0 and 1.0 = 2.0\n"
        ));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let (out, _) = run_script("3\n2\n");
        assert!(out.ends_with("Second number: "));
    }

    #[test]
    fn test_plain_calculator_drives_the_same_loop() {
        let log = OperationLog::new().with_echo(false);
        let mut out = Vec::new();
        run(&BasicCalculator, "3\n2\n5\n6\n".as_bytes(), &mut out, |w| {
            log.dump_to(w)
        })
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Result of multiplication 2.0 and 5.0 = 10.0"));
        assert!(log.is_empty());
    }
}
