use std::io::{BufRead, Write};

use calcula::{AngleMode, Session, Viewport};

const PLOT_VIEWPORT: Viewport = Viewport {
    width: 64,
    scale: 8.0,
};

const HELP: &str = "\
  <expr>        evaluate, e.g. 2+3*4 or sin(30)
  +<expr> ...   continue from the last answer
  :deg / :rad   switch angle mode
  :mode         show angle mode
  :plot <expr>  sample an expression in x
  :history      list this session's results
  :clear        forget answer and history
  :quit";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let angle_mode = match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(mode) => mode,
            Err(error) => {
                eprintln!("{error}");
                std::process::exit(2);
            }
        },
        None => AngleMode::default(),
    };

    let mut session = Session::new(angle_mode);

    println!("calcula REPL ({}), :help for commands", session.angle_mode());

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("\x1b[0;36m {} > ", session.angle_mode());

        print!("\x1b[0;0m");

        if std::io::stdout().flush().is_err() {
            break;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                log::error!("failed to read input: {error}");
                break;
            }
        }

        let input = line.trim();

        match input.split_once(' ').unwrap_or((input, "")) {
            (":quit" | ":q", _) => break,
            (":help", _) => println!("{HELP}"),
            (":deg", _) => session.set_angle_mode(AngleMode::Deg),
            (":rad", _) => session.set_angle_mode(AngleMode::Rad),
            (":mode", _) => println!("{}", session.angle_mode()),
            (":clear", _) => session.clear(),
            (":history", _) => {
                for entry in session.history() {
                    println!("{} = {}", entry.expression, entry.outcome);
                }
            }
            (":plot", expr) => match session.plot(expr, PLOT_VIEWPORT) {
                Ok(curve) => {
                    for (column, y) in &curve {
                        println!("{column}\t{:.6}\t{y}", PLOT_VIEWPORT.x_at(column));
                    }
                }
                Err(error) => println!("Error: {error}"),
            },
            (command, _) if command.starts_with(':') => {
                println!("Unknown command `{command}`, try :help")
            }
            _ => {
                let outcome = session.evaluate(input);
                println!("{outcome}");
            }
        }
    }
}
