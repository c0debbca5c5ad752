use clap::Parser;
use log::LevelFilter;
use reckon::{message_for, respond, snippet_for};
use reckon_ast::format_number;
use reckon_eval::{CalcConfig, Calculator};
use reckon_parser::parser::MAX_NESTING_DEPTH;
use reckon_parser::ParserConfig;

#[derive(Debug, Parser)]
#[command(
    name = "reckon",
    version,
    about = "Evaluate integer arithmetic expressions",
    long_about = "reckon evaluates expressions made of non-negative integers, the operators\n\
        + - * / ^ and parentheses. Integer arithmetic is checked for overflow and\n\
        division always yields a real number.\n\n\
        EXAMPLES:\n\
        \n  reckon '(100+200)*3+99'        Evaluate once and exit\n\
        \n  reckon --reduce '6^2+1'        Show the expression after exponent reduction\n\
        \n  reckon                         Start an interactive session"
)]
struct Cli {
    /// Expression to evaluate; starts an interactive session when omitted
    #[arg(value_name = "EXPRESSION")]
    expression: Option<String>,

    /// Print the parsed expression tree as JSON instead of evaluating it
    #[arg(long, conflicts_with = "reduce")]
    ast: bool,

    /// Print the expression after exponent reduction instead of evaluating it
    #[arg(long)]
    reduce: bool,

    /// Maximum parenthesis nesting depth
    #[arg(long = "max-depth", value_name = "N", default_value_t = MAX_NESTING_DEPTH)]
    max_depth: usize,

    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn calculator(&self) -> Calculator {
        Calculator::new(CalcConfig {
            parser: ParserConfig {
                max_nesting_depth: self.max_depth,
            },
        })
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

struct ReplSession {
    calc: Calculator,
}

impl ReplSession {
    fn new(calc: Calculator) -> Self {
        Self { calc }
    }

    fn prompt(&self) -> &'static str {
        "reckon> "
    }

    /// Returns the lines to print and whether the session should end.
    fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        match trimmed {
            ":help" => {
                return (
                    vec![
                        "commands: :help, :reduce <expr>, :quit".to_string(),
                        "operators: + - * / ^ and parentheses, no spaces".to_string(),
                    ],
                    false,
                )
            }
            ":q" | ":quit" | ":exit" => return (Vec::new(), true),
            _ => {}
        }

        if let Some(rest) = trimmed.strip_prefix(":reduce") {
            let out = match self.calc.reduce(rest.trim()) {
                Ok(tree) => tree.to_string(),
                Err(err) => message_for(&err),
            };
            return (vec![out], false);
        }

        let out = match respond(&self.calc, line) {
            Ok(result) | Err(result) => result,
        };
        (vec![out], false)
    }
}

fn run_repl(calc: Calculator) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;
    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    let mut session = ReplSession::new(calc);
    loop {
        match rl.readline(session.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                let (out, exit) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}

fn run_once(cli: &Cli, expression: &str) -> i32 {
    let calc = cli.calculator();

    let outcome = if cli.ast {
        calc.parse(expression).map(|tree| match reckon_ast::to_json(&tree) {
            Ok(json) => json,
            Err(e) => format!("error: failed to serialize tree: {e}"),
        })
    } else if cli.reduce {
        calc.reduce(expression).map(|tree| tree.to_string())
    } else {
        calc.evaluate(expression).map(format_number)
    };

    match outcome {
        Ok(out) => {
            println!("{out}");
            0
        }
        Err(err) => {
            eprintln!("{}", message_for(&err));
            if cli.verbose > 0 {
                eprintln!("{}", snippet_for(&err, expression));
            }
            1
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match &cli.expression {
        Some(expression) => run_once(&cli, expression),
        None => run_repl(cli.calculator()),
    }
}

fn main() {
    std::process::exit(run_cli());
}
