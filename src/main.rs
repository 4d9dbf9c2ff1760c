use clap::{Parser, Subcommand}; // command line argument parser
use miette::{IntoDiagnostic, WrapErr};
use opcalc::{
	config::{EvalConfig, NumberParsing, ReportPolicy, UnknownOperatorPolicy},
	report, Evaluator, Lexer,
};
use std::fs;
use std::path::PathBuf;

/// evaluated when no subcommand is given
const DEMO_EXPRESSION: &str = "10 + 10";

/// type to help us parse the command line arguments
#[derive(Parser, Debug)]
#[command(version, about, long_about=None)]
struct Args {
	#[command(subcommand)]
	command: Option<Commands>,

	/// fail on operators other than + - * / instead of dividing
	#[arg(long, global = true)]
	strict_operators: bool,

	/// treat non-numeric operands as NaN instead of rejecting the input
	#[arg(long, global = true)]
	lenient_numbers: bool,

	/// only report errors as invalid, print negative results as they are
	#[arg(long, global = true)]
	errors_only: bool,

	/// more logging, repeat for more
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	verbose: u8,
}

/// holds the Command types argument type
#[derive(Debug, Subcommand)]
enum Commands {
	/// evaluates a single `<number> <operator> <number>` expression
	Eval {
		#[arg(allow_hyphen_values = true)]
		expression: String,
	},
	/// evaluates every non-blank line of a file
	File { filename: PathBuf },
	/// prints the tokens of an expression
	Tokenize {
		#[arg(allow_hyphen_values = true)]
		expression: String,
	},
}

impl Args {
	fn config(&self) -> EvalConfig {
		let mut config = EvalConfig::default();
		if self.strict_operators {
			config = config.with_unknown_operator(UnknownOperatorPolicy::Reject);
		}
		if self.lenient_numbers {
			config = config.with_numbers(NumberParsing::Lenient);
		}
		if self.errors_only {
			config = config.with_report(ReportPolicy::ErrorsOnly);
		}
		config
	}
}

/// prints the report line, returns false when the input itself was rejected
fn run(evaluator: &Evaluator, expression: &str) -> bool {
	let result = evaluator.evaluate(expression);
	match report::render(expression, result, evaluator.config().report) {
		Ok(line) => {
			println!("{line}");
			true
		},
		Err(e) => {
			eprintln!("{:?}", miette::Report::new(e));
			false
		},
	}
}

fn main() -> miette::Result<()> {
	let args = Args::parse();

	let level = match args.verbose {
		0 => log::LevelFilter::Warn,
		1 => log::LevelFilter::Info,
		2 => log::LevelFilter::Debug,
		_ => log::LevelFilter::Trace,
	};
	env_logger::Builder::new().filter_level(level).parse_default_env().init();

	let evaluator = Evaluator::new(args.config());
	log::debug!("using {:?}", evaluator.config());

	let mut erry = false;

	match args.command {
		None => erry = !run(&evaluator, DEMO_EXPRESSION),
		Some(Commands::Eval { expression }) => erry = !run(&evaluator, &expression),
		Some(Commands::File { filename }) => {
			let file_contents = fs::read_to_string(&filename)
				.into_diagnostic()
				.wrap_err_with(|| format!("reading {} file failed!", filename.display()))?;

			for (number, line) in file_contents.lines().enumerate() {
				if line.trim().is_empty() {
					continue;
				}
				log::info!("[line {}] {line}", number + 1);
				if !run(&evaluator, line) {
					erry = true;
				}
			}
		},
		Some(Commands::Tokenize { expression }) => {
			for token in Lexer::new(&expression) {
				println!("{token}");
			}
			println!("EOF  null");
		},
	}

	if erry {
		std::process::exit(65);
	}

	Ok(())
}
