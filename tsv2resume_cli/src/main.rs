use std::path::Path;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tsv2resume_cli::ResumeCli;
use tsv2resume_core::ResumeResult;
use tsv2resume_core::config::ResumeConfig;
use tsv2resume_core::convert;
use tsv2resume_core::read_tsv_file;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = ResumeCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	if let Err(e) = run(&args) {
		// Render through miette for error codes and help text.
		let report: miette::Report = e.into();
		eprintln!("{report:?}");
		process::exit(2);
	}
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.try_init()
		.ok();
}

fn load_config(args: &ResumeCli) -> ResumeResult<ResumeConfig> {
	if let Some(path) = &args.config {
		return ResumeConfig::load_file(path);
	}

	let root = std::env::current_dir()?;
	Ok(ResumeConfig::load(&root)?.unwrap_or_default())
}

fn run(args: &ResumeCli) -> ResumeResult<()> {
	let mut config = load_config(args)?;
	if args.no_auto_paragraph {
		config.auto_paragraph = false;
	}

	let title = args
		.title
		.clone()
		.or_else(|| config.title.clone())
		.unwrap_or_else(|| args.default_title());
	debug!(%title, input = %args.input.display(), "converting");

	let rows = read_tsv_file(&args.input)?;
	let conversion = convert(&rows, &title, &config, args.format.into())?;

	write_output(&args.output, &conversion.output)?;

	println!(
		"{} {} with {} sections.",
		colored!("Generated", green),
		args.output.display(),
		conversion.sections.len()
	);

	Ok(())
}

fn write_output(path: &Path, content: &str) -> ResumeResult<()> {
	if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent)?;
	}

	std::fs::write(path, content)?;
	Ok(())
}
