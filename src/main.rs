use clap::{Parser, Subcommand};
use rbradio::config::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use rbradio::{Config, MenuItem, Plugin, Route};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rbradio")]
#[command(about = "Browse and play Red Bull Radio channels, shows and on-demand episodes")]
#[command(version)]
struct Cli {
	/// Site to scrape
	#[arg(long, env = "RBRADIO_BASE_URL", default_value = DEFAULT_BASE_URL)]
	base_url: String,

	/// Minutes a fetched page stays cached
	#[arg(long, env = "RBRADIO_CACHE_TTL", default_value_t = 5)]
	cache_ttl: u64,

	/// Keep fetched pages in this file between runs
	#[arg(long, env = "RBRADIO_CACHE_FILE")]
	cache_file: Option<PathBuf>,

	/// Query string appended to artwork URLs (e.g. "w=500")
	#[arg(long, env = "RBRADIO_THUMB_QUERY")]
	thumb_query: Option<String>,

	/// Print items as JSON
	#[arg(long)]
	json: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List the menu at a plugin path
	List {
		#[arg(default_value = "/")]
		path: String,
	},
	/// Print the stream URL a plugin path plays
	Resolve { path: String },
}

impl Cli {
	fn config(&self) -> Config {
		Config {
			base_url: self.base_url.clone(),
			cache_ttl: Duration::from_secs(self.cache_ttl.saturating_mul(60)),
			cache_file: self.cache_file.clone(),
			thumb_query: self.thumb_query.clone(),
			user_agent: DEFAULT_USER_AGENT.to_owned(),
		}
	}
}

/// Search paths without a query ask for one on stdin.
fn with_query(path: String) -> rbradio::Result<String> {
	let Ok(Route::Search {
		query: None,
		category,
	}) = Route::parse(&path)
	else {
		return Ok(path);
	};

	let mut out = stdout();
	out.write_all(b"Search: ")?;
	out.flush()?;
	let mut query = String::new();
	stdin().read_line(&mut query)?;
	let query = query.trim();
	if query.is_empty() {
		return Err(rbradio::Error::MissingQuery);
	}
	Ok(Route::Search {
		query: Some(query.to_owned()),
		category,
	}
	.to_string())
}

fn print_items(items: &[MenuItem], json: bool) -> rbradio::Result<()> {
	if json {
		println!("{}", serde_json::to_string_pretty(items)?);
		return Ok(());
	}
	for item in items {
		let marker = if item.is_playable { '>' } else { '+' };
		println!("{} {}\t{}", marker, item.label, item.path);
	}
	Ok(())
}

async fn run(cli: Cli) -> rbradio::Result<()> {
	let plugin = Plugin::new(cli.config())?;
	match cli.command {
		Commands::List { path } => {
			let items = plugin.list(&with_query(path)?).await?;
			print_items(&items, cli.json)
		}
		Commands::Resolve { path } => {
			let url = plugin.resolve(&with_query(path)?).await?;
			println!("{}", url);
			Ok(())
		}
	}
}

#[tokio::main]
async fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	match run(Cli::parse()).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("{}", err);
			ExitCode::FAILURE
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn huge_cache_ttl_saturates() {
		let cli = Cli::try_parse_from(["rbradio", "--cache-ttl", "18446744073709551615", "list"]).unwrap();
		assert_eq!(cli.config().cache_ttl, Duration::from_secs(u64::MAX));
	}
}
