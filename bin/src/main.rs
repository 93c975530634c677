//! moexiss CLI - Moscow Exchange ISS market-data client.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use moexiss_lib::{AlgoMarket, Interval, Market};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;
mod session;

use display::Format;
use session::Login;

#[derive(Parser)]
#[command(name = "moexiss")]
#[command(about = "Moscow Exchange ISS market-data client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// MOEX passport user name
    #[arg(long, env = "MOEX_USER", global = true)]
    user: Option<String>,

    /// MOEX passport password (prompted for when omitted)
    #[arg(long, env = "MOEX_PASSWORD", hide_env_values = true, global = true)]
    password: Option<String>,
}

/// Output destination shared by the data commands.
#[derive(Args)]
struct OutputArgs {
    /// Output file path. Defaults to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format. Inferred from the output file extension, CSV otherwise
    #[arg(short, long, value_enum)]
    format: Option<Format>,
}

/// Date selection shared by the history commands.
#[derive(Args)]
struct DateArgs {
    /// Trading date (YYYY-MM-DD) when no symbol is given. Defaults to today.
    #[arg(short, long, conflicts_with_all = ["from", "till"])]
    date: Option<String>,

    /// Start date (YYYY-MM-DD) when a symbol is given
    #[arg(long)]
    from: Option<String>,

    /// End date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    till: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download candles of a security
    Candles {
        /// Security code (e.g., SBER, SiU4)
        symbol: String,

        /// Market (shares, forts, options, bonds)
        #[arg(short, long, default_value = "shares")]
        market: Market,

        /// Candle interval (M1, M10, H1, D1, W1, MN1, Q1)
        #[arg(short, long, default_value = "D1")]
        interval: Interval,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// End date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        till: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Download AlgoPack trade statistics
    Tradestats {
        /// Security code. Omit to fetch every security on one date
        symbol: Option<String>,

        /// AlgoPack market (eq, fo, fx)
        #[arg(short, long, default_value = "eq")]
        market: AlgoMarket,

        /// Keep only the latest record of each security
        #[arg(long)]
        latest: bool,

        #[command(flatten)]
        dates: DateArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Download futures open interest by client group
    Futoi {
        /// Two-letter contract code (e.g., si, ri). Omit for all contracts
        ticker: Option<String>,

        /// Keep only the latest record of each contract
        #[arg(long)]
        latest: bool,

        #[command(flatten)]
        dates: DateArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Download daily option results
    OptionHistory {
        /// Option code. Omit for all options on one date
        symbol: Option<String>,

        #[command(flatten)]
        dates: DateArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show security descriptions or current market data
    Securities {
        /// Security codes. Omit for the whole market
        symbols: Vec<String>,

        /// Market (shares, forts, options, bonds)
        #[arg(short, long, default_value = "shares")]
        market: Market,

        /// Bond board (e.g., TQOB). Omit for every board
        #[arg(short, long)]
        board: Option<String>,

        /// Show current market data instead of descriptions
        #[arg(long)]
        data: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show an order book snapshot (requires a subscription)
    Orderbook {
        /// Security code
        symbol: String,

        /// Market (shares, forts, options)
        #[arg(short, long, default_value = "shares")]
        market: Market,
    },

    /// Resolve a share, futures contract or futures series (e.g., RTS-9.24)
    Ticker {
        /// Security code or series name
        code: String,
    },

    /// List candle intervals
    Intervals,
}

/// Installs the log subscriber. `RUST_LOG` overrides the verbosity flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let login = Login::new(cli.user, cli.password);
    let quiet = cli.quiet;

    match command {
        Commands::Candles {
            symbol,
            market,
            interval,
            from,
            till,
            output,
        } => {
            commands::candles::candles(
                &login,
                market,
                &symbol,
                interval,
                &from,
                till.as_deref(),
                output.output,
                output.format,
                quiet,
            )
            .await
        }
        Commands::Tradestats {
            symbol,
            market,
            latest,
            dates,
            output,
        } => {
            let scope = dates.scope(symbol.as_deref())?;
            commands::history::tradestats(
                &login,
                market,
                &scope,
                latest,
                output.output,
                output.format,
                quiet,
            )
            .await
        }
        Commands::Futoi {
            ticker,
            latest,
            dates,
            output,
        } => {
            let scope = dates.scope(ticker.as_deref())?;
            commands::history::futoi(&login, &scope, latest, output.output, output.format, quiet)
                .await
        }
        Commands::OptionHistory {
            symbol,
            dates,
            output,
        } => {
            let scope = dates.scope(symbol.as_deref())?;
            commands::history::option_history(&login, &scope, output.output, output.format, quiet)
                .await
        }
        Commands::Securities {
            symbols,
            market,
            board,
            data,
            output,
        } => {
            commands::securities::securities(
                &login,
                market,
                &symbols,
                board.as_deref(),
                data,
                output.output,
                output.format,
            )
            .await
        }
        Commands::Orderbook { symbol, market } => {
            commands::orderbook::show_book(&login, market, &symbol).await
        }
        Commands::Ticker { code } => commands::ticker::show_ticker(&login, &code).await,
        Commands::Intervals => {
            commands::intervals::list_intervals();
            Ok(())
        }
    }
}

impl DateArgs {
    /// Resolves the date flags into a history scope.
    fn scope(&self, symbol: Option<&str>) -> Result<moexiss_lib::HistoryScope> {
        display::history_scope(
            symbol,
            self.date.as_deref(),
            self.from.as_deref(),
            self.till.as_deref(),
        )
    }
}
