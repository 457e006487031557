use anyhow::Context;
use busline_app::{BookingFormHandler, FarePolicy, InMemoryForm, MESSAGE_ELEMENT};
use busline_kernel::settings::Settings;
use clap::{Parser, Subcommand};

/// Bus-seat booking from the terminal
#[derive(Debug, Parser)]
#[command(name = "busline-cli", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit one booking and print the resulting message
    Book {
        /// Passenger name, used verbatim
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        name: String,
        /// Destination, used verbatim
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        destination: String,
        /// Seat count; fractions are floored
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        seats: String,
    },
    /// Run the HTTP server with every module until ctrl-c
    Serve,
    /// List the HTTP prefixes of registered modules
    Routes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load Busline settings")?;
    busline_telemetry::init_to_stderr(&settings.telemetry)?;

    tracing::debug!(env = ?settings.environment, command = ?cli.command, "busline-cli starting");

    match cli.command {
        Command::Book {
            name,
            destination,
            seats,
        } => {
            let handler = BookingFormHandler::new(FarePolicy::from(&settings.booking));
            let mut form = InMemoryForm::with_booking(&name, &destination, &seats);
            let result = handler.submit(&mut form);

            tracing::info!(outcome = result.outcome(), "booking submitted");
            println!("{}", form.display_text(MESSAGE_ELEMENT).unwrap_or_default());
        }
        Command::Serve => busline_app::server::run(&settings).await?,
        Command::Routes => {
            let registry = busline_app::server::build_registry(&settings)?;
            for name in registry.module_names() {
                println!("/api/{name}");
            }
        }
    }

    Ok(())
}
