use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftpay
#[derive(Parser)]
#[command(
    name = "shiftpay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track shifts, mark them paid and export unpaid work to PDF (SQLite backed)",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show or change the hourly rate and currency symbol
    Settings {
        #[arg(long = "rate", value_name = "AMOUNT", help = "New hourly rate, e.g. 27.50")]
        rate: Option<String>,

        #[arg(long = "currency", value_name = "SYMBOL", help = "Currency symbol, e.g. $")]
        currency: Option<String>,
    },

    /// Record a shift (end before start = overnight shift)
    Add {
        /// Date of the shift (YYYY-MM-DD, default: today)
        date: Option<String>,

        /// Start time (HH:MM, default from config: 09:00)
        #[arg(long = "start", alias = "in", help = "Start time (HH:MM)")]
        start: Option<String>,

        /// End time (HH:MM, default from config: 17:00)
        #[arg(long = "end", alias = "out", help = "End time (HH:MM)")]
        end: Option<String>,
    },

    /// List entries with totals
    List {
        #[arg(long = "unpaid", help = "Hide entries that are already paid")]
        unpaid: bool,

        #[arg(long = "from", value_name = "YYYY-MM-DD", help = "First date (inclusive)")]
        from: Option<String>,

        #[arg(long = "to", value_name = "YYYY-MM-DD", help = "Last date (inclusive)")]
        to: Option<String>,
    },

    /// Mark an entry as paid
    Paid {
        /// Entry id
        id: i64,
    },

    /// Flip the paid status of an entry
    Toggle {
        /// Entry id
        id: i64,
    },

    /// Mark every unpaid entry (optionally in a date range) as paid
    PayAll {
        #[arg(long = "from", value_name = "YYYY-MM-DD", help = "First date (inclusive)")]
        from: Option<String>,

        #[arg(long = "to", value_name = "YYYY-MM-DD", help = "Last date (inclusive)")]
        to: Option<String>,
    },

    /// Delete an entry
    Del {
        /// Entry id
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export unpaid entries to a PDF report
    Export {
        #[arg(long, value_name = "FILE", help = "Absolute path of the PDF to write")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Write a JSON backup of settings and entries
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Zip the backup")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Run the HTTP API
    Serve {
        #[arg(long, help = "Address to bind (overrides config)")]
        host: Option<String>,

        #[arg(long, help = "Port to listen on (overrides config)")]
        port: Option<u16>,
    },
}
