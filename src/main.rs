use clap::{Parser, Subcommand};
use simple_ui::AppError;

#[derive(Parser)]
#[command(name = "simple-ui")]
#[command(version)]
#[command(
    about = "Install reusable UI components into your project",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set up the stylesheet, the cn helper, and simple-ui.json
    #[clap(visible_alias = "i")]
    Init,
    /// Copy a component template into components/ui/
    #[clap(visible_alias = "a")]
    Add {
        /// Component name, e.g. "button"
        name: String,
        /// Replace an existing file without asking
        #[arg(short, long)]
        force: bool,
    },
    /// Show installed components and available templates
    #[clap(visible_alias = "ls")]
    List,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init => simple_ui::init().map(|_| ()),
        Commands::Add { name, force } => simple_ui::add(&name, force).map(|_| ()),
        Commands::List => simple_ui::list().map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
