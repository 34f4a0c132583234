use clap::Parser;
use ui_codegen::cli::commands::{cmd_generate, cmd_preview};
use ui_codegen::cli::config::{Cli, Commands, load_config};
use ui_codegen::generate::generator::GenerationMode;
use ui_codegen::output::store::DiskStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    // Resolve settings: CLI > config > defaults
    let config = load_config(cli.config.as_deref()).with_output_override(cli.output.as_deref());
    let store = DiskStore;

    let all_written = match &cli.command {
        Commands::Bind { input } => cmd_generate(input, GenerationMode::Binding, &config, &store)?,
        Commands::Logic { input, force } => cmd_generate(
            input,
            GenerationMode::Logic { force: *force },
            &config,
            &store,
        )?,
        Commands::All { input } => cmd_generate(input, GenerationMode::All, &config, &store)?,
        Commands::Preview { tree, root } => {
            cmd_preview(tree, root, &config, &store)?;
            true
        }
    };

    if !all_written {
        std::process::exit(1);
    }

    Ok(())
}

fn setup_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ui_codegen={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
