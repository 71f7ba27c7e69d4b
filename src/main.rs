use clap::Parser;
use logiflow::config::CliConfig;
use logiflow::logger;
use logiflow::max_flow::utils::draw_with_flow;
use logiflow::report::{FlowReport, ReportGenerator, TextReport};

fn run(config: &CliConfig) -> logiflow::Result<()> {
    let network = config.load_network()?.build()?;
    let solution = network.solve()?;

    if config.dot {
        println!("{}", draw_with_flow(network.network(), solution.flow()));
        return Ok(());
    }

    let report = FlowReport::new(&network, &solution)?;
    let stdout = std::io::stdout();
    TextReport.generate(&report, &mut stdout.lock())?;
    Ok(())
}

fn main() {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
