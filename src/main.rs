use head_position_model::cli;
use head_position_model::io::TerminalIO;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = cli::parse(std::env::args().skip(1)).and_then(|args| {
        log::debug!("arguments: {:?}", args);
        cli::run(&args, &mut TerminalIO)
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
