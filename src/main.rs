use clap::Parser;
use v2file::cli::Cli;

fn main() {
    // Usage errors exit with 1; --help and --version exit with 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = v2file::cli::commands::fetch::execute(&cli) {
        v2file::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
