use std::io;

fn main() {
    shoggoth_cli::logging::init_logging();
    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = shoggoth_cli::run(std::env::args(), &mut out, &mut err);
    std::process::exit(code);
}
