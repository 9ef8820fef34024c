//! Thin entrypoint for the `actmgt` binary.

fn main() {
    std::process::exit(actmgt_cli::run());
}
