fn main() {
    if let Err(err) = openapi_serve::cli::run_cli() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
