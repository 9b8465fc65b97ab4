fn main() {
    gith_ub::core::logging::init();
    if let Err(e) = gith_ub::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
