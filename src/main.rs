use HybridGSI::Examples::gsi_examples::gsi_examples;
use HybridGSI::Utils::logger::init_logger;
use simplelog::LevelFilter;

pub fn main() {
    if let Err(e) = init_logger(LevelFilter::Info, None) {
        eprintln!("{}", e);
    }
    // 0: enthalpy sweep, 1: fixed regression duct, 2: heat-flux-driven duct
    let task: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1);
    gsi_examples(task);
}
