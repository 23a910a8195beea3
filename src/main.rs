fn main() {
    cuevendor::app::cli::run();
}
