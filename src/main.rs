fn main() {
    tfdirs::app::cli::run();
}
