fn main() {
    fivec::app::cli::run();
}
