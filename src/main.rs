fn main() {
    curlparse::cli::run();
}
