fn main() {
    // ESP-IDF build environment (toolchain paths, linker args).
    // Only present when the `espidf` feature pulls in embuild.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
