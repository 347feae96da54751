use miette::Result;

/// Main entry point for the untangle CLI tool
fn main() -> Result<()> {
    // Install miette's panic handler for beautiful error reporting
    miette::set_panic_hook();

    // Run the library's main function
    untangle::run()
}
