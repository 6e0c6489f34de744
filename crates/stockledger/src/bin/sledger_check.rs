//! sledger-check - validate an instruction file.

fn main() -> std::process::ExitCode {
    stockledger::cmd::check::main()
}
