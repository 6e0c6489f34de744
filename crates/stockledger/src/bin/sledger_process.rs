//! sledger-process - apply instructions and report final stock levels.

fn main() -> std::process::ExitCode {
    stockledger::cmd::process::main()
}
