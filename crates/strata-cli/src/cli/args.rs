use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "strata",
    version,
    about = "CLI for the Strata platform — remote unit tests, coverage, and deploy tooling"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run unit tests on the platform
    Test(TestArgs),
    Version,
}

/// Per-invocation test configuration. Built once from the command line and
/// passed through the handler; no global flag state.
#[derive(Parser, Debug, Clone)]
#[command(after_help = "\
Examples:

  strata test all
  strata test Test1 Test2 Test3
  strata test Test1.method1 Test1.method2
  strata test --namespace ns Test4
  strata test --class Test1 method1 method2
  strata test -v Test1
")]
pub struct TestArgs {
    /// Test class or class.method identifiers, or `all`
    pub tests: Vec<String>,

    /// Namespace to run tests in
    #[arg(long, default_value = "")]
    pub namespace: String,

    /// Class to run tests from (positional args become bare method names)
    #[arg(long)]
    pub class: Option<String>,

    /// Print the raw execution log before results
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
