use super::args::*;


use crate::exit_codes::SUCCESS;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Test(args) => test::run(args).await,
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
