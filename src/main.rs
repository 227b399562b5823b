use clap::Parser;
use std::{io, path::Path};

use release_crossref::{
    Args, Command, Result,
    command::{api_clients_policy, changelog, compare, needs_categorization},
    config::Config,
    forge::github::Github,
    repo::GitRepository,
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("release_crossref")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = Args::parse();

    initialize_logger(cli_args.debug)?;

    let repo = GitRepository::discover(Path::new(&cli_args.repo_path))?;
    let explicit_config = cli_args.config.as_deref().map(Path::new);
    let config = Config::load(repo.workdir(), explicit_config)?;

    let mut out = io::stdout();

    match &cli_args.command {
        Command::Compare(cmd) => {
            let remote = cli_args.get_remote(cmd.token.as_deref())?;
            let forge = Github::new(remote)?;
            compare::execute(&repo, &forge, &config, cmd, &mut out).await
        }
        Command::Changelog(cmd) => {
            let remote = cli_args.get_remote(cmd.token.as_deref())?;
            let forge = Github::new(remote)?;
            changelog::execute(
                &repo,
                &forge,
                &config,
                repo.workdir(),
                cmd,
                &mut out,
            )
            .await
        }
        Command::NeedsCategorization(cmd) => {
            let remote = cli_args.get_remote(cmd.token.as_deref())?;
            let forge = Github::new(remote)?;
            needs_categorization::execute(
                &repo, &forge, &config, cmd, &mut out,
            )
            .await
        }
        Command::ApiClientsPolicy(cmd) => {
            api_clients_policy::execute(&repo, &config, cmd, &mut out)
        }
    }
}
