//! Reports whether the API clients need a release for a version pair.
use std::io::Write;

use crate::{
    analyzer::api_clients::{ClientReleasePolicy, evaluate},
    cli::ApiClientsPolicyArgs,
    config::Config,
    repo::Vcs,
    result::Result,
};

pub fn execute<W: Write>(
    vcs: &dyn Vcs,
    config: &Config,
    args: &ApiClientsPolicyArgs,
    out: &mut W,
) -> Result<()> {
    let previous = &args.previous_version;
    let target = &args.target_version;

    match evaluate(vcs, previous, target, &config.api_clients)? {
        ClientReleasePolicy::VersionChanged => writeln!(
            out,
            "{previous} -> {target} changes the major or minor version: \
             API clients must be released"
        )?,
        ClientReleasePolicy::Identical => {
            writeln!(out, "{previous} and {target} are identical versions")?
        }
        ClientReleasePolicy::ApiChanged(subjects) => {
            writeln!(
                out,
                "{} changed in {previous}..{target}: \
                 API clients must be released",
                config.api_clients.spec_file
            )?;
            for subject in subjects.iter() {
                writeln!(out, "- {subject}")?;
            }
        }
        ClientReleasePolicy::NoApiChange => writeln!(
            out,
            "no API changes in {previous}..{target}: \
             API clients do not need a release"
        )?,
    }

    Ok(())
}
