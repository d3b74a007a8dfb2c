use std::path::PathBuf;

use clap::ArgMatches;

pub const JOBS: usize = 1;
pub const ROUNDS: usize = 1;

/// Options relevant only to the CLI.
#[derive(Clone, Debug)]
pub struct ConfigIO {
    pub files: Vec<PathBuf>,
    pub csv: Option<PathBuf>,
    pub jobs: usize,
    pub rounds: usize,
    pub show_coloring: bool,
}

impl Default for ConfigIO {
    fn default() -> Self {
        ConfigIO {
            files: Vec::default(),
            csv: None,
            jobs: JOBS,
            rounds: ROUNDS,
            show_coloring: false,
        }
    }
}

impl ConfigIO {
    pub fn from_args(args: &ArgMatches) -> Self {
        let mut the_config = ConfigIO::default();

        if let Ok(Some(paths)) = args.try_get_many::<PathBuf>("paths") {
            the_config.files = paths.cloned().collect();
        };

        if let Ok(Some(path)) = args.try_get_one::<PathBuf>("csv") {
            println!("c Records will be written to {path:?}");
            the_config.csv = Some(path.clone());
        };

        if let Ok(Some(jobs)) = args.try_get_one::<usize>("jobs") {
            the_config.jobs = (*jobs).max(1);
        };

        if let Ok(Some(rounds)) = args.try_get_one::<usize>("rounds") {
            the_config.rounds = *rounds;
        };

        the_config.show_coloring = args.get_flag("coloring");

        the_config
    }
}
