use clap::{arg, command, value_parser, ArgMatches, Command};
use reqwest::Url;

// Config given as command line arguments
pub struct ArgsConfig {
    pub base_url: Option<Url>,
    pub test_mode: Option<TestMode>,
}

fn command() -> Command<'static> {
    command!()
        .arg(
            arg!(--url <URL> "Base URL for calculator API. Overrides config file and environment values.")
                .required(false)
                .value_parser(value_parser!(Url)),
        )
        .subcommand(
            Command::new("test")
                .about("Run QA tests against a running calculator service")
                .arg(arg!(--"early-quit" "First failing test quits"))
                .arg(arg!(--forever "Run tests forever"))
                .arg(
                    arg!(--"test" <TEXT> "Run only tests which name contains the text")
                        .value_parser(value_parser!(String))
                        .required(false),
                ),
        )
}

pub fn get_config() -> ArgsConfig {
    args_config(&command().get_matches())
}

fn args_config(matches: &ArgMatches) -> ArgsConfig {
    let test_mode = match matches.subcommand() {
        Some(("test", sub_matches)) => Some(TestMode {
            early_quit: sub_matches.is_present("early-quit"),
            forever: sub_matches.is_present("forever"),
            name_filter: sub_matches.get_one::<String>("test").cloned(),
        }),
        _ => None,
    };

    ArgsConfig {
        base_url: matches.get_one::<Url>("url").map(ToOwned::to_owned),
        test_mode,
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestMode {
    pub early_quit: bool,
    pub forever: bool,
    pub name_filter: Option<String>,
}

impl TestMode {
    pub fn selects(&self, test_name: &str) -> bool {
        self.name_filter
            .as_deref()
            .map_or(true, |filter| test_name.contains(filter))
    }
}
