// src/cli.rs
use crate::announce::Announcer;
use crate::config::{self, ConfigError, FileConfig, FlagValues, Settings, Target};
use crate::health::SiteClient;
use crate::monitor::PollLoop;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

pub const EXIT_OK: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 1;

/// Poll a site until it responds with 200 OK, announcing each result.
#[derive(Debug, Parser)]
#[command(name = "check-site", version)]
pub struct Args {
    /// Time between checks, e.g. 30s, 5m, 1h30m [default: 5m]
    #[arg(short = 'w', value_name = "DURATION")]
    pub wait: Option<String>,

    /// Per-check timeout [default: 3s]
    #[arg(short = 't', value_name = "DURATION")]
    pub timeout: Option<String>,

    /// Don't speak status
    #[arg(short = 'q')]
    pub quiet: bool,

    /// Only run one check
    #[arg(short = '1')]
    pub once: bool,

    /// YAML or JSON file with defaults for the flags above
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Site to check; `http://` is added when no scheme is given.
    /// Anything after the first site is ignored.
    #[arg(value_name = "SITE")]
    pub sites: Vec<String>,
}

impl Args {
    pub fn site(&self) -> Option<&str> {
        self.sites.first().map(String::as_str)
    }

    fn flag_values(&self) -> FlagValues {
        FlagValues {
            wait: self.wait.clone(),
            timeout: self.timeout.clone(),
            quiet: self.quiet,
            once: self.once,
        }
    }
}

/// Turn parsed arguments into a target and settings, in the order the
/// problems are reported: site, config file, wait time, timeout.
pub async fn prepare(args: &Args) -> Result<(Target, Settings), ConfigError> {
    let site = args.site().ok_or(ConfigError::MissingSite)?;
    let target = Target::parse(site)?;

    let file = match &args.config {
        Some(path) => config::load_config(path).await.map_err(ConfigError::File)?,
        None => FileConfig::default(),
    };

    let settings = Settings::resolve(&args.flag_values(), &file)?;
    Ok((target, settings))
}

/// Run the whole program against `out`, returning the process exit code.
///
/// `make_announcer` is handed the resolved settings; the binary passes
/// [`crate::announce::from_settings`].
pub async fn execute<W, F>(
    args: Args,
    client: Arc<dyn SiteClient>,
    make_announcer: F,
    mut out: W,
) -> io::Result<i32>
where
    W: Write,
    F: FnOnce(&Settings) -> Arc<dyn Announcer>,
{
    let (target, settings) = match prepare(&args).await {
        Ok(prepared) => prepared,
        Err(e) => {
            tracing::debug!(error = ?e, "invalid configuration");
            writeln!(out, "{}", e)?;
            return Ok(EXIT_CONFIG_ERROR);
        }
    };

    writeln!(out, "[+] site status check")?;

    let settings = Arc::new(settings);
    let announcer = make_announcer(&settings);
    PollLoop::new(target, settings, client, announcer, out)
        .run()
        .await?;

    Ok(EXIT_OK)
}
