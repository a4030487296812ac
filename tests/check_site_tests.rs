// tests/check_site_tests.rs
use async_trait::async_trait;
use check_site::announce::{AnnounceError, Announcer, Silent};
use check_site::cli::{self, Args, EXIT_CONFIG_ERROR, EXIT_OK};
use check_site::health::{ProbeError, SiteClient};
use clap::Parser;
use reqwest::StatusCode;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use url::Url;

/// Answers 200 for one URL and 404 for anything else.
struct StubSite {
    up_url: &'static str,
    calls: AtomicU32,
}

impl StubSite {
    fn new(up_url: &'static str) -> Arc<Self> {
        Arc::new(Self {
            up_url,
            calls: AtomicU32::new(0),
        })
    }
}

#[async_trait]
impl SiteClient for StubSite {
    async fn fetch_status(&self, url: &Url) -> Result<StatusCode, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if url.as_str() == self.up_url {
            Ok(StatusCode::OK)
        } else {
            Ok(StatusCode::NOT_FOUND)
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

#[derive(Default)]
struct Recording {
    spoken: Mutex<Vec<String>>,
}

#[async_trait]
impl Announcer for Recording {
    async fn announce(&self, text: &str) -> Result<(), AnnounceError> {
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

struct Run {
    code: i32,
    out: String,
    spoken: Vec<String>,
}

fn args(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("check-site").chain(argv.iter().copied())).unwrap()
}

/// Drives the CLI with a recording announcer in place of the speech program.
/// Quiet mode still gets the no-op announcer.
async fn run(argv: &[&str], client: Arc<StubSite>) -> Run {
    let recording = Arc::new(Recording::default());
    let announcer = recording.clone();
    let mut out = Vec::new();

    let code = cli::execute(
        args(argv),
        client,
        move |settings| -> Arc<dyn Announcer> {
            if settings.speak {
                announcer
            } else {
                Arc::new(Silent)
            }
        },
        &mut out,
    )
    .await
    .unwrap();

    let spoken = recording.spoken.lock().unwrap().clone();
    Run {
        code,
        out: String::from_utf8(out).unwrap(),
        spoken,
    }
}

#[tokio::test]
async fn test_single_check_of_up_site() {
    let client = StubSite::new("http://example.com/");
    let result = run(&["-w", "1s", "-t", "1s", "-1", "example.com"], client.clone()).await;

    assert_eq!(result.code, EXIT_OK);
    assert_eq!(result.out, "[+] site status check\n[+] site is up\n");
    assert_eq!(result.spoken, vec!["http://example.com is up."]);
    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_single_check_of_down_site() {
    let client = StubSite::new("http://elsewhere.test/");
    let result = run(&["-1", "https://example.com"], client.clone()).await;

    assert_eq!(result.code, EXIT_OK);
    assert_eq!(result.out, "[+] site status check\n[!] site is down\n");
    assert_eq!(result.spoken, vec!["https://example.com is down."]);
    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_quiet_mode_speaks_nothing() {
    let client = StubSite::new("http://elsewhere.test/");
    let result = run(&["-q", "-1", "https://example.com"], client).await;

    assert_eq!(result.code, EXIT_OK);
    assert_eq!(result.out, "[+] site status check\n[!] site is down\n");
    assert!(result.spoken.is_empty());
}

#[tokio::test]
async fn test_only_first_site_is_checked() {
    let client = StubSite::new("http://example.com/");
    let result = run(&["-1", "example.com", "ignored.test"], client.clone()).await;

    assert_eq!(result.code, EXIT_OK);
    assert_eq!(result.out, "[+] site status check\n[+] site is up\n");
    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_missing_site() {
    let client = StubSite::new("http://example.com/");
    let result = run(&[], client.clone()).await;

    assert_eq!(result.code, EXIT_CONFIG_ERROR);
    assert_eq!(result.out, "[!] please supply a site!\n");
    assert!(result.spoken.is_empty());
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_bad_wait_time() {
    let client = StubSite::new("http://site.com/");
    let result = run(&["-w", "bogus", "site.com"], client.clone()).await;

    assert_eq!(result.code, EXIT_CONFIG_ERROR);
    assert!(
        result.out.starts_with("could not parse wait time: "),
        "got {:?}",
        result.out
    );
    assert_eq!(result.out.lines().count(), 1);
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_bad_timeout() {
    let client = StubSite::new("http://site.com/");
    let result = run(&["-t", "3 parsecs", "site.com"], client).await;

    assert_eq!(result.code, EXIT_CONFIG_ERROR);
    assert!(
        result.out.starts_with("could not parse timeout value: "),
        "got {:?}",
        result.out
    );
}

#[tokio::test]
async fn test_config_file_supplies_run_once_and_quiet() {
    use std::io::Write;

    let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
    writeln!(file, "once: true\nquiet: true\ntimeout: 2s").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let client = StubSite::new("http://elsewhere.test/");
    let result = run(&["-c", &path, "example.com"], client.clone()).await;

    assert_eq!(result.code, EXIT_OK);
    assert_eq!(result.out, "[+] site status check\n[!] site is down\n");
    assert!(result.spoken.is_empty());
    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
}
