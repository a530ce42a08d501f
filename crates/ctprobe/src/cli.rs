use std::time::Duration;

use clap::{ArgAction, Parser};
use ctprobe_fetch::{ClientSetting, DEFAULT_URL, FetchOptions, Url};

#[derive(Clone, Debug, Parser)]
#[command(name = "ctprobe", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    /// URL to GET
    #[arg(default_value = DEFAULT_URL)]
    pub url: String,

    /// Route the request through this proxy (repeatable)
    #[arg(long = "proxy", value_name = "URL")]
    pub proxies: Vec<Url>,

    /// Give up on the whole transfer after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Give up on connecting after this many seconds
    #[arg(long, value_name = "SECS")]
    pub connect_timeout: Option<u64>,

    /// Ignore proxy environment variables
    #[arg(long)]
    pub no_system_proxy: bool,

    /// Log more to stderr (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl App {
    pub fn client_setting(&self) -> ClientSetting {
        let mut setting = ClientSetting::default();
        for proxy in &self.proxies {
            setting = setting.proxy(proxy.clone());
        }
        if let Some(secs) = self.timeout {
            setting = setting.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = self.connect_timeout {
            setting = setting.connect_timeout(Duration::from_secs(secs));
        }
        if self.no_system_proxy {
            setting = setting.no_system_proxy();
        }
        setting
    }

    pub fn fetch_options(&self) -> FetchOptions { FetchOptions::default().url(&self.url) }
}
