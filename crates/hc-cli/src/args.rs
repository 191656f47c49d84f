//! Command-line arguments: `hc-interpret <config.toml> [--device <id>] <command words...>`.

use anyhow::{Context, bail};

use hc_protocol::DeviceId;

pub const USAGE: &str = "usage: hc-interpret <config.toml> [--device <id>] <command words...>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub config_path: String,
    pub force_device_id: Option<DeviceId>,
    /// Remaining words joined with single spaces.
    pub command: String,
}

impl Args {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let Some(config_path) = args.next() else {
            bail!("missing config path\n{USAGE}");
        };

        let mut force_device_id = None;
        let mut words = Vec::new();
        while let Some(arg) = args.next() {
            if arg == "--device" && words.is_empty() {
                let id = args.next().context("--device needs a value")?;
                force_device_id = Some(
                    id.parse()
                        .with_context(|| format!("invalid device id: {id}"))?,
                );
            } else {
                words.push(arg);
            }
        }

        if words.is_empty() {
            bail!("missing command text\n{USAGE}");
        }

        Ok(Self {
            config_path,
            force_device_id,
            command: words.join(" "),
        })
    }
}
