use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Resolve domains to IPv4 addresses by walking the DNS hierarchy from the root")]
pub(crate) struct Args {
    /// Domains to resolve, one A lookup each.
    #[arg(required = true)]
    pub(crate) domains: Vec<String>,
    /// Bootstrap server: an IPv4 address or a root server host name.
    #[arg(long, short)]
    pub(crate) root: Option<String>,
    #[arg(long, short)]
    pub(crate) port: Option<u16>,
    /// Receive timeout per query, e.g. "5s" or "500ms".
    #[arg(long, short)]
    pub(crate) timeout: Option<String>,
    #[arg(long, short)]
    pub(crate) config: Option<String>,
}
