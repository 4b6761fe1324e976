use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use tracing::info;

use crate::error::{ResolveError, Result};
use crate::handler::Handler;
use crate::packet::Packet;
use crate::parser::PacketParser;
use crate::query_type::QueryType;
use crate::record::Record;
use crate::record_data::RecordData;
use crate::root::default_root;
use crate::writer::PacketWriter;

/// Knobs of one resolver instance. The bootstrap root is injected here
/// rather than read from a global, tests point it at stubs.
#[derive(Clone, Debug)]
pub struct ResolverSettings {
    pub root: Ipv4Addr,
    pub port: u16,
    pub timeout: Duration,
    pub max_iterations: usize,
    pub max_recursion_depth: usize,
    pub max_parse_jumps: usize,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            root: default_root(),
            port: 53,
            timeout: Duration::from_secs(5),
            max_iterations: 16,
            max_recursion_depth: 8,
            max_parse_jumps: 5,
        }
    }
}

/// Walks the delegation chain from the root: every response either
/// answers the question, hands over glue for the next server, or names
/// a server that has to be resolved on its own first.
pub struct IterativeResolver {
    handler: Box<dyn Handler>,
    settings: ResolverSettings,
}

impl IterativeResolver {
    pub fn new(handler: Box<dyn Handler>, settings: ResolverSettings) -> Self {
        Self { handler, settings }
    }

    pub fn resolve(&self, domain: &str) -> Result<Ipv4Addr> {
        self.lookup(domain, 0)
    }

    fn lookup(&self, domain: &str, depth: usize) -> Result<Ipv4Addr> {
        if depth >= self.settings.max_recursion_depth {
            return Err(ResolveError::DepthExceeded(depth));
        }

        let mut server = self.settings.root;

        for _ in 0..self.settings.max_iterations {
            info!("querying {} for {}", server, domain);

            let response = self.query(domain, server)?;

            if let Some(addr) = first_a(&response.answers) {
                return Ok(addr);
            }

            if let Some(glue) = first_a(&response.additionals) {
                server = glue;

                continue;
            }

            if let Some(ns) = first_ns(&response.authorities) {
                // a referral without glue: the delegate server itself has
                // to be resolved from the root before we can follow it
                server = self.lookup(&ns, depth + 1)?;

                continue;
            }

            return Err(ResolveError::NoProgress(domain.to_string()));
        }

        Err(ResolveError::DepthExceeded(self.settings.max_iterations))
    }

    fn query(&self, domain: &str, server: Ipv4Addr) -> Result<Packet> {
        let query = Packet::new_query(domain, QueryType::A);
        let buf = PacketWriter::from(query).write()?;

        let addr = SocketAddr::new(IpAddr::V4(server), self.settings.port);
        let res = self.handler.send_to(&buf, addr)?;

        PacketParser::new(&res)
            .with_max_jumps(self.settings.max_parse_jumps)
            .parse()
    }
}

fn first_a(records: &[Record]) -> Option<Ipv4Addr> {
    records.iter().find_map(|record| match record.data {
        RecordData::A(addr) => Some(addr),
        _ => None,
    })
}

fn first_ns(records: &[Record]) -> Option<String> {
    records.iter().find_map(|record| match &record.data {
        RecordData::NS(host) => Some(host.clone()),
        _ => None,
    })
}
