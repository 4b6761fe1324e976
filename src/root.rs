use std::net::Ipv4Addr;

pub struct RootServer(pub &'static str, pub Ipv4Addr);

pub static ROOT_SERVERS: [RootServer; 13] = [
    RootServer("a.root-servers.net", Ipv4Addr::new(198, 41, 0, 4)),
    RootServer("b.root-servers.net", Ipv4Addr::new(170, 247, 170, 2)),
    RootServer("c.root-servers.net", Ipv4Addr::new(192, 33, 4, 12)),
    RootServer("d.root-servers.net", Ipv4Addr::new(199, 7, 91, 13)),
    RootServer("e.root-servers.net", Ipv4Addr::new(192, 203, 230, 10)),
    RootServer("f.root-servers.net", Ipv4Addr::new(192, 5, 5, 241)),
    RootServer("g.root-servers.net", Ipv4Addr::new(192, 112, 36, 4)),
    RootServer("h.root-servers.net", Ipv4Addr::new(198, 97, 190, 53)),
    RootServer("i.root-servers.net", Ipv4Addr::new(192, 36, 148, 17)),
    RootServer("j.root-servers.net", Ipv4Addr::new(192, 58, 128, 30)),
    RootServer("k.root-servers.net", Ipv4Addr::new(193, 0, 14, 129)),
    RootServer("l.root-servers.net", Ipv4Addr::new(199, 7, 83, 42)),
    RootServer("m.root-servers.net", Ipv4Addr::new(202, 12, 27, 33)),
];

/// The bootstrap server every resolution starts from unless configured
/// otherwise.
pub fn default_root() -> Ipv4Addr {
    ROOT_SERVERS[0].1
}

/// Looks a root server up by host name, e.g. "b.root-servers.net".
pub fn find(name: &str) -> Option<Ipv4Addr> {
    ROOT_SERVERS
        .iter()
        .find(|server| server.0 == name)
        .map(|server| server.1)
}
