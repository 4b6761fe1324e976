use std::net::Ipv4Addr;

/// Typed view of a record's RDATA. Types this resolver does not act on
/// keep their raw bytes so the records after them still decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    NS(String),
    CNAME(String),
    Unknown(Box<[u8]>),
}
