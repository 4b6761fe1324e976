use std::net::Ipv4Addr;

use crate::error::{ResolveError, Result};
use crate::parser::PacketParser;
use crate::query_class::QueryClass;
use crate::query_type::QueryType;
use crate::record_data::RecordData;

#[derive(Debug, Clone)]
pub struct Record {
    pub domain: String,
    pub rtype: QueryType,
    pub rclass: QueryClass,
    pub ttl: u32,
    pub len: u16,
    pub data: RecordData,
}

impl Record {
    pub fn parse(parser: &mut PacketParser) -> Result<Record> {
        let domain = parser.parse_domain_name()?;

        let rtype = QueryType::from(parser.next_u16()?);
        let rclass = QueryClass::from(parser.next_u16()?);
        let ttl = parser.next_u32()?;
        let len = parser.next_u16()?;

        let rdata_end = parser.offset() + len as usize;
        if rdata_end > parser.len() {
            return Err(ResolveError::Format(format!(
                "record for {} declares {} rdata bytes past the end of the message",
                domain, len
            )));
        }

        let data = match rtype {
            QueryType::A => {
                if len != 4 {
                    return Err(ResolveError::Format(format!(
                        "A record for {} with rdata length {}",
                        domain, len
                    )));
                }

                RecordData::A(Ipv4Addr::from(parser.next_u32()?))
            }
            // compression offsets inside rdata are relative to the whole
            // message, so the name parser works unchanged here
            QueryType::NS => RecordData::NS(parser.parse_domain_name()?),
            QueryType::CNAME => RecordData::CNAME(parser.parse_domain_name()?),
            QueryType::Unknown(_) => {
                RecordData::Unknown(parser.range(parser.offset(), len as usize)?.into())
            }
        };

        // land exactly past the declared rdata no matter what was read from it
        parser.seek(rdata_end)?;

        Ok(Record {
            domain,
            rtype,
            rclass,
            ttl,
            len,
            data,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::writer::write_domain;

    #[test]
    fn unknown_rdata_is_skipped_whole() {
        // an=2: a TXT record this resolver has no parser for, then an A record
        let mut buf = Vec::new();
        buf.extend_from_slice(&[0, 1, 0x80, 0, 0, 0, 0, 2, 0, 0, 0, 0]);
        buf.extend(write_domain("example.com").unwrap());
        buf.extend_from_slice(&[0, 16, 0, 1, 0, 0, 1, 44, 0, 5]);
        buf.extend_from_slice(b"\x04text");
        buf.extend(write_domain("example.com").unwrap());
        buf.extend_from_slice(&[0, 1, 0, 1, 0, 0, 1, 44, 0, 4, 93, 184, 216, 34]);

        let packet = PacketParser::new(&buf).parse().unwrap();

        assert_eq!(packet.answers.len(), 2);
        assert_eq!(
            packet.answers[0].data,
            RecordData::Unknown(b"\x04text".to_vec().into())
        );
        assert_eq!(
            packet.answers[1].data,
            RecordData::A(Ipv4Addr::new(93, 184, 216, 34))
        );
    }

    #[test]
    fn rdata_past_buffer_end_is_rejected() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&[0, 1, 0x80, 0, 0, 0, 0, 1, 0, 0, 0, 0]);
        buf.extend(write_domain("example.com").unwrap());
        // declares 10 rdata bytes but only 4 follow
        buf.extend_from_slice(&[0, 1, 0, 1, 0, 0, 1, 44, 0, 10, 93, 184, 216, 34]);

        let res = PacketParser::new(&buf).parse();

        assert!(matches!(res, Err(ResolveError::Format(_))));
    }
}
