use crate::error::{ResolveError, Result};
use crate::header::Header;
use crate::packet::Packet;
use crate::query_class::QueryClass;
use crate::query_type::QueryType;
use crate::question::Question;
use crate::record::Record;

const MAX_JUMPS: usize = 5;

/// Sequential cursor over a received message. The header, question and
/// record parsers all advance the same offset.
pub struct PacketParser<'a> {
    buf: &'a [u8],
    offset: usize,
    max_jumps: usize,
}

impl<'a> PacketParser<'a> {
    pub fn new(buf: &'a [u8]) -> PacketParser<'a> {
        PacketParser {
            buf,
            offset: 0,
            max_jumps: MAX_JUMPS,
        }
    }

    pub fn with_max_jumps(mut self, max_jumps: usize) -> Self {
        self.max_jumps = max_jumps;

        self
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn seek(&mut self, n: usize) -> Result<()> {
        if n > self.buf.len() {
            return Err(self.eob());
        }

        self.offset = n;

        Ok(())
    }

    pub fn next(&mut self) -> Result<u8> {
        let res = self.get(self.offset)?;
        self.offset += 1;

        Ok(res)
    }

    pub fn next_u16(&mut self) -> Result<u16> {
        let res = ((self.next()? as u16) << 8) | self.next()? as u16;

        Ok(res)
    }

    pub fn next_u32(&mut self) -> Result<u32> {
        let res = ((self.next_u16()? as u32) << 16) | self.next_u16()? as u32;

        Ok(res)
    }

    pub fn get(&self, n: usize) -> Result<u8> {
        match self.buf.get(n) {
            Some(byte) => Ok(*byte),
            None => Err(self.eob()),
        }
    }

    pub fn range(&self, start: usize, len: usize) -> Result<&'a [u8]> {
        match self.buf.get(start..start + len) {
            Some(bytes) => Ok(bytes),
            None => Err(self.eob()),
        }
    }

    /// Decodes the whole message. Each section must hold exactly as many
    /// entries as the header declares; running out of buffer first is a
    /// format error, never a silent short read.
    pub fn parse(&mut self) -> Result<Packet> {
        let mut packet = Packet::new();

        packet.header = self.parse_header()?;

        for _ in 0..packet.header.question_count {
            packet.questions.push(self.parse_question()?);
        }

        for _ in 0..packet.header.answer_count {
            packet.answers.push(Record::parse(self)?);
        }

        for _ in 0..packet.header.authority_count {
            packet.authorities.push(Record::parse(self)?);
        }

        for _ in 0..packet.header.additional_count {
            packet.additionals.push(Record::parse(self)?);
        }

        Ok(packet)
    }

    pub fn parse_header(&mut self) -> Result<Header> {
        if self.buf.len() < 12 {
            return Err(ResolveError::Format(format!(
                "message of {} bytes is shorter than a header",
                self.buf.len()
            )));
        }

        // seek to the beginning of the packet to parse the header.
        if self.offset != 0 {
            self.seek(0)?;
        }

        let mut header = Header::new();

        header.id = self.next_u16()?;
        self.parse_header_flags(&mut header)?;
        header.question_count = self.next_u16()?;
        header.answer_count = self.next_u16()?;
        header.authority_count = self.next_u16()?;
        header.additional_count = self.next_u16()?;

        Ok(header)
    }

    fn parse_header_flags(&mut self, header: &mut Header) -> Result<()> {
        let first = self.next()?;
        let second = self.next()?;

        header.response = first & (1 << 7) != 0;
        header.opcode = (first >> 3) & 0x0F;
        header.authoritative = first & (1 << 2) != 0;
        header.truncation = first & (1 << 1) != 0;
        header.recursion_desired = first & 1 != 0;

        header.recursion_available = second & (1 << 7) != 0;
        header.reserved = (second >> 4) & 0x07;
        header.code = second & 0x0F;

        Ok(())
    }

    pub fn parse_question(&mut self) -> Result<Question> {
        let domain = self.parse_domain_name()?;
        let qtype = QueryType::from(self.next_u16()?);
        let qclass = QueryClass::from(self.next_u16()?);

        Ok(Question {
            domain,
            qtype,
            qclass,
        })
    }

    /// Reads a possibly compressed domain name. A length byte with both
    /// high bits set is a 14-bit pointer from the start of the message;
    /// after any jump the cursor resumes right behind the 2-byte pointer,
    /// so the fields following the name are read from the right place.
    pub fn parse_domain_name(&mut self) -> Result<String> {
        let mut res = String::new();

        let mut pos = self.offset;
        let mut jumps = 0;

        loop {
            let len = self.get(pos)?;

            if len & 0xC0 == 0xC0 {
                // pointers may chain, but only this far on untrusted input
                if jumps >= self.max_jumps {
                    return Err(ResolveError::Format(format!(
                        "more than {} compression jumps in one name",
                        self.max_jumps
                    )));
                }

                if jumps == 0 {
                    self.seek(pos + 2)?;
                }

                let next = self.get(pos + 1)? as usize;
                pos = ((len as usize & 0x3F) << 8) | next;

                jumps += 1;

                continue;
            }

            if len & 0xC0 != 0 {
                return Err(ResolveError::Format(format!(
                    "reserved label length {:#04x}",
                    len
                )));
            }

            pos += 1;

            if len == 0 {
                break;
            }

            if !res.is_empty() {
                res.push('.');
            }

            let label = self.range(pos, len as usize)?;
            res.push_str(&String::from_utf8_lossy(label).to_lowercase());

            pos += len as usize;
        }

        if jumps == 0 {
            self.seek(pos)?;
        }

        Ok(res)
    }

    fn eob(&self) -> ResolveError {
        ResolveError::Format("unexpected end of buffer".to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::writer::{write_domain, PacketWriter};
    use std::net::Ipv4Addr;

    fn referral_bytes() -> Vec<u8> {
        let mut buf = Vec::new();
        // id 1, response, qd 1, an 1
        buf.extend_from_slice(&[0, 1, 0x80, 0, 0, 1, 0, 1, 0, 0, 0, 0]);
        buf.extend(write_domain("example.com").unwrap());
        buf.extend_from_slice(&[0, 1, 0, 1]);
        // answer whose name is a pointer to the question name at offset 12
        buf.extend_from_slice(&[0xC0, 0x0C]);
        buf.extend_from_slice(&[0, 1, 0, 1, 0, 0, 1, 44, 0, 4, 93, 184, 216, 34]);

        buf
    }

    #[test]
    fn question_round_trip() {
        let packet = Packet::new_query("example.com", QueryType::A);
        let id = packet.header.id;
        let buf = PacketWriter::from(packet).write().unwrap();

        let parsed = PacketParser::new(&buf).parse().unwrap();

        assert_eq!(parsed.header.id, id);
        assert_eq!(parsed.header.question_count, 1);
        assert_eq!(parsed.questions[0].domain, "example.com");
        assert_eq!(parsed.questions[0].qtype, QueryType::A);
        assert_eq!(parsed.questions[0].qclass, QueryClass::IN);
    }

    #[test]
    fn compressed_name_resolves_to_pointed_name() {
        let buf = referral_bytes();

        let packet = PacketParser::new(&buf).parse().unwrap();

        assert_eq!(packet.answers.len(), 1);
        assert_eq!(packet.answers[0].domain, "example.com");
        assert_eq!(
            packet.answers[0].data,
            crate::record_data::RecordData::A(Ipv4Addr::new(93, 184, 216, 34))
        );
    }

    #[test]
    fn cursor_lands_after_the_pointer() {
        let buf = referral_bytes();
        // the answer's name pointer sits right after the question section
        let ptr_pos = 12 + write_domain("example.com").unwrap().len() + 4;
        assert_eq!(&buf[ptr_pos..ptr_pos + 2], &[0xC0, 0x0C]);

        let mut parser = PacketParser::new(&buf);
        parser.seek(ptr_pos).unwrap();

        let name = parser.parse_domain_name().unwrap();

        assert_eq!(name, "example.com");
        assert_eq!(parser.offset(), ptr_pos + 2);
    }

    #[test]
    fn declared_count_beyond_present_records_is_rejected() {
        let mut buf = referral_bytes();
        // claim two answers while only one is present
        buf[7] = 2;

        let res = PacketParser::new(&buf).parse();

        assert!(matches!(res, Err(ResolveError::Format(_))));
    }

    #[test]
    fn pointer_loop_is_bounded() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&[0, 1, 0x80, 0, 0, 1, 0, 0, 0, 0, 0, 0]);
        // question name is a pointer to itself
        buf.extend_from_slice(&[0xC0, 0x0C, 0, 1, 0, 1]);

        let res = PacketParser::new(&buf).parse();

        assert!(matches!(res, Err(ResolveError::Format(_))));
    }

    #[test]
    fn short_buffer_is_rejected() {
        let res = PacketParser::new(&[0, 1, 0x80]).parse();

        assert!(matches!(res, Err(ResolveError::Format(_))));
    }
}
