use crate::error::{ResolveError, Result};
use crate::packet::Packet;
use crate::record::Record;
use crate::record_data::RecordData;

pub const MAX_PACKET_SIZE: usize = 512;

pub struct PacketWriter {
    pub packet: Packet,
    buf: Vec<u8>,
}

impl PacketWriter {
    pub fn from(packet: Packet) -> PacketWriter {
        PacketWriter {
            packet,
            buf: Vec::with_capacity(MAX_PACKET_SIZE),
        }
    }

    /// Encodes the packet to wire bytes. Section counts are taken from
    /// the sections themselves, the header can never disagree with the
    /// body it fronts.
    pub fn write(&mut self) -> Result<Vec<u8>> {
        self.buf.clear();

        self.write_header();

        let mut body = Vec::new();
        for question in &self.packet.questions {
            body.extend(question.write()?);
        }
        Self::write_records(&mut body, &self.packet.answers)?;
        Self::write_records(&mut body, &self.packet.authorities)?;
        Self::write_records(&mut body, &self.packet.additionals)?;

        self.buf.extend(body);

        if self.buf.len() > MAX_PACKET_SIZE {
            return Err(ResolveError::Format(format!(
                "packet of {} bytes exceeds the {} byte UDP limit",
                self.buf.len(),
                MAX_PACKET_SIZE
            )));
        }

        Ok(self.buf.clone())
    }

    fn write_header(&mut self) {
        self.packet.header.question_count = self.packet.questions.len() as u16;
        self.packet.header.answer_count = self.packet.answers.len() as u16;
        self.packet.header.authority_count = self.packet.authorities.len() as u16;
        self.packet.header.additional_count = self.packet.additionals.len() as u16;

        self.buf.extend_from_slice(&self.packet.header.write());
    }

    fn write_records(buf: &mut Vec<u8>, records: &[Record]) -> Result<()> {
        for record in records {
            buf.extend(write_domain(&record.domain)?);
            buf.extend_from_slice(&record.rtype.to_num().to_be_bytes());
            buf.extend_from_slice(&record.rclass.to_num().to_be_bytes());
            buf.extend_from_slice(&record.ttl.to_be_bytes());

            let data = Self::write_rdata(&record.data)?;
            buf.extend_from_slice(&(data.len() as u16).to_be_bytes());
            buf.extend(data);
        }

        Ok(())
    }

    fn write_rdata(data: &RecordData) -> Result<Vec<u8>> {
        match data {
            RecordData::A(addr) => Ok(addr.octets().to_vec()),
            RecordData::NS(host) | RecordData::CNAME(host) => write_domain(host),
            RecordData::Unknown(raw) => Ok(raw.to_vec()),
        }
    }
}

/// Length-prefixed label encoding, split on `.`, no compression.
pub fn write_domain(domain: &str) -> Result<Vec<u8>> {
    let mut res = Vec::new();

    for label in domain.split('.') {
        if label.len() > 63 {
            return Err(ResolveError::Format(format!(
                "label {} exceeds the 63 byte limit",
                label
            )));
        }

        res.push(label.len() as u8);
        res.extend_from_slice(label.as_bytes());
    }
    res.push(0x00);

    Ok(res)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn domain_labels_are_length_prefixed() {
        let buf = write_domain("example.com").unwrap();

        assert_eq!(buf, b"\x07example\x03com\x00");
    }

    #[test]
    fn oversized_label_is_rejected() {
        let label = "a".repeat(64);

        let res = write_domain(&format!("{}.com", label));

        assert!(matches!(res, Err(ResolveError::Format(_))));
    }
}
