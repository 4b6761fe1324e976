/// The fixed 12-byte prefix of every DNS message.
#[derive(Default, Debug)]
pub struct Header {
    pub id: u16,
    pub response: bool,
    pub opcode: u8,
    pub authoritative: bool,
    pub truncation: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub reserved: u8,
    pub code: u8,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn new() -> Header {
        Header::default()
    }

    pub fn new_with_id(id: u16) -> Header {
        Header {
            id,
            ..Default::default()
        }
    }

    pub fn write(&self) -> [u8; 12] {
        let mut res = [0u8; 12];

        res[..2].copy_from_slice(&self.id.to_be_bytes());
        (res[2], res[3]) = self.write_flags();
        res[4..6].copy_from_slice(&self.question_count.to_be_bytes());
        res[6..8].copy_from_slice(&self.answer_count.to_be_bytes());
        res[8..10].copy_from_slice(&self.authority_count.to_be_bytes());
        res[10..12].copy_from_slice(&self.additional_count.to_be_bytes());

        res
    }

    fn write_flags(&self) -> (u8, u8) {
        let first = self.recursion_desired as u8
            | (self.truncation as u8) << 1
            | (self.authoritative as u8) << 2
            | ((self.opcode & 0x0F) << 3)
            | (self.response as u8) << 7;

        let second = self.code & 0x0F
            | ((self.reserved & 0x07) << 4)
            | (self.recursion_available as u8) << 7;

        (first, second)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn header_layout() {
        let mut header = Header::new_with_id(0xABCD);
        header.response = true;
        header.code = 3;
        header.question_count = 1;
        header.answer_count = 2;

        let buf = header.write();

        assert_eq!(&buf[..2], &[0xAB, 0xCD]);
        assert_eq!(buf[2], 0x80);
        assert_eq!(buf[3], 0x03);
        assert_eq!(&buf[4..8], &[0x00, 0x01, 0x00, 0x02]);
        assert_eq!(&buf[8..12], &[0x00, 0x00, 0x00, 0x00]);
    }
}
